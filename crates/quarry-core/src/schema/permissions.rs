use super::Expression;

/// Access rule for one operation on a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    None,
    Full,
    Where(Expression),
}

/// Per-operation access rules. Operations left unset fall back to the
/// database default.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Permissions {
    pub select: Option<Rule>,
    pub create: Option<Rule>,
    pub update: Option<Rule>,
    pub delete: Option<Rule>,
}

impl Permissions {
    pub fn new() -> Permissions {
        Permissions::default()
    }

    /// Denies every operation.
    pub fn none() -> Permissions {
        Permissions::all(Rule::None)
    }

    /// Allows every operation.
    pub fn full() -> Permissions {
        Permissions::all(Rule::Full)
    }

    fn all(rule: Rule) -> Permissions {
        Permissions {
            select: Some(rule.clone()),
            create: Some(rule.clone()),
            update: Some(rule.clone()),
            delete: Some(rule),
        }
    }

    pub fn select(mut self, rule: Rule) -> Permissions {
        self.select = Some(rule);
        self
    }

    pub fn create(mut self, rule: Rule) -> Permissions {
        self.create = Some(rule);
        self
    }

    pub fn update(mut self, rule: Rule) -> Permissions {
        self.update = Some(rule);
        self
    }

    pub fn delete(mut self, rule: Rule) -> Permissions {
        self.delete = Some(rule);
        self
    }

    /// Rules that are set, paired with their operation keyword.
    pub fn rules(&self) -> impl Iterator<Item = (&'static str, &Rule)> + '_ {
        [
            ("select", &self.select),
            ("create", &self.create),
            ("update", &self.update),
            ("delete", &self.delete),
        ]
        .into_iter()
        .filter_map(|(op, rule)| rule.as_ref().map(|rule| (op, rule)))
    }

    /// Returns the rule shared by all four operations, if they are all set
    /// to the same `NONE` or `FULL` rule.
    pub fn uniform(&self) -> Option<&Rule> {
        let first = self.select.as_ref()?;
        if matches!(first, Rule::Where(_)) {
            return None;
        }
        [&self.create, &self.update, &self.delete]
            .into_iter()
            .all(|rule| rule.as_ref() == Some(first))
            .then_some(first)
    }
}

/// Which fields a select returns.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Projection {
    /// `SELECT *`
    #[default]
    All,

    /// `SELECT a, b`
    Include(Vec<String>),

    /// `SELECT * OMIT a, b`
    Omit(Vec<String>),
}

impl Projection {
    /// Builds a projection from an inclusion map (`field → true` to include,
    /// `field → false` to exclude).
    ///
    /// When any field is included the result lists exactly the included
    /// fields, since exclusions are implied. When every entry is an
    /// exclusion, the result omits those fields. An empty map selects all.
    pub fn from_flags<K: Into<String>>(flags: impl IntoIterator<Item = (K, bool)>) -> Projection {
        let mut include = vec![];
        let mut omit = vec![];

        for (field, flag) in flags {
            if flag {
                include.push(field.into());
            } else {
                omit.push(field.into());
            }
        }

        if !include.is_empty() {
            Projection::Include(include)
        } else if !omit.is_empty() {
            Projection::Omit(omit)
        } else {
            Projection::All
        }
    }

    pub fn fields(&self) -> &[String] {
        match self {
            Projection::All => &[],
            Projection::Include(fields) | Projection::Omit(fields) => fields,
        }
    }
}

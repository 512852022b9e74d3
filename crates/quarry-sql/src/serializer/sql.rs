/// Incremental statement text.
///
/// Fragments are concatenated exactly as appended; rendering the same
/// sequence of calls always yields the same text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sql {
    text: String,
}

impl Sql {
    pub fn new() -> Sql {
        Sql::default()
    }

    pub fn append(&mut self, text: &str) -> &mut Sql {
        self.text.push_str(text);
        self
    }

    /// Appends `text` followed by a line break.
    pub fn append_line(&mut self, text: &str) -> &mut Sql {
        self.text.push_str(text);
        self.text.push('\n');
        self
    }

    /// Ends the current statement with `;`.
    pub fn terminate(&mut self) -> &mut Sql {
        self.text.push(';');
        self
    }

    pub fn open_group(&mut self) -> &mut Sql {
        self.text.push('(');
        self
    }

    pub fn close_group(&mut self) -> &mut Sql {
        self.text.push(')');
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn render(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Sql {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

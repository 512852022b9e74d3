/// What an update statement hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Returning {
    None,
    Before,
    After,
    Diff,
}

impl Returning {
    pub fn keyword(self) -> &'static str {
        match self {
            Returning::None => "NONE",
            Returning::Before => "BEFORE",
            Returning::After => "AFTER",
            Returning::Diff => "DIFF",
        }
    }
}

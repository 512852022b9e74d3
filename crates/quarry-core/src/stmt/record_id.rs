use std::fmt;

/// Identifies one record: the table it lives in plus its key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId {
    pub table: String,
    pub key: RecordKey,
}

/// The key part of a record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Number(i64),
    String(String),
}

impl RecordId {
    pub fn new(table: impl Into<String>, key: impl Into<RecordKey>) -> RecordId {
        RecordId {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Parses the `table:key` text form the database returns for record links.
    pub fn parse(src: &str) -> Option<RecordId> {
        let (table, key) = src.split_once(':')?;
        if table.is_empty() || key.is_empty() {
            return None;
        }

        let key = key
            .strip_prefix('⟨')
            .and_then(|key| key.strip_suffix('⟩'))
            .map(|key| RecordKey::String(unescape(key)))
            .unwrap_or_else(|| match key.parse::<i64>() {
                Ok(n) => RecordKey::Number(n),
                Err(_) => RecordKey::String(key.to_string()),
            });

        Some(RecordId {
            table: table.to_string(),
            key,
        })
    }
}

impl RecordKey {
    /// Keys made of ASCII letters, digits and `_` that do not start with a
    /// digit are written bare. Everything else is wrapped in `⟨ ⟩`.
    fn is_simple(key: &str) -> bool {
        let mut chars = key.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Number(n) => write!(f, "{n}"),
            RecordKey::String(s) if RecordKey::is_simple(s) => f.write_str(s),
            RecordKey::String(s) => {
                f.write_str("⟨")?;
                for ch in s.chars() {
                    match ch {
                        '\\' => f.write_str("\\\\")?,
                        '⟩' => f.write_str("\\⟩")?,
                        ch => write!(f, "{ch}")?,
                    }
                }
                f.write_str("⟩")
            }
        }
    }
}

/// Reverses the `\\` and `\⟩` escapes of a bracketed key.
fn unescape(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.extend(chars.next()),
            ch => out.push(ch),
        }
    }
    out
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.table, self.key)
    }
}

impl From<i64> for RecordKey {
    fn from(src: i64) -> Self {
        RecordKey::Number(src)
    }
}

impl From<&str> for RecordKey {
    fn from(src: &str) -> Self {
        RecordKey::String(src.to_string())
    }
}

impl From<String> for RecordKey {
    fn from(src: String) -> Self {
        RecordKey::String(src)
    }
}

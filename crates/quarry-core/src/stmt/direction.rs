use crate::{bail, Error};

use std::str::FromStr;

/// Sort direction of one `ORDER BY` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ASC" => Ok(Direction::Asc),
            "desc" | "DESC" => Ok(Direction::Desc),
            _ => bail!("invalid sort direction `{s}`; expected `asc` or `desc`"),
        }
    }
}

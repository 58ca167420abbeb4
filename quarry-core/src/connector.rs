//! Boolean connectors joining WHERE / HAVING conditions

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::{Error, Result};

/// How a condition is joined to the conditions before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    /// Get the SQL keyword for the connector
    pub fn as_str(&self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

impl Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse `AND` / `OR` in any case, ignoring surrounding whitespace
impl FromStr for Connector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" => Ok(Connector::And),
            "OR" => Ok(Connector::Or),
            _ => Err(Error::invalid_argument(format!(
                "unknown connector '{}', expected AND or OR",
                s
            ))),
        }
    }
}

impl TryFrom<&str> for Connector {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

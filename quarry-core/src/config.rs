//! Factory configuration

use serde::{Deserialize, Serialize};

use crate::{Dialect, Result};

/// Settings a [`QueryBuilderFactory`](crate::QueryBuilderFactory) is built from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuarryConfig {
    /// Target dialect; MySQL when omitted
    pub dialect: Dialect,
}

impl QuarryConfig {
    /// Parse a JSON document such as `{"dialect": "postgresql"}`
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

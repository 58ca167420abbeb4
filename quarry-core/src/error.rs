//! Error types for Quarry

use thiserror::Error;

use crate::Dialect;

/// The main error type for Quarry operations
#[derive(Error, Debug)]
pub enum Error {
    /// A builder was handed an argument it cannot work with
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The builder's dialect has no such clause
    #[error("{clause} is not supported by {dialect}")]
    UnsupportedClause { clause: &'static str, dialect: Dialect },

    /// Dialect name not recognised
    #[error("Unknown dialect '{name}'")]
    UnknownDialect { name: String },

    /// Configuration could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience Result type for Quarry operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new unsupported clause error
    pub fn unsupported_clause(clause: &'static str, dialect: Dialect) -> Self {
        Self::UnsupportedClause { clause, dialect }
    }

    /// Create a new unknown dialect error
    pub fn unknown_dialect(name: impl Into<String>) -> Self {
        Self::UnknownDialect { name: name.into() }
    }
}

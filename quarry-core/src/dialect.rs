//! Target SQL dialects and what each of them can render

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::builder::augmenting::AugmentingClauseBuilder;
use crate::{Error, Result};

/// A target-database SQL variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Dialect {
    #[default]
    MySql,
    PostgreSql,
}

impl Dialect {
    /// Placeholder for the `index`th bound parameter (1-based)
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            Dialect::MySql => "?".to_string(),
            Dialect::PostgreSql => format!("${}", index),
        }
    }

    /// Quote an identifier, doubling any embedded quote characters
    ///
    /// # Examples
    /// ```
    /// use quarry_core::Dialect;
    ///
    /// assert_eq!(Dialect::MySql.quote_identifier("order"), "`order`");
    /// assert_eq!(Dialect::PostgreSql.quote_identifier("user"), "\"user\"");
    /// ```
    pub fn quote_identifier(&self, identifier: &str) -> String {
        let quote = match self {
            Dialect::MySql => '`',
            Dialect::PostgreSql => '"',
        };
        let mut quoted = String::with_capacity(identifier.len() + 2);
        quoted.push(quote);
        for ch in identifier.chars() {
            if ch == quote {
                quoted.push(quote);
            }
            quoted.push(ch);
        }
        quoted.push(quote);
        quoted
    }

    /// Quote a string literal. Both dialects accept doubled single quotes.
    pub fn quote_literal(&self, literal: &str) -> String {
        format!("'{}'", literal.replace('\'', "''"))
    }

    /// RETURNING on INSERT / UPDATE / DELETE
    pub fn supports_returning(&self) -> bool {
        matches!(self, Dialect::PostgreSql)
    }

    /// DELETE ... USING
    pub fn supports_delete_using(&self) -> bool {
        matches!(self, Dialect::PostgreSql)
    }

    /// INSERT ... ON DUPLICATE KEY UPDATE
    pub fn supports_on_duplicate_key_update(&self) -> bool {
        matches!(self, Dialect::MySql)
    }

    /// LIMIT on UPDATE / DELETE
    pub fn supports_modification_limit(&self) -> bool {
        matches!(self, Dialect::MySql)
    }

    /// The augmenting clause builder a modification query carries for this
    /// dialect, if any
    pub(crate) fn augmenting_clause_builder(&self) -> Option<AugmentingClauseBuilder> {
        if self.supports_returning() {
            Some(AugmentingClauseBuilder::new())
        } else {
            None
        }
    }

    pub(crate) fn ensure(&self, supported: bool, clause: &'static str) -> Result<()> {
        if supported {
            Ok(())
        } else {
            Err(Error::unsupported_clause(clause, *self))
        }
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::MySql => write!(f, "MySQL"),
            Dialect::PostgreSql => write!(f, "PostgreSQL"),
        }
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(Dialect::MySql),
            "postgres" | "postgresql" | "pgsql" => Ok(Dialect::PostgreSql),
            _ => Err(Error::unknown_dialect(s)),
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders() {
        assert_eq!(Dialect::MySql.placeholder(1), "?");
        assert_eq!(Dialect::MySql.placeholder(3), "?");
        assert_eq!(Dialect::PostgreSql.placeholder(1), "$1");
        assert_eq!(Dialect::PostgreSql.placeholder(12), "$12");
    }

    #[test]
    fn test_quote_identifier_doubles_embedded_quotes() {
        assert_eq!(Dialect::MySql.quote_identifier("we`ird"), "`we``ird`");
        assert_eq!(
            Dialect::PostgreSql.quote_identifier("we\"ird"),
            "\"we\"\"ird\""
        );
    }

    #[test]
    fn test_quote_literal() {
        assert_eq!(Dialect::MySql.quote_literal("O'Brien"), "'O''Brien'");
        assert_eq!(Dialect::PostgreSql.quote_literal("plain"), "'plain'");
    }

    #[test]
    fn test_capabilities() {
        assert!(Dialect::PostgreSql.supports_returning());
        assert!(!Dialect::MySql.supports_returning());
        assert!(Dialect::MySql.supports_on_duplicate_key_update());
        assert!(Dialect::MySql.supports_modification_limit());
        assert!(!Dialect::PostgreSql.supports_modification_limit());
        assert!(Dialect::MySql.augmenting_clause_builder().is_none());
        assert!(Dialect::PostgreSql.augmenting_clause_builder().is_some());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("mysql".parse::<Dialect>().unwrap(), Dialect::MySql);
        assert_eq!("PostgreSQL".parse::<Dialect>().unwrap(), Dialect::PostgreSql);
        assert_eq!(" pgsql ".parse::<Dialect>().unwrap(), Dialect::PostgreSql);
        assert!(matches!(
            "sqlite".parse::<Dialect>(),
            Err(Error::UnknownDialect { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Dialect::MySql.to_string(), "MySQL");
        assert_eq!(Dialect::PostgreSql.to_string(), "PostgreSQL");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Dialect::MySql).unwrap(), "\"mysql\"");
        assert_eq!(
            serde_json::to_string(&Dialect::PostgreSql).unwrap(),
            "\"postgresql\""
        );
        let parsed: Dialect = serde_json::from_str("\"postgres\"").unwrap();
        assert_eq!(parsed, Dialect::PostgreSql);
        let parsed: Dialect = serde_json::from_str("\"MySQL\"").unwrap();
        assert_eq!(parsed, Dialect::MySql);
    }

    #[test]
    fn test_serde_rejects_unknown_names() {
        let err = serde_json::from_str::<Dialect>("\"oracle\"").unwrap_err();
        assert!(err.to_string().contains("Unknown dialect"));
    }
}

//! Dialect-selecting entry point for all query builders

use crate::builder::{
    DeleteQuery, InsertQuery, IntoColumnValues, IntoExpressions, SelectQuery, UpdateQuery,
};
use crate::{Dialect, QuarryConfig, Result};

/// Creates query builders for one target dialect
///
/// # Examples
/// ```
/// use quarry_core::{QueryBuilder, QueryBuilderFactory};
///
/// let factory = QueryBuilderFactory::postgres();
/// let sql = factory
///     .delete("sessions", "")
///     .unwrap()
///     .where_("expires_at < NOW()")
///     .returning("id")
///     .unwrap()
///     .to_sql();
/// assert_eq!(sql, "DELETE FROM sessions WHERE expires_at < NOW() RETURNING id");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryBuilderFactory {
    dialect: Dialect,
}

impl QueryBuilderFactory {
    pub fn new(dialect: Dialect) -> Self {
        tracing::debug!(%dialect, "query builder factory created");
        Self { dialect }
    }

    pub fn mysql() -> Self {
        Self::new(Dialect::MySql)
    }

    pub fn postgres() -> Self {
        Self::new(Dialect::PostgreSql)
    }

    pub fn from_config(config: &QuarryConfig) -> Self {
        Self::new(config.dialect)
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Start a SELECT with its select expressions; set the table with `from`
    pub fn select<E>(&self, expressions: E) -> SelectQuery
    where
        E: IntoExpressions,
    {
        SelectQuery::new(self.dialect, expressions)
    }

    /// Start a SELECT from `table` with no select expressions yet
    pub fn select_from(&self, table: &str, alias: &str) -> Result<SelectQuery> {
        SelectQuery::new(self.dialect, Vec::<String>::new()).from(table, alias)
    }

    pub fn insert<T>(&self, table: &str, columns: T) -> Result<InsertQuery>
    where
        T: IntoColumnValues,
    {
        InsertQuery::new(self.dialect, table, columns)
    }

    pub fn update<T>(&self, table: &str, alias: &str, columns: T) -> Result<UpdateQuery>
    where
        T: IntoColumnValues,
    {
        UpdateQuery::new(self.dialect, table, alias, columns)
    }

    pub fn delete(&self, table: &str, alias: &str) -> Result<DeleteQuery> {
        DeleteQuery::new(self.dialect, table, alias)
    }
}

//! INSERT query builder implementation

use super::augmenting::AugmentingClauseBuilder;
use super::common::{
    collect_parameters, ColumnValue, IntoColumnValues, IntoExpressions, PlaceholderWriter, Query,
    QueryBuilder,
};
use crate::{Dialect, Error, Result, Value};

/// INSERT query builder
///
/// Columns and values render in the order they were given. PostgreSQL
/// builders carry a RETURNING clause; MySQL builders carry
/// ON DUPLICATE KEY UPDATE instead.
#[derive(Debug, Clone)]
pub struct InsertQuery {
    dialect: Dialect,
    query: Query,
    columns: Vec<(String, ColumnValue)>,
    duplicate_key_updates: Vec<(String, ColumnValue)>,
    augmenting: Option<AugmentingClauseBuilder>,
}

impl InsertQuery {
    /// Create a new INSERT query builder
    ///
    /// # Examples
    /// ```
    /// use quarry_core::{param, ColumnValue, Dialect, InsertQuery, QueryBuilder};
    ///
    /// let query = InsertQuery::new(
    ///     Dialect::PostgreSql,
    ///     "users",
    ///     [("name", param("Jane")), ("created_at", ColumnValue::raw("NOW()"))],
    /// )
    /// .unwrap();
    /// assert_eq!(
    ///     query.to_sql(),
    ///     "INSERT INTO users (name, created_at) VALUES ($1, NOW())"
    /// );
    /// ```
    pub fn new<T>(dialect: Dialect, table: &str, columns: T) -> Result<Self>
    where
        T: IntoColumnValues,
    {
        Ok(Self {
            dialect,
            query: Query::new(table, "")?,
            columns: columns.into_column_values(),
            duplicate_key_updates: Vec::new(),
            augmenting: dialect.augmenting_clause_builder(),
        })
    }

    /// Add more columns to insert
    pub fn add_column_values<T>(mut self, columns: T) -> Self
    where
        T: IntoColumnValues,
    {
        self.columns.extend(columns.into_column_values());
        self
    }

    /// Start an ON DUPLICATE KEY UPDATE clause (MySQL)
    pub fn on_duplicate_key_update<T>(mut self, columns: T) -> Result<Self>
    where
        T: IntoColumnValues,
    {
        self.dialect.ensure(
            self.dialect.supports_on_duplicate_key_update(),
            "ON DUPLICATE KEY UPDATE",
        )?;
        self.duplicate_key_updates = columns.into_column_values();
        Ok(self)
    }

    /// Add to the ON DUPLICATE KEY UPDATE clause (MySQL)
    pub fn add_on_duplicate_key_update<T>(mut self, columns: T) -> Result<Self>
    where
        T: IntoColumnValues,
    {
        self.dialect.ensure(
            self.dialect.supports_on_duplicate_key_update(),
            "ON DUPLICATE KEY UPDATE",
        )?;
        self.duplicate_key_updates
            .extend(columns.into_column_values());
        Ok(self)
    }

    /// Start a RETURNING clause (PostgreSQL)
    pub fn returning<E>(mut self, expressions: E) -> Result<Self>
    where
        E: IntoExpressions,
    {
        self.augmenting_mut()?.returning(expressions);
        Ok(self)
    }

    /// Add to the RETURNING clause (PostgreSQL)
    pub fn add_returning<E>(mut self, expressions: E) -> Result<Self>
    where
        E: IntoExpressions,
    {
        self.augmenting_mut()?.add_returning(expressions);
        Ok(self)
    }

    fn augmenting_mut(&mut self) -> Result<&mut AugmentingClauseBuilder> {
        let dialect = self.dialect;
        self.augmenting
            .as_mut()
            .ok_or_else(|| Error::unsupported_clause("RETURNING", dialect))
    }

    pub fn table(&self) -> &Query {
        &self.query
    }

    pub fn columns(&self) -> &[(String, ColumnValue)] {
        &self.columns
    }
}

impl QueryBuilder for InsertQuery {
    fn to_sql(&self) -> String {
        let mut writer = PlaceholderWriter::new(self.dialect);
        let mut sql = String::new();

        sql.push_str("INSERT INTO ");
        sql.push_str(self.query.table_name());

        let column_names: Vec<&str> = self.columns.iter().map(|(c, _)| c.as_str()).collect();
        let values: Vec<String> = self
            .columns
            .iter()
            .map(|(_, value)| writer.write(value))
            .collect();
        sql.push_str(" (");
        sql.push_str(&column_names.join(", "));
        sql.push_str(") VALUES (");
        sql.push_str(&values.join(", "));
        sql.push(')');

        if !self.duplicate_key_updates.is_empty() {
            sql.push_str(" ON DUPLICATE KEY UPDATE ");
            sql.push_str(&writer.write_assignments(&self.duplicate_key_updates));
        }

        if let Some(augmenting) = &self.augmenting {
            sql.push_str(&augmenting.render_returning_clause());
        }

        tracing::trace!(dialect = %self.dialect, sql = %sql, "rendered INSERT");
        sql
    }

    fn parameters(&self) -> Vec<Value> {
        let mut parameters = Vec::new();
        collect_parameters(&self.columns, &mut parameters);
        collect_parameters(&self.duplicate_key_updates, &mut parameters);
        parameters
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }
}

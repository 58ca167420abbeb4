//! UPDATE query builder module

use super::augmenting::AugmentingClauseBuilder;
use super::common::{
    collect_parameters, row_bound, ColumnValue, IntoColumnValues, IntoExpressions, PlaceholderWriter, Query,
    QueryBuilder,
};
use super::conditional::ConditionalClauseBuilder;
use crate::{Connector, Dialect, Error, Result, Value};

/// UPDATE query builder
#[derive(Debug, Clone)]
pub struct UpdateQuery {
    dialect: Dialect,
    query: Query,
    columns: Vec<(String, ColumnValue)>,
    where_clause: ConditionalClauseBuilder,
    limit_value: Option<i64>,
    augmenting: Option<AugmentingClauseBuilder>,
}

impl UpdateQuery {
    /// Create a new UPDATE query builder
    ///
    /// # Examples
    /// ```
    /// use quarry_core::{param, Dialect, QueryBuilder, UpdateQuery};
    ///
    /// let query = UpdateQuery::new(Dialect::MySql, "users", "", [("name", param("Jane"))])
    ///     .unwrap()
    ///     .where_("id = 5");
    /// assert_eq!(query.to_sql(), "UPDATE users SET name = ? WHERE id = 5");
    /// ```
    pub fn new<T>(dialect: Dialect, table: &str, alias: &str, columns: T) -> Result<Self>
    where
        T: IntoColumnValues,
    {
        Ok(Self {
            dialect,
            query: Query::new(table, alias)?,
            columns: columns.into_column_values(),
            where_clause: ConditionalClauseBuilder::new(),
            limit_value: None,
            augmenting: dialect.augmenting_clause_builder(),
        })
    }

    /// Add more column assignments
    pub fn add_column_values<T>(mut self, columns: T) -> Self
    where
        T: IntoColumnValues,
    {
        self.columns.extend(columns.into_column_values());
        self
    }

    /// Start the WHERE clause, discarding earlier conditions
    pub fn where_<E>(mut self, conditions: E) -> Self
    where
        E: IntoExpressions,
    {
        self.where_clause.start_clause(Connector::And, conditions);
        self
    }

    /// Add WHERE conditions joined with AND
    pub fn and_where<E>(mut self, conditions: E) -> Self
    where
        E: IntoExpressions,
    {
        self.where_clause.add_condition(Connector::And, conditions);
        self
    }

    /// Add WHERE conditions joined with OR
    pub fn or_where<E>(mut self, conditions: E) -> Self
    where
        E: IntoExpressions,
    {
        self.where_clause.add_condition(Connector::Or, conditions);
        self
    }

    /// Limit the number of updated rows (MySQL). `-1` removes the limit.
    pub fn limit(mut self, count: i64) -> Result<Self> {
        self.dialect
            .ensure(self.dialect.supports_modification_limit(), "LIMIT on UPDATE")?;
        self.limit_value = row_bound(count);
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
}

impl QueryBuilder for UpdateQuery {
    fn to_sql(&self) -> String {
        let mut writer = PlaceholderWriter::new(self.dialect);
        let mut sql = String::new();

        sql.push_str("UPDATE ");
        sql.push_str(&self.query.table_clause());
        sql.push_str(" SET ");
        sql.push_str(&writer.write_assignments(&self.columns));

        sql.push_str(&self.where_clause.render_clause("WHERE"));

        if let Some(limit) = self.limit_value {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        if let Some(augmenting) = &self.augmenting {
            sql.push_str(&augmenting.render_returning_clause());
        }

        tracing::trace!(dialect = %self.dialect, sql = %sql, "rendered UPDATE");
        sql
    }

    fn parameters(&self) -> Vec<Value> {
        let mut parameters = Vec::new();
        collect_parameters(&self.columns, &mut parameters);
        parameters
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }
}

//! DELETE query builder module

use super::augmenting::AugmentingClauseBuilder;
use super::common::{row_bound, IntoExpressions, Query, QueryBuilder};
use super::conditional::ConditionalClauseBuilder;
use crate::{Connector, Dialect, Error, Result, Value};

/// DELETE query builder
///
/// A DELETE without WHERE conditions renders as-is and removes every row.
#[derive(Debug, Clone)]
pub struct DeleteQuery {
    dialect: Dialect,
    query: Query,
    where_clause: ConditionalClauseBuilder,
    limit_value: Option<i64>,
    augmenting: Option<AugmentingClauseBuilder>,
}

impl DeleteQuery {
    /// Create a new DELETE query builder
    pub fn new(dialect: Dialect, table: &str, alias: &str) -> Result<Self> {
        Ok(Self {
            dialect,
            query: Query::new(table, alias)?,
            where_clause: ConditionalClauseBuilder::new(),
            limit_value: None,
            augmenting: dialect.augmenting_clause_builder(),
        })
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

    /// Limit the number of deleted rows (MySQL). `-1` removes the limit.
    pub fn limit(mut self, count: i64) -> Result<Self> {
        self.dialect
            .ensure(self.dialect.supports_modification_limit(), "LIMIT on DELETE")?;
        self.limit_value = row_bound(count);
        Ok(self)
    }

    /// Start a USING clause (PostgreSQL)
    pub fn using<E>(mut self, tables: E) -> Result<Self>
    where
        E: IntoExpressions,
    {
        self.dialect
            .ensure(self.dialect.supports_delete_using(), "USING")?;
        self.augmenting_mut("USING")?.using(tables);
        Ok(self)
    }

    /// Add tables to the USING clause (PostgreSQL)
    pub fn add_using<E>(mut self, tables: E) -> Result<Self>
    where
        E: IntoExpressions,
    {
        self.dialect
            .ensure(self.dialect.supports_delete_using(), "USING")?;
        self.augmenting_mut("USING")?.add_using(tables);
        Ok(self)
    }

    /// Start a RETURNING clause (PostgreSQL)
    pub fn returning<E>(mut self, expressions: E) -> Result<Self>
    where
        E: IntoExpressions,
    {
        self.augmenting_mut("RETURNING")?.returning(expressions);
        Ok(self)
    }

    /// Add to the RETURNING clause (PostgreSQL)
    pub fn add_returning<E>(mut self, expressions: E) -> Result<Self>
    where
        E: IntoExpressions,
    {
        self.augmenting_mut("RETURNING")?.add_returning(expressions);
        Ok(self)
    }

    fn augmenting_mut(&mut self, clause: &'static str) -> Result<&mut AugmentingClauseBuilder> {
        let dialect = self.dialect;
        self.augmenting
            .as_mut()
            .ok_or_else(|| Error::unsupported_clause(clause, dialect))
    }

    pub fn table(&self) -> &Query {
        &self.query
    }
}

impl QueryBuilder for DeleteQuery {
    fn to_sql(&self) -> String {
        let mut sql = String::new();

        sql.push_str("DELETE FROM ");
        sql.push_str(&self.query.table_clause());

        if let Some(augmenting) = &self.augmenting {
            sql.push_str(&augmenting.render_using_clause());
        }

        sql.push_str(&self.where_clause.render_clause("WHERE"));

        if let Some(limit) = self.limit_value {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        if let Some(augmenting) = &self.augmenting {
            sql.push_str(&augmenting.render_returning_clause());
        }

        tracing::trace!(dialect = %self.dialect, sql = %sql, "rendered DELETE");
        sql
    }

    fn parameters(&self) -> Vec<Value> {
        Vec::new()
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }
}

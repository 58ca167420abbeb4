//! SELECT query builder implementation

use super::common::{row_bound, IntoExpressions, JoinClause, JoinType, Query, QueryBuilder};
use super::conditional::ConditionalClauseBuilder;
use crate::{Connector, Dialect, Result, Value};

/// SELECT query builder
///
/// Every method consumes the builder and hands it back, so calls chain:
///
/// ```
/// use quarry_core::{QueryBuilder, QueryBuilderFactory};
///
/// let sql = QueryBuilderFactory::mysql()
///     .select(["u.id", "COUNT(o.id)"])
///     .from("users", "u")
///     .unwrap()
///     .left_join("orders", "o", "o.user_id = u.id")
///     .group_by("u.id")
///     .having("COUNT(o.id) > 1")
///     .to_sql();
/// assert_eq!(
///     sql,
///     "SELECT u.id, COUNT(o.id) FROM users AS u LEFT JOIN orders AS o ON o.user_id = u.id \
///      GROUP BY u.id HAVING COUNT(o.id) > 1"
/// );
/// ```
///
/// Nothing is validated at render time: a query without select expressions
/// or without a table renders whatever SQL that state describes.
#[derive(Debug, Clone)]
pub struct SelectQuery {
    dialect: Dialect,
    query: Query,
    select_expressions: Vec<String>,
    join_clauses: Vec<JoinClause>,
    where_clause: ConditionalClauseBuilder,
    group_by_expressions: Vec<String>,
    having_clause: ConditionalClauseBuilder,
    order_by_expressions: Vec<String>,
    limit_value: Option<i64>,
    offset_value: Option<i64>,
}

impl SelectQuery {
    /// Create a new SELECT query builder with its select expressions
    pub fn new<E>(dialect: Dialect, expressions: E) -> Self
    where
        E: IntoExpressions,
    {
        Self {
            dialect,
            query: Query::default(),
            select_expressions: expressions.into_expressions(),
            join_clauses: Vec::new(),
            where_clause: ConditionalClauseBuilder::new(),
            group_by_expressions: Vec::new(),
            having_clause: ConditionalClauseBuilder::new(),
            order_by_expressions: Vec::new(),
            limit_value: None,
            offset_value: None,
        }
    }

    /// Add more select expressions
    pub fn add_select_expression<E>(mut self, expressions: E) -> Self
    where
        E: IntoExpressions,
    {
        self.select_expressions
            .extend(expressions.into_expressions());
        self
    }

    /// Set the table being selected from. An empty `alias` means no alias.
    pub fn from(mut self, table: &str, alias: &str) -> Result<Self> {
        self.query.set_table(table, alias)?;
        Ok(self)
    }

    /// Add an INNER JOIN clause
    pub fn inner_join(self, table: &str, alias: &str, on_condition: &str) -> Self {
        self.push_join(JoinType::Inner, table, alias, on_condition)
    }

    /// Same as [`inner_join`](Self::inner_join)
    pub fn join(self, table: &str, alias: &str, on_condition: &str) -> Self {
        self.inner_join(table, alias, on_condition)
    }

    /// Add a LEFT JOIN clause
    pub fn left_join(self, table: &str, alias: &str, on_condition: &str) -> Self {
        self.push_join(JoinType::Left, table, alias, on_condition)
    }

    /// Add a RIGHT JOIN clause
    pub fn right_join(self, table: &str, alias: &str, on_condition: &str) -> Self {
        self.push_join(JoinType::Right, table, alias, on_condition)
    }

    fn push_join(mut self, join_type: JoinType, table: &str, alias: &str, on_condition: &str) -> Self {
        self.join_clauses.push(JoinClause {
            join_type,
            table: table.to_string(),
            alias: if alias.is_empty() {
                None
            } else {
                Some(alias.to_string())
            },
            on_condition: on_condition.to_string(),
        });
        self
    }

    /// Start the WHERE clause.
    ///
    /// Any conditions added earlier are discarded; use
    /// [`and_where`](Self::and_where) or [`or_where`](Self::or_where) to extend.
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

    /// Start the GROUP BY clause, replacing previous expressions
    pub fn group_by<E>(mut self, expressions: E) -> Self
    where
        E: IntoExpressions,
    {
        self.group_by_expressions = expressions.into_expressions();
        self
    }

    /// Add to the GROUP BY clause
    pub fn add_group_by<E>(mut self, expressions: E) -> Self
    where
        E: IntoExpressions,
    {
        self.group_by_expressions
            .extend(expressions.into_expressions());
        self
    }

    /// Start the HAVING clause, discarding earlier HAVING conditions
    pub fn having<E>(mut self, conditions: E) -> Self
    where
        E: IntoExpressions,
    {
        self.having_clause.start_clause(Connector::And, conditions);
        self
    }

    /// Add HAVING conditions joined with AND
    pub fn and_having<E>(mut self, conditions: E) -> Self
    where
        E: IntoExpressions,
    {
        self.having_clause.add_condition(Connector::And, conditions);
        self
    }

    /// Add HAVING conditions joined with OR
    pub fn or_having<E>(mut self, conditions: E) -> Self
    where
        E: IntoExpressions,
    {
        self.having_clause.add_condition(Connector::Or, conditions);
        self
    }

    /// Start the ORDER BY clause, replacing previous expressions
    pub fn order_by<E>(mut self, expressions: E) -> Self
    where
        E: IntoExpressions,
    {
        self.order_by_expressions = expressions.into_expressions();
        self
    }

    /// Add to the ORDER BY clause
    pub fn add_order_by<E>(mut self, expressions: E) -> Self
    where
        E: IntoExpressions,
    {
        self.order_by_expressions
            .extend(expressions.into_expressions());
        self
    }

    /// Set the LIMIT clause. [`NO_LIMIT`](crate::NO_LIMIT) (`-1`)
    /// removes it; other negative values are rendered as given.
    pub fn limit(mut self, count: i64) -> Self {
        self.limit_value = row_bound(count);
        self
    }

    /// Set the OFFSET clause. `-1` removes it.
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset_value = row_bound(offset);
        self
    }

    pub fn table(&self) -> &Query {
        &self.query
    }
}

impl QueryBuilder for SelectQuery {
    fn to_sql(&self) -> String {
        let mut sql = String::new();

        // SELECT ... FROM
        sql.push_str("SELECT ");
        sql.push_str(&self.select_expressions.join(", "));
        sql.push_str(" FROM ");
        sql.push_str(&self.query.table_clause());

        // JOIN clauses, grouped by type
        for join_type in JoinType::RENDER_ORDER {
            for join in self.join_clauses.iter().filter(|j| j.join_type == join_type) {
                sql.push_str(&join.to_sql());
            }
        }

        sql.push_str(&self.where_clause.render_clause("WHERE"));

        if !self.group_by_expressions.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.group_by_expressions.join(", "));
        }

        sql.push_str(&self.having_clause.render_clause("HAVING"));

        if !self.order_by_expressions.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order_by_expressions.join(", "));
        }

        if let Some(limit) = self.limit_value {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        if let Some(offset) = self.offset_value {
            sql.push_str(&format!(" OFFSET {}", offset));
        }

        tracing::trace!(dialect = %self.dialect, sql = %sql, "rendered SELECT");
        sql
    }

    fn parameters(&self) -> Vec<Value> {
        Vec::new()
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }
}

//! Trailing clauses that only some dialects support

use super::common::IntoExpressions;

/// RETURNING and USING state for PostgreSQL modification queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AugmentingClauseBuilder {
    returning_expressions: Vec<String>,
    using_expressions: Vec<String>,
}

impl AugmentingClauseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a RETURNING clause, overwriting any previous expressions
    pub fn returning<E>(&mut self, expressions: E) -> &mut Self
    where
        E: IntoExpressions,
    {
        if !self.returning_expressions.is_empty() {
            tracing::debug!(
                discarded = self.returning_expressions.len(),
                "restarting RETURNING clause, prior expressions dropped"
            );
        }
        self.returning_expressions = expressions.into_expressions();
        self
    }

    /// Add to the RETURNING clause
    pub fn add_returning<E>(&mut self, expressions: E) -> &mut Self
    where
        E: IntoExpressions,
    {
        self.returning_expressions
            .extend(expressions.into_expressions());
        self
    }

    /// Start a USING clause, overwriting any previous tables
    pub fn using<E>(&mut self, expressions: E) -> &mut Self
    where
        E: IntoExpressions,
    {
        self.using_expressions = expressions.into_expressions();
        self
    }

    /// Add tables to the USING clause
    pub fn add_using<E>(&mut self, expressions: E) -> &mut Self
    where
        E: IntoExpressions,
    {
        self.using_expressions.extend(expressions.into_expressions());
        self
    }

    pub fn returning_expressions(&self) -> &[String] {
        &self.returning_expressions
    }

    pub fn render_returning_clause(&self) -> String {
        if self.returning_expressions.is_empty() {
            String::new()
        } else {
            format!(" RETURNING {}", self.returning_expressions.join(", "))
        }
    }

    pub fn render_using_clause(&self) -> String {
        if self.using_expressions.is_empty() {
            String::new()
        } else {
            format!(" USING {}", self.using_expressions.join(", "))
        }
    }
}

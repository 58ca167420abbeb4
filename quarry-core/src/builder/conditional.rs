//! Accumulation and rendering of WHERE / HAVING conditions

use super::common::IntoExpressions;
use crate::Connector;

/// One condition and the connector joining it to the conditions before it
///
/// Only the first condition of a clause has no connector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub connector: Option<Connector>,
    pub expression: String,
}

/// Ordered list of raw boolean conditions for one clause
///
/// Every query type uses this for WHERE, and SELECT also uses a second
/// instance for HAVING. Conditions render in call order with no implicit
/// grouping, so `a AND b OR c` is left to the database's precedence rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionalClauseBuilder {
    conditions: Vec<Condition>,
}

impl ConditionalClauseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clause over: every existing condition is discarded
    pub fn start_clause<E>(&mut self, connector: Connector, expressions: E)
    where
        E: IntoExpressions,
    {
        if !self.conditions.is_empty() {
            tracing::debug!(
                discarded = self.conditions.len(),
                "restarting conditional clause, prior conditions dropped"
            );
        }
        self.conditions.clear();
        self.add_condition(connector, expressions);
    }

    /// Append conditions, each joined to the previous one by `connector`
    pub fn add_condition<E>(&mut self, connector: Connector, expressions: E)
    where
        E: IntoExpressions,
    {
        for expression in expressions.into_expressions() {
            let connector = if self.conditions.is_empty() {
                None
            } else {
                Some(connector)
            };
            self.conditions.push(Condition {
                connector,
                expression,
            });
        }
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// `" KEYWORD c1 AND c2 OR c3"`, or nothing when there are no conditions
    pub fn render_clause(&self, keyword: &str) -> String {
        if self.conditions.is_empty() {
            return String::new();
        }

        let mut sql = String::new();
        sql.push(' ');
        sql.push_str(keyword);
        for condition in &self.conditions {
            if let Some(connector) = condition.connector {
                sql.push(' ');
                sql.push_str(connector.as_str());
            }
            sql.push(' ');
            sql.push_str(&condition.expression);
        }
        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_clause_renders_nothing() {
        let clause = ConditionalClauseBuilder::new();
        assert_eq!(clause.render_clause("WHERE"), "");
        assert!(clause.is_empty());
    }

    #[test]
    fn test_call_order_is_preserved() {
        let mut clause = ConditionalClauseBuilder::new();
        clause.start_clause(Connector::And, "a=1");
        clause.add_condition(Connector::And, "b=2");
        clause.add_condition(Connector::Or, "c=3");
        assert_eq!(clause.render_clause("WHERE"), " WHERE a=1 AND b=2 OR c=3");
    }

    #[test]
    fn test_first_condition_has_no_connector() {
        let mut clause = ConditionalClauseBuilder::new();
        let connector: Connector = "Or".parse().unwrap();
        clause.add_condition(connector, ["x", "y"]);
        assert_eq!(clause.conditions()[0].connector, None);
        assert_eq!(clause.conditions()[1].connector, Some(Connector::Or));
        assert_eq!(clause.render_clause("HAVING"), " HAVING x OR y");
    }

    #[test]
    fn test_several_expressions_share_one_connector() {
        let mut clause = ConditionalClauseBuilder::new();
        clause.start_clause(Connector::And, "a=1");
        clause.add_condition(Connector::Or, ["b=2", "c=3"]);
        assert_eq!(clause.render_clause("WHERE"), " WHERE a=1 OR b=2 OR c=3");
    }

    #[test]
    fn test_start_clause_discards_prior_conditions() {
        let mut clause = ConditionalClauseBuilder::new();
        clause.start_clause(Connector::And, ["a=1", "b=2"]);
        clause.start_clause(Connector::And, "c=3");
        assert_eq!(clause.render_clause("WHERE"), " WHERE c=3");
        assert_eq!(clause.conditions().len(), 1);
    }

    #[test]
    fn test_start_with_no_expressions_clears_clause() {
        let mut clause = ConditionalClauseBuilder::new();
        clause.start_clause(Connector::And, "a=1");
        clause.start_clause(Connector::And, Vec::<String>::new());
        assert_eq!(clause.render_clause("WHERE"), "");
    }
}

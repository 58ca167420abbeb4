//! Quarry Core - dialect-aware fluent SQL statement builders
//!
//! Builders accumulate raw SQL fragments clause by clause and render them to
//! a single statement string. Nothing is executed and fragments are not
//! escaped; callers pass trusted text or use [`param`] for bound values.

pub mod builder;
pub mod config;
pub mod connector;
pub mod dialect;
pub mod error;
pub mod factory;
pub mod value;

// Re-export main types
pub use builder::{
    param, AugmentingClauseBuilder, ColumnValue, Condition, ConditionalClauseBuilder,
    DeleteQuery, InsertQuery, IntoColumnValues, IntoExpressions, JoinClause, JoinType, Query,
    QueryBuilder, SelectQuery, UpdateQuery, NO_LIMIT,
};
pub use config::QuarryConfig;
pub use connector::Connector;
pub use dialect::Dialect;
pub use error::{Error, Result};
pub use factory::QueryBuilderFactory;
pub use value::Value;

/// Create a MySQL query builder factory
pub fn mysql() -> QueryBuilderFactory {
    QueryBuilderFactory::mysql()
}

/// Create a PostgreSQL query builder factory
pub fn postgres() -> QueryBuilderFactory {
    QueryBuilderFactory::postgres()
}

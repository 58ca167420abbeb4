//! Query builder module

pub mod augmenting;
pub mod common;
pub mod conditional;
pub mod delete;
pub mod insert;
pub mod select;
pub mod update;

// Re-export types from submodules
pub use augmenting::AugmentingClauseBuilder;
pub use common::{
    param, ColumnValue, IntoColumnValues, IntoExpressions, JoinClause, JoinType, Query,
    QueryBuilder, NO_LIMIT,
};
pub use conditional::{Condition, ConditionalClauseBuilder};
pub use delete::DeleteQuery;
pub use insert::InsertQuery;
pub use select::SelectQuery;
pub use update::UpdateQuery;

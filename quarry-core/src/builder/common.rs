//! Common types and traits shared across all query builders

use crate::{Dialect, Error, Result, Value};

/// Core trait for all query builders
pub trait QueryBuilder {
    /// Generate the SQL query string
    fn to_sql(&self) -> String;

    /// Get the bound parameters, in placeholder order
    fn parameters(&self) -> Vec<Value>;

    /// The dialect this builder renders for
    fn dialect(&self) -> Dialect;

    /// Render the statement together with its parameters
    fn build(&self) -> (String, Vec<Value>) {
        let sql = self.to_sql();
        let params = self.parameters();
        tracing::trace!(
            dialect = %self.dialect(),
            types = ?params.iter().map(crate::Value::type_name).collect::<Vec<_>>(),
            "built statement"
        );
        (sql, params)
    }
}

/// Row count that clears a LIMIT or OFFSET instead of rendering it
pub const NO_LIMIT: i64 = -1;

pub(crate) fn row_bound(count: i64) -> Option<i64> {
    (count != NO_LIMIT).then_some(count)
}

/// Table identity shared by every statement
///
/// Table names and aliases are raw SQL text and are never quoted; use
/// [`Dialect::quote_identifier`] beforehand when that matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    table_name: String,
    table_alias: Option<String>,
}

impl Query {
    /// Create a query over `table`. An empty `alias` means no alias.
    pub fn new(table: &str, alias: &str) -> Result<Self> {
        let mut query = Self::default();
        query.set_table(table, alias)?;
        Ok(query)
    }

    /// Replace the table identity
    pub fn set_table(&mut self, table: &str, alias: &str) -> Result<()> {
        if table.trim().is_empty() {
            return Err(Error::invalid_argument("table name must not be empty"));
        }
        self.table_name = table.to_string();
        self.table_alias = if alias.is_empty() {
            None
        } else {
            Some(alias.to_string())
        };
        Ok(())
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn table_alias(&self) -> Option<&str> {
        self.table_alias.as_deref()
    }

    /// `name` or `name AS alias`
    pub fn table_clause(&self) -> String {
        table_with_alias(&self.table_name, self.table_alias.as_deref())
    }
}

pub(crate) fn table_with_alias(table: &str, alias: Option<&str>) -> String {
    match alias {
        Some(alias) => format!("{} AS {}", table, alias),
        None => table.to_string(),
    }
}

/// Trait to convert various types into ordered lists of raw SQL expressions
pub trait IntoExpressions {
    fn into_expressions(self) -> Vec<String>;
}

impl IntoExpressions for &str {
    fn into_expressions(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoExpressions for String {
    fn into_expressions(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoExpressions for Vec<String> {
    fn into_expressions(self) -> Vec<String> {
        self
    }
}

impl IntoExpressions for Vec<&str> {
    fn into_expressions(self) -> Vec<String> {
        self.into_iter().map(|s| s.to_string()).collect()
    }
}

impl IntoExpressions for &[&str] {
    fn into_expressions(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> IntoExpressions for [&str; N] {
    fn into_expressions(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> IntoExpressions for [String; N] {
    fn into_expressions(self) -> Vec<String> {
        self.into_iter().collect()
    }
}

/// The value side of a column assignment
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    /// SQL text inlined verbatim, e.g. `'x'`, `42`, `NOW()`
    Raw(String),
    /// Bound parameter rendered as a dialect placeholder
    Param(Value),
}

impl ColumnValue {
    /// Build a raw, inlined value
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(sql.into())
    }

    /// Build a bound parameter
    pub fn param(value: impl Into<Value>) -> Self {
        Self::Param(value.into())
    }
}

impl From<&str> for ColumnValue {
    fn from(val: &str) -> Self {
        ColumnValue::Raw(val.to_string())
    }
}

impl From<String> for ColumnValue {
    fn from(val: String) -> Self {
        ColumnValue::Raw(val)
    }
}

impl From<i32> for ColumnValue {
    fn from(val: i32) -> Self {
        ColumnValue::Raw(val.to_string())
    }
}

impl From<i64> for ColumnValue {
    fn from(val: i64) -> Self {
        ColumnValue::Raw(val.to_string())
    }
}

impl From<Value> for ColumnValue {
    fn from(val: Value) -> Self {
        ColumnValue::Param(val)
    }
}

/// Shorthand for [`ColumnValue::param`]
pub fn param(value: impl Into<Value>) -> ColumnValue {
    ColumnValue::param(value)
}

/// Trait for types that can be converted to an ordered column-value mapping
pub trait IntoColumnValues {
    fn into_column_values(self) -> Vec<(String, ColumnValue)>;
}

impl IntoColumnValues for Vec<(String, ColumnValue)> {
    fn into_column_values(self) -> Vec<(String, ColumnValue)> {
        self
    }
}

impl<V> IntoColumnValues for Vec<(&str, V)>
where
    V: Into<ColumnValue>,
{
    fn into_column_values(self) -> Vec<(String, ColumnValue)> {
        self.into_iter()
            .map(|(column, value)| (column.to_string(), value.into()))
            .collect()
    }
}

impl<V, const N: usize> IntoColumnValues for [(&str, V); N]
where
    V: Into<ColumnValue>,
{
    fn into_column_values(self) -> Vec<(String, ColumnValue)> {
        self.into_iter()
            .map(|(column, value)| (column.to_string(), value.into()))
            .collect()
    }
}

/// Renders column values, numbering placeholders across one statement
#[derive(Debug)]
pub(crate) struct PlaceholderWriter {
    dialect: Dialect,
    next_index: usize,
}

impl PlaceholderWriter {
    pub(crate) fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            next_index: 1,
        }
    }

    pub(crate) fn write(&mut self, value: &ColumnValue) -> String {
        match value {
            ColumnValue::Raw(sql) => sql.clone(),
            ColumnValue::Param(_) => {
                let placeholder = self.dialect.placeholder(self.next_index);
                self.next_index += 1;
                placeholder
            }
        }
    }

    /// `c1 = v1, c2 = v2`
    pub(crate) fn write_assignments(&mut self, columns: &[(String, ColumnValue)]) -> String {
        columns
            .iter()
            .map(|(column, value)| format!("{} = {}", column, self.write(value)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Collect the bound values of a column list, in column order
pub(crate) fn collect_parameters(columns: &[(String, ColumnValue)], into: &mut Vec<Value>) {
    into.extend(columns.iter().filter_map(|(_, value)| match value {
        ColumnValue::Param(value) => Some(value.clone()),
        ColumnValue::Raw(_) => None,
    }));
}

/// JOIN types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
}

impl JoinType {
    /// Joins are grouped by type in this order when rendered
    pub const RENDER_ORDER: [JoinType; 3] = [JoinType::Inner, JoinType::Left, JoinType::Right];
}

impl std::fmt::Display for JoinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinType::Inner => write!(f, "INNER"),
            JoinType::Left => write!(f, "LEFT"),
            JoinType::Right => write!(f, "RIGHT"),
        }
    }
}

/// A JOIN clause with its raw ON condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinClause {
    pub join_type: JoinType,
    pub table: String,
    pub alias: Option<String>,
    pub on_condition: String,
}

impl JoinClause {
    pub(crate) fn to_sql(&self) -> String {
        format!(
            " {} JOIN {} ON {}",
            self.join_type,
            table_with_alias(&self.table, self.alias.as_deref()),
            self.on_condition
        )
    }
}

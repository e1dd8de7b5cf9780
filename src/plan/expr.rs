//! Select-list and ordering expressions

use crate::query::SortDirection;

/// `expr [AS alias]` in a select list
#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
    pub expr: String,
    pub alias: Option<String>,
}

impl SelectItem {
    /// A bare column or expression
    pub fn column(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            alias: None,
        }
    }

    /// An aliased expression
    pub fn aliased(expr: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            alias: Some(alias.into()),
        }
    }
}

/// ORDER BY key
#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    pub column: String,
    pub direction: SortDirection,
}

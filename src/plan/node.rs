//! Query plan node types

use crate::query::SortDirection;
use super::expr::{SelectItem, SortKey};

/// A complete statement: variable declarations, a CTE chain and the final
/// select
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    pub declarations: Vec<Declaration>,
    pub ctes: Vec<Cte>,
    pub body: Select,
}

/// `DECLARE @name type = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Variable name without the `@`
    pub name: String,
    pub sql_type: &'static str,
    /// Typed numeric constant; never interpolated text
    pub value: f64,
}

impl Declaration {
    pub fn float(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            sql_type: "float",
            value,
        }
    }

    /// `@name`, as referenced from expressions
    pub fn variable(&self) -> String {
        format!("@{}", self.name)
    }
}

/// One named common table expression
#[derive(Debug, Clone, PartialEq)]
pub struct Cte {
    pub name: String,
    pub select: Select,
}

impl Cte {
    pub fn new(name: impl Into<String>, select: Select) -> Self {
        Self {
            name: name.into(),
            select,
        }
    }
}

/// A table or CTE with an optional alias
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub name: String,
    pub alias: Option<String>,
}

impl Relation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// Join type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JoinType {
    Inner,
    Left,
}

/// `JOIN relation ON condition`
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub join_type: JoinType,
    pub relation: Relation,
    pub on: String,
}

/// A single SELECT block.
///
/// `filter` conjuncts are ANDed into WHERE; `having` is emitted only when
/// present, so an unrestricted stage adds no clause at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub items: Vec<SelectItem>,
    pub from: Relation,
    pub joins: Vec<Join>,
    pub filter: Vec<String>,
    pub group_by: Vec<String>,
    pub having: Option<String>,
    pub order_by: Vec<SortKey>,
}

impl Select {
    pub fn new(relation: Relation) -> Self {
        Self {
            items: Vec::new(),
            from: relation,
            joins: Vec::new(),
            filter: Vec::new(),
            group_by: Vec::new(),
            having: None,
            order_by: Vec::new(),
        }
    }

    pub fn item(mut self, item: SelectItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = SelectItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn join(mut self, join_type: JoinType, relation: Relation, on: impl Into<String>) -> Self {
        self.joins.push(Join {
            join_type,
            relation,
            on: on.into(),
        });
        self
    }

    pub fn filter(mut self, predicate: impl Into<String>) -> Self {
        self.filter.push(predicate.into());
        self
    }

    pub fn group_by<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.group_by.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn having(mut self, predicate: Option<String>) -> Self {
        self.having = predicate;
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.order_by.push(SortKey {
            column: column.into(),
            direction,
        });
        self
    }
}

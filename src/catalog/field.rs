//! Field definitions and pipeline stages

use std::fmt;
use super::types::FieldType;

/// Point in the query pipeline where a field's value becomes available,
/// and therefore where a filter on it has to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Per citing/cited pair, before any grouping (`WHERE` of `condition`)
    Raw,
    /// Aggregate over one cited article (`HAVING` of `condition`)
    GroupCondition,
    /// Only exists once `aggregation` has run (`WHERE` of the final select)
    PostAggregate,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Raw, Stage::GroupCondition, Stage::PostAggregate];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Raw => write!(f, "raw"),
            Stage::GroupCondition => write!(f, "group-condition"),
            Stage::PostAggregate => write!(f, "post-aggregate"),
        }
    }
}

/// A filterable field of the citation dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    /// Label shown in the condition builder
    pub label: &'static str,
    pub field_type: FieldType,
    pub stage: Stage,
    /// Materialised by the `aggregation` CTE, so usable as an x-axis,
    /// series grouping or measure
    pub axis: bool,
    /// Aggregate computed in the `condition` CTE; set only for
    /// `Stage::GroupCondition` fields
    pub condition_expr: Option<&'static str>,
}

impl Field {
    pub(crate) const fn raw(name: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            label,
            field_type,
            stage: Stage::Raw,
            axis: false,
            condition_expr: None,
        }
    }

    pub(crate) const fn condition(
        name: &'static str,
        label: &'static str,
        field_type: FieldType,
        expr: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            field_type,
            stage: Stage::GroupCondition,
            axis: true,
            condition_expr: Some(expr),
        }
    }

    pub(crate) const fn post_aggregate(name: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            label,
            field_type,
            stage: Stage::PostAggregate,
            axis: true,
            condition_expr: None,
        }
    }

    pub(crate) const fn with_axis(mut self) -> Self {
        self.axis = true;
        self
    }

    pub fn is_numeric(&self) -> bool {
        self.field_type.is_numeric()
    }

    pub fn is_date(&self) -> bool {
        self.field_type.is_date()
    }

    /// How to refer to this field inside the stage that owns it.
    ///
    /// Raw fields are read off the `per_pair` alias, group-condition fields
    /// are their aggregate expression and post-aggregate fields are bracketed
    /// columns of `aggregation`.
    pub fn reference(&self) -> String {
        match self.stage {
            Stage::Raw => format!("pp.{}", self.name),
            Stage::GroupCondition => match self.condition_expr {
                Some(expr) => expr.to_string(),
                None => format!("pp.{}", self.name),
            },
            Stage::PostAggregate => format!("[{}]", self.name),
        }
    }
}

//! Error types for the condition compiler

use thiserror::Error;

use crate::catalog::Aggregation;

/// Errors that abort a compile call.
///
/// These are structural problems with the request (fields the catalog does
/// not know, a chart configuration that cannot be expressed) and are always
/// raised to the caller.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field '{0}' is not produced by the aggregation stage and cannot be charted")]
    InvalidAxisField(String),

    #[error("{aggregation} requires a numeric field, '{field}' is not numeric")]
    InvalidAggregation {
        aggregation: Aggregation,
        field: String,
    },

    #[error("Bin width {name} must be a positive number, got {value}")]
    InvalidBinWidth { name: &'static str, value: f64 },

    #[error("Invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single rule whose value does not fit its operator.
///
/// Never returned from a compile call: the filter module logs it and renders
/// the rule as the tautology so the rest of the tree still compiles.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedPredicate {
    #[error("Unknown operator '{0}'")]
    UnknownOperator(String),

    #[error("Operator '{0}' requires a value")]
    MissingValue(String),

    #[error("Operator '{0}' requires exactly two values")]
    ExpectedRange(String),

    #[error("Operator '{0}' requires a single value")]
    ExpectedScalar(String),

    #[error("Operator '{0}' requires a non-empty list")]
    EmptyList(String),
}

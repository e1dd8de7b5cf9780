//! Request parser (verb module)
//!
//! Transforms JSON text from the query builder and chart panels into query
//! types.

use crate::error::CompileError;
use crate::query::{ChartConfig, CompileRequest, RuleGroup};

/// Parse a condition tree
pub fn parse_tree(json: &str) -> Result<RuleGroup, CompileError> {
    serde_json::from_str(json).map_err(CompileError::from)
}

/// Parse a chart configuration; every field is required
pub fn parse_chart(json: &str) -> Result<ChartConfig, CompileError> {
    serde_json::from_str(json).map_err(CompileError::from)
}

/// Parse a `{ "conditions": ..., "chart": ... }` envelope
pub fn parse_request(json: &str) -> Result<CompileRequest, CompileError> {
    serde_json::from_str(json).map_err(CompileError::from)
}

//! Compile entry points
//!
//! Condition tree + chart configuration → SQL text, in one call.

use crate::catalog::{Catalog, Stage};
use crate::emitter::emit_sql;
use crate::error::CompileError;
use crate::filter::StageFilters;
use crate::parser::parse_request;
use crate::planner::plan_query;
use crate::query::{ChartConfig, CompileRequest, RuleGroup};
use crate::resolver::resolve_chart;

/// Compile a condition tree and chart configuration against the built-in
/// catalog.
///
/// The result is a complete statement ending in `;`. Malformed rules are
/// dropped with a warning; unknown fields and unusable chart settings are
/// errors.
pub fn compile(tree: &RuleGroup, chart: &ChartConfig) -> Result<String, CompileError> {
    compile_with(&Catalog::builtin(), tree, chart)
}

/// Compile a parsed request envelope
pub fn compile_request(request: &CompileRequest) -> Result<String, CompileError> {
    compile(&request.conditions, &request.chart)
}

/// Parse and compile a JSON request envelope
pub fn compile_json(json: &str) -> Result<String, CompileError> {
    compile_request(&parse_request(json)?)
}

fn compile_with(
    catalog: &Catalog,
    tree: &RuleGroup,
    chart: &ChartConfig,
) -> Result<String, CompileError> {
    let filters = StageFilters::render(tree, catalog)?;
    let resolved = resolve_chart(chart, catalog)?;

    tracing::debug!(
        raw = filters.get(Stage::Raw),
        group_condition = filters.get(Stage::GroupCondition),
        post_aggregate = filters.get(Stage::PostAggregate),
        group_by = ?resolved.group_names(),
        "compiling chart query"
    );

    let plan = plan_query(&resolved, &filters, catalog)?;
    Ok(emit_sql(&plan))
}

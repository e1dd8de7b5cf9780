use serde::{Deserialize, Serialize};

use super::chart::ChartConfig;
use super::predicate::RuleGroup;

/// Request body for compiling a job query.
///
/// Pairs the condition tree with the chart configuration, the way the job
/// creation page previews and then submits them together.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct CompileRequest {
    /// Condition tree; omitted means no filters
    #[serde(default, alias = "query")]
    pub conditions: RuleGroup,
    pub chart: ChartConfig,
}

//! Stage classification of one condition tree

use crate::catalog::{Catalog, Stage};
use crate::error::CompileError;
use crate::query::RuleGroup;
use super::evaluate::render_group;
use super::translate::TAUTOLOGY;

/// The condition tree rendered once per pipeline stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageFilters {
    /// `WHERE` of the `condition` CTE, over `per_pair` columns
    pub raw: String,
    /// `HAVING` of the `condition` CTE, over per-article aggregates
    pub group_condition: String,
    /// `WHERE` of the final select, over `aggregation` columns
    pub post_aggregate: String,
}

impl StageFilters {
    pub fn render(tree: &RuleGroup, catalog: &Catalog) -> Result<Self, CompileError> {
        Ok(Self {
            raw: render_group(tree, Stage::Raw, catalog)?,
            group_condition: render_group(tree, Stage::GroupCondition, catalog)?,
            post_aggregate: render_group(tree, Stage::PostAggregate, catalog)?,
        })
    }

    /// Rendered expression for `stage`, `TAUTOLOGY` when unrestricted
    pub fn get(&self, stage: Stage) -> &str {
        match stage {
            Stage::Raw => &self.raw,
            Stage::GroupCondition => &self.group_condition,
            Stage::PostAggregate => &self.post_aggregate,
        }
    }

    /// Expression for `stage`, or `None` when it would not restrict anything
    pub fn clause(&self, stage: Stage) -> Option<&str> {
        let sql = self.get(stage);
        (sql != TAUTOLOGY).then_some(sql)
    }
}

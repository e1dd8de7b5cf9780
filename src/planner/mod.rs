//! Query planner (verb module)
//!
//! ResolvedChart + StageFilters → QueryPlan

mod build;
mod scaffold;

pub use build::{plan_query, MEASURE_ALIAS, MEDIAN_MARKER};
pub use scaffold::ARTICLE_COUNT_ALIAS;

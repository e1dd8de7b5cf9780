//! clearcard-sql - Compile condition trees and chart settings to staged SQL
//!
//! This library provides:
//! - The field catalog of the citation dataset (types, labels, pipeline stage)
//! - Condition tree and chart configuration types, parsed from JSON
//! - Operator translation and per-stage rendering of condition trees
//! - Chart resolution (axis, grouping, measure, bin widths)
//! - Planning of the fixed CTE pipeline
//! - SQL Server statement emission
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `catalog/` - field metadata (Field, FieldType, Stage, Aggregation, Catalog)
//! - `query/` - compiler inputs (RuleGroup, Rule, ChartConfig, CompileRequest)
//! - `plan/` - statement structure (QueryPlan, Cte, Select, SelectItem)
//!
//! **Verb modules** (transformations):
//! - `parser/` - JSON → RuleGroup / ChartConfig / CompileRequest
//! - `filter/` - RuleGroup + Catalog → StageFilters
//! - `resolver/` - ChartConfig + Catalog → ResolvedChart
//! - `planner/` - ResolvedChart + StageFilters → QueryPlan
//! - `emitter/` - QueryPlan → SQL text
//!
//! # Example
//!
//! ```ignore
//! use clearcard_sql::{compile, parser, ChartConfig};
//!
//! let tree = parser::parse_tree(r#"{ "combinator": "and", "rules": [
//!     { "field": "cited_pub_year", "operator": "between", "value": [2008, 2018] }
//! ] }"#)?;
//! let sql = compile(&tree, &ChartConfig::default())?;
//! ```

pub mod catalog;
pub mod query;
pub mod plan;
pub mod parser;
pub mod filter;
pub mod resolver;
pub mod planner;
pub mod emitter;
pub mod error;
mod compiler;

// Re-export commonly used types
pub use catalog::{Aggregation, Catalog, Field, FieldType, Stage};
pub use query::{ChartConfig, CompileRequest, Operator, Rule, RuleGroup, RuleNode, SortDirection, COUNT_SENTINEL};
pub use filter::{translate, StageFilters, TAUTOLOGY};
pub use resolver::{resolve_chart, ResolvedChart};
pub use planner::plan_query;
pub use emitter::emit_sql;
pub use error::{CompileError, MalformedPredicate};
pub use compiler::{compile, compile_json, compile_request};

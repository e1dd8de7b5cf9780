//! Chart resolution (verb module)
//!
//! ChartConfig + Catalog → ResolvedChart

mod resolve;
mod types;

pub use resolve::resolve_chart;
pub use types::{BinWidths, Measure, ResolvedChart};

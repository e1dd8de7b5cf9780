//! Field catalog (noun module)
//!
//! Static metadata for every field of the citation dataset: its semantic
//! type, label, and the pipeline stage that produces it.

#[allow(clippy::module_inception)]
mod catalog;
mod field;
mod types;

pub use catalog::Catalog;
pub use field::{Field, Stage};
pub use types::{Aggregation, FieldType, ParseAggregationError};

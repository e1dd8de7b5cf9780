//! Types for a resolved chart configuration

use crate::catalog::{Aggregation, Field};
use crate::query::SortDirection;

/// What the y-axis computes
#[derive(Debug, Clone, PartialEq)]
pub enum Measure {
    /// `COUNT(*)` over the grouped articles
    RowCount,
    /// An aggregate over a numeric `aggregation` column
    Aggregate {
        aggregation: Aggregation,
        field: &'static Field,
    },
}

/// Bucket widths for the two binned metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinWidths {
    pub fitness: f64,
    pub citation_count: f64,
}

/// A chart configuration checked against the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedChart {
    pub x: &'static Field,
    /// Grouping columns: x first, then the series fields, without duplicates
    pub group_by: Vec<&'static Field>,
    pub direction: SortDirection,
    pub measure: Measure,
    pub bins: BinWidths,
}

impl ResolvedChart {
    pub fn group_names(&self) -> Vec<&'static str> {
        self.group_by.iter().map(|f| f.name).collect()
    }
}

//! Chart and aggregation configuration

use serde::{Deserialize, Serialize};

use crate::catalog::Aggregation;

/// Pseudo-field selecting a plain row count as the y-axis
pub const COUNT_SENTINEL: &str = "n_article";

/// Direction of the final ORDER BY on the x-axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "ASC", alias = "asc")]
    Ascending,
    #[serde(rename = "DESC", alias = "desc")]
    Descending,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

/// Axis, grouping and aggregation settings of the chart panel.
///
/// Every field is required on the wire; `Default` holds the panel's
/// initial state and is the only place defaults are applied.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// x-axis field, always the first grouping column
    pub x: String,
    /// Series grouping; duplicates and the x field are dropped when resolved
    pub group_by: Vec<String>,
    pub order_dir: SortDirection,
    /// Measure field, or `COUNT_SENTINEL`
    pub y_field: String,
    pub y_agg: Aggregation,
    /// Width of one `fitness_bin_raw` bucket
    pub fitness_bin_size: f64,
    /// Width of one `citation_count_bin_raw` bucket
    pub citation_count_bin_size: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            x: "cited_pub_year".to_string(),
            group_by: vec!["cited_journal".to_string()],
            order_dir: SortDirection::Ascending,
            y_field: COUNT_SENTINEL.to_string(),
            y_agg: Aggregation::Count,
            fitness_bin_size: 10.0,
            citation_count_bin_size: 1.0,
        }
    }
}

impl ChartConfig {
    /// True when the y-axis is a plain row count
    pub fn counts_rows(&self) -> bool {
        self.y_agg == Aggregation::Count || self.y_field == COUNT_SENTINEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_camel_case() {
        let cfg: ChartConfig = serde_json::from_value(json!({
            "x": "fitness_bin_raw",
            "groupBy": ["cited_category"],
            "orderDir": "DESC",
            "yField": "citation_count",
            "yAgg": "AVG",
            "fitnessBinSize": 0.5,
            "citationCountBinSize": 5
        }))
        .unwrap();
        assert_eq!(cfg.x, "fitness_bin_raw");
        assert_eq!(cfg.order_dir, SortDirection::Descending);
        assert_eq!(cfg.y_agg, Aggregation::Avg);
        assert_eq!(cfg.fitness_bin_size, 0.5);
        assert_eq!(cfg.citation_count_bin_size, 5.0);
        assert!(!cfg.counts_rows());
    }

    #[test]
    fn test_all_fields_required() {
        let result: Result<ChartConfig, _> = serde_json::from_value(json!({
            "x": "cited_pub_year",
            "groupBy": [],
            "orderDir": "ASC",
            "yField": "n_article",
            "yAgg": "COUNT",
            "fitnessBinSize": 10
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_default_matches_panel() {
        let cfg = ChartConfig::default();
        assert_eq!(cfg.x, "cited_pub_year");
        assert_eq!(cfg.group_by, vec!["cited_journal"]);
        assert_eq!(cfg.order_dir.as_sql(), "ASC");
        assert!(cfg.counts_rows());
        assert_eq!(cfg.fitness_bin_size, 10.0);
        assert_eq!(cfg.citation_count_bin_size, 1.0);
    }

    #[test]
    fn test_count_sentinel_forces_row_count() {
        let cfg = ChartConfig {
            y_agg: Aggregation::Max,
            ..ChartConfig::default()
        };
        assert!(cfg.counts_rows());
    }
}

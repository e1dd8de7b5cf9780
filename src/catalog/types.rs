//! Field types and aggregation functions

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Semantic type of a catalog field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Free text, rendered as quoted literals
    Text,
    /// Integer or floating point, rendered unquoted when it parses
    Number,
    /// Calendar date, rendered as a quoted literal
    Date,
}

impl FieldType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Number)
    }

    pub fn is_date(&self) -> bool {
        matches!(self, FieldType::Date)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Text => write!(f, "text"),
            FieldType::Number => write!(f, "number"),
            FieldType::Date => write!(f, "date"),
        }
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Aggregation applied to the chart's y-axis measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Aggregation {
    /// Count of rows
    #[default]
    Count,
    /// Average of values
    Avg,
    /// Minimum value
    Min,
    /// Maximum value
    Max,
    /// Median; the target dialect has no aggregate for it, see `planner`
    Median,
}

impl Aggregation {
    /// SQL function keyword
    pub fn as_sql(&self) -> &'static str {
        match self {
            Aggregation::Count => "COUNT",
            Aggregation::Avg => "AVG",
            Aggregation::Min => "MIN",
            Aggregation::Max => "MAX",
            Aggregation::Median => "MEDIAN",
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Error when parsing an aggregation string
#[derive(Debug, Clone)]
pub struct ParseAggregationError {
    pub input: String,
}

impl fmt::Display for ParseAggregationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown aggregation '{}'. Valid options: COUNT, AVG, MIN, MAX, MEDIAN", self.input)
    }
}

impl std::error::Error for ParseAggregationError {}

impl FromStr for Aggregation {
    type Err = ParseAggregationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "COUNT" => Ok(Aggregation::Count),
            "AVG" | "AVERAGE" => Ok(Aggregation::Avg),
            "MIN" | "MINIMUM" => Ok(Aggregation::Min),
            "MAX" | "MAXIMUM" => Ok(Aggregation::Max),
            "MEDIAN" => Ok(Aggregation::Median),
            _ => Err(ParseAggregationError { input: s.to_string() }),
        }
    }
}

impl<'de> Deserialize<'de> for Aggregation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Aggregation::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Aggregation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_predicates() {
        assert!(FieldType::Number.is_numeric());
        assert!(!FieldType::Number.is_date());
        assert!(FieldType::Date.is_date());
        assert!(!FieldType::Text.is_numeric());
    }

    #[test]
    fn test_parse_aggregation() {
        assert_eq!("COUNT".parse::<Aggregation>().unwrap(), Aggregation::Count);
        assert_eq!("avg".parse::<Aggregation>().unwrap(), Aggregation::Avg);
        assert_eq!("Min".parse::<Aggregation>().unwrap(), Aggregation::Min);
        assert_eq!("maximum".parse::<Aggregation>().unwrap(), Aggregation::Max);
        assert_eq!("median".parse::<Aggregation>().unwrap(), Aggregation::Median);
        assert!("sum".parse::<Aggregation>().is_err());
    }

    #[test]
    fn test_aggregation_serde() {
        let parsed: Aggregation = serde_json::from_str("\"MEDIAN\"").unwrap();
        assert_eq!(parsed, Aggregation::Median);
        assert_eq!(serde_json::to_string(&Aggregation::Avg).unwrap(), "\"AVG\"");
        assert!(serde_json::from_str::<Aggregation>("\"STDEV\"").is_err());
    }
}

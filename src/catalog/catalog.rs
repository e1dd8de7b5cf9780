//! The built-in field catalog of the citation dataset

use crate::error::CompileError;
use super::field::{Field, Stage};
use super::types::FieldType;

/// Every field the condition builder and chart panel can reference.
///
/// Raw fields come from the paper/citation join plus the category and
/// fitness lookups. The two group-condition fields are aggregated per cited
/// article, and the post-aggregate fields only exist after `aggregation`.
static FIELDS: [Field; 26] = [
    // cited (target)
    Field::raw("cited_id", "Cited Paper ID", FieldType::Number),
    Field::raw("cited_eid", "Cited EID", FieldType::Text).with_axis(),
    Field::raw("cited_doi", "Cited DOI", FieldType::Text),
    Field::raw("cited_title", "Cited Title", FieldType::Text),
    Field::raw("cited_journal", "Cited Journal", FieldType::Text).with_axis(),
    Field::raw("cited_pub_date", "Cited Pub Date", FieldType::Date).with_axis(),
    Field::raw("cited_pub_year", "Cited Pub Year", FieldType::Number).with_axis(),
    Field::raw("cited_pub_month", "Cited Pub Month", FieldType::Number).with_axis(),
    Field::raw("cited_pub_day", "Cited Pub Day", FieldType::Number).with_axis(),
    // citing (source)
    Field::raw("citing_id", "Citing Paper ID", FieldType::Number),
    Field::raw("citing_eid", "Citing EID", FieldType::Text),
    Field::raw("citing_doi", "Citing DOI", FieldType::Text),
    Field::raw("citing_title", "Citing Title", FieldType::Text),
    Field::raw("citing_journal", "Citing Journal", FieldType::Text),
    Field::raw("citing_pub_date", "Citing Pub Date", FieldType::Date),
    Field::raw("citing_pub_year", "Citing Pub Year", FieldType::Number),
    Field::raw("citing_pub_month", "Citing Pub Month", FieldType::Number),
    Field::raw("citing_pub_day", "Citing Pub Day", FieldType::Number),
    // derived
    Field::raw("citation_time_days", "Citation Lag (days)", FieldType::Number),
    Field::raw("cited_category", "Cited Category", FieldType::Text).with_axis(),
    Field::condition(
        "fitness",
        "Fitness (per cited_eid)",
        FieldType::Number,
        "CAST(MAX(pp.cited_fitness) AS float)",
    ),
    Field::condition(
        "citation_count",
        "Citation Count (per cited_eid)",
        FieldType::Number,
        "CAST(COUNT(pp.cited_eid) AS float)",
    ),
    Field::post_aggregate("citation_count_bin_raw", "Citation Count Bin (raw)", FieldType::Number),
    Field::post_aggregate("fitness_bin_raw", "Fitness Bin (raw)", FieldType::Number),
    Field::post_aggregate(
        "citation_count_percentile_decile",
        "Citation Count Percentile (decile)",
        FieldType::Number,
    ),
    Field::post_aggregate("fitness_percentile_decile", "Fitness Percentile (decile)", FieldType::Number),
];

/// Read-only view over the field table
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    fields: &'static [Field],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The citation dataset catalog
    pub fn builtin() -> Self {
        Self { fields: &FIELDS }
    }

    /// All fields in declaration order
    pub fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// Get a field by name
    pub fn get(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get a field by name, failing on names the catalog does not know
    pub fn lookup(&self, name: &str) -> Result<&'static Field, CompileError> {
        self.get(name)
            .ok_or_else(|| CompileError::UnknownField(name.to_string()))
    }

    pub fn is_numeric(&self, name: &str) -> Result<bool, CompileError> {
        Ok(self.lookup(name)?.is_numeric())
    }

    pub fn is_date(&self, name: &str) -> Result<bool, CompileError> {
        Ok(self.lookup(name)?.is_date())
    }

    pub fn stage_of(&self, name: &str) -> Result<Stage, CompileError> {
        Ok(self.lookup(name)?.stage)
    }

    /// Allow-list of one stage: the fields whose filters render there
    pub fn fields_in(&self, stage: Stage) -> Vec<&'static Field> {
        self.fields.iter().filter(|f| f.stage == stage).collect()
    }

    /// Fields usable as x-axis or series grouping
    pub fn axis_fields(&self) -> Vec<&'static Field> {
        self.fields.iter().filter(|f| f.axis).collect()
    }

    /// Fields usable as a non-COUNT measure
    pub fn numeric_fields(&self) -> Vec<&'static Field> {
        self.fields.iter().filter(|f| f.axis && f.is_numeric()).collect()
    }

    /// Per-pair columns that identify one cited article; both the
    /// `condition` and `aggregation` CTEs group on these.
    pub fn article_keys(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.axis && f.stage == Stage::Raw)
            .map(|f| f.name)
            .collect()
    }
}

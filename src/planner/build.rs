//! Plan building logic

use crate::catalog::{Aggregation, Catalog, Stage};
use crate::error::CompileError;
use crate::filter::StageFilters;
use crate::plan::{Declaration, QueryPlan, Relation, Select, SelectItem};
use crate::resolver::{Measure, ResolvedChart};
use super::scaffold::{
    aggregation_cte, base_cte, category_cte, condition_cte, fitness_cte, per_pair_cte,
    percentiles_cte, ARTICLE_COUNT_ALIAS,
};

/// Alias of the y column for aggregated measures
pub const MEASURE_ALIAS: &str = "y_value";

/// Trailing marker on the MEDIAN fallback; the target dialect has no
/// grouped median
pub const MEDIAN_MARKER: &str = "/* MEDIAN approximated by AVG */";

const FITNESS_BIN_VAR: &str = "fitness_bin_size";
const CITATION_COUNT_BIN_VAR: &str = "citation_count_bin_sz";

/// Build the full statement for a resolved chart and its stage filters
pub fn plan_query(
    chart: &ResolvedChart,
    filters: &StageFilters,
    catalog: &Catalog,
) -> Result<QueryPlan, CompileError> {
    let fitness_width = Declaration::float(FITNESS_BIN_VAR, chart.bins.fitness);
    let citation_width = Declaration::float(CITATION_COUNT_BIN_VAR, chart.bins.citation_count);

    let fitness = catalog.lookup("fitness")?;
    let citation_count = catalog.lookup("citation_count")?;

    let ctes = vec![
        base_cte(),
        category_cte(),
        fitness_cte(),
        per_pair_cte(),
        condition_cte(
            catalog,
            filters.clause(Stage::Raw),
            filters.clause(Stage::GroupCondition),
        ),
        percentiles_cte(catalog),
        aggregation_cte(
            catalog,
            &[(fitness, &fitness_width), (citation_count, &citation_width)],
        ),
    ];

    let body = final_select(chart, filters);

    Ok(QueryPlan {
        declarations: vec![fitness_width, citation_width],
        ctes,
        body,
    })
}

fn final_select(chart: &ResolvedChart, filters: &StageFilters) -> Select {
    let groups = chart.group_names();

    let mut select = Select::new(Relation::new("aggregation"))
        .items(groups.iter().map(|name| SelectItem::column(*name)))
        .item(measure_item(&chart.measure))
        .group_by(groups)
        .order_by(chart.x.name, chart.direction);

    if let Some(post) = filters.clause(Stage::PostAggregate) {
        select = select.filter(post);
    }
    select
}

fn measure_item(measure: &Measure) -> SelectItem {
    match measure {
        Measure::RowCount => SelectItem::aliased("COUNT(*)", ARTICLE_COUNT_ALIAS),
        Measure::Aggregate {
            aggregation: Aggregation::Median,
            field,
        } => {
            tracing::warn!(field = field.name, "MEDIAN is not supported, approximating with AVG");
            SelectItem::aliased(format!("AVG({}) {}", field.name, MEDIAN_MARKER), MEASURE_ALIAS)
        }
        Measure::Aggregate { aggregation, field } => SelectItem::aliased(
            format!("{}({})", aggregation.as_sql(), field.name),
            MEASURE_ALIAS,
        ),
    }
}

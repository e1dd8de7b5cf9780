//! Fixed CTEs of the citation pipeline
//!
//! `base` pairs every cited paper with every paper citing it, `cat` and
//! `fit` collapse the per-article lookups, and `per_pair` joins them on.
//! `condition`, `with_percentiles` and `aggregation` depend on the catalog
//! and the chart, and take the stage filters.

use crate::catalog::{Catalog, Field, Stage};
use crate::plan::{Cte, Declaration, JoinType, Relation, Select, SelectItem};

const RELATIONSHIP_TABLE: &str = "scopus.dbo.[relationship]";
const PAPER_TABLE: &str = "scopus.dbo.[paper]";
const CITATION_TABLE: &str = "scopus.dbo.[citation]";
const CATEGORY_TABLE: &str = "category.dbo.[article]";
const FITNESS_TABLE: &str = "fitness.dbo.[article]";

/// Columns the percentile ranks are partitioned by
const PERCENTILE_PARTITION: [&str; 2] = ["cited_pub_year", "cited_journal"];

/// Per-article row count produced by `aggregation`
pub const ARTICLE_COUNT_ALIAS: &str = "n_articles";

/// Bibliographic columns of one side of a citation
fn paper_columns(alias: &str, prefix: &str) -> Vec<SelectItem> {
    let cover_date = format!("{}.[prism:coverDate]", alias);
    vec![
        SelectItem::aliased(format!("{}.paper_id", alias), format!("{}_id", prefix)),
        SelectItem::aliased(format!("{}.eid", alias), format!("{}_eid", prefix)),
        SelectItem::aliased(format!("{}.[prism:doi]", alias), format!("{}_doi", prefix)),
        SelectItem::aliased(format!("{}.[dc:title]", alias), format!("{}_title", prefix)),
        SelectItem::aliased(format!("{}.[prism:publicationName]", alias), format!("{}_journal", prefix)),
        SelectItem::aliased(format!("CAST({} AS date)", cover_date), format!("{}_pub_date", prefix)),
        SelectItem::aliased(format!("YEAR({})", cover_date), format!("{}_pub_year", prefix)),
        SelectItem::aliased(format!("MONTH({})", cover_date), format!("{}_pub_month", prefix)),
        SelectItem::aliased(format!("DAY({})", cover_date), format!("{}_pub_day", prefix)),
    ]
}

pub fn base_cte() -> Cte {
    let select = Select::new(Relation::new(RELATIONSHIP_TABLE).with_alias("r"))
        .items(paper_columns("p", "cited"))
        .items(paper_columns("c", "citing"))
        .item(SelectItem::aliased(
            "CAST(DATEDIFF(DAY, p.[prism:coverDate], c.[prism:coverDate]) AS float)",
            "citation_time_days",
        ))
        .join(JoinType::Inner, Relation::new(PAPER_TABLE).with_alias("p"), "p.paper_id = r.paper_id_1")
        .join(JoinType::Inner, Relation::new(CITATION_TABLE).with_alias("c"), "c.paper_id = r.paper_id_2")
        .filter("r.[relationship] = 'citing'")
        .filter("p.[prism:coverDate] IS NOT NULL")
        .filter("c.[prism:coverDate] IS NOT NULL");
    Cte::new("base", select)
}

pub fn category_cte() -> Cte {
    let select = Select::new(Relation::new(CATEGORY_TABLE))
        .item(SelectItem::column("target_eid"))
        .item(SelectItem::aliased("MAX(category)", "category"))
        .item(SelectItem::aliased("MAX(category_raw)", "category_raw"))
        .group_by(["target_eid"]);
    Cte::new("cat", select)
}

pub fn fitness_cte() -> Cte {
    let select = Select::new(Relation::new(FITNESS_TABLE))
        .item(SelectItem::column("target_eid"))
        .item(SelectItem::aliased("MAX(CAST(fitness AS float))", "fitness"))
        .group_by(["target_eid"]);
    Cte::new("fit", select)
}

pub fn per_pair_cte() -> Cte {
    let select = Select::new(Relation::new("base").with_alias("b"))
        .item(SelectItem::column("b.*"))
        .item(SelectItem::aliased("ca.category", "cited_category"))
        .item(SelectItem::aliased("ca.category_raw", "cited_category_raw"))
        .item(SelectItem::aliased("f.fitness", "cited_fitness"))
        .join(JoinType::Left, Relation::new("cat").with_alias("ca"), "ca.target_eid = b.cited_eid")
        .join(JoinType::Left, Relation::new("fit").with_alias("f"), "f.target_eid = b.cited_eid");
    Cte::new("per_pair", select)
}

/// One row per cited article, filtered by the raw-stage expression in WHERE
/// and the group-condition expression in HAVING
pub fn condition_cte(catalog: &Catalog, raw: Option<&str>, having: Option<&str>) -> Cte {
    let keys: Vec<String> = catalog
        .article_keys()
        .iter()
        .map(|key| format!("pp.{}", key))
        .collect();

    let metrics = catalog
        .fields_in(Stage::GroupCondition)
        .into_iter()
        .map(|field| SelectItem::aliased(field.reference(), field.name));

    let mut select = Select::new(Relation::new("per_pair").with_alias("pp"))
        .items(keys.iter().map(SelectItem::column))
        .items(metrics)
        .group_by(keys.clone())
        .having(having.map(str::to_string));
    if let Some(raw) = raw {
        select = select.filter(raw);
    }
    Cte::new("condition", select)
}

/// Percentile rank of each per-article metric within its year and journal
pub fn percentiles_cte(catalog: &Catalog) -> Cte {
    let partition = PERCENTILE_PARTITION
        .iter()
        .map(|col| format!("c.{}", col))
        .collect::<Vec<_>>()
        .join(", ");

    let ranks = catalog
        .fields_in(Stage::GroupCondition)
        .into_iter()
        .map(|field| {
            SelectItem::aliased(
                format!(
                    "PERCENT_RANK() OVER (PARTITION BY {} ORDER BY c.{})",
                    partition, field.name
                ),
                rank_column(field),
            )
        });

    let select = Select::new(Relation::new("condition").with_alias("c"))
        .item(SelectItem::column("c.*"))
        .items(ranks);
    Cte::new("with_percentiles", select)
}

/// Averages, percentiles, bins and deciles per article.
///
/// `bins` pairs each binned metric with the declared width variable; a
/// metric's bin index is `FLOOR(AVG(metric) / @width)` and its decile is
/// `FLOOR(100 * AVG(rank) / 10)`.
pub fn aggregation_cte(catalog: &Catalog, bins: &[(&Field, &Declaration)]) -> Cte {
    let keys = catalog.article_keys();
    let metrics = catalog.fields_in(Stage::GroupCondition);

    let averages = metrics
        .iter()
        .map(|m| SelectItem::aliased(format!("ROUND(AVG({}), 2)", m.name), m.name));
    let percentiles = metrics.iter().map(|m| {
        SelectItem::aliased(
            format!("CAST(ROUND(100.0 * AVG({}), 2) AS decimal(5,2))", rank_column(m)),
            format!("{}_percentile", m.name),
        )
    });
    let bin_indexes = bins.iter().map(|(m, width)| {
        SelectItem::aliased(
            format!("CAST(FLOOR(AVG({}) / {}) AS int)", m.name, width.variable()),
            format!("{}_bin_raw", m.name),
        )
    });
    let deciles = metrics.iter().map(|m| {
        SelectItem::aliased(
            format!("CAST(FLOOR((100.0 * AVG({})) / 10.0) AS int)", rank_column(m)),
            format!("{}_percentile_decile", m.name),
        )
    });

    let select = Select::new(Relation::new("with_percentiles"))
        .items(keys.iter().map(|key| SelectItem::column(*key)))
        .item(SelectItem::aliased("COUNT(*)", ARTICLE_COUNT_ALIAS))
        .items(averages)
        .items(percentiles)
        .items(bin_indexes)
        .items(deciles)
        .group_by(keys);
    Cte::new("aggregation", select)
}

fn rank_column(field: &Field) -> String {
    format!("{}_pr", field.name)
}

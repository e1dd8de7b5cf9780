//! Integration tests for the full compile pipeline
//!
//! Request fixture → SQL text, checked against the fixed CTE template.

mod common;

use clearcard_sql::{compile, compile_json, compile_request, ChartConfig, Rule, RuleGroup};
use common::{cte_body, final_select, init_tracing, load_fixture, read_fixture};
use serde_json::json;

#[test]
fn test_year_range_by_journal() {
    init_tracing();
    let request = load_fixture("year_range.json");
    let sql = compile_request(&request).expect("compile should succeed");

    assert!(sql.starts_with(
        "DECLARE @fitness_bin_size float = 10;\nDECLARE @citation_count_bin_sz float = 1;\n\nWITH base AS ("
    ));

    let condition = cte_body(&sql, "condition");
    assert!(condition.contains("  WHERE pp.cited_pub_year BETWEEN 2008 AND 2018\n"));
    assert!(!condition.contains("HAVING"));

    assert_eq!(
        final_select(&sql),
        "SELECT\n  cited_pub_year,\n  cited_journal,\n  COUNT(*) AS n_articles\n\
         FROM aggregation\n\
         GROUP BY cited_pub_year, cited_journal\n\
         ORDER BY cited_pub_year ASC;"
    );
}

#[test]
fn test_cte_chain_is_complete() {
    init_tracing();
    let sql = compile(&RuleGroup::default(), &ChartConfig::default()).unwrap();
    let mut last = 0;
    for name in ["base", "cat", "fit", "per_pair", "condition", "with_percentiles", "aggregation"] {
        let at = sql
            .find(&format!("{} AS (\n", name))
            .unwrap_or_else(|| panic!("missing CTE {}", name));
        assert!(at >= last, "CTE {} out of order", name);
        last = at;
    }
    assert!(sql.ends_with(';'));
    assert_eq!(sql.matches(';').count(), 3);
}

#[test]
fn test_fixed_pipeline_stages() {
    let sql = compile(&RuleGroup::default(), &ChartConfig::default()).unwrap();

    let base = cte_body(&sql, "base");
    assert!(base.contains("  FROM scopus.dbo.[relationship] r\n"));
    assert!(base.contains("  JOIN scopus.dbo.[paper] p ON p.paper_id = r.paper_id_1\n"));
    assert!(base.contains("  JOIN scopus.dbo.[citation] c ON c.paper_id = r.paper_id_2\n"));
    assert!(base.contains("  WHERE r.[relationship] = 'citing'\n"));

    let per_pair = cte_body(&sql, "per_pair");
    assert!(per_pair.contains("LEFT JOIN cat ca ON ca.target_eid = b.cited_eid"));
    assert!(per_pair.contains("LEFT JOIN fit f ON f.target_eid = b.cited_eid"));

    let percentiles = cte_body(&sql, "with_percentiles");
    assert!(percentiles.contains(
        "PERCENT_RANK() OVER (PARTITION BY c.cited_pub_year, c.cited_journal ORDER BY c.fitness) AS fitness_pr"
    ));

    let aggregation = cte_body(&sql, "aggregation");
    assert!(aggregation.contains("CAST(FLOOR(AVG(fitness) / @fitness_bin_size) AS int) AS fitness_bin_raw"));
    assert!(aggregation.contains(
        "CAST(FLOOR(AVG(citation_count) / @citation_count_bin_sz) AS int) AS citation_count_bin_raw"
    ));
    assert!(aggregation.contains(
        "CAST(FLOOR((100.0 * AVG(fitness_pr)) / 10.0) AS int) AS fitness_percentile_decile"
    ));
}

#[test]
fn test_empty_tree_adds_no_filters() {
    let sql = compile(&RuleGroup::default(), &ChartConfig::default()).unwrap();
    let condition = cte_body(&sql, "condition");
    assert!(!condition.contains("WHERE"));
    assert!(!condition.contains("HAVING"));
    assert!(!final_select(&sql).contains("WHERE"));
    assert!(!sql.contains("1=1"));
}

#[test]
fn test_compile_is_deterministic() {
    let json = read_fixture("mixed_stages.json");
    let first = compile_json(&json).unwrap();
    let second = compile_json(&json).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_grouping_is_deduplicated() {
    let chart = ChartConfig {
        x: "cited_journal".into(),
        group_by: vec!["cited_category".into(), "cited_journal".into(), "cited_category".into()],
        ..ChartConfig::default()
    };
    let sql = compile(&RuleGroup::default(), &chart).unwrap();
    assert!(final_select(&sql).contains("GROUP BY cited_journal, cited_category\n"));
}

#[test]
fn test_median_is_marked_as_approximation() {
    init_tracing();
    let sql = compile_request(&load_fixture("median_measure.json")).unwrap();
    assert_eq!(
        final_select(&sql),
        "SELECT\n  cited_pub_month,\n  AVG(fitness) /* MEDIAN approximated by AVG */ AS y_value\n\
         FROM aggregation\n\
         GROUP BY cited_pub_month\n\
         ORDER BY cited_pub_month ASC;"
    );
}

#[test]
fn test_is_null_ignores_stray_value() {
    let tree = RuleGroup::and(vec![Rule::new("cited_doi", "isNull", json!("leftover")).into()]);
    let sql = compile(&tree, &ChartConfig::default()).unwrap();
    assert!(cte_body(&sql, "condition").contains("WHERE pp.cited_doi IS NULL\n"));
    assert!(!sql.contains("leftover"));
}

#[test]
fn test_ends_with_has_no_wildcard() {
    let tree = RuleGroup::and(vec![Rule::new("cited_title", "endsWith", json!("Review")).into()]);
    let sql = compile(&tree, &ChartConfig::default()).unwrap();
    assert!(sql.contains("pp.cited_title LIKE 'Review'"));
}

#[test]
fn test_quotes_are_escaped() {
    let tree = RuleGroup::and(vec![Rule::new("cited_journal", "=", json!("O'Reilly")).into()]);
    let sql = compile(&tree, &ChartConfig::default()).unwrap();
    assert!(sql.contains("pp.cited_journal = 'O''Reilly'"));
}

#[test]
fn test_malformed_rule_is_dropped() {
    init_tracing();
    let tree = RuleGroup::and(vec![
        Rule::new("cited_pub_year", "between", json!("2008")).into(),
        Rule::new("citing_journal", "=", json!("Cell")).into(),
    ]);
    let sql = compile(&tree, &ChartConfig::default()).unwrap();
    let condition = cte_body(&sql, "condition");
    assert!(condition.contains("WHERE pp.citing_journal = 'Cell'\n"));
    assert!(!condition.contains("BETWEEN"));
}

//! Shared test utilities for integration tests

#![allow(dead_code)]

use clearcard_sql::{parser, CompileRequest};

/// Install a fmt subscriber that writes through the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Read a fixture from the tests/test_data directory
pub fn read_fixture(name: &str) -> String {
    let path = format!("tests/test_data/{}", name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test data {}: {}", name, e))
}

/// Load a request envelope fixture
pub fn load_fixture(name: &str) -> CompileRequest {
    parser::parse_request(&read_fixture(name))
        .unwrap_or_else(|e| panic!("Failed to parse test data {}: {}", name, e))
}

/// The body of the named CTE, up to its closing parenthesis
pub fn cte_body<'a>(sql: &'a str, name: &str) -> &'a str {
    let open = format!("{} AS (\n", name);
    let start = sql
        .find(&open)
        .unwrap_or_else(|| panic!("CTE {} not found", name))
        + open.len();
    let end = sql[start..]
        .find("\n)")
        .unwrap_or_else(|| panic!("CTE {} not closed", name));
    &sql[start..start + end]
}

/// The final select, after the last CTE
pub fn final_select(sql: &str) -> &str {
    let start = sql.rfind("\n)\n\n").expect("no CTE chain") + 4;
    &sql[start..]
}

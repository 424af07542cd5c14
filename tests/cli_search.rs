mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

use common::{leica_dataset, write_workbook, Cell};

#[test]
fn cli_search_prints_ranked_pipe_joined_rows() {
    let (_dir, dataset) = leica_dataset();

    let mut cmd = cargo_bin_cmd!("tocsearch");
    cmd.args(["search", "leica", "--no-server", "--dataset"])
        .arg(&dataset);

    let assert = cmd.assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8");

    assert_eq!(output, "Found 1 result\n1. 125 | Die Leica M3\n");
}

#[test]
fn cli_search_ignores_case_and_diacritics() {
    let dir = tempdir().expect("tempdir");
    let dataset = dir.path().join("index.xlsx");
    write_workbook(
        &dataset,
        &["Ausgabe", "Titel"],
        &[
            vec![Cell::Number(140.0), Cell::Text("Café Leica")],
            vec![Cell::Number(141.0), Cell::Text("Straße der Kameras")],
        ],
    );

    for query in ["café", "CAFE", "cafe"] {
        let mut cmd = cargo_bin_cmd!("tocsearch");
        cmd.args(["search", query, "--no-server", "--dataset"])
            .arg(&dataset);
        cmd.assert()
            .success()
            .stdout("Found 1 result\n1. 140 | Café Leica\n");
    }

    let mut cmd = cargo_bin_cmd!("tocsearch");
    cmd.args(["search", "strasse", "--no-server", "--dataset"])
        .arg(&dataset);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1. 141 | Straße der Kameras"));
}

#[test]
fn cli_search_reports_no_results() {
    let (_dir, dataset) = leica_dataset();

    let mut cmd = cargo_bin_cmd!("tocsearch");
    cmd.args(["search", "xyz", "--no-server", "--dataset"])
        .arg(&dataset);

    cmd.assert().success().stdout("No results found.\n");
}

#[test]
fn cli_search_without_query_prints_nothing() {
    let (_dir, dataset) = leica_dataset();

    let mut cmd = cargo_bin_cmd!("tocsearch");
    cmd.args(["search", "--no-server", "--dataset"]).arg(&dataset);

    cmd.assert().success().stdout("");
}

#[test]
fn cli_search_missing_dataset_fails_with_load_error() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("missing.xlsx");

    let mut cmd = cargo_bin_cmd!("tocsearch");
    cmd.args(["search", "leica", "--no-server", "--dataset"])
        .arg(&missing);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load data"));
}

#[test]
fn cli_search_json_output_has_schema_version_and_rows() {
    let (_dir, dataset) = leica_dataset();

    let mut cmd = cargo_bin_cmd!("tocsearch");
    cmd.args(["search", "Retina", "--no-server", "--format", "json", "--dataset"])
        .arg(&dataset);

    let assert = cmd.assert().success();
    let value: Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid json output");

    assert_eq!(value["version"], "1.0.0");
    assert_eq!(value["query"], "Retina");
    assert_eq!(value["columns"], serde_json::json!(["Ausgabe", "Titel"]));
    assert_eq!(value["summary"]["total_results"], 1);
    assert_eq!(value["rows"][0]["rank"], 1);
    assert_eq!(value["rows"][0]["row"], 1);
    assert_eq!(
        value["rows"][0]["values"],
        serde_json::json!(["126", "Kodak Retina"])
    );
}

#[test]
fn cli_search_table_output_has_header() {
    let (_dir, dataset) = leica_dataset();

    let mut cmd = cargo_bin_cmd!("tocsearch");
    cmd.args(["search", "leica", "--no-server", "--format", "table", "--dataset"])
        .arg(&dataset);

    let assert = cmd.assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8");
    let lines: Vec<Vec<&str>> = output
        .lines()
        .map(|line| line.split_whitespace().collect())
        .collect();

    assert_eq!(lines[0], vec!["#", "Ausgabe", "Titel"]);
    assert_eq!(lines[1], vec!["1", "125", "Die", "Leica", "M3"]);
}

#[test]
fn cli_search_caps_results_at_one_hundred() {
    let dir = tempdir().expect("tempdir");
    let dataset = dir.path().join("big.xlsx");
    let titles: Vec<String> = (0..150).map(|i| format!("Artikel {i}")).collect();
    let rows: Vec<Vec<Cell<'_>>> = titles
        .iter()
        .map(|title| vec![Cell::Text(title.as_str())])
        .collect();
    write_workbook(&dataset, &["Titel"], &rows);

    let mut cmd = cargo_bin_cmd!("tocsearch");
    cmd.args(["search", "a", "--no-server", "--format", "json", "--dataset"])
        .arg(&dataset);

    let assert = cmd.assert().success();
    let value: Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid json output");

    let rows = value["rows"].as_array().expect("rows array");
    assert_eq!(rows.len(), 100);
    assert_eq!(rows[0]["values"][0], "Artikel 0");
    assert_eq!(rows[99]["values"][0], "Artikel 99");
    assert_eq!(rows[99]["rank"], 100);
}

#[test]
fn cli_dataset_can_come_from_environment() {
    let (_dir, dataset) = leica_dataset();

    let mut cmd = cargo_bin_cmd!("tocsearch");
    cmd.env("TOCSEARCH_DATASET", &dataset);
    cmd.args(["search", "kodak", "--no-server"]);

    cmd.assert()
        .success()
        .stdout("Found 1 result\n1. 126 | Kodak Retina\n");
}

#[test]
fn cli_schema_version_flag_prints_version() {
    let mut cmd = cargo_bin_cmd!("tocsearch");
    cmd.arg("--schema-version");

    cmd.assert()
        .success()
        .stdout("Search result JSON schema version: 1.0.0\n");
}

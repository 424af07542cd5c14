mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

use common::{write_workbook, Cell};

#[test]
fn cli_search_uses_project_config_for_dataset_and_format() {
    let tmp = tempdir().expect("tempdir");
    let project = tmp.path().join("project");
    let data_dir = project.join("data");
    let nested = project.join("nested").join("deeper");
    fs::create_dir_all(&data_dir).expect("create data directory");
    fs::create_dir_all(&nested).expect("create nested directory");
    fs::create_dir_all(project.join(".tocsearch")).expect("create .tocsearch directory");

    write_workbook(
        &data_dir.join("index.xlsx"),
        &["Ausgabe", "Titel"],
        &[vec![Cell::Number(130.0), Cell::Text("Zeiss Ikon Contax")]],
    );

    let config_toml = r#"
[dataset]
path = "data/index.xlsx"

[search]
format = "json"
no_server = true
"#;
    fs::write(project.join(".tocsearch").join("config.toml"), config_toml)
        .expect("write config.toml");

    // Run from a nested directory: the config is found by walking up
    // and the dataset path is resolved against the project root.
    let mut cmd = cargo_bin_cmd!("tocsearch");
    cmd.current_dir(&nested);
    cmd.env_remove("TOCSEARCH_DATASET");
    cmd.args(["search", "contax"]);

    let assert = cmd.assert().success();
    let value: Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid json output");

    assert_eq!(value["query"], "contax");
    assert_eq!(
        value["rows"][0]["values"],
        serde_json::json!(["130", "Zeiss Ikon Contax"])
    );
}

#[test]
fn cli_search_config_can_disable_server_even_with_env() {
    let tmp = tempdir().expect("tempdir");
    let project = tmp.path();
    fs::create_dir_all(project.join(".tocsearch")).expect("create .tocsearch directory");

    write_workbook(
        &project.join("photo_antiquaria_index.xlsx"),
        &["Ausgabe", "Titel"],
        &[vec![Cell::Number(125.0), Cell::Text("Die Leica M3")]],
    );

    let config_toml = r#"
[search]
no_server = true
"#;
    fs::write(project.join(".tocsearch").join("config.toml"), config_toml)
        .expect("write config.toml");

    // No dataset configured anywhere: the default filename in the
    // working directory is used.
    let mut cmd = cargo_bin_cmd!("tocsearch");
    cmd.current_dir(project);
    cmd.env_remove("TOCSEARCH_DATASET");
    cmd.env("TOCSEARCH_SERVER_URL", "http://127.0.0.1:9");
    cmd.args(["search", "leica"]);

    cmd.assert()
        .success()
        .stdout("Found 1 result\n1. 125 | Die Leica M3\n");
}

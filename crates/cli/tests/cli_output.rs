use serde_json::Value;
use std::{
    fs,
    process::{Command, Output},
};

fn hexgrid(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hexgrid"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> Vec<Value> {
    assert!(
        output.status.success(),
        "hexgrid failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_logs_stay_out_of_stdout() {
    // Even at the noisiest level, stdout should be nothing but JSON
    let output = hexgrid(&["--log-level", "trace", "--format", "cells"]);
    let cells = stdout_json(&output);
    assert_eq!(cells.len(), 37);
    assert_eq!(cells[0], serde_json::json!({"q": 0, "r": -3}));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Generating grid with config"),
        "missing logs in stderr: {}",
        stderr
    );
}

#[test]
fn test_default_log_level() {
    // Info is on by default, but still goes to stderr
    let output = hexgrid(&["--format", "rows"]);
    let rows = stdout_json(&output);
    assert_eq!(rows.len(), 7);
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Generated grid with 37 cells"));
}

#[test]
fn test_polygons_and_cfg() {
    let polygons = stdout_json(&hexgrid(&["--format", "polygons"]));
    assert_eq!(polygons.len(), 37);
    assert_eq!(polygons[0]["corners"].as_array().map(Vec::len), Some(6));

    let output = hexgrid(&["--log-level", "debug", "--format", "cfg"]);
    assert!(output.status.success());
    let cfg: toml::Value =
        toml::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(cfg["shape"]["type"].as_str(), Some("hexagon"));
    assert_eq!(cfg["shape"]["radius"].as_integer(), Some(3));
}

#[test]
fn test_config_file() {
    let path = std::env::temp_dir()
        .join(format!("hexgrid-cli-test-{}.toml", std::process::id()));
    fs::write(
        &path,
        "[shape]\ntype = \"rectangle\"\nwidth = 4\nheight = 2\n",
    )
    .unwrap();
    let output = hexgrid(&["--config", path.to_str().unwrap()]);
    fs::remove_file(&path).unwrap();
    assert_eq!(stdout_json(&output).len(), 8);
}

#[test]
fn test_error_exit_code() {
    let output = hexgrid(&["--config", "/nonexistent/hexgrid.toml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: "));
}

mod common;

use common::SINGLE_TOWER;
use regex::Regex;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    input: PathBuf,
}

impl TestContext {
    fn new(scenario: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("scenario.in");
        fs::write(&input, scenario).unwrap();
        Self { dir, input }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_coverforge"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn parse_score(output: &Output) -> Option<i64> {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let re = Regex::new(r"Score: (\d+)").unwrap();
    re.captures(&stdout).and_then(|c| c[1].parse().ok())
}

#[test]
fn test_cli_search_execution() {
    let ctx = TestContext::new(SINGLE_TOWER);
    let out = ctx.path("tower.out");
    let history = ctx.path("history.json");

    let output = run(&[
        "search",
        "--debug",
        "-i",
        ctx.input.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "--history",
        history.to_str().unwrap(),
        "-g",
        "10",
        "--seed",
        "1",
    ]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(parse_score(&output), Some(150));

    let solution = fs::read_to_string(&out).expect("solution file written");
    assert_eq!(solution, "1\n0 2 2\n");

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&history).unwrap()).unwrap();
    assert_eq!(json.as_array().map(|a| a.len()), Some(10));
}

#[test]
fn test_cli_default_output_path() {
    let ctx = TestContext::new(SINGLE_TOWER);
    let output = run(&["search", "-i", ctx.input.to_str().unwrap(), "-g", "2"]);

    assert!(output.status.success());
    assert!(ctx.path("scenario.out").exists());
}

#[test]
fn test_cli_validate_scores_solution() {
    let ctx = TestContext::new(SINGLE_TOWER);
    let solution = ctx.path("manual.out");
    fs::write(&solution, "1\n0 4 2\n").unwrap();

    let output = run(&[
        "validate",
        "-i",
        ctx.input.to_str().unwrap(),
        "-s",
        solution.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert_eq!(parse_score(&output), Some(148));
}

#[test]
fn test_cli_config_file_and_override() {
    let ctx = TestContext::new(SINGLE_TOWER);
    let config = ctx.path("search.json");
    let history = ctx.path("history.json");
    fs::write(&config, r#"{ "max_generations": 50, "seed": 8 }"#).unwrap();

    let output = run(&[
        "search",
        "-i",
        ctx.input.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "-g",
        "4",
        "--history",
        history.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&history).unwrap()).unwrap();
    assert_eq!(json.as_array().map(|a| a.len()), Some(4));
}

#[test]
fn test_cli_rejects_scenario_without_antennas() {
    let ctx = TestContext::new("5 5\n1 0 100\n2 2 1 10\n");
    let out = ctx.path("none.out");

    let output = run(&[
        "search",
        "-i",
        ctx.input.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    assert!(!out.exists());
}

#[test]
fn test_cli_malformed_input_fails() {
    let ctx = TestContext::new("5 5\n1 1 100\n2 2 1\n2 5\n");
    let output = run(&["search", "-i", ctx.input.to_str().unwrap()]);
    assert!(!output.status.success());
}

//! End-to-end tests for the `summit` binary.

use assert_cmd::Command;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const HEALTHY_ARGS: [&str; 13] = [
    "calc",
    "--marketing-spend",
    "5000",
    "--sales-spend",
    "3000",
    "--new-customers",
    "40",
    "--arpa",
    "150",
    "--gross-margin",
    "70",
    "--churn",
    "2",
];

/// Run the binary from an empty directory so no stray `.summit.toml` is found.
fn summit(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_summit"));
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_calc_json_output() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(summit(&dir).args(HEALTHY_ARGS).args(["--format", "json"]));

    let json: Value = serde_json::from_str(&stdout).expect("Output is not valid JSON");
    let report = &json["report"];
    assert_eq!(report["valid"], Value::Bool(true));
    assert_eq!(report["is_healthy"], Value::Bool(true));
    assert!((report["ratio"].as_f64().unwrap() - 26.25).abs() < 1e-9);
    assert_eq!(json["rendered"]["ratio"], "26.25x");
    assert_eq!(json["rendered"]["cac"], "$200");
    assert_eq!(json["rendered"]["ltv"], "$5,250");
}

#[test]
fn test_calc_plain_terminal_output() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(summit(&dir).args(HEALTHY_ARGS).arg("--plain"));

    assert!(stdout.contains("26.25x"));
    assert!(stdout.contains("Ratio = LTV / CAC = $5,250 / $200 = 26.25x"));
    assert!(stdout.contains("Target ≥ 3.0"));
}

#[test]
fn test_calc_with_missing_inputs_shows_placeholder() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(
        summit(&dir).args(["calc", "--arpa", "150", "--customers", "abc", "-f", "json"]),
    );

    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["report"]["valid"], Value::Bool(false));
    assert_eq!(json["rendered"]["ratio"], "—");
    assert_eq!(
        json["rendered"]["narrative"],
        "Enter inputs to calculate LTV/CAC ratio"
    );
}

#[test]
fn test_calc_writes_markdown_file() {
    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("reports").join("ltv.md");

    summit(&dir)
        .args(HEALTHY_ARGS)
        .args(["--format", "markdown", "--output"])
        .arg(&report_path)
        .assert()
        .success();

    let markdown = fs::read_to_string(&report_path).unwrap();
    assert!(markdown.starts_with("# LTV/CAC Ratio"));
    assert!(markdown.contains("26.25x"));
}

#[test]
fn test_threshold_preset_changes_target_caption() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(
        summit(&dir)
            .args(HEALTHY_ARGS)
            .args(["--plain", "--threshold-preset", "strict"]),
    );
    assert!(stdout.contains("Target ≥ 4.0"));
}

#[test]
fn test_discovered_config_sets_default_format() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".summit.toml"),
        indoc! {r#"
            [output]
            default_format = "json"
        "#},
    )
    .unwrap();

    let stdout = stdout_of(summit(&dir).args(HEALTHY_ARGS));
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["rendered"]["ratio"], "26.25x");
}

#[test]
fn test_gauge_svg() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(summit(&dir).args(["gauge", "--fraction", "0.2"]));

    assert!(stdout.starts_with("<svg"));
    assert!(stdout.contains(r#"stroke-dasharray="527.788""#));
    assert!(stdout.contains("#e11d48"));
}

#[test]
fn test_gauge_rejects_oversized_stroke() {
    let dir = TempDir::new().unwrap();
    summit(&dir)
        .args(["gauge", "--fraction", "0.5", "--size", "10", "--stroke", "40"])
        .assert()
        .failure();
}

#[test]
fn test_init_creates_config_then_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();

    let stdout = stdout_of(summit(&dir).arg("init"));
    assert!(stdout.contains("Created .summit.toml"));
    let written = fs::read_to_string(dir.path().join(".summit.toml")).unwrap();
    assert!(written.contains("healthy_ratio = 3.0"));

    let output = summit(&dir).arg("init").assert().failure().get_output().clone();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--force"));

    summit(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn test_session_reads_edits_from_stdin() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(summit(&dir).args(["session", "--plain"]).write_stdin(indoc! {"
        marketing=5000
        sales=3000
        customers=40
        arpa=150
        margin=70
        churn=2
        typo=5
        churn=
    "}));

    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[5].starts_with("26.25x"));
    assert!(lines[6].contains("Unknown field"));
    assert!(lines[7].contains("missing: churn_monthly_pct"));
}

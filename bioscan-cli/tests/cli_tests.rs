//! End-to-end tests for the `bioscan` binary.
//!
//! Each test writes its inputs into a temp dir and checks exit codes and stdout.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const HAZELNUT_SPREAD: &str = r#"{
    "status": 1,
    "product": {
        "product_name": "Hazelnut Spread",
        "brands": "Acme",
        "nutriscore_grade": "e",
        "nova_group": 4,
        "nutriments": {
            "sugars_100g": 56.3,
            "carbohydrates_100g": 57.5,
            "fat_100g": 30.9,
            "saturated-fat_100g": 10.6,
            "salt_100g": 0.107,
            "proteins_100g": 6.3
        },
        "additives_tags": ["en:e322", "en:e171", "en:e171", "en:e621"],
        "ingredients_from_palm_oil_n": 1,
        "ingredients_text": "sugar, palm oil, _hazelnuts_ 13%",
        "allergens": "en:milk,en:nuts"
    }
}"#;

const NOT_FOUND: &str = r#"{"status": 0, "status_verbose": "product not found"}"#;

fn bioscan(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bioscan"))
        .current_dir(dir)
        .args(args)
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "error")
        .output()
        .expect("should run bioscan binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn json_stdout(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).expect("should write file");
}

#[test]
fn test_report_text_output() {
    let temp = TempDir::new().expect("should create temp dir");
    write(temp.path(), "spread.json", HAZELNUT_SPREAD);

    let output = bioscan(temp.path(), &["report", "spread.json"]);
    assert_eq!(output.status.code(), Some(0));

    let text = stdout(&output);
    assert!(text.contains("Hazelnut Spread"));
    assert!(text.contains("Titanium Dioxide"));
    assert!(text.contains("Allergens: milk, nuts"));
    assert!(text.contains("Ingredients: sugar, palm oil, hazelnuts 13%"));
}

#[test]
fn test_report_json_output() {
    let temp = TempDir::new().expect("should create temp dir");
    write(temp.path(), "spread.json", HAZELNUT_SPREAD);

    let output = bioscan(temp.path(), &["report", "spread.json", "--output", "json"]);
    assert_eq!(output.status.code(), Some(0));

    let json = json_stdout(&output);
    assert_eq!(json["source"], "spread.json");
    assert_eq!(json["nutri_score_grade"], "E");
    assert_eq!(json["nova_group"], 4);
    assert_eq!(json["contains_palm_oil"], true);
    let risks = json["detected_risks"].as_array().expect("risk array");
    let codes: Vec<_> = risks.iter().map(|r| r["code"].as_str().unwrap()).collect();
    assert_eq!(codes, vec!["e171", "e171", "e621"]);
}

#[test]
fn test_report_fail_on_threshold() {
    let temp = TempDir::new().expect("should create temp dir");
    write(temp.path(), "spread.json", HAZELNUT_SPREAD);

    let output = bioscan(temp.path(), &["report", "spread.json", "--fail-on", "critical"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("2 risk(s) at or above Critical"));
}

#[test]
fn test_report_not_found_envelope() {
    let temp = TempDir::new().expect("should create temp dir");
    write(temp.path(), "missing.json", NOT_FOUND);

    let output = bioscan(temp.path(), &["report", "missing.json"]);
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_report_missing_file_is_io_error() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = bioscan(temp.path(), &["report", "nope.json"]);
    assert_eq!(output.status.code(), Some(10));
}

#[test]
fn test_report_non_utf8_file_is_decode_error() {
    let temp = TempDir::new().expect("should create temp dir");
    fs::write(temp.path().join("binary.json"), [0x7b, 0xff, 0xfe, 0x7d])
        .expect("should write file");

    let output = bioscan(temp.path(), &["report", "binary.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not UTF-8"));
}

#[test]
fn test_report_envelope_without_status_is_not_found() {
    let temp = TempDir::new().expect("should create temp dir");
    write(temp.path(), "cola.json", r#"{"product": {"product_name": "Cola"}}"#);

    let output = bioscan(temp.path(), &["report", "cola.json"]);
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_report_respects_config_policy_and_size() {
    let temp = TempDir::new().expect("should create temp dir");
    write(temp.path(), "spread.json", HAZELNUT_SPREAD);
    write(
        temp.path(),
        "bioscan.toml",
        "[report]\nduplicate_policy = \"collapse\"\nmin_tier = \"high\"\n",
    );

    let output = bioscan(temp.path(), &["report", "spread.json", "--output", "json"]);
    assert_eq!(output.status.code(), Some(0));
    let json = json_stdout(&output);
    assert_eq!(json["detected_risks"].as_array().map(Vec::len), Some(1));

    write(temp.path(), "small.toml", "[lookup]\nmax_record_bytes = 64\n");
    let output = bioscan(temp.path(), &["-c", "small.toml", "report", "spread.json"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_lookup_found_and_not_found() {
    let temp = TempDir::new().expect("should create temp dir");
    let products = temp.path().join("db");
    fs::create_dir(&products).expect("should create product dir");
    write(&products, "3017620422003.json", HAZELNUT_SPREAD);

    let output = bioscan(
        temp.path(),
        &["lookup", "3017620422003", "--product-dir", "db", "--output", "json"],
    );
    assert_eq!(output.status.code(), Some(0));
    let json = json_stdout(&output);
    assert_eq!(json["source"], "3017620422003");
    assert_eq!(json["product_name"], "Hazelnut Spread");

    let output = bioscan(temp.path(), &["lookup", "4000000000000", "--product-dir", "db"]);
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_lookup_rejects_invalid_barcode() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = bioscan(temp.path(), &["lookup", "abc-123"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid barcode"));
}

#[test]
fn test_catalog_json_filtered() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = bioscan(
        temp.path(),
        &["catalog", "--min-tier", "critical", "--output", "json"],
    );
    assert_eq!(output.status.code(), Some(0));

    let json = json_stdout(&output);
    let entries = json["entries"].as_array().expect("entry array");
    assert!(!entries.is_empty());
    assert!(entries.iter().all(|e| e["tier"] == "Critical"));
}

#[test]
fn test_config_validate_valid_and_invalid() {
    let temp = TempDir::new().expect("should create temp dir");
    write(
        temp.path(),
        "good.toml",
        "[general]\nlog_level = \"warn\"\nlog_format = \"pretty\"\n",
    );
    write(temp.path(), "bad.toml", "[report]\nmin_tier = \"severe\"\n");

    let output = bioscan(temp.path(), &["-c", "good.toml", "config", "validate"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("VALID"));

    let output = bioscan(temp.path(), &["-c", "bad.toml", "config", "validate"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("report.min_tier"));
}

#[test]
fn test_config_validate_missing_file() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = bioscan(temp.path(), &["-c", "absent.toml", "config", "validate"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_config_show_section() {
    let temp = TempDir::new().expect("should create temp dir");
    write(temp.path(), "bioscan.toml", "[lookup]\nproduct_dir = \"/srv/db\"\n");

    let output = bioscan(temp.path(), &["config", "show", "--section", "lookup"]);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("[lookup]"));
    assert!(text.contains("/srv/db"));

    let output = bioscan(temp.path(), &["config", "show", "--section", "ebpf"]);
    assert_eq!(output.status.code(), Some(1));
}

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONTENTS: &str = "Test contents";

/// A ts2date command with an isolated config dir and a pinned UTC local zone.
fn ts2date(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ts2date").unwrap();
    cmd.env("TS2DATE_CONFIG_DIR", config_dir.path())
        .env("TZ", "UTC")
        .env_remove("RUST_LOG");
    cmd
}

fn record_line(attributes: &[(&str, &str)]) -> String {
    let attrs: serde_json::Map<String, serde_json::Value> = attributes
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect();
    serde_json::json!({ "attributes": attrs, "content": CONTENTS }).to_string()
}

fn output_records(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn validate_rejects_empty_attribute_list() {
    let dir = tempfile::tempdir().unwrap();
    ts2date(&dir)
        .args(["validate", "--attributes", ""])
        .assert()
        .failure()
        .stdout(predicate::str::contains("cannot be blank"));
}

#[test]
fn validate_accepts_some_attribute_list() {
    let dir = tempfile::tempdir().unwrap();
    ts2date(&dir)
        .args(["validate", "--attributes", "some"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn convert_one_attribute() {
    let dir = tempfile::tempdir().unwrap();
    let assert = ts2date(&dir)
        .args(["convert", "-a", "a.test1"])
        .write_stdin(record_line(&[("a.test1", "/Date(1644364800000)/")]))
        .assert()
        .success();

    let records = output_records(&assert.get_output().stdout);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["attributes"]["a.test1"], "2022-02-09");
    assert_eq!(records[0]["content"], CONTENTS);
}

#[test]
fn convert_two_attributes() {
    let dir = tempfile::tempdir().unwrap();
    let assert = ts2date(&dir)
        .args(["convert", "-a", "a.test1,a.test2"])
        .write_stdin(record_line(&[
            ("a.test1", "/Date(1644364800000)/"),
            ("a.test2", "/Date(379179912000)/"),
        ]))
        .assert()
        .success();

    let records = output_records(&assert.get_output().stdout);
    assert_eq!(records[0]["attributes"]["a.test1"], "2022-02-09");
    assert_eq!(records[0]["attributes"]["a.test2"], "1982-01-06");
    assert_eq!(records[0]["content"], CONTENTS);
}

#[test]
fn convert_leaves_broken_attributes_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let broken = [
        ("a.test1", "/Date(16443648a00000)/"),
        ("a.test2", "/Date(16443648 00000)/"),
        ("a.test3", "/Date(   )/"),
        ("a.test4", "/Date(1644(3648))/"),
    ];

    let assert = ts2date(&dir)
        .args(["convert", "-a", "a.test1,a.test2,a.test3,a.test4"])
        .write_stdin(record_line(&broken))
        .assert()
        .success();

    let records = output_records(&assert.get_output().stdout);
    for (name, value) in broken {
        assert_eq!(records[0]["attributes"][name], value, "{name}");
    }
    assert_eq!(records[0]["content"], CONTENTS);
}

#[test]
fn convert_forwards_records_missing_the_attribute() {
    let dir = tempfile::tempdir().unwrap();
    let input = format!(
        "{}\n{}\n",
        record_line(&[("other", "/Date(0)/")]),
        record_line(&[("a", "/Date(0)/")])
    );

    let assert = ts2date(&dir)
        .args(["convert", "-a", "a"])
        .write_stdin(input)
        .assert()
        .success()
        .stderr(predicate::str::contains("absent and skipped"));

    let records = output_records(&assert.get_output().stdout);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["attributes"]["other"], "/Date(0)/");
    assert_eq!(records[1]["attributes"]["a"], "1970-01-01");
}

#[test]
fn convert_reads_and_writes_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.jsonl");
    let output = dir.path().join("out.jsonl");
    std::fs::write(&input, record_line(&[("d", "/Date(379179912000)/")])).unwrap();

    ts2date(&dir)
        .args(["convert", "-a", "d", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read(&output).unwrap();
    let records = output_records(&written);
    assert_eq!(records[0]["attributes"]["d"], "1982-01-06");
}

#[test]
fn convert_uses_saved_config() {
    let dir = tempfile::tempdir().unwrap();
    ts2date(&dir)
        .args(["config", "attributes-list", "when"])
        .assert()
        .success()
        .stdout(predicate::str::contains("attributes-list set to when"));

    let assert = ts2date(&dir)
        .arg("run")
        .write_stdin(record_line(&[("when", "/Date(1644364800000)/")]))
        .assert()
        .success();

    let records = output_records(&assert.get_output().stdout);
    assert_eq!(records[0]["attributes"]["when"], "2022-02-09");
}

#[test]
fn convert_without_configuration_fails() {
    let dir = tempfile::tempdir().unwrap();
    ts2date(&dir)
        .arg("convert")
        .write_stdin(record_line(&[("a", "/Date(0)/")]))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error:").and(predicate::str::contains("Attributes List")));
}

#[test]
fn convert_config_error_keeps_existing_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.jsonl");
    let output = dir.path().join("out.jsonl");
    std::fs::write(&input, record_line(&[("a", "/Date(0)/")])).unwrap();
    std::fs::write(&output, "precious\n").unwrap();

    ts2date(&dir)
        .arg("convert")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Attributes List"));

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "precious\n");
}

#[test]
fn convert_empty_input_still_creates_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.jsonl");
    let output = dir.path().join("out.jsonl");
    std::fs::write(&input, "").unwrap();

    ts2date(&dir)
        .args(["convert", "-a", "a", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn convert_far_future_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let assert = ts2date(&dir)
        .args(["convert", "-a", "far"])
        .write_stdin(record_line(&[("far", "/Date(9000000000000000)/")]))
        .assert()
        .success();

    let records = output_records(&assert.get_output().stdout);
    assert_eq!(records[0]["attributes"]["far"], "+287168-08-24");
}

#[test]
fn convert_reports_malformed_line() {
    let dir = tempfile::tempdir().unwrap();
    ts2date(&dir)
        .args(["convert", "-a", "a"])
        .write_stdin(format!("{}\n{{oops\n", record_line(&[])))
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn describe_lists_property_and_relationship() {
    let dir = tempfile::tempdir().unwrap();
    ts2date(&dir)
        .arg("describe")
        .assert()
        .success()
        .stdout(predicate::str::contains("Attributes List"))
        .stdout(predicate::str::contains("success"))
        .stdout(predicate::str::contains("timestamp"));
}

#[test]
fn config_rejects_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    ts2date(&dir)
        .args(["config", "zone", "utc"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unknown config key: zone"));
}

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rolldiff::{compute_diff, DiffError, DiffOptions, HashParams, HashTable, Operation};

fn rolldiff() -> Command {
    Command::cargo_bin("rolldiff").unwrap()
}

fn scenario_pair() -> (Vec<u8>, Vec<u8>) {
    let mut old = vec![b'A'; 32];
    old.extend_from_slice(b"BBBB");
    let mut new = vec![b'A'; 32];
    new.extend_from_slice(b"CCCC");
    (old, new)
}

fn text(len: usize) -> Vec<u8> {
    (0..len).map(|i| ((i * 138 + 13) % 251) as u8).collect()
}

#[test]
fn test_library_replace_scenario() {
    let (old, new) = scenario_pair();
    let deltas = compute_diff(&old, &new, &DiffOptions::default()).unwrap();

    let ops: Vec<(Operation, Vec<u8>)> = deltas
        .iter()
        .map(|d| (d.operation, d.literal.clone()))
        .collect();
    assert_eq!(ops, vec![(Operation::Replace, b"CCCC".to_vec())]);
}

#[test]
fn test_library_default_window_when_zero() {
    let (old, new) = scenario_pair();
    let zero = compute_diff(&old, &new, &DiffOptions::new().with_window(0)).unwrap();
    let default = compute_diff(&old, &new, &DiffOptions::default()).unwrap();
    assert_eq!(zero, default);
}

#[test]
fn test_library_custom_params_agree() {
    let old = text(240);
    let mut new = old.clone();
    new.splice(50..50, b"\xFF\xFF\xFF".iter().copied());

    let params = HashParams::new(31, 1_000_000_007).unwrap();
    let options = DiffOptions::new().with_window(6).with_params(params);
    let deltas = compute_diff(&old, &new, &options).unwrap();

    assert_eq!(deltas.len(), 1);
    assert_eq!(deltas.deltas()[0].operation, Operation::Insert);
    assert_eq!(deltas.deltas()[0].literal, b"\xFF\xFF\xFF");
}

#[test]
fn test_library_tables_compare_directly() {
    let old = text(64);
    let params = HashParams::default();
    let a = HashTable::build(&old, 16, params).unwrap();
    let b = HashTable::build(&old, 16, params).unwrap();
    assert!(rolldiff::compare(&a, &b, true).is_empty());
}

#[test]
fn test_library_too_short() {
    let err = compute_diff(b"short", b"also short", &DiffOptions::default()).unwrap_err();
    assert_eq!(err, DiffError::InputTooShort { len: 5, window: 32 });
}

#[test]
fn test_cli_identical_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    let a = temp.child("a.bin");
    let b = temp.child("b.bin");
    a.write_binary(&text(128)).unwrap();
    b.write_binary(&text(128)).unwrap();

    rolldiff()
        .arg(a.path())
        .arg(b.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Files are identical"));
}

#[test]
fn test_cli_reports_replace() {
    let temp = assert_fs::TempDir::new().unwrap();
    let (old, new) = scenario_pair();
    let a = temp.child("original.txt");
    let b = temp.child("updated.txt");
    a.write_binary(&old).unwrap();
    b.write_binary(&new).unwrap();

    rolldiff()
        .arg(a.path())
        .arg(b.path())
        .args(["--window", "32"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Delta for upgrade:"))
        .stdout(predicate::str::contains("replace [1, 5) @32: \"CCCC\""))
        .stdout(predicate::str::contains("Replaces: 1"));
}

#[test]
fn test_cli_json_output() {
    let temp = assert_fs::TempDir::new().unwrap();
    let (old, new) = scenario_pair();
    let a = temp.child("original.txt");
    let b = temp.child("updated.txt");
    a.write_binary(&old).unwrap();
    b.write_binary(&new).unwrap();

    let output = rolldiff()
        .arg(a.path())
        .arg(b.path())
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let deltas = parsed.as_array().unwrap();
    assert_eq!(deltas.len(), 1);
    assert_eq!(deltas[0]["operation"], "replace");
    assert_eq!(deltas[0]["offset"], 32);
    assert_eq!(deltas[0]["literal"], serde_json::json!([67, 67, 67, 67]));
}

#[test]
fn test_cli_no_tail_drops_appended_bytes() {
    let temp = assert_fs::TempDir::new().unwrap();
    let a = temp.child("a.bin");
    let b = temp.child("b.bin");
    a.write_binary(&text(100)).unwrap();
    b.write_binary(&text(130)).unwrap();

    rolldiff()
        .arg(a.path())
        .arg(b.path())
        .args(["-w", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("insert"));

    rolldiff()
        .arg(a.path())
        .arg(b.path())
        .args(["-w", "8", "--no-tail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Files are identical"));
}

#[test]
fn test_cli_input_too_short() {
    let temp = assert_fs::TempDir::new().unwrap();
    let a = temp.child("a.txt");
    let b = temp.child("b.txt");
    a.write_str("tiny").unwrap();
    b.write_str("tiny too").unwrap();

    rolldiff()
        .arg(a.path())
        .arg(b.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too short"));
}

#[test]
fn test_cli_invalid_hash_params() {
    let temp = assert_fs::TempDir::new().unwrap();
    let a = temp.child("a.txt");
    a.write_binary(&text(64)).unwrap();

    rolldiff()
        .arg(a.path())
        .arg(a.path())
        .args(["--base", "10", "--modulus", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hash parameters"));
}

#[test]
fn test_cli_missing_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let a = temp.child("missing.txt");

    rolldiff()
        .arg(a.path())
        .arg(a.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open file"));
}

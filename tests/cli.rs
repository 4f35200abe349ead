use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const PLATFORM: &str = "0x1234567890123456789012345678901234567890";
const SEED: &str = "0x2222222222222222";
const EMPTY_DB: &str = "{\"count\":0,\"data\":[]}";

fn setup(contents: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("votemarkets.json");
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

fn run_tool(db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_votemarket-db"))
        .arg("--db")
        .arg(db)
        .args(args)
        .env_remove("VOTEMARKET_DB_PATH")
        .env_remove("VOTEMARKET_DB_LOG_LEVEL")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_success_prints_sentinel() {
    let (_temp_dir, db) = setup(EMPTY_DB);
    let output = run_tool(&db, &["Curve", PLATFORM, "[10,42161,8453]", SEED]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "0xAA\n");

    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&db).unwrap()).unwrap();
    assert_eq!(written["count"], 3);
    assert_eq!(written["data"][0]["protocol"], "curve");
    assert_eq!(written["data"][2]["chainId"], 8453);
}

#[test]
fn test_wrong_argument_count_prints_usage() {
    let (_temp_dir, db) = setup(EMPTY_DB);
    let output = run_tool(&db, &["curve", PLATFORM, "[10]"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("Usage: votemarket-db"));
    assert!(err.contains("Example:"));
    assert_eq!(fs::read_to_string(&db).unwrap(), EMPTY_DB);
}

#[test]
fn test_invalid_platform_exits_one() {
    let (_temp_dir, db) = setup(EMPTY_DB);
    let output = run_tool(&db, &["curve", "0x123", "[10]", SEED]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("platform must be a valid Ethereum address"));
    assert_eq!(fs::read_to_string(&db).unwrap(), EMPTY_DB);
}

#[test]
fn test_invalid_seed_exits_one() {
    let (_temp_dir, db) = setup(EMPTY_DB);
    let output = run_tool(&db, &["curve", PLATFORM, "[10]", "0xdeadbeef"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("seed must be a valid bytes8"));
    assert_eq!(fs::read_to_string(&db).unwrap(), EMPTY_DB);
}

#[test]
fn test_malformed_chain_ids_exit_one() {
    for chain_ids in ["not-json", "{}"] {
        let (_temp_dir, db) = setup(EMPTY_DB);
        let output = run_tool(&db, &["curve", PLATFORM, chain_ids, SEED]);

        assert_eq!(output.status.code(), Some(1));
        let err = stderr(&output);
        assert!(err.contains("chainIds must be a valid JSON array"));
        assert!(err.contains("Example: \"[10,42161,8453]\""));
        assert_eq!(fs::read_to_string(&db).unwrap(), EMPTY_DB);
    }
}

#[test]
fn test_missing_database_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("absent.json");
    let output = run_tool(&db, &["curve", PLATFORM, "[10]", SEED]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to read database"));
    assert!(!db.exists());
}

#[test]
fn test_dry_run_prints_document() {
    let (_temp_dir, db) = setup(EMPTY_DB);
    let output = run_tool(&db, &["--dry-run", "curve", PLATFORM, "[10]", SEED]);

    assert_eq!(output.status.code(), Some(0));
    let printed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(printed["count"], 1);
    assert_eq!(fs::read_to_string(&db).unwrap(), EMPTY_DB);
}

#[test]
fn test_env_selects_database() {
    let (_temp_dir, db) = setup(EMPTY_DB);
    let output = Command::new(env!("CARGO_BIN_EXE_votemarket-db"))
        .args(["curve", PLATFORM, "[10]", SEED])
        .env("VOTEMARKET_DB_PATH", &db)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(fs::read_to_string(&db).unwrap().contains("\"count\": 1"));
}

#[test]
fn test_protocol_with_leading_hyphen() {
    let (_temp_dir, db) = setup(EMPTY_DB);
    let output = run_tool(&db, &["-Curve", PLATFORM, "[10]", SEED]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "0xAA\n");
    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&db).unwrap()).unwrap();
    assert_eq!(written["data"][0]["protocol"], "-curve");
}

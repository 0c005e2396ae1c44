#![cfg(feature = "cli")]

use anyhow::Result;
use org_roles_etl::config::MISSING_FILENAME_PROMPT;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(dir: &TempDir, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_org-roles-etl"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

#[test]
fn test_no_argument_prints_prompt_and_succeeds() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = run_cli(&temp_dir, &[])?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, MISSING_FILENAME_PROMPT);
    Ok(())
}

#[test]
fn test_success_prints_json_relative_to_working_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("data.csv"),
        "org1,daniel,admin\norg1,daniel,super\n",
    )?;

    let output = run_cli(&temp_dir, &["data.csv"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("[\n  {\n    \"organization\": \"org1\""));
    assert!(stdout.ends_with(']'));
    Ok(())
}

#[test]
fn test_missing_file_writes_nothing_to_stdout() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = run_cli(&temp_dir, &["missing.csv"])?;

    assert_eq!(output.status.code(), Some(4));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
    Ok(())
}

#[test]
fn test_wrong_extension_fails_before_reading() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("data.txt"), "org1,daniel,admin")?;

    let output = run_cli(&temp_dir, &["data.txt"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)?.contains("file must be in CSV format"));
    Ok(())
}

#[test]
fn test_field_count_error_writes_nothing_to_stdout() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("data.csv"),
        "org1,daniel,admin\norg1,daniel",
    )?;

    let output = run_cli(&temp_dir, &["data.csv"])?;

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)?
        .contains("each record must have 3 fields: organization, user, and role"));
    Ok(())
}

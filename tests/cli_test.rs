#![cfg(feature = "cli")]

use anyhow::Result;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CARDS_CSV: &str = "\
id,card_name,issuer
1,Chase Sapphire Reserve,Chase
2,chase sapphire reserve ,Chase
3,Amex Gold Card,Amex
";

fn title_match(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_title-match"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run title-match")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is not UTF-8")
}

#[test]
fn test_compare_similar_exits_zero() {
    let output = title_match(&["compare", "Visa", "visa "]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "similar");
}

#[test]
fn test_compare_different_exits_one() {
    let output = title_match(&["compare", "Visa", "Mastercard"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "different");
}

#[test]
fn test_compare_explain_prints_json() -> Result<()> {
    let output = title_match(&[
        "compare",
        "Platinum Card from American Express",
        "American Express Platinum Card",
        "--explain",
    ]);
    assert_eq!(output.status.code(), Some(0));

    let reason: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(reason["step"], "word_overlap");
    assert_eq!(reason["matched"], true);
    assert_eq!(reason["ratio"], 1.0);
    Ok(())
}

#[test]
fn test_compare_uses_config_thresholds() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("title-match.toml");
    std::fs::write(&config_path, "[thresholds]\nword_overlap_ratio = 0.6\n")?;

    let output = title_match(&[
        "compare",
        "Amex Gold Card",
        "The Amex Gold",
        "--config",
        path_str(&config_path),
    ]);
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

/// --column 與 --report 覆蓋 [dedupe] 設定
#[test]
fn test_dedupe_flags_override_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("cards.csv");
    let output_path = temp_dir.path().join("deduped.csv");
    let config_report = temp_dir.path().join("config-report.json");
    let flag_report = temp_dir.path().join("flag-report.json");
    let config_path = temp_dir.path().join("title-match.toml");

    std::fs::write(&input_path, CARDS_CSV)?;
    std::fs::write(
        &config_path,
        format!(
            "[dedupe]\ncolumn = \"offer_title\"\nreport_path = \"{}\"\n",
            path_str(&config_report).replace('\\', "/")
        ),
    )?;

    let output = title_match(&[
        "dedupe",
        "--config",
        path_str(&config_path),
        "--input",
        path_str(&input_path),
        "--output",
        path_str(&output_path),
        "--column",
        "card_name",
        "--report",
        path_str(&flag_report),
    ]);
    assert_eq!(output.status.code(), Some(0), "{}", String::from_utf8_lossy(&output.stderr));

    assert_eq!(
        std::fs::read_to_string(&output_path)?,
        "id,card_name,issuer\n1,Chase Sapphire Reserve,Chase\n3,Amex Gold Card,Amex\n"
    );
    assert!(flag_report.exists());
    assert!(!config_report.exists());

    let report: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&flag_report)?)?;
    assert_eq!(report["dropped"][0]["duplicate_of"], "Chase Sapphire Reserve");

    // info 級別的摘要預設就會輸出
    assert!(String::from_utf8_lossy(&output.stderr).contains("Deduplicated 3 rows"));
    Ok(())
}

#[test]
fn test_dedupe_uses_config_report_path() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("cards.csv");
    let config_report = temp_dir.path().join("config-report.json");
    let config_path = temp_dir.path().join("title-match.toml");

    std::fs::write(&input_path, CARDS_CSV)?;
    std::fs::write(
        &config_path,
        format!(
            "[dedupe]\ncolumn = \"card_name\"\nreport_path = \"{}\"\n",
            path_str(&config_report).replace('\\', "/")
        ),
    )?;

    let output = title_match(&[
        "dedupe",
        "--config",
        path_str(&config_path),
        "--input",
        path_str(&input_path),
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert!(config_report.exists());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("id,card_name,issuer\n"));
    Ok(())
}

#[test]
fn test_missing_column_exits_with_high_severity() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("cards.csv");
    std::fs::write(&input_path, CARDS_CSV)?;

    let output = title_match(&["dedupe", "--input", path_str(&input_path)]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no 'title' column"));
    Ok(())
}

#[test]
fn test_invalid_config_exits_with_high_severity() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("title-match.toml");
    std::fs::write(&config_path, "[thresholds]\nword_overlap_ratio = 1.5\n")?;

    let output = title_match(&["compare", "a", "b", "--config", path_str(&config_path)]);
    assert_eq!(output.status.code(), Some(3));
    Ok(())
}

#[test]
fn test_missing_input_exits_with_critical_severity() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("missing.csv");

    let output = title_match(&["dedupe", "--input", path_str(&missing)]);
    assert_eq!(output.status.code(), Some(4));
    Ok(())
}

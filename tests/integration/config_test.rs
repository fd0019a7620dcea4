//! Tests for configuration loading and command-line overrides.

use std::io::Cursor;
use std::path::PathBuf;

use breathhold::cli::{generate_plan, Cli, GenerateOutcome, Prompter};
use breathhold::storage::config::{load_config, save_config, AppConfig, DEFAULT_PROGRESS_FILE};
use chrono::NaiveDate;
use clap::Parser;
use tempfile::tempdir;

#[test]
fn test_cli_overrides_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = AppConfig::default();
    config.plan.total_weeks = 10;
    config.report.notes_lines = 3;
    save_config(&config, &path).unwrap();

    let cli = Cli::parse_from([
        "breathhold",
        "--config",
        path.to_str().unwrap(),
        "--output-dir",
        "/tmp/plans",
    ]);
    let loaded = load_config(cli.config.as_deref()).unwrap();
    let ctx = cli.context(&loaded);

    assert_eq!(ctx.total_weeks, 10);
    assert_eq!(ctx.notes_lines, 3);
    assert_eq!(ctx.output_dir, PathBuf::from("/tmp/plans"));
    assert_eq!(ctx.progress_file, PathBuf::from(DEFAULT_PROGRESS_FILE));
}

#[test]
fn test_longer_cycle_from_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    let progress = dir.path().join("progress.json");
    std::fs::write(
        &config_path,
        format!(
            "[plan]\ntotal_weeks = 8\n\n[storage]\nprogress_file = {:?}\n\n[report]\noutput_dir = {:?}\n",
            progress.to_str().unwrap(),
            dir.path().to_str().unwrap()
        ),
    )
    .unwrap();

    let cli = Cli::parse_from(["breathhold", "generate", "--config", config_path.to_str().unwrap()]);
    let ctx = cli.context(&load_config(cli.config.as_deref()).unwrap());

    // Week 8 is only valid because the configured cycle is 8 weeks long
    let script = "2\n15\nn\n3\n1\n8\ny\n";
    let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let outcome = generate_plan(&ctx, &mut prompter, today).unwrap();

    assert!(matches!(outcome, GenerateOutcome::Created { .. }));
    let text = std::fs::read_to_string(
        dir.path()
            .join("adaptive_breath_hold_week8_max2m15s_20261016.txt"),
    )
    .unwrap();
    assert!(text.contains("Week 8/8"));
    assert!(progress.exists());
}

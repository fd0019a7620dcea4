//! End-to-end tests for generating plans and recording progress.

use std::io::Cursor;
use std::path::Path;

use breathhold::athlete::TrainingGoal;
use breathhold::cli::{generate_plan, update_max, Context, GenerateOutcome, Prompter};
use breathhold::metrics::ProgressTrend;
use breathhold::report::document::PAGE_BREAK;
use breathhold::storage::ProgressStore;
use chrono::NaiveDate;
use tempfile::tempdir;

fn context(dir: &Path) -> Context {
    Context {
        progress_file: dir.join("data").join("progress.json"),
        output_dir: dir.join("plans"),
        total_weeks: 6,
        notes_lines: 4,
    }
}

fn scripted(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

#[test]
fn test_first_plan_writes_document_and_history() {
    let dir = tempdir().unwrap();
    let ctx = context(dir.path());

    // 2:00 max, no previous, beginner, balanced, week 1
    let mut prompter = scripted("2\n0\nn\n1\n3\n1\ny\n");
    let outcome = generate_plan(&ctx, &mut prompter, today()).unwrap();

    let GenerateOutcome::Created { document, progress } = outcome else {
        panic!("plan was not created");
    };

    let text = std::fs::read_to_string(&document).unwrap();
    assert_eq!(text.matches(PAGE_BREAK).count(), 7);
    assert!(text.contains("Adaptive Breath-Hold Training - Week 1/6"));
    assert!(text.contains("Page 8 of 8"));

    let record = ProgressStore::new(&progress).load_current().unwrap().unwrap();
    assert_eq!(record.max_hold, 120);
    assert_eq!(record.week, 1);
    assert_eq!(record.goal, TrainingGoal::Balanced);

    let output = String::from_utf8(prompter.into_output()).unwrap();
    assert!(output.contains("Adaptive training plan created:"));
}

#[test]
fn test_second_plan_reuses_stored_baseline() {
    let dir = tempdir().unwrap();
    let ctx = context(dir.path());

    generate_plan(&ctx, &mut scripted("2\n0\nn\n1\n3\n1\ny\n"), today()).unwrap();

    // Accept the stored 2:00 as baseline, then enter 2:30 for week 2
    let mut prompter = scripted("y\n2\n30\nn\n1\n3\n2\ny\n");
    generate_plan(&ctx, &mut prompter, today()).unwrap();

    let output = String::from_utf8(prompter.into_output()).unwrap();
    assert!(output.contains("Last recorded max: 2:00"));

    let log = ProgressStore::new(&ctx.progress_file).load().unwrap();
    assert_eq!(log.training_history.len(), 2);
    let current = log.current.unwrap();
    assert_eq!(current.week, 2);
    assert_eq!(current.max_hold, 150);
    // 25% progress earns the aggressive multiplier: 150 * 0.40 * 1.1
    assert_eq!(current.training_zones.co2_base, 66);

    let plan = ctx
        .output_dir
        .join("adaptive_breath_hold_week2_max2m30s_20261016.txt");
    let text = std::fs::read_to_string(plan).unwrap();
    assert!(text.contains("Progress: +0:30"));
}

#[test]
fn test_cancelled_plan_leaves_nothing_behind() {
    let dir = tempdir().unwrap();
    let ctx = context(dir.path());

    let outcome = generate_plan(&ctx, &mut scripted("1\n45\nn\n2\n2\n3\nno\n"), today()).unwrap();

    assert_eq!(outcome, GenerateOutcome::Cancelled);
    assert!(!ctx.output_dir.exists());
    assert!(!ctx.progress_file.exists());
}

#[test]
fn test_update_max_after_plan() {
    let dir = tempdir().unwrap();
    let ctx = context(dir.path());
    generate_plan(&ctx, &mut scripted("3\n0\nn\n2\n1\n1\ny\n"), today()).unwrap();

    let update = update_max(&ctx, &mut scripted("3\n6\n")).unwrap().unwrap();

    assert_eq!(update.old_max, 180);
    assert_eq!(update.new_max, 186);
    assert_eq!(update.improvement_seconds, 6);
    assert_eq!(update.trend, ProgressTrend::Steady);

    let log = ProgressStore::new(&ctx.progress_file).load().unwrap();
    assert_eq!(log.current.unwrap().max_hold, 186);
    assert_eq!(log.training_history[0].max_hold, 180);
}

#[test]
fn test_regression_is_stalled() {
    let dir = tempdir().unwrap();
    let ctx = context(dir.path());
    generate_plan(&ctx, &mut scripted("2\n0\nn\n3\n2\n5\ny\n"), today()).unwrap();

    let mut prompter = scripted("1\n50\n");
    let update = update_max(&ctx, &mut prompter).unwrap().unwrap();
    assert_eq!(update.trend, ProgressTrend::Stalled);

    let output = String::from_utf8(prompter.into_output()).unwrap();
    assert!(output.contains("Improvement: -10 seconds (-8.3%)"));
    assert!(output.contains("Consider technique focus or recovery week."));
}

#[test]
fn test_closed_input_is_an_error() {
    let dir = tempdir().unwrap();
    let ctx = context(dir.path());

    assert!(generate_plan(&ctx, &mut scripted("2\n"), today()).is_err());
    assert!(!ctx.progress_file.exists());
}

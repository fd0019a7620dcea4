//! The `generate` and `update-max` commands.

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::athlete::{AthleteProfile, ExperienceLevel, TrainingGoal, ValidationError};
use crate::metrics::trend::{improvement, ProgressTrend};
use crate::report::{
    available_path, plan_filename, write_document, DocumentBuilder, PlanRenderer,
};
use crate::storage::{AppConfig, ProgressRecord, ProgressStore};
use crate::workouts::plan::TrainingPlan;
use crate::workouts::time::{format_time, parse_time_input};

use super::prompt::Prompter;

/// Resolved settings for a command run.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    pub progress_file: PathBuf,
    pub output_dir: PathBuf,
    pub total_weeks: u32,
    pub notes_lines: usize,
}

impl Context {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            progress_file: config.storage.progress_file.clone(),
            output_dir: config.report.output_dir.clone(),
            total_weeks: config.plan.total_weeks,
            notes_lines: config.report.notes_lines,
        }
    }
}

/// Result of the `generate` command.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    /// Plan written and progress saved
    Created {
        document: PathBuf,
        progress: PathBuf,
    },
    /// The athlete declined the summary
    Cancelled,
}

/// Result of the `update-max` command.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxUpdate {
    pub old_max: u32,
    pub new_max: u32,
    pub improvement_seconds: i64,
    pub improvement_percent: f64,
    pub trend: ProgressTrend,
}

/// Collect a profile, build the plan, write the document and save progress.
pub fn generate_plan<R: BufRead, W: Write>(
    ctx: &Context,
    prompter: &mut Prompter<R, W>,
    today: NaiveDate,
) -> Result<GenerateOutcome> {
    if ctx.total_weeks == 0 {
        return Err(ValidationError::InvalidTotalWeeks.into());
    }

    let store = ProgressStore::new(&ctx.progress_file);
    let previous = store
        .load_current()
        .context("Failed to read training history")?;

    let baseline = match previous.filter(|record| record.max_hold > 0) {
        Some(record) => {
            show_previous(prompter, &record)?;
            prompter
                .confirm("Use this as baseline for comparison? (y/n): ")?
                .then_some(record.max_hold)
        }
        None => None,
    };

    let Some(profile) = collect_profile(prompter, ctx.total_weeks)? else {
        prompter.say("Plan generation cancelled.")?;
        return Ok(GenerateOutcome::Cancelled);
    };

    let profile = match baseline {
        Some(max_hold) => profile.with_baseline(max_hold),
        None => profile,
    };

    prompter.say("\nGenerating adaptive training plan...")?;
    let plan = TrainingPlan::build(profile);

    let document = PlanRenderer::new(DocumentBuilder::default())
        .with_notes_lines(ctx.notes_lines)
        .render(&plan)
        .context("Failed to render training plan")?;

    // Never replace an earlier plan.
    let path = available_path(&ctx.output_dir.join(plan_filename(&plan.profile, today)));
    let document_path =
        write_document(&document, &path).context("Failed to write training plan")?;

    let progress = match store.save(&plan.profile, &plan.zones, None) {
        Ok(progress) => progress,
        Err(e) => {
            // Only keep the document once its progress record is saved.
            if let Err(remove_err) = std::fs::remove_file(&document_path) {
                tracing::warn!(error = %remove_err, "Failed to remove plan document");
            }
            return Err(e).context("Failed to save progress data");
        }
    };

    prompter.say(format!(
        "\nAdaptive training plan created: {}",
        document_path.display()
    ))?;
    prompter.say(format!("Progress data saved: {}", progress.display()))?;
    prompter.say("\nTo generate next week's plan:")?;
    prompter.say("1. Complete this week's training")?;
    prompter.say("2. Record your new max hold time")?;
    prompter.say("3. Run this program again with updated data")?;
    prompter.say("4. The system will auto-adapt your training zones!")?;

    Ok(GenerateOutcome::Created {
        document: document_path,
        progress,
    })
}

/// Record a new max after a performance test.
///
/// Returns `None` when there is no stored record to update.
pub fn update_max<R: BufRead, W: Write>(
    ctx: &Context,
    prompter: &mut Prompter<R, W>,
) -> Result<Option<MaxUpdate>> {
    prompter.say("=== Update Maximum Hold Time ===\n")?;

    let store = ProgressStore::new(&ctx.progress_file);
    let Some(current) = store
        .load_current()
        .context("Failed to read training history")?
    else {
        prompter.say("No previous training data found. Please run the full setup first.")?;
        return Ok(None);
    };

    let old_max = current.max_hold;
    prompter.say(format!(
        "Current recorded max: {}",
        format_time(old_max as i64)
    ))?;

    let new_max = ask_duration(
        prompter,
        "New maximum hold (minutes): ",
        "Additional seconds (0-59): ",
    )?;

    let (seconds, percent) = improvement(old_max, new_max);
    let trend = ProgressTrend::from_percent(percent);

    prompter.say(format!("\nNew max: {}", format_time(new_max as i64)))?;
    prompter.say(format!(
        "Improvement: {:+} seconds ({:+.1}%)",
        seconds, percent
    ))?;
    prompter.say(trend.advice())?;

    store
        .update_max(new_max)
        .context("Failed to update max hold")?;
    prompter.say("\nMax updated! Run `breathhold generate` for next week.")?;

    Ok(Some(MaxUpdate {
        old_max,
        new_max,
        improvement_seconds: seconds,
        improvement_percent: percent,
        trend,
    }))
}

fn show_previous<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    record: &ProgressRecord,
) -> Result<()> {
    prompter.say("Previous training data found:")?;
    prompter.say(format!(
        "Last recorded max: {}",
        format_time(record.max_hold as i64)
    ))?;
    prompter.say(format!("Experience level: {}", record.experience_level))?;
    prompter.say(format!("Goal: {}", record.goal))?;
    Ok(())
}

/// Ask for minutes then seconds until the total is positive.
fn ask_duration<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    minutes_prompt: &str,
    seconds_prompt: &str,
) -> Result<u32> {
    loop {
        let minutes = prompter.ask_number(minutes_prompt)?;
        let seconds =
            prompter.ask_number_in(seconds_prompt, 0..=59, "Please enter seconds between 0 and 59.")?;
        match parse_time_input(minutes, seconds) {
            Some(total) if total > 0 => return Ok(total),
            Some(_) => prompter.say("Max hold must be longer than zero.")?,
            None => prompter.say("That hold time is too long, please try again.")?,
        }
    }
}

/// Interactively collect an athlete profile.
///
/// Returns `None` if the athlete does not confirm the summary.
pub fn collect_profile<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    total_weeks: u32,
) -> Result<Option<AthleteProfile>> {
    prompter.say("=== Adaptive Breath Hold Training Plan Generator ===\n")?;

    let current_max = ask_duration(
        prompter,
        "Current maximum breath hold (minutes): ",
        "Additional seconds (0-59): ",
    )?;
    prompter.say(format!("Current max: {}", format_time(current_max as i64)))?;

    let mut previous_max = None;
    if prompter.confirm("Do you have a previous max to compare? (y/n): ")? {
        let minutes = prompter.ask("Previous max (minutes): ")?.parse::<u32>();
        let seconds = prompter.ask("Previous max (seconds): ")?.parse::<u32>();
        let previous = match (minutes, seconds) {
            (Ok(minutes), Ok(seconds)) => parse_time_input(minutes, seconds),
            _ => None,
        };
        match previous {
            Some(previous) => {
                let change = current_max as i64 - previous as i64;
                prompter.say(format!("Progress: {:+} seconds", change))?;
                previous_max = Some(previous);
            }
            None => prompter.say("Invalid input, skipping previous max.")?,
        }
    }

    prompter.say("\nExperience Levels:")?;
    for (i, level) in ExperienceLevel::ALL.iter().enumerate() {
        prompter.say(format!("{}. {} ({})", i + 1, level, level.hint()))?;
    }
    let choice = prompter.ask_number_in(
        "Select experience level (1-3): ",
        1..=3,
        "Please enter 1, 2, or 3.",
    )?;
    let experience_level =
        ExperienceLevel::from_choice(choice).context("Experience choice out of range")?;

    prompter.say("\nTraining Goals:")?;
    for (i, goal) in TrainingGoal::ALL.iter().enumerate() {
        prompter.say(format!("{}. {} ({})", i + 1, goal, goal.hint()))?;
    }
    let choice = prompter.ask_number_in(
        "Select primary goal (1-3): ",
        1..=3,
        "Please enter 1, 2, or 3.",
    )?;
    let goal = TrainingGoal::from_choice(choice).context("Goal choice out of range")?;

    let current_week = prompter.ask_number_in(
        &format!("Which week of training? (1-{}): ", total_weeks),
        1..=total_weeks,
        &format!("Please enter a week between 1 and {}.", total_weeks),
    )?;

    prompter.say("\n=== Training Plan Summary ===")?;
    prompter.say(format!("Current Max: {}", format_time(current_max as i64)))?;
    if let Some(previous) = previous_max {
        prompter.say(format!("Previous Max: {}", format_time(previous as i64)))?;
    }
    prompter.say(format!("Experience: {}", experience_level))?;
    prompter.say(format!("Goal: {}", goal))?;
    prompter.say(format!("Week: {}/{}", current_week, total_weeks))?;

    if !prompter.confirm("\nGenerate training plan with this data? (y/n): ")? {
        return Ok(None);
    }

    let profile = AthleteProfile::builder()
        .current_max(current_max)
        .previous_max(previous_max)
        .experience_level(experience_level)
        .goal(goal)
        .current_week(current_week)
        .total_weeks(total_weeks)
        .build()
        .context("Invalid athlete profile")?;

    Ok(Some(profile))
}

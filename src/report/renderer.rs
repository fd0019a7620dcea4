//! Renders a training plan into a paginated document.
//!
//! Page 1 is an overview of the athlete, zones and week. Each day then gets
//! its own page with the rounds table and space for notes.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::athlete::AthleteProfile;
use crate::storage::config::DEFAULT_NOTES_LINES;
use crate::workouts::plan::TrainingPlan;
use crate::workouts::schedule::{day_name, DayPlan};
use crate::workouts::time::format_time;
use crate::workouts::types::{Round, Session};

use super::document::{Document, DocumentBuilder};
use super::types::RenderError;

/// Longest focus label shown in a rounds table.
const FOCUS_WIDTH: usize = 25;

/// Turns a [`TrainingPlan`] into a [`Document`].
#[derive(Debug, Clone)]
pub struct PlanRenderer {
    builder: DocumentBuilder,
    notes_lines: usize,
}

impl Default for PlanRenderer {
    fn default() -> Self {
        Self::new(DocumentBuilder::default())
    }
}

impl PlanRenderer {
    pub fn new(builder: DocumentBuilder) -> Self {
        Self {
            builder,
            notes_lines: DEFAULT_NOTES_LINES,
        }
    }

    /// Number of ruled note lines on each day page.
    pub fn with_notes_lines(mut self, lines: usize) -> Self {
        self.notes_lines = lines;
        self
    }

    /// Render the overview page followed by one page per day.
    pub fn render(mut self, plan: &TrainingPlan) -> Result<Document, RenderError> {
        self.builder.set_header(page_header(&plan.profile));

        self.builder.add_page();
        self.draw_overview(plan)?;

        for (day, day_plan) in plan.schedule.iter() {
            self.builder.add_page();
            self.draw_day(day_name(day), day_plan)?;
        }

        let document = self.builder.build()?;
        tracing::debug!(pages = document.page_count(), "Rendered plan document");
        Ok(document)
    }

    fn draw_overview(&mut self, plan: &TrainingPlan) -> Result<(), RenderError> {
        let profile = &plan.profile;
        let b = &mut self.builder;

        b.heading(&format!(
            "Personalized Training Plan - {} Focus",
            profile.goal()
        ))?;
        b.blank()?;

        let mut stats = format!(
            "Experience: {} | Current Max: {}",
            profile.experience_level(),
            format_time(profile.current_max() as i64)
        );
        if profile.previous_max().is_some_and(|p| p > 0) {
            stats.push_str(&format!(
                " | Recent Progress: {:.1}%",
                profile.progress_rate() * 100.0
            ));
        }
        b.paragraph(&stats)?;
        b.blank()?;

        b.line("Training Zones:")?;
        let rows = plan
            .zones
            .all_zones()
            .into_iter()
            .map(|(zone, seconds)| vec![zone.to_string(), format_time(seconds as i64)])
            .collect();
        b.table(vec!["Zone".to_string(), "Duration".to_string()], rows)?;
        b.blank()?;

        b.line("This Week's Schedule:")?;
        b.blank()?;
        for (day, day_plan) in plan.schedule.iter() {
            b.line(format!("{}: {}", day_name(day), day_plan.label()))?;
            b.line(format!("  {}", day_plan.description()))?;
        }

        Ok(())
    }

    fn draw_day(&mut self, day: &str, day_plan: &DayPlan) -> Result<(), RenderError> {
        let b = &mut self.builder;

        b.heading(&format!("{} - {}", day, day_plan.label()))?;
        b.blank()?;
        b.paragraph(day_plan.description())?;
        b.blank()?;

        if let Some(session) = day_plan.session() {
            draw_session(b, session)?;
        }

        b.line("Notes & Performance:")?;
        b.writing_lines(self.notes_lines)
    }
}

fn draw_session(b: &mut DocumentBuilder, session: &Session) -> Result<(), RenderError> {
    b.line(format!(
        "Estimated duration: {}",
        format_time(session.total_duration_seconds() as i64)
    ))?;
    b.blank()?;

    let with_focus = session.has_focus();
    let mut headers = vec![
        "Round".to_string(),
        "Hold Time".to_string(),
        "Rest".to_string(),
        "Target RPE".to_string(),
    ];
    if with_focus {
        headers.push("Focus".to_string());
    }

    let rows = session
        .rounds
        .iter()
        .map(|round| round_row(round, with_focus))
        .collect();
    b.table(headers, rows)?;
    b.blank()?;

    for effort in session.efforts() {
        if let Some(description) = effort.description() {
            b.line(format!("RPE {}: {}", effort, description))?;
        }
    }
    b.blank()?;

    if !session.notes.is_empty() {
        b.paragraph(&session.notes)?;
        b.blank()?;
    }

    Ok(())
}

fn round_row(round: &Round, with_focus: bool) -> Vec<String> {
    let mut row = vec![
        round.index.to_string(),
        round.hold.to_string(),
        round.rest.to_string(),
        round.target_effort.to_string(),
    ];
    if with_focus {
        row.push(round.focus.as_deref().map(truncate_focus).unwrap_or_default());
    }
    row
}

/// Shorten long focus labels to fit the table.
pub fn truncate_focus(focus: &str) -> String {
    if focus.chars().count() > FOCUS_WIDTH {
        let short: String = focus.chars().take(FOCUS_WIDTH).collect();
        format!("{}...", short)
    } else {
        focus.to_string()
    }
}

/// Running header lines for every page.
pub fn page_header(profile: &AthleteProfile) -> Vec<String> {
    let title = format!(
        "Adaptive Breath-Hold Training - Week {}/{}",
        profile.current_week(),
        profile.total_weeks()
    );

    let mut info = format!(
        "Current Max: {} | ",
        format_time(profile.current_max() as i64)
    );
    if profile.previous_max().is_some_and(|p| p > 0) {
        let improvement = profile.improvement_seconds();
        let sign = if improvement < 0 { '-' } else { '+' };
        info.push_str(&format!(
            "Progress: {}{} | ",
            sign,
            format_time(improvement.abs())
        ));
    }
    info.push_str(&format!("Level: {}", profile.experience_level()));

    vec![title, info]
}

/// Default file name for a plan generated on `date`.
pub fn plan_filename(profile: &AthleteProfile, date: NaiveDate) -> String {
    format!(
        "adaptive_breath_hold_week{}_max{}m{}s_{}.txt",
        profile.current_week(),
        profile.current_max() / 60,
        profile.current_max() % 60,
        date.format("%Y%m%d")
    )
}

/// `path` if it is free, otherwise the first `stem_N.ext` (N = 2, 3, ...)
/// that does not exist yet.
pub fn available_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned());

    let mut n = 2;
    loop {
        let name = match &extension {
            Some(ext) => format!("{}_{}.{}", stem, n, ext),
            None => format!("{}_{}", stem, n),
        };
        let candidate = path.with_file_name(name);
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

/// Write a rendered document to `path`.
///
/// The text goes to a sibling temp file first and is moved into place only
/// once fully written.
pub fn write_document(document: &Document, path: &Path) -> Result<PathBuf, RenderError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let tmp = path.with_extension("txt.partial");
    std::fs::write(&tmp, document.to_text())?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }

    tracing::info!(path = %path.display(), pages = document.page_count(), "Wrote plan document");
    Ok(path.to_path_buf())
}

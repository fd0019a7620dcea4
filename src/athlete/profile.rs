//! Athlete profile with validated inputs and derived progress metrics.

use super::types::{ExperienceLevel, TrainingGoal, ValidationError};

/// Default length of a training cycle in weeks.
pub const DEFAULT_TOTAL_WEEKS: u32 = 6;

/// A validated snapshot of the athlete for one planning run.
///
/// Profiles are immutable once built. Use [`AthleteProfile::with_baseline`]
/// to derive a profile that compares against a stored max.
#[derive(Debug, Clone, PartialEq)]
pub struct AthleteProfile {
    current_max: u32,
    previous_max: Option<u32>,
    experience_level: ExperienceLevel,
    goal: TrainingGoal,
    current_week: u32,
    total_weeks: u32,
}

impl AthleteProfile {
    /// Start building a profile.
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder::default()
    }

    /// Current best breath-hold in seconds.
    pub fn current_max(&self) -> u32 {
        self.current_max
    }

    /// Previous best breath-hold in seconds, if known.
    pub fn previous_max(&self) -> Option<u32> {
        self.previous_max
    }

    /// Training experience used to pick zone fractions.
    pub fn experience_level(&self) -> ExperienceLevel {
        self.experience_level
    }

    /// Primary goal, which selects the progression curve.
    pub fn goal(&self) -> TrainingGoal {
        self.goal
    }

    /// 1-based week within the training cycle.
    pub fn current_week(&self) -> u32 {
        self.current_week
    }

    /// Length of the training cycle in weeks.
    pub fn total_weeks(&self) -> u32 {
        self.total_weeks
    }

    /// Whether this run is the mid-cycle deload week.
    pub fn is_deload_week(&self) -> bool {
        self.current_week == 4
    }

    /// Relative improvement over the previous max (0.20 = 20% better).
    ///
    /// Returns 0.0 when there is no previous max or it is zero.
    pub fn progress_rate(&self) -> f64 {
        match self.previous_max {
            Some(previous) if previous > 0 => {
                (self.current_max as f64 - previous as f64) / previous as f64
            }
            _ => 0.0,
        }
    }

    /// Improvement over the previous max in seconds (negative on regression).
    pub fn improvement_seconds(&self) -> i64 {
        match self.previous_max {
            Some(previous) => self.current_max as i64 - previous as i64,
            None => 0,
        }
    }

    /// Return a copy of this profile that compares against `previous_max`.
    ///
    /// Used when a stored max from an earlier run becomes the baseline for
    /// the freshly entered one. All other fields are carried over untouched.
    pub fn with_baseline(&self, previous_max: u32) -> Self {
        Self {
            previous_max: Some(previous_max),
            ..self.clone()
        }
    }
}

/// Builder for [`AthleteProfile`]; validation happens in [`ProfileBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    current_max: Option<u32>,
    previous_max: Option<u32>,
    experience_level: Option<ExperienceLevel>,
    goal: Option<TrainingGoal>,
    current_week: Option<u32>,
    total_weeks: Option<u32>,
}

impl ProfileBuilder {
    /// Set the current max hold in seconds.
    pub fn current_max(mut self, seconds: u32) -> Self {
        self.current_max = Some(seconds);
        self
    }

    /// Set the previous max hold in seconds.
    pub fn previous_max(mut self, seconds: Option<u32>) -> Self {
        self.previous_max = seconds;
        self
    }

    pub fn experience_level(mut self, level: ExperienceLevel) -> Self {
        self.experience_level = Some(level);
        self
    }

    pub fn goal(mut self, goal: TrainingGoal) -> Self {
        self.goal = Some(goal);
        self
    }

    pub fn current_week(mut self, week: u32) -> Self {
        self.current_week = Some(week);
        self
    }

    /// Override the cycle length (defaults to [`DEFAULT_TOTAL_WEEKS`]).
    pub fn total_weeks(mut self, weeks: u32) -> Self {
        self.total_weeks = Some(weeks);
        self
    }

    /// Validate the collected fields and produce a profile.
    pub fn build(self) -> Result<AthleteProfile, ValidationError> {
        let current_max = self
            .current_max
            .ok_or(ValidationError::MissingField("current_max"))?;
        let experience_level = self
            .experience_level
            .ok_or(ValidationError::MissingField("experience_level"))?;
        let goal = self.goal.ok_or(ValidationError::MissingField("goal"))?;
        let current_week = self
            .current_week
            .ok_or(ValidationError::MissingField("current_week"))?;
        let total_weeks = self.total_weeks.unwrap_or(DEFAULT_TOTAL_WEEKS);

        if total_weeks == 0 {
            return Err(ValidationError::InvalidTotalWeeks);
        }

        if !(1..=total_weeks).contains(&current_week) {
            return Err(ValidationError::WeekOutOfRange {
                week: current_week,
                total_weeks,
            });
        }

        if current_max == 0 {
            return Err(ValidationError::NonPositiveMax);
        }

        Ok(AthleteProfile {
            current_max,
            previous_max: self.previous_max,
            experience_level,
            goal,
            current_week,
            total_weeks,
        })
    }
}

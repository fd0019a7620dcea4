//! Experience levels, training goals and profile validation errors.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// How long the athlete has been training breath-holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// Less than 6 months of training
    Beginner,
    /// 6 months to 2 years
    Intermediate,
    /// More than 2 years
    Advanced,
}

impl ExperienceLevel {
    /// All levels in menu order.
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    /// Lowercase identifier used in storage and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }

    /// Resolve a 1-based menu choice.
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(ExperienceLevel::Beginner),
            2 => Some(ExperienceLevel::Intermediate),
            3 => Some(ExperienceLevel::Advanced),
            _ => None,
        }
    }

    /// Menu hint shown next to the level.
    pub fn hint(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "< 6 months training",
            ExperienceLevel::Intermediate => "6 months - 2 years",
            ExperienceLevel::Advanced => "2+ years",
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperienceLevel::Beginner => write!(f, "Beginner"),
            ExperienceLevel::Intermediate => write!(f, "Intermediate"),
            ExperienceLevel::Advanced => write!(f, "Advanced"),
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            _ => Err(ValidationError::UnknownExperienceLevel(s.to_string())),
        }
    }
}

/// Primary training objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingGoal {
    /// Longer single holds
    Strength,
    /// Multiple holds, volume
    Endurance,
    /// Mix of both
    Balanced,
}

impl TrainingGoal {
    /// All goals in menu order.
    pub const ALL: [TrainingGoal; 3] = [
        TrainingGoal::Strength,
        TrainingGoal::Endurance,
        TrainingGoal::Balanced,
    ];

    /// Lowercase identifier used in storage and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingGoal::Strength => "strength",
            TrainingGoal::Endurance => "endurance",
            TrainingGoal::Balanced => "balanced",
        }
    }

    /// Resolve a 1-based menu choice.
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(TrainingGoal::Strength),
            2 => Some(TrainingGoal::Endurance),
            3 => Some(TrainingGoal::Balanced),
            _ => None,
        }
    }

    /// Menu hint shown next to the goal.
    pub fn hint(&self) -> &'static str {
        match self {
            TrainingGoal::Strength => "longer single holds",
            TrainingGoal::Endurance => "multiple holds, volume",
            TrainingGoal::Balanced => "mix of both",
        }
    }
}

impl std::fmt::Display for TrainingGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrainingGoal::Strength => write!(f, "Strength"),
            TrainingGoal::Endurance => write!(f, "Endurance"),
            TrainingGoal::Balanced => write!(f, "Balanced"),
        }
    }
}

impl FromStr for TrainingGoal {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strength" => Ok(TrainingGoal::Strength),
            "endurance" => Ok(TrainingGoal::Endurance),
            "balanced" => Ok(TrainingGoal::Balanced),
            _ => Err(ValidationError::UnknownGoal(s.to_string())),
        }
    }
}

/// Errors raised while constructing an athlete profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Current max must be positive")]
    NonPositiveMax,

    #[error("Week must be between 1 and {total_weeks} (got {week})")]
    WeekOutOfRange { week: u32, total_weeks: u32 },

    #[error("Total weeks must be at least 1")]
    InvalidTotalWeeks,

    #[error("Experience level must be one of: beginner, intermediate, advanced (got '{0}')")]
    UnknownExperienceLevel(String),

    #[error("Goal must be one of: strength, endurance, balanced (got '{0}')")]
    UnknownGoal(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

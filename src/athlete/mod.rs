//! Athlete profile and input validation.

pub mod profile;
pub mod types;

pub use profile::{AthleteProfile, ProfileBuilder, DEFAULT_TOTAL_WEEKS};
pub use types::{ExperienceLevel, TrainingGoal, ValidationError};

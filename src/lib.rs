//! BreathHold - Adaptive breath-hold training planner
//!
//! Builds a weekly static apnea plan (CO2 tables, O2 tables, performance
//! tests and technique work) from an athlete's current max hold, scales the
//! training zones by recent progress, renders the week as a printable
//! document and keeps a JSON history between weeks.

pub mod athlete;
pub mod cli;
pub mod metrics;
pub mod report;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use athlete::{AthleteProfile, ExperienceLevel, TrainingGoal};
pub use metrics::zones::ZoneSet;
pub use report::renderer::PlanRenderer;
pub use storage::progress::ProgressStore;
pub use workouts::plan::TrainingPlan;

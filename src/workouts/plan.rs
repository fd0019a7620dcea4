//! The planning pipeline: profile, zones, sessions, schedule.

use crate::athlete::AthleteProfile;
use crate::metrics::zones::ZoneSet;

use super::generator::SessionGenerator;
use super::schedule::{ScheduleGenerator, WeeklySchedule};

/// Everything computed for one planning run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingPlan {
    pub profile: AthleteProfile,
    pub zones: ZoneSet,
    pub schedule: WeeklySchedule,
}

impl TrainingPlan {
    /// Compute zones and the weekly schedule for a profile.
    pub fn build(profile: AthleteProfile) -> Self {
        let zones = ZoneSet::from_profile(&profile);
        let sessions = SessionGenerator::new(profile.clone(), zones);
        let schedule = ScheduleGenerator::new(sessions).weekly_schedule();

        tracing::info!(
            week = profile.current_week(),
            level = %profile.experience_level(),
            goal = %profile.goal(),
            "Built training plan"
        );

        Self {
            profile,
            zones,
            schedule,
        }
    }
}

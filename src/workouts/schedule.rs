//! Weekly schedule assembly.

use chrono::Weekday;

use crate::athlete::TrainingGoal;

use super::generator::SessionGenerator;
use super::types::{Co2Variant, Session};

/// Days of the week in schedule order.
pub const WEEK_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name of a weekday.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A day without breath-hold sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestDay {
    pub label: String,
    pub description: String,
}

impl RestDay {
    pub fn new(label: &str, description: &str) -> Self {
        Self {
            label: label.to_string(),
            description: description.to_string(),
        }
    }

    /// Light mobility between training days.
    pub fn active_recovery() -> Self {
        Self::new("Active Recovery", "Light mobility, breathing technique practice")
    }

    /// No training at all.
    pub fn complete_rest() -> Self {
        Self::new("Complete Rest", "Full recovery day")
    }
}

/// What happens on one day.
#[derive(Debug, Clone, PartialEq)]
pub enum DayPlan {
    Training(Session),
    Rest(RestDay),
}

impl DayPlan {
    /// Label shown in the schedule overview.
    pub fn label(&self) -> &str {
        match self {
            DayPlan::Training(session) => &session.kind,
            DayPlan::Rest(rest) => &rest.label,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            DayPlan::Training(session) => &session.description,
            DayPlan::Rest(rest) => &rest.description,
        }
    }

    /// The session for a training day.
    pub fn session(&self) -> Option<&Session> {
        match self {
            DayPlan::Training(session) => Some(session),
            DayPlan::Rest(_) => None,
        }
    }
}

/// Seven day slots, Monday through Sunday.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySchedule {
    days: [DayPlan; 7],
}

impl WeeklySchedule {
    /// Build a schedule from day plans in Monday..Sunday order.
    pub fn new(days: [DayPlan; 7]) -> Self {
        Self { days }
    }

    /// Plan for a given day.
    pub fn day(&self, day: Weekday) -> &DayPlan {
        &self.days[day.num_days_from_monday() as usize]
    }

    fn set(&mut self, day: Weekday, plan: DayPlan) {
        self.days[day.num_days_from_monday() as usize] = plan;
    }

    /// Days in order with their plans.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DayPlan)> {
        WEEK_DAYS.into_iter().zip(self.days.iter())
    }

    /// Number of days with a training session.
    pub fn training_days(&self) -> usize {
        self.days
            .iter()
            .filter(|plan| matches!(plan, DayPlan::Training(_)))
            .count()
    }
}

/// Assembles a week from generated sessions.
#[derive(Debug, Clone)]
pub struct ScheduleGenerator {
    sessions: SessionGenerator,
}

impl ScheduleGenerator {
    pub fn new(sessions: SessionGenerator) -> Self {
        Self { sessions }
    }

    /// Build the week: a fixed base layout, then goal overrides, then deload
    /// overrides. Later rules win.
    pub fn weekly_schedule(&self) -> WeeklySchedule {
        let gen = &self.sessions;
        let profile = gen.profile();

        let mut schedule = WeeklySchedule::new([
            DayPlan::Training(gen.co2_table(Co2Variant::Recovery)),
            DayPlan::Training(gen.performance_test()),
            DayPlan::Rest(RestDay::active_recovery()),
            DayPlan::Training(gen.o2_table()),
            DayPlan::Training(gen.co2_table(Co2Variant::Standard)),
            DayPlan::Training(gen.technique_session()),
            DayPlan::Rest(RestDay::complete_rest()),
        ]);

        match profile.goal() {
            TrainingGoal::Strength => {
                schedule.set(Weekday::Sat, DayPlan::Training(gen.co2_table(Co2Variant::Recovery)));
            }
            TrainingGoal::Endurance => {
                schedule.set(Weekday::Wed, DayPlan::Training(gen.technique_session()));
            }
            TrainingGoal::Balanced => {}
        }

        if profile.is_deload_week() {
            // Deload drops every maximal session; Saturday returns to
            // technique even when the goal replaced it.
            schedule.set(Weekday::Tue, DayPlan::Training(gen.technique_session()));
            schedule.set(Weekday::Thu, DayPlan::Training(gen.co2_table(Co2Variant::Recovery)));
            schedule.set(Weekday::Fri, DayPlan::Training(gen.technique_session()));
            schedule.set(Weekday::Sat, DayPlan::Training(gen.technique_session()));
        }

        tracing::debug!(
            goal = %profile.goal(),
            week = profile.current_week(),
            training_days = schedule.training_days(),
            "Assembled weekly schedule"
        );

        schedule
    }
}

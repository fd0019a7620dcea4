//! Session generation and weekly scheduling.

pub mod generator;
pub mod plan;
pub mod schedule;
pub mod time;
pub mod types;

pub use generator::SessionGenerator;
pub use plan::TrainingPlan;
pub use schedule::{day_name, DayPlan, RestDay, ScheduleGenerator, WeeklySchedule, WEEK_DAYS};
pub use time::{format_time, parse_time_input};
pub use types::{
    Co2Variant, EffortRange, HoldTarget, RestPeriod, Round, Session, SessionCategory,
};

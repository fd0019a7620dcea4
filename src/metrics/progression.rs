//! Weekly progression curves.
//!
//! Each goal follows a six-week curve with a deload dip in week 4. Weeks
//! past the end of the curve stay on its final value.

use crate::athlete::TrainingGoal;

/// Number of weeks covered by a progression curve.
pub const CURVE_LENGTH: usize = 6;

pub const STRENGTH_CURVE: [f64; CURVE_LENGTH] = [1.0, 1.05, 1.12, 0.95, 1.18, 1.25];
pub const ENDURANCE_CURVE: [f64; CURVE_LENGTH] = [1.0, 1.08, 1.15, 0.90, 1.20, 1.28];
pub const BALANCED_CURVE: [f64; CURVE_LENGTH] = [1.0, 1.1, 1.2, 1.0, 1.25, 1.3];

/// Progression curve for a goal.
pub fn progression_curve(goal: TrainingGoal) -> &'static [f64; CURVE_LENGTH] {
    match goal {
        TrainingGoal::Strength => &STRENGTH_CURVE,
        TrainingGoal::Endurance => &ENDURANCE_CURVE,
        TrainingGoal::Balanced => &BALANCED_CURVE,
    }
}

/// Multiplier applied to zone durations in a given 1-based week.
pub fn weekly_multiplier(goal: TrainingGoal, week: u32) -> f64 {
    let index = (week.saturating_sub(1) as usize).min(CURVE_LENGTH - 1);
    progression_curve(goal)[index]
}

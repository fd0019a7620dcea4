//! Unit tests for weekly progression curves.

use breathhold::athlete::TrainingGoal;
use breathhold::metrics::progression::{progression_curve, weekly_multiplier};

#[test]
fn test_documented_curves() {
    assert_eq!(
        progression_curve(TrainingGoal::Strength),
        &[1.0, 1.05, 1.12, 0.95, 1.18, 1.25]
    );
    assert_eq!(
        progression_curve(TrainingGoal::Endurance),
        &[1.0, 1.08, 1.15, 0.90, 1.20, 1.28]
    );
    assert_eq!(
        progression_curve(TrainingGoal::Balanced),
        &[1.0, 1.1, 1.2, 1.0, 1.25, 1.3]
    );
}

#[test]
fn test_weeks_past_curve_are_clamped() {
    for goal in TrainingGoal::ALL {
        let last = weekly_multiplier(goal, 6);
        for week in 7..=12 {
            assert_eq!(weekly_multiplier(goal, week), last);
        }
    }
}

#[test]
fn test_week_four_dips() {
    for goal in TrainingGoal::ALL {
        assert!(weekly_multiplier(goal, 4) < weekly_multiplier(goal, 3));
    }
}

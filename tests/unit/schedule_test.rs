//! Unit tests for weekly schedule assembly.

use breathhold::athlete::{AthleteProfile, ExperienceLevel, TrainingGoal};
use breathhold::workouts::plan::TrainingPlan;
use breathhold::workouts::schedule::{DayPlan, WeeklySchedule};
use breathhold::workouts::types::SessionCategory;
use chrono::Weekday;

fn schedule(goal: TrainingGoal, week: u32) -> WeeklySchedule {
    let profile = AthleteProfile::builder()
        .current_max(160)
        .previous_max(Some(150))
        .experience_level(ExperienceLevel::Advanced)
        .goal(goal)
        .current_week(week)
        .build()
        .unwrap();
    TrainingPlan::build(profile).schedule
}

fn category(schedule: &WeeklySchedule, day: Weekday) -> Option<SessionCategory> {
    schedule.day(day).session().map(|session| session.category)
}

#[test]
fn test_balanced_base_week() {
    let week = schedule(TrainingGoal::Balanced, 2);

    assert_eq!(category(&week, Weekday::Mon), Some(SessionCategory::Co2Recovery));
    assert_eq!(category(&week, Weekday::Tue), Some(SessionCategory::PerformanceTest));
    assert!(matches!(week.day(Weekday::Wed), DayPlan::Rest(_)));
    assert_eq!(category(&week, Weekday::Thu), Some(SessionCategory::O2Efficiency));
    assert_eq!(category(&week, Weekday::Fri), Some(SessionCategory::Co2Standard));
    assert_eq!(category(&week, Weekday::Sat), Some(SessionCategory::Technique));
    assert!(matches!(week.day(Weekday::Sun), DayPlan::Rest(_)));
    assert_eq!(week.training_days(), 5);
}

#[test]
fn test_goal_overrides() {
    let strength = schedule(TrainingGoal::Strength, 1);
    assert_eq!(category(&strength, Weekday::Sat), Some(SessionCategory::Co2Recovery));

    let endurance = schedule(TrainingGoal::Endurance, 1);
    assert_eq!(category(&endurance, Weekday::Wed), Some(SessionCategory::Technique));
    assert_eq!(endurance.training_days(), 6);
}

#[test]
fn test_deload_wins_over_goal() {
    let week = schedule(TrainingGoal::Strength, 4);

    assert_eq!(category(&week, Weekday::Tue), Some(SessionCategory::Technique));
    assert_eq!(category(&week, Weekday::Thu), Some(SessionCategory::Co2Recovery));
    assert_eq!(category(&week, Weekday::Fri), Some(SessionCategory::Technique));
    assert_eq!(category(&week, Weekday::Sat), Some(SessionCategory::Technique));
}

#[test]
fn test_deload_has_no_maximal_sessions() {
    for goal in TrainingGoal::ALL {
        let week = schedule(goal, 4);
        for (day, plan) in week.iter() {
            if let Some(session) = plan.session() {
                assert!(!session.category.is_maximal(), "{:?} {:?}", goal, day);
            }
        }
    }
}

#[test]
fn test_sunday_always_rests() {
    for goal in TrainingGoal::ALL {
        for week in 1..=6 {
            assert!(matches!(schedule(goal, week).day(Weekday::Sun), DayPlan::Rest(_)));
        }
    }
}

//! Unit tests for zone calculations.

use breathhold::athlete::{AthleteProfile, ExperienceLevel, TrainingGoal};
use breathhold::metrics::zones::{adaptation_multiplier, ZoneName, ZoneSet};

fn profile(current: u32, previous: Option<u32>, level: ExperienceLevel) -> AthleteProfile {
    AthleteProfile::builder()
        .current_max(current)
        .previous_max(previous)
        .experience_level(level)
        .goal(TrainingGoal::Balanced)
        .current_week(1)
        .build()
        .unwrap()
}

#[test]
fn test_multiplier_thresholds_are_strict() {
    assert_eq!(adaptation_multiplier(0.20), 1.1);
    assert_eq!(adaptation_multiplier(0.15), 1.0);
    assert_eq!(adaptation_multiplier(0.10), 1.0);
    assert_eq!(adaptation_multiplier(0.05), 1.0);
    assert_eq!(adaptation_multiplier(0.0), 0.9);
    assert_eq!(adaptation_multiplier(-0.10), 0.9);
}

#[test]
fn test_beginner_with_strong_progress() {
    // 20% better than last time, so training zones grow by 10%
    let zones = ZoneSet::from_profile(&profile(120, Some(100), ExperienceLevel::Beginner));

    assert_eq!(zones.co2_base, 52);
    assert_eq!(zones.co2_recovery, 39);
    assert_eq!(zones.o2_start, 46);
    assert_eq!(zones.test_target, 108);
}

#[test]
fn test_no_history_is_conservative() {
    let zones = ZoneSet::from_profile(&profile(200, None, ExperienceLevel::Intermediate));
    let neutral = ZoneSet::from_profile(&profile(200, Some(190), ExperienceLevel::Intermediate));

    assert!(zones.co2_base < neutral.co2_base);
    assert!(zones.o2_peak < neutral.o2_peak);
}

#[test]
fn test_test_target_ignores_progress() {
    let levels = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    for level in levels {
        let targets: Vec<u32> = [None, Some(100), Some(145), Some(180)]
            .into_iter()
            .map(|previous| ZoneSet::from_profile(&profile(150, previous, level)).test_target)
            .collect();
        assert!(
            targets.windows(2).all(|pair| pair[0] == pair[1]),
            "{:?}: {:?}",
            level,
            targets
        );
    }
}

#[test]
fn test_zone_lookup_by_key() {
    let zones = ZoneSet::from_profile(&profile(120, Some(100), ExperienceLevel::Beginner));

    assert_eq!(zones.get_by_key("co2_base"), zones.get(ZoneName::Co2Base));
    assert_eq!(zones.get_by_key("test_target"), 108);
    assert_eq!(zones.get_by_key("vo2_max"), 0);
    assert_eq!(zones.all_zones().len(), 5);
}

//! Unit tests for session generation.

use breathhold::athlete::{AthleteProfile, ExperienceLevel, TrainingGoal};
use breathhold::metrics::zones::ZoneSet;
use breathhold::workouts::generator::{SessionGenerator, TECHNIQUES};
use breathhold::workouts::types::{Co2Variant, HoldTarget, RestPeriod, Session};

fn generator(level: ExperienceLevel, week: u32) -> SessionGenerator {
    let profile = AthleteProfile::builder()
        .current_max(187)
        .previous_max(Some(170))
        .experience_level(level)
        .goal(TrainingGoal::Endurance)
        .current_week(week)
        .build()
        .unwrap();
    let zones = ZoneSet::from_profile(&profile);
    SessionGenerator::new(profile, zones)
}

fn rests(session: &Session) -> Vec<u32> {
    session
        .rounds
        .iter()
        .map(|round| round.rest.seconds().unwrap())
        .collect()
}

fn holds(session: &Session) -> Vec<u32> {
    session.rounds.iter().map(|round| round.hold.seconds()).collect()
}

#[test]
fn test_co2_recovery_rests_shrink() {
    let session = generator(ExperienceLevel::Beginner, 1).co2_table(Co2Variant::Recovery);
    let rests = rests(&session);

    assert_eq!(rests.len(), 6);
    assert_eq!(rests.first(), Some(&150));
    assert_eq!(rests.last(), Some(&60));
    assert!(rests.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn test_co2_standard_rests_shrink() {
    let session = generator(ExperienceLevel::Advanced, 2).co2_table(Co2Variant::Standard);
    let rests = rests(&session);

    assert_eq!(rests, vec![120, 105, 90, 75, 60, 45, 30]);
    let first = holds(&session)[0];
    assert!(holds(&session).iter().all(|&hold| hold == first));
}

#[test]
fn test_o2_rounds_per_level() {
    let cases = [
        (ExperienceLevel::Beginner, 5),
        (ExperienceLevel::Intermediate, 6),
        (ExperienceLevel::Advanced, 7),
    ];

    for (level, count) in cases {
        for week in 1..=6 {
            let session = generator(level, week).o2_table();
            let holds = holds(&session);
            assert_eq!(holds.len(), count);
            assert!(holds.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }
}

#[test]
fn test_performance_test_ends_open() {
    let session = generator(ExperienceLevel::Intermediate, 3).performance_test();

    assert_eq!(session.rounds.len(), 3);
    let last = &session.rounds[2];
    assert!(matches!(last.hold, HoldTarget::AtLeast { .. }));
    assert_eq!(last.rest, RestPeriod::Complete);
    assert!(session.description.starts_with("Target: Beat "));
}

#[test]
fn test_technique_session_uses_every_drill() {
    let session = generator(ExperienceLevel::Beginner, 5).technique_session();
    let focus: Vec<&str> = session
        .rounds
        .iter()
        .filter_map(|round| round.focus.as_deref())
        .collect();

    assert_eq!(focus, TECHNIQUES.to_vec());
}

#[test]
fn test_generation_is_deterministic() {
    let gen = generator(ExperienceLevel::Advanced, 5);
    assert_eq!(gen.o2_table(), gen.o2_table());
    assert_eq!(gen.performance_test(), gen.performance_test());
}

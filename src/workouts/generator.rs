//! Session generation from an athlete profile and training zones.
//!
//! Every generator is a pure function of the profile, the zones and the
//! current week. Calling one twice yields the same session.

use crate::athlete::{AthleteProfile, ExperienceLevel};
use crate::metrics::progression::weekly_multiplier;
use crate::metrics::zones::{ZoneName, ZoneSet};

use super::time::format_time;
use super::types::{
    Co2Variant, EffortRange, HoldTarget, RestPeriod, Round, Session, SessionCategory,
};

/// Drills used in technique sessions, one per round.
pub const TECHNIQUES: [&str; 4] = [
    "Box Breathing (4-4-4-4)",
    "Relaxation Scan",
    "Heart Rate Awareness",
    "Mental Focus Training",
];

const O2_BASE_REST: u32 = 150;
const O2_FINAL_REST_BONUS: u32 = 30;
const TECHNIQUE_REST: u32 = 120;

/// Shape of a CO2 table variant.
struct Co2Layout {
    zone: ZoneName,
    rounds: u32,
    rest_start: u32,
    rest_end: u32,
    effort: EffortRange,
    category: SessionCategory,
}

impl Co2Layout {
    fn for_variant(variant: Co2Variant) -> Self {
        match variant {
            Co2Variant::Recovery => Self {
                zone: ZoneName::Co2Recovery,
                rounds: 6,
                rest_start: 150,
                rest_end: 60,
                effort: EffortRange::range(5, 6),
                category: SessionCategory::Co2Recovery,
            },
            Co2Variant::Standard => Self {
                zone: ZoneName::Co2Base,
                rounds: 7,
                rest_start: 120,
                rest_end: 30,
                effort: EffortRange::range(7, 8),
                category: SessionCategory::Co2Standard,
            },
        }
    }
}

/// Linearly interpolated rest for round `index` (0-based) of `rounds`.
///
/// Uses integer division, so the last rest can stop short of `rest_end`
/// when the span does not divide evenly.
pub fn interpolate_rest(index: u32, rounds: u32, rest_start: u32, rest_end: u32) -> u32 {
    if rounds <= 1 {
        return rest_start;
    }
    rest_start - index * (rest_start - rest_end) / (rounds - 1)
}

/// Number of O2 table rounds for an experience level.
pub fn o2_round_count(level: ExperienceLevel) -> u32 {
    match level {
        ExperienceLevel::Beginner => 5,
        ExperienceLevel::Intermediate => 6,
        ExperienceLevel::Advanced => 7,
    }
}

/// Builds sessions for one athlete and week.
#[derive(Debug, Clone)]
pub struct SessionGenerator {
    profile: AthleteProfile,
    zones: ZoneSet,
}

impl SessionGenerator {
    /// Create a generator for a profile and its zones.
    pub fn new(profile: AthleteProfile, zones: ZoneSet) -> Self {
        Self { profile, zones }
    }

    pub fn profile(&self) -> &AthleteProfile {
        &self.profile
    }

    pub fn zones(&self) -> &ZoneSet {
        &self.zones
    }

    /// Progression multiplier for the profile's goal and week.
    pub fn weekly_progression(&self) -> f64 {
        weekly_multiplier(self.profile.goal(), self.profile.current_week())
    }

    /// Zone duration scaled by the weekly progression, truncated to seconds.
    fn progressed(&self, zone: ZoneName) -> u32 {
        (self.zones.get(zone) as f64 * self.weekly_progression()) as u32
    }

    /// CO2 tolerance table: constant holds with shrinking rests.
    pub fn co2_table(&self, variant: Co2Variant) -> Session {
        let layout = Co2Layout::for_variant(variant);
        let base_hold = self.progressed(layout.zone);

        let rounds = (0..layout.rounds)
            .map(|i| Round {
                index: i + 1,
                hold: HoldTarget::fixed(base_hold),
                rest: RestPeriod::timed(interpolate_rest(
                    i,
                    layout.rounds,
                    layout.rest_start,
                    layout.rest_end,
                )),
                target_effort: layout.effort,
                focus: None,
            })
            .collect();

        Session {
            kind: format!("Adaptive CO2 Table ({})", variant),
            category: layout.category,
            description: format!(
                "Personalized CO2 tolerance - Base: {}",
                format_time(base_hold as i64)
            ),
            rounds,
            notes: format!(
                "Adapted for {} level. Focus on consistent performance.",
                self.profile.experience_level().as_str()
            ),
        }
    }

    /// O2 efficiency table: holds climb from the start zone toward the peak.
    pub fn o2_table(&self) -> Session {
        let start = self.progressed(ZoneName::O2Start);
        let peak = self.progressed(ZoneName::O2Peak);
        let count = o2_round_count(self.profile.experience_level());

        let increment = if count > 1 {
            peak.saturating_sub(start) / (count - 1)
        } else {
            0
        };

        let rounds = (0..count)
            .map(|i| {
                let closing = i + 2 >= count;
                Round {
                    index: i + 1,
                    hold: HoldTarget::fixed(start + i * increment),
                    rest: RestPeriod::timed(if closing {
                        O2_BASE_REST + O2_FINAL_REST_BONUS
                    } else {
                        O2_BASE_REST
                    }),
                    target_effort: if closing {
                        EffortRange::range(8, 9)
                    } else {
                        EffortRange::range(6, 8)
                    },
                    focus: None,
                }
            })
            .collect();

        Session {
            kind: "Adaptive O2 Table".to_string(),
            category: SessionCategory::O2Efficiency,
            description: format!(
                "O2 efficiency training - Peak: {}",
                format_time(peak as i64)
            ),
            rounds,
            notes: format!(
                "Progressive overload adapted to your {} level.",
                self.profile.experience_level().as_str()
            ),
        }
    }

    /// Performance test: two build-up holds, then a max attempt.
    pub fn performance_test(&self) -> Session {
        let target = self.progressed(ZoneName::TestTarget);
        let fraction = |share: f64| -> u32 { (target as f64 * share) as u32 };

        let (first, second, final_effort) = match self.profile.experience_level() {
            ExperienceLevel::Beginner => (
                (fraction(0.6), 150),
                (fraction(0.8), 210),
                EffortRange::exactly(9),
            ),
            ExperienceLevel::Intermediate | ExperienceLevel::Advanced => (
                (fraction(0.7), 180),
                (fraction(0.85), 240),
                EffortRange::range(9, 10),
            ),
        };

        let rounds = vec![
            Round {
                index: 1,
                hold: HoldTarget::fixed(first.0),
                rest: RestPeriod::timed(first.1),
                target_effort: EffortRange::range(6, 7),
                focus: None,
            },
            Round {
                index: 2,
                hold: HoldTarget::fixed(second.0),
                rest: RestPeriod::timed(second.1),
                target_effort: EffortRange::exactly(8),
                focus: None,
            },
            Round {
                index: 3,
                hold: HoldTarget::at_least(target),
                rest: RestPeriod::Complete,
                target_effort: final_effort,
                focus: None,
            },
        ];

        let gap = target as i64 - self.profile.current_max() as i64;

        Session {
            kind: "Adaptive Performance Test".to_string(),
            category: SessionCategory::PerformanceTest,
            description: format!(
                "Target: Beat {} (Current goal: {:+}s)",
                format_time(target as i64),
                gap
            ),
            rounds,
            notes: "Record your actual max time. This becomes your new baseline for next planning cycle."
                .to_string(),
        }
    }

    /// Technique session: one drill per round at the unscaled recovery zone.
    pub fn technique_session(&self) -> Session {
        let hold = self.zones.get(ZoneName::Co2Recovery);

        let rounds = TECHNIQUES
            .iter()
            .zip(1..)
            .map(|(technique, index)| Round {
                index,
                hold: HoldTarget::fixed(hold),
                rest: RestPeriod::timed(TECHNIQUE_REST),
                target_effort: EffortRange::range(4, 6),
                focus: Some(technique.to_string()),
            })
            .collect();

        Session {
            kind: "Adaptive Technique Work".to_string(),
            category: SessionCategory::Technique,
            description: "Skill development and active recovery".to_string(),
            rounds,
            notes: "Focus on quality over performance. Should feel refreshing and educational."
                .to_string(),
        }
    }
}

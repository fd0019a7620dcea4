//! Breath-hold training zone calculations.
//!
//! Zones are fixed fractions of the athlete's current max, chosen by
//! experience level and nudged up or down by recent progress.

use serde::{Deserialize, Serialize};

use crate::athlete::{AthleteProfile, ExperienceLevel};

/// Progress rate above which zones are scaled up.
pub const AGGRESSIVE_THRESHOLD: f64 = 0.15;
/// Progress rate below which zones are scaled down.
pub const CONSERVATIVE_THRESHOLD: f64 = 0.05;

const AGGRESSIVE_MULTIPLIER: f64 = 1.1;
const CONSERVATIVE_MULTIPLIER: f64 = 0.9;

/// Named training zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneName {
    /// Hold time for standard CO2 tables
    Co2Base,
    /// Hold time for recovery CO2 tables and technique work
    Co2Recovery,
    /// First hold of an O2 table
    O2Start,
    /// Last hold of an O2 table
    O2Peak,
    /// Performance test target
    TestTarget,
}

impl ZoneName {
    /// All zones in display order.
    pub const ALL: [ZoneName; 5] = [
        ZoneName::Co2Base,
        ZoneName::Co2Recovery,
        ZoneName::O2Start,
        ZoneName::O2Peak,
        ZoneName::TestTarget,
    ];

    /// Snake-case key used in stored snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneName::Co2Base => "co2_base",
            ZoneName::Co2Recovery => "co2_recovery",
            ZoneName::O2Start => "o2_start",
            ZoneName::O2Peak => "o2_peak",
            ZoneName::TestTarget => "test_target",
        }
    }

    /// Look up a zone by its snake-case key.
    pub fn from_key(key: &str) -> Option<Self> {
        ZoneName::ALL.into_iter().find(|zone| zone.as_str() == key)
    }
}

impl std::fmt::Display for ZoneName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneName::Co2Base => write!(f, "CO2 Base"),
            ZoneName::Co2Recovery => write!(f, "CO2 Recovery"),
            ZoneName::O2Start => write!(f, "O2 Start"),
            ZoneName::O2Peak => write!(f, "O2 Peak"),
            ZoneName::TestTarget => write!(f, "Test Target"),
        }
    }
}

/// Zone durations expressed as fractions of current max.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneFractions {
    pub co2_base: f64,
    pub co2_recovery: f64,
    pub o2_start: f64,
    pub o2_peak: f64,
    pub test_target: f64,
}

/// Base fractions for beginners.
pub const BEGINNER_FRACTIONS: ZoneFractions = ZoneFractions {
    co2_base: 0.40,
    co2_recovery: 0.30,
    o2_start: 0.35,
    o2_peak: 0.75,
    test_target: 0.90,
};

/// Base fractions for intermediate athletes.
pub const INTERMEDIATE_FRACTIONS: ZoneFractions = ZoneFractions {
    co2_base: 0.50,
    co2_recovery: 0.40,
    o2_start: 0.40,
    o2_peak: 0.85,
    test_target: 0.95,
};

/// Base fractions for advanced athletes.
pub const ADVANCED_FRACTIONS: ZoneFractions = ZoneFractions {
    co2_base: 0.60,
    co2_recovery: 0.50,
    o2_start: 0.45,
    o2_peak: 0.90,
    test_target: 1.00,
};

impl ZoneFractions {
    /// Base table for an experience level.
    pub fn for_level(level: ExperienceLevel) -> Self {
        match level {
            ExperienceLevel::Beginner => BEGINNER_FRACTIONS,
            ExperienceLevel::Intermediate => INTERMEDIATE_FRACTIONS,
            ExperienceLevel::Advanced => ADVANCED_FRACTIONS,
        }
    }

    /// Scale every training fraction by `multiplier`.
    ///
    /// The test target is left alone so the performance test always tracks
    /// the same share of current max.
    pub fn adapted(&self, multiplier: f64) -> Self {
        Self {
            co2_base: self.co2_base * multiplier,
            co2_recovery: self.co2_recovery * multiplier,
            o2_start: self.o2_start * multiplier,
            o2_peak: self.o2_peak * multiplier,
            test_target: self.test_target,
        }
    }
}

/// Multiplier applied to training zones for a given progress rate.
///
/// Comparisons are strict: exactly 5% or 15% keeps the neutral 1.0.
pub fn adaptation_multiplier(progress_rate: f64) -> f64 {
    if progress_rate > AGGRESSIVE_THRESHOLD {
        AGGRESSIVE_MULTIPLIER
    } else if progress_rate < CONSERVATIVE_THRESHOLD {
        CONSERVATIVE_MULTIPLIER
    } else {
        1.0
    }
}

/// Personalized zone durations in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSet {
    pub co2_base: u32,
    pub co2_recovery: u32,
    pub o2_start: u32,
    pub o2_peak: u32,
    pub test_target: u32,
}

impl ZoneSet {
    /// Calculate zones for a profile.
    pub fn from_profile(profile: &AthleteProfile) -> Self {
        let multiplier = adaptation_multiplier(profile.progress_rate());
        let fractions = ZoneFractions::for_level(profile.experience_level()).adapted(multiplier);
        let max = profile.current_max() as f64;

        // Fractional seconds are discarded.
        let seconds = |fraction: f64| -> u32 { (max * fraction) as u32 };

        let zones = Self {
            co2_base: seconds(fractions.co2_base),
            co2_recovery: seconds(fractions.co2_recovery),
            o2_start: seconds(fractions.o2_start),
            o2_peak: seconds(fractions.o2_peak),
            test_target: seconds(fractions.test_target),
        };

        tracing::debug!(
            progress_rate = profile.progress_rate(),
            multiplier,
            ?zones,
            "Calculated training zones"
        );

        zones
    }

    /// Duration of a zone in seconds.
    pub fn get(&self, zone: ZoneName) -> u32 {
        match zone {
            ZoneName::Co2Base => self.co2_base,
            ZoneName::Co2Recovery => self.co2_recovery,
            ZoneName::O2Start => self.o2_start,
            ZoneName::O2Peak => self.o2_peak,
            ZoneName::TestTarget => self.test_target,
        }
    }

    /// Duration of a zone looked up by key; unknown keys yield 0.
    pub fn get_by_key(&self, key: &str) -> u32 {
        ZoneName::from_key(key).map_or(0, |zone| self.get(zone))
    }

    /// All zones with their durations, in display order.
    pub fn all_zones(&self) -> Vec<(ZoneName, u32)> {
        ZoneName::ALL
            .into_iter()
            .map(|zone| (zone, self.get(zone)))
            .collect()
    }
}

//! Training session types.
//!
//! A session is an ordered list of timed rounds. Each round is one hold
//! followed by one rest period.

use super::time::format_time;

/// Which generator produced a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionCategory {
    /// CO2 table with long rests and light holds
    Co2Recovery,
    /// CO2 table with shrinking rests
    Co2Standard,
    /// O2 table with growing holds
    O2Efficiency,
    /// Ramp up to a max attempt
    PerformanceTest,
    /// Relaxation and technique drills
    Technique,
}

impl SessionCategory {
    /// Whether the session pushes toward maximal effort.
    pub fn is_maximal(&self) -> bool {
        matches!(
            self,
            SessionCategory::PerformanceTest
                | SessionCategory::O2Efficiency
                | SessionCategory::Co2Standard
        )
    }
}

impl std::fmt::Display for SessionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionCategory::Co2Recovery => write!(f, "CO2 Recovery"),
            SessionCategory::Co2Standard => write!(f, "CO2 Standard"),
            SessionCategory::O2Efficiency => write!(f, "O2 Efficiency"),
            SessionCategory::PerformanceTest => write!(f, "Performance Test"),
            SessionCategory::Technique => write!(f, "Technique"),
        }
    }
}

/// Variant of a CO2 tolerance table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Co2Variant {
    /// 6 rounds, rest 150s down to 60s
    Recovery,
    /// 7 rounds, rest 120s down to 30s
    Standard,
}

impl std::fmt::Display for Co2Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Co2Variant::Recovery => write!(f, "Recovery"),
            Co2Variant::Standard => write!(f, "Standard"),
        }
    }
}

/// Hold time for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldTarget {
    /// Hold for exactly this long
    Fixed { seconds: u32 },
    /// Hold for at least this long (max attempts)
    AtLeast { seconds: u32 },
}

impl HoldTarget {
    pub fn fixed(seconds: u32) -> Self {
        HoldTarget::Fixed { seconds }
    }

    pub fn at_least(seconds: u32) -> Self {
        HoldTarget::AtLeast { seconds }
    }

    /// Target duration in seconds.
    pub fn seconds(&self) -> u32 {
        match self {
            HoldTarget::Fixed { seconds } | HoldTarget::AtLeast { seconds } => *seconds,
        }
    }
}

impl std::fmt::Display for HoldTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HoldTarget::Fixed { seconds } => write!(f, "{}", format_time(*seconds as i64)),
            HoldTarget::AtLeast { seconds } => write!(f, "{}+", format_time(*seconds as i64)),
        }
    }
}

/// Rest after a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestPeriod {
    /// Timed rest before the next hold
    Timed { seconds: u32 },
    /// Session complete, rest until fully recovered
    Complete,
}

impl RestPeriod {
    pub fn timed(seconds: u32) -> Self {
        RestPeriod::Timed { seconds }
    }

    /// Timed rest in seconds, if any.
    pub fn seconds(&self) -> Option<u32> {
        match self {
            RestPeriod::Timed { seconds } => Some(*seconds),
            RestPeriod::Complete => None,
        }
    }
}

impl std::fmt::Display for RestPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestPeriod::Timed { seconds } => write!(f, "{}", format_time(*seconds as i64)),
            RestPeriod::Complete => write!(f, "Complete"),
        }
    }
}

/// Target rate of perceived exertion (RPE) on a 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffortRange {
    pub low: u8,
    pub high: u8,
}

impl EffortRange {
    /// Range between two RPE values.
    pub const fn range(low: u8, high: u8) -> Self {
        Self { low, high }
    }

    /// Single RPE value.
    pub const fn exactly(value: u8) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    /// Plain-language description of the range.
    pub fn description(&self) -> Option<&'static str> {
        match (self.low, self.high) {
            (4, 6) => Some("Light to Moderate"),
            (5, 6) => Some("Moderate"),
            (6, 7) | (6, 8) => Some("Moderate to Hard"),
            (7, 8) | (8, 8) => Some("Hard"),
            (8, 9) => Some("Hard to Very Hard"),
            (9, 9) => Some("Very Hard"),
            (9, 10) => Some("Very Hard to Maximum"),
            _ => None,
        }
    }
}

impl std::fmt::Display for EffortRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.low == self.high {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}-{}", self.low, self.high)
        }
    }
}

/// One hold followed by one rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// 1-based position within the session
    pub index: u32,
    /// Hold target
    pub hold: HoldTarget,
    /// Rest after the hold
    pub rest: RestPeriod,
    /// Target RPE
    pub target_effort: EffortRange,
    /// Technique focus (technique sessions only)
    pub focus: Option<String>,
}

/// A generated training session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Display label, e.g. "Adaptive CO2 Table (Recovery)"
    pub kind: String,
    /// Generator that produced the session
    pub category: SessionCategory,
    /// Short summary
    pub description: String,
    /// Rounds in execution order
    pub rounds: Vec<Round>,
    /// Coaching notes
    pub notes: String,
}

impl Session {
    /// Whether any round carries a technique focus.
    pub fn has_focus(&self) -> bool {
        self.rounds.iter().any(|round| round.focus.is_some())
    }

    /// Sum of holds and timed rests in seconds.
    pub fn total_duration_seconds(&self) -> u32 {
        self.rounds
            .iter()
            .map(|round| round.hold.seconds() + round.rest.seconds().unwrap_or(0))
            .sum()
    }

    /// Distinct effort ranges in first-use order.
    pub fn efforts(&self) -> Vec<EffortRange> {
        let mut efforts: Vec<EffortRange> = Vec::new();
        for round in &self.rounds {
            if !efforts.contains(&round.target_effort) {
                efforts.push(round.target_effort);
            }
        }
        efforts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_and_rest_display() {
        assert_eq!(HoldTarget::fixed(52).to_string(), "0:52");
        assert_eq!(HoldTarget::at_least(108).to_string(), "1:48+");
        assert_eq!(RestPeriod::timed(150).to_string(), "2:30");
        assert_eq!(RestPeriod::Complete.to_string(), "Complete");
    }

    #[test]
    fn test_effort_display_and_description() {
        assert_eq!(EffortRange::range(7, 8).to_string(), "7-8");
        assert_eq!(EffortRange::exactly(9).to_string(), "9");
        assert_eq!(EffortRange::range(9, 10).description(), Some("Very Hard to Maximum"));
        assert_eq!(EffortRange::range(1, 2).description(), None);
    }

    #[test]
    fn test_session_totals() {
        let session = Session {
            kind: "Test".to_string(),
            category: SessionCategory::PerformanceTest,
            description: String::new(),
            rounds: vec![
                Round {
                    index: 1,
                    hold: HoldTarget::fixed(60),
                    rest: RestPeriod::timed(120),
                    target_effort: EffortRange::range(6, 7),
                    focus: None,
                },
                Round {
                    index: 2,
                    hold: HoldTarget::at_least(90),
                    rest: RestPeriod::Complete,
                    target_effort: EffortRange::range(6, 7),
                    focus: None,
                },
            ],
            notes: String::new(),
        };

        assert_eq!(session.total_duration_seconds(), 270);
        assert_eq!(session.efforts(), vec![EffortRange::range(6, 7)]);
        assert!(!session.has_focus());
    }
}

//! Assessment of a new max against the previously recorded one.

/// How a new max compares to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTrend {
    /// More than 15% better
    Excellent,
    /// More than 5% better
    Good,
    /// Better, but by 5% or less
    Steady,
    /// No improvement
    Stalled,
}

impl ProgressTrend {
    /// Classify an improvement percentage (15.0 = 15%).
    pub fn from_percent(percent: f64) -> Self {
        if percent > 15.0 {
            ProgressTrend::Excellent
        } else if percent > 5.0 {
            ProgressTrend::Good
        } else if percent > 0.0 {
            ProgressTrend::Steady
        } else {
            ProgressTrend::Stalled
        }
    }

    /// Advice shown after updating the max.
    pub fn advice(&self) -> &'static str {
        match self {
            ProgressTrend::Excellent => {
                "Excellent progress! Next plan will use aggressive progression."
            }
            ProgressTrend::Good => "Good progress! Continuing current progression rate.",
            ProgressTrend::Steady => "Steady progress! May adjust for better gains.",
            ProgressTrend::Stalled => "Consider technique focus or recovery week.",
        }
    }
}

/// Change from `old_max` to `new_max`, in seconds and percent.
///
/// The percentage is 0.0 when there is no previous max to compare against.
pub fn improvement(old_max: u32, new_max: u32) -> (i64, f64) {
    let seconds = new_max as i64 - old_max as i64;
    let percent = if old_max > 0 {
        seconds as f64 / old_max as f64 * 100.0
    } else {
        0.0
    };
    (seconds, percent)
}

//! Training zones, weekly progression and progress assessment.

pub mod progression;
pub mod trend;
pub mod zones;

pub use progression::{progression_curve, weekly_multiplier};
pub use trend::{improvement, ProgressTrend};
pub use zones::{adaptation_multiplier, ZoneFractions, ZoneName, ZoneSet};

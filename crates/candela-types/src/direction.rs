//! Trend direction label.

use serde::{Deserialize, Serialize};

/// Trend direction reported by trend-following indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Price is trending up.
    Up,
    /// Price is trending down (also used when there is nothing to compare).
    #[default]
    Down,
}

impl Direction {
    /// Returns the direction as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Returns `Up` when `condition` holds, `Down` otherwise.
    #[must_use]
    pub const fn up_if(condition: bool) -> Self {
        if condition { Self::Up } else { Self::Down }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Percentage value object (0-100 scale) for wizard progress display.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a percentage from a completed/total ratio, rounded to the
    /// nearest whole percent.
    ///
    /// A zero total yields zero percent.
    pub fn from_ratio(completed: usize, total: usize) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        let pct = (completed as f64 / total as f64 * 100.0).round();
        Self::new(pct.clamp(0.0, 100.0) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

//! Clock period values with unit parsing and display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A clock period stored in nanoseconds.
///
/// Supports parsing from strings like "8ns", "7.75 ns", and bare numeric
/// values (interpreted as ns). The type itself is unchecked; positivity is
/// enforced by config validation and by the tuning controller's period
/// floor guard.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockPeriod(f64);

impl ClockPeriod {
    /// Creates a new clock period from a value in nanoseconds.
    pub fn from_ns(ns: f64) -> Self {
        Self(ns)
    }

    /// Returns the period in nanoseconds.
    pub fn ns(&self) -> f64 {
        self.0
    }

    /// Returns half the period in nanoseconds.
    ///
    /// Used to derive the max input/output delay constraints.
    pub fn half_ns(&self) -> f64 {
        self.0 / 2.0
    }

    /// Returns the equivalent clock frequency in megahertz.
    pub fn frequency_mhz(&self) -> f64 {
        1_000.0 / self.0
    }

    /// Returns a new period offset by `delta` nanoseconds.
    pub fn offset_ns(&self, delta: f64) -> Self {
        Self(self.0 + delta)
    }

    /// Returns true if the period is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
}

impl fmt::Debug for ClockPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockPeriod({self})")
    }
}

impl fmt::Display for ClockPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ns", self.0)
    }
}

/// Error type for parsing clock period strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePeriodError {
    /// The input string that failed to parse.
    pub input: String,
}

impl fmt::Display for ParsePeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid clock period: '{}'", self.input)
    }
}

impl std::error::Error for ParsePeriodError {}

impl FromStr for ClockPeriod {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParsePeriodError {
            input: s.to_string(),
        };

        let lower = s.to_ascii_lowercase();
        let num = lower.strip_suffix("ns").map(str::trim).unwrap_or(&lower);
        let val: f64 = num.parse().map_err(|_| err())?;
        Ok(ClockPeriod(val))
    }
}

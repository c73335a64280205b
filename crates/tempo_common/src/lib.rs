//! Shared foundational types for the tempo flow driver.
//!
//! This crate provides the clock-period value type threaded through the
//! tuning loop and the stage discriminant shared by every layer above it.

#![warn(missing_docs)]

pub mod clock_period;
pub mod stage;

pub use clock_period::{ClockPeriod, ParsePeriodError};
pub use stage::StageKind;

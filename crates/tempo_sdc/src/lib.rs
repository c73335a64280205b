//! Timing constraint file emission.
//!
//! The toolchain consumes a Tcl constraint file defining the clock, its
//! uncertainty, and I/O delays. tempo rewrites this file in place on every
//! clock-period adjustment; it is the single hand-off point between the
//! tuning loop and the external tools.

#![warn(missing_docs)]

pub mod writer;

pub use writer::{ConstraintFile, SdcError};

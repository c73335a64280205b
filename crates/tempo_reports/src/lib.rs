//! Report parsers for the tempo flow driver.
//!
//! The setup-slack parser ([`slack`]) is the feedback input of the tuning
//! loop: it extracts the first `Path 1: MET`/`Path 1: VIOLATED` verdict and
//! slack value from a timing report. The hold, area, and power readers are
//! display-only; their values never feed back into tuning.
//!
//! All parsers distinguish three outcomes: a reading, "information absent"
//! (`Ok(None)`), and a malformed report (`Err`).

#![warn(missing_docs)]

pub mod area;
pub mod error;
pub mod hold;
pub mod power;
pub mod slack;

pub use area::{parse_area_report, read_area_report};
pub use error::ReportError;
pub use hold::{parse_hold_slack, read_hold_slack};
pub use power::{parse_power_report, read_power_report, PowerReport};
pub use slack::{parse_setup_report, read_setup_report, SlackReading, Verdict};

//! Flow stage discriminant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two externally-run flow stages tempo tunes against.
///
/// The stage determines the timing-report path, the rerun command variant,
/// and the scaling applied to the adjustment thresholds (place-and-route
/// reports slack in units three orders of magnitude smaller than synthesis).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// Logic synthesis.
    Synthesis,
    /// Place-and-route.
    PlaceAndRoute,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageKind::Synthesis => write!(f, "Synthesis"),
            StageKind::PlaceAndRoute => write!(f, "Place-and-Route"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(format!("{}", StageKind::Synthesis), "Synthesis");
        assert_eq!(format!("{}", StageKind::PlaceAndRoute), "Place-and-Route");
    }

    #[test]
    fn serde_names() {
        assert_eq!(
            serde_json::to_string(&StageKind::Synthesis).unwrap(),
            "\"synthesis\""
        );
        assert_eq!(
            serde_json::to_string(&StageKind::PlaceAndRoute).unwrap(),
            "\"place_and_route\""
        );
    }
}

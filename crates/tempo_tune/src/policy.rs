//! Clock-period adjustment policy.
//!
//! A pure slack-to-step mapping: slack far from zero warrants a coarse
//! period swing, slack near a boundary a fine correction. This is a
//! heuristic controller, not an optimizer: it carries no convergence
//! guarantee, so the tuning loop layers an iteration budget and an
//! oscillation detector on top of it.

use tempo_common::{ClockPeriod, StageKind};

use crate::thresholds::AdjustmentThresholds;

/// Computes the next clock period from the current one and a slack reading.
///
/// Positive slack beyond `low_high_positive` shortens the period (speed up);
/// negative slack lengthens it (slow down). Slack in
/// `[0, low_high_positive]` returns the period unchanged; the acceptance
/// band is decided upstream by the controller, which never calls this for
/// in-band readings. Step sizes are in nanoseconds and identical for both
/// stages; only the breakpoints are stage-scaled.
///
/// The branch order is significant at band boundaries and must not be
/// reordered.
pub fn adjust(period: ClockPeriod, slack: f64, stage: StageKind) -> ClockPeriod {
    let t = AdjustmentThresholds::for_stage(stage);

    if slack > t.low_high_positive {
        let step = if slack > t.high_positive {
            2.0
        } else if slack <= t.mid_high_positive {
            0.25
        } else if slack <= t.mid_high_positive + 50.0 {
            // The +50 offset stays unscaled for place-and-route.
            0.5
        } else {
            1.0
        };
        period.offset_ns(-step)
    } else if slack < 0.0 {
        let step = if slack < t.high_negative {
            2.0
        } else if slack >= t.low_high_negative {
            0.25
        } else if slack >= t.mid_high_negative {
            0.5
        } else {
            1.0
        };
        period.offset_ns(step)
    } else {
        period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adj_syn(period: f64, slack: f64) -> f64 {
        adjust(ClockPeriod::from_ns(period), slack, StageKind::Synthesis).ns()
    }

    fn adj_par(period: f64, slack: f64) -> f64 {
        adjust(ClockPeriod::from_ns(period), slack, StageKind::PlaceAndRoute).ns()
    }

    // -- synthesis scale, positive slack --

    #[test]
    fn far_positive_takes_coarse_step() {
        assert_eq!(adj_syn(8.0, 1500.0), 6.0);
    }

    #[test]
    fn boundary_at_1000_is_exclusive() {
        // Exactly 1000 falls through to the 1.0 step.
        assert_eq!(adj_syn(8.0, 1000.0), 7.0);
        assert_eq!(adj_syn(8.0, 1000.1), 6.0);
    }

    #[test]
    fn just_above_band_takes_finest_step() {
        assert_eq!(adj_syn(8.0, 101.0), 7.75);
        assert_eq!(adj_syn(8.0, 150.0), 7.75);
    }

    #[test]
    fn boundary_at_150_is_inclusive() {
        assert_eq!(adj_syn(8.0, 150.0), 7.75);
        assert_eq!(adj_syn(8.0, 150.1), 7.5);
    }

    #[test]
    fn mid_band_takes_half_step() {
        assert_eq!(adj_syn(8.0, 175.0), 7.5);
        assert_eq!(adj_syn(8.0, 200.0), 7.5);
    }

    #[test]
    fn boundary_at_200_is_inclusive() {
        assert_eq!(adj_syn(8.0, 200.0), 7.5);
        assert_eq!(adj_syn(8.0, 200.1), 7.0);
    }

    #[test]
    fn upper_mid_band_takes_unit_step() {
        assert_eq!(adj_syn(8.0, 500.0), 7.0);
    }

    // -- synthesis scale, acceptance band --

    #[test]
    fn in_band_slack_is_identity() {
        assert_eq!(adj_syn(8.0, 0.0), 8.0);
        assert_eq!(adj_syn(8.0, 50.0), 8.0);
        assert_eq!(adj_syn(8.0, 100.0), 8.0);
    }

    // -- synthesis scale, negative slack --

    #[test]
    fn far_negative_takes_coarse_step() {
        assert_eq!(adj_syn(8.0, -1500.0), 10.0);
    }

    #[test]
    fn boundary_at_minus_1000_is_exclusive() {
        // Exactly -1000 falls through to the 1.0 step: 8 -> 9.
        assert_eq!(adj_syn(8.0, -1000.0), 9.0);
        assert_eq!(adj_syn(8.0, -1000.1), 10.0);
    }

    #[test]
    fn slightly_negative_takes_finest_step() {
        assert_eq!(adj_syn(8.0, -1.0), 8.25);
        assert_eq!(adj_syn(8.0, -50.0), 8.25);
    }

    #[test]
    fn boundary_at_minus_50_is_inclusive() {
        assert_eq!(adj_syn(8.0, -50.0), 8.25);
        assert_eq!(adj_syn(8.0, -50.1), 8.5);
    }

    #[test]
    fn mid_negative_takes_half_step() {
        assert_eq!(adj_syn(8.0, -75.0), 8.5);
        assert_eq!(adj_syn(8.0, -100.0), 8.5);
    }

    #[test]
    fn boundary_at_minus_100_is_inclusive() {
        assert_eq!(adj_syn(8.0, -100.0), 8.5);
        assert_eq!(adj_syn(8.0, -100.1), 9.0);
    }

    #[test]
    fn deep_negative_takes_unit_step() {
        assert_eq!(adj_syn(8.0, -500.0), 9.0);
    }

    // -- place-and-route scale --

    #[test]
    fn par_breakpoints_scaled() {
        assert_eq!(adj_par(8.0, 1.5), 6.0); // > 1.0 -> -2
        assert_eq!(adj_par(8.0, 0.12), 7.75); // <= 0.15 -> -0.25
        assert_eq!(adj_par(8.0, -0.04), 8.25); // >= -0.05 -> +0.25
        assert_eq!(adj_par(8.0, -0.07), 8.5); // >= -0.1 -> +0.5
        assert_eq!(adj_par(8.0, -0.5), 9.0); // deep band -> +1
        assert_eq!(adj_par(8.0, -1.5), 10.0); // < -1.0 -> +2
    }

    #[test]
    fn par_band_between_scaled_breakpoints() {
        // 0.15 < slack <= 1.0: caught by the unscaled +50 offset band.
        assert_eq!(adj_par(8.0, 0.5), 7.5);
    }

    #[test]
    fn par_in_band_is_identity() {
        assert_eq!(adj_par(8.0, 0.05), 8.0);
        assert_eq!(adj_par(8.0, 0.1), 8.0);
        assert_eq!(adj_par(8.0, 0.0), 8.0);
    }

    #[test]
    fn steps_are_not_stage_scaled() {
        // Same slack band, same 2ns step on both scales.
        assert_eq!(adj_syn(8.0, 2000.0), 6.0);
        assert_eq!(adj_par(8.0, 2.0), 6.0);
    }

    // -- purity --

    #[test]
    fn adjust_is_idempotent_in_inputs() {
        let a = adj_syn(8.0, 175.0);
        let b = adj_syn(8.0, 175.0);
        assert_eq!(a, b);
    }
}

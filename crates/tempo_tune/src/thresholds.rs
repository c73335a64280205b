//! Slack breakpoints for the adjustment policy.

use tempo_common::StageKind;

/// The six named slack breakpoints driving clock-period adjustment.
///
/// Synthesis reports slack in units in the hundreds; place-and-route
/// reports the same quantity three orders of magnitude smaller, so its
/// table is the synthesis table with every breakpoint divided by 1000.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdjustmentThresholds {
    /// Slack above this gets the coarsest speed-up step.
    pub high_positive: f64,
    /// Upper bound of the finest speed-up band.
    pub mid_high_positive: f64,
    /// Slack must exceed this for any speed-up at all.
    pub low_high_positive: f64,
    /// Slack below this gets the coarsest slow-down step.
    pub high_negative: f64,
    /// Lower bound of the middle slow-down band.
    pub mid_high_negative: f64,
    /// Lower bound of the finest slow-down band.
    pub low_high_negative: f64,
}

/// The synthesis-scale breakpoint table.
pub const SYNTHESIS_THRESHOLDS: AdjustmentThresholds = AdjustmentThresholds {
    high_positive: 1000.0,
    mid_high_positive: 150.0,
    low_high_positive: 100.0,
    high_negative: -1000.0,
    mid_high_negative: -100.0,
    low_high_negative: -50.0,
};

impl AdjustmentThresholds {
    /// Returns the breakpoint table for a stage.
    pub fn for_stage(stage: StageKind) -> Self {
        match stage {
            StageKind::Synthesis => SYNTHESIS_THRESHOLDS,
            StageKind::PlaceAndRoute => SYNTHESIS_THRESHOLDS.scaled(1.0 / 1000.0),
        }
    }

    /// Returns the table with every breakpoint multiplied by `factor`.
    fn scaled(self, factor: f64) -> Self {
        Self {
            high_positive: self.high_positive * factor,
            mid_high_positive: self.mid_high_positive * factor,
            low_high_positive: self.low_high_positive * factor,
            high_negative: self.high_negative * factor,
            mid_high_negative: self.mid_high_negative * factor,
            low_high_negative: self.low_high_negative * factor,
        }
    }
}

//! Constraint file rendering and writing.

use std::path::Path;

use tempo_common::ClockPeriod;

/// Default clock uncertainty in nanoseconds.
const DEFAULT_UNCERTAINTY_NS: f64 = 0.100;

/// Errors that can occur when writing a constraint file.
#[derive(Debug, thiserror::Error)]
pub enum SdcError {
    /// The constraint file could not be written.
    #[error("failed to write constraint file: {0}")]
    IoError(#[from] std::io::Error),
}

/// A renderable timing constraint file.
///
/// Emits `create_clock` with the current period, a fixed clock uncertainty,
/// max input/output delays of half the period (setup checks), and zero min
/// delays (hold checks). The `clk_o` output port is excluded from output
/// delay constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintFile {
    /// The clock period to constrain against.
    pub period: ClockPeriod,
    /// Clock uncertainty in nanoseconds.
    pub uncertainty_ns: f64,
}

impl ConstraintFile {
    /// Creates a constraint file for the given period with the default
    /// clock uncertainty.
    pub fn new(period: ClockPeriod) -> Self {
        Self {
            period,
            uncertainty_ns: DEFAULT_UNCERTAINTY_NS,
        }
    }

    /// Renders the Tcl constraint content.
    pub fn render(&self) -> String {
        let period = self.period.ns();
        let half = self.period.half_ns();
        format!(
            "# constraints.tcl\n\
             #\n\
             # Design timing constraints, rewritten by tempo on every\n\
             # clock-period adjustment.\n\
             #\n\n\
             create_clock -name clk -period {period} [get_ports clk]\n\
             set_clock_uncertainty {:.3} [get_clocks clk]\n\n\
             # Input/output delays are half the period for clock setup checks\n\
             set_input_delay  {half} -max -clock [get_clocks clk] [all_inputs]\n\
             set_output_delay {half} -max -clock [get_clocks clk] [remove_from_collection [all_outputs] [get_ports clk_o]]\n\n\
             # Input/output delays are 0 for clock hold checks\n\
             set_input_delay  0.0 -min -clock [get_clocks clk] [all_inputs]\n\
             set_output_delay 0.0 -min -clock [get_clocks clk] [remove_from_collection [all_outputs] [get_ports clk_o]]\n",
            self.uncertainty_ns
        )
    }

    /// Writes the rendered constraints to `path`, replacing any existing
    /// content.
    pub fn write_to(&self, path: &Path) -> Result<(), SdcError> {
        std::fs::write(path, self.render())?;
        Ok(())
    }
}

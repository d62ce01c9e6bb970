use crate::prelude::{DesignError, SolveResult};
use serde::{Deserialize, Serialize};

/// The three electrical targets a horn design starts from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DesignInput {
    pub frequency_mhz: f64,
    pub impedance_ohms: f64,
    pub gain_dbi: f64,
}

impl DesignInput {
    pub fn new(frequency_mhz: f64, impedance_ohms: f64, gain_dbi: f64) -> Self {
        Self {
            frequency_mhz,
            impedance_ohms,
            gain_dbi,
        }
    }

    /// Checks the targets against the validity floor of the design formulas.
    ///
    /// Below 12 dBi the aperture-efficiency approximation still evaluates but
    /// no longer describes a physically meaningful horn, so the solver
    /// refuses to produce dimensions.
    pub fn validate(&self) -> SolveResult<()> {
        if self.frequency_mhz <= 0.0 || self.impedance_ohms <= 0.0 || self.gain_dbi <= 0.0 {
            return Err(DesignError::InvalidParameters);
        }
        if self.gain_dbi < crate::solver::GAIN_FLOOR_DBI {
            return Err(DesignError::GainTooLow);
        }
        Ok(())
    }
}

pub use crate::design::{DesignInput, HornDimensions};
pub use crate::report::{format_length, Language, LengthUnit};

/// Common error type for the design calculation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    #[error("frequency, impedance and gain must all be positive")]
    InvalidParameters,
    #[error("gain below the 12 dBi validity floor of the horn approximations")]
    GainTooLow,
    #[error("no pin height realizes {0} ohm with this waveguide cross-section")]
    ImpedanceUnachievable(f64),
}

pub type SolveResult<T> = Result<T, DesignError>;

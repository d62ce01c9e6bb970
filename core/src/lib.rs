//! Closed-form design calculator for pyramidal horn antennas.
//!
//! The solver maps three electrical targets (operating frequency, input
//! impedance, gain) onto the physical dimensions of a pyramidal horn and its
//! rectangular feeding waveguide. Everything is standard antenna-handbook
//! approximation; there is no field simulation and no iteration.

pub mod design;
pub mod prelude;
pub mod report;
pub mod solver;

pub use prelude::{DesignError, SolveResult};
pub use solver::solve;

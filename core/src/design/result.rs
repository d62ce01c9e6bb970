use serde::{Deserialize, Serialize};

/// Derived dimensions of a pyramidal horn and its feeding waveguide.
///
/// All lengths are millimeters, band edges are MHz, beamwidths are degrees.
/// The record is produced atomically by the solver and never mutated; it is
/// the entire contract the report and schematic layers depend on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HornDimensions {
    /// Free-space wavelength at the operating frequency.
    pub wavelength: f64,
    /// Broad internal wall of the waveguide.
    pub waveguide_a: f64,
    /// Narrow internal wall of the waveguide.
    pub waveguide_b: f64,
    /// Waveguide throat length, `pin_to_rear_wall + pin_to_throat`.
    pub waveguide_c: f64,
    /// Lower edge of the single-mode operating band, MHz.
    pub waveguide_band_low: f64,
    /// Upper edge of the single-mode operating band, MHz.
    pub waveguide_band_high: f64,
    /// Guided wavelength of the dominant mode.
    pub waveguide_lambda_g: f64,
    /// Horn mouth dimension in the wide plane.
    pub aperture_wide: f64,
    /// Horn mouth dimension in the narrow plane.
    pub aperture_narrow: f64,
    /// Minimum axial horn length from the phase-error bounds.
    pub horn_length_r: f64,
    /// Flare slant length, wide plane (D1).
    pub horn_slant_d1: f64,
    /// Flare slant length, narrow plane (D2).
    pub horn_slant_d2: f64,
    /// Exciting-pin height above the waveguide floor.
    pub pin_height: f64,
    /// Pin to the closed rear wall of the waveguide (l1).
    pub pin_to_rear_wall: f64,
    /// Pin to the horn throat (l2).
    pub pin_to_throat: f64,
    /// Half-power beamwidth, horizontal plane, degrees.
    pub beamwidth_h: f64,
    /// Half-power beamwidth, vertical plane, degrees.
    pub beamwidth_v: f64,
}

impl HornDimensions {
    /// Usable waveguide band as a display string, edges rounded to MHz.
    pub fn bandwidth_label(&self) -> String {
        format!(
            "{}-{} MHz",
            self.waveguide_band_low.round(),
            self.waveguide_band_high.round()
        )
    }

    /// Estimated field of view, beamwidths rounded to whole degrees.
    pub fn field_of_view(&self) -> String {
        format!(
            "{}° × {}°",
            self.beamwidth_h.round(),
            self.beamwidth_v.round()
        )
    }
}

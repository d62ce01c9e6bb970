use crate::design::{DesignInput, HornDimensions};
use crate::prelude::{DesignError, SolveResult};
use log::debug;
use std::f64::consts::PI;

/// Speed of light expressed in mm·MHz (km/s numerically).
pub const SPEED_OF_LIGHT_MM_MHZ: f64 = 299_792.458;

/// Below this gain the aperture-efficiency approximation breaks down.
pub const GAIN_FLOOR_DBI: f64 = 12.0;

/// Gain lost to aperture efficiency relative to the ideal aperture, dB.
const APERTURE_EFFICIENCY_LOSS_DB: f64 = 2.0;

/// Empirical gain-to-aperture slope for pyramidal horns, dB per decade.
const GAIN_SLOPE_DB_PER_DECADE: f64 = 9.5;

/// Fixed wide:narrow aspect ratio of the horn mouth.
const APERTURE_ASPECT_RATIO: f64 = 1.5;

/// Empirical scaling of the quarter-guided-wavelength backshort.
const BACKSHORT_FACTOR: f64 = 0.6;

/// Correction margin applied to the impedance-matched pin height.
const PIN_HEIGHT_MARGIN: f64 = 1.05;

/// Beamwidth constants of the horn-pattern approximation, degrees.
const BEAMWIDTH_FACTOR_H: f64 = 51.0;
const BEAMWIDTH_FACTOR_V: f64 = 67.0;

/// Computes the horn and waveguide dimensions for the given targets.
///
/// Pure single-shot arithmetic: the same targets always produce the same
/// record, and no partial record is ever returned. Fails before any
/// computation when a target is non-positive or the gain sits below
/// [`GAIN_FLOOR_DBI`], and mid-chain only when the requested impedance
/// pushes the pin-height equation out of the `acos` domain.
pub fn solve(input: &DesignInput) -> SolveResult<HornDimensions> {
    input.validate()?;

    let effective_gain = input.gain_dbi - APERTURE_EFFICIENCY_LOSS_DB;
    let wavelength = SPEED_OF_LIGHT_MM_MHZ / input.frequency_mhz;

    // Waveguide cross-section sized from the free-space wavelength, and the
    // dominant-mode band its cutoff allows.
    let waveguide_a = 0.75 * wavelength;
    let waveguide_b = waveguide_a / 2.0;
    let waveguide_band_high = SPEED_OF_LIGHT_MM_MHZ / (0.6 * wavelength / 0.75);
    let waveguide_band_low = SPEED_OF_LIGHT_MM_MHZ / (0.9 * wavelength / 0.75);

    // Aperture area required for the effective gain, then split at the fixed
    // wide:narrow ratio.
    let aperture_area =
        10f64.powf(effective_gain / GAIN_SLOPE_DB_PER_DECADE) * wavelength.powi(2) / (2.0 * PI);
    let aperture_narrow = (aperture_area / APERTURE_ASPECT_RATIO).sqrt();
    let aperture_wide = APERTURE_ASPECT_RATIO * aperture_narrow;

    // Phase-error length bound in each plane; the horn must satisfy the
    // stricter of the two. The aperture/waveguide pairings here and in the
    // slant lengths below are deliberately crossed between planes; keep the
    // pairing as-is pending domain-expert review.
    let length_bound_wide = aperture_wide * (aperture_wide - waveguide_b) / (2.0 * wavelength);
    let length_bound_narrow = aperture_narrow * (aperture_narrow - waveguide_a) / (3.0 * wavelength);
    let horn_length_r = length_bound_wide.max(length_bound_narrow);

    let half_step_narrow = (aperture_narrow - waveguide_a) / 2.0;
    let horn_slant_d1 = (horn_length_r.powi(2) + half_step_narrow.powi(2)).sqrt();
    let half_step_wide = (aperture_wide - waveguide_b) / 2.0;
    let horn_slant_d2 = (horn_length_r.powi(2) + half_step_wide.powi(2)).sqrt();

    // Dominant-mode dispersion relation.
    let waveguide_lambda_g =
        wavelength / (1.0 - (wavelength / (2.0 * waveguide_a)).powi(2)).sqrt();

    // Pin height from the impedance-matching condition. The acos argument
    // leaves [-1, 1] for large impedance requests, which no pin height can
    // realize with this cross-section.
    let wavenumber = 2.0 * PI / wavelength;
    let match_term = 1.0
        - (input.impedance_ohms * waveguide_a * waveguide_b * wavenumber
            / (120.0 * waveguide_lambda_g))
            .sqrt();
    if !(-1.0..=1.0).contains(&match_term) {
        return Err(DesignError::ImpedanceUnachievable(input.impedance_ohms));
    }
    let pin_height = match_term.acos() / wavenumber * PIN_HEIGHT_MARGIN;

    let pin_to_rear_wall = 0.25 * waveguide_lambda_g * BACKSHORT_FACTOR;
    let guide_ratio = wavelength / waveguide_a;
    let pin_to_throat = 4.6 / wavenumber * (guide_ratio * guide_ratio - 1.0).sqrt();
    let waveguide_c = pin_to_rear_wall + pin_to_throat;

    let beamwidth_v = BEAMWIDTH_FACTOR_V * wavelength / aperture_narrow;
    let beamwidth_h = BEAMWIDTH_FACTOR_H * wavelength / aperture_wide;

    debug!(
        "horn design: lambda {:.3} mm, aperture {:.1}x{:.1} mm, R {:.1} mm",
        wavelength, aperture_wide, aperture_narrow, horn_length_r
    );

    Ok(HornDimensions {
        wavelength,
        waveguide_a,
        waveguide_b,
        waveguide_c,
        waveguide_band_low,
        waveguide_band_high,
        waveguide_lambda_g,
        aperture_wide,
        aperture_narrow,
        horn_length_r,
        horn_slant_d1,
        horn_slant_d2,
        pin_height,
        pin_to_rear_wall,
        pin_to_throat,
        beamwidth_h,
        beamwidth_v,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hydrogen_line() -> DesignInput {
        DesignInput::new(1420.4, 50.0, 20.2)
    }

    #[test]
    fn rejects_non_positive_inputs() {
        for input in [
            DesignInput::new(-1.0, 50.0, 20.0),
            DesignInput::new(1420.4, -50.0, 20.0),
            DesignInput::new(1420.4, 50.0, 0.0),
        ] {
            assert_eq!(solve(&input), Err(DesignError::InvalidParameters));
        }
    }

    #[test]
    fn rejects_gain_below_floor() {
        for gain in [0.5, 5.0, 11.999] {
            let input = DesignInput::new(1420.4, 50.0, gain);
            assert_eq!(solve(&input), Err(DesignError::GainTooLow));
        }
    }

    #[test]
    fn accepts_gain_exactly_at_floor() {
        let input = DesignInput::new(1420.4, 50.0, 12.0);
        assert!(solve(&input).is_ok());
    }

    #[test]
    fn reference_scenario_matches_expected_geometry() {
        let dims = solve(&hydrogen_line()).unwrap();

        assert!((dims.wavelength - 211.062).abs() < 1e-3);
        assert!((dims.waveguide_a - 0.75 * dims.wavelength).abs() < 1e-9);
        assert!((dims.waveguide_b - dims.waveguide_a / 2.0).abs() < 1e-9);

        // Band edges reduce to fixed multiples of the operating frequency.
        assert!((dims.waveguide_band_low - 1420.4 / 1.2).abs() < 1e-6);
        assert!((dims.waveguide_band_high - 1420.4 / 0.8).abs() < 1e-6);
        assert!(dims.waveguide_band_low < dims.waveguide_band_high);

        // The guided wavelength must exceed free space, and the narrow-plane
        // beam is always the wider one for a 1.5:1 mouth.
        assert!(dims.waveguide_lambda_g > dims.wavelength);
        assert!(dims.beamwidth_v > dims.beamwidth_h);
        assert!(dims.beamwidth_h > 0.0);

        // Slants are hypotenuses over the axial length.
        assert!(dims.horn_slant_d1 >= dims.horn_length_r);
        assert!(dims.horn_slant_d2 >= dims.horn_length_r);
        assert!((dims.waveguide_c - (dims.pin_to_rear_wall + dims.pin_to_throat)).abs() < 1e-9);
        assert!(dims.pin_height > 0.0 && dims.pin_height < dims.waveguide_b);
    }

    #[test]
    fn aperture_holds_fixed_aspect_ratio() {
        for gain in [12.0, 15.5, 20.2, 25.0] {
            let dims = solve(&DesignInput::new(2400.0, 75.0, gain)).unwrap();
            assert!((dims.aperture_wide / dims.aperture_narrow - 1.5).abs() < 1e-9);
        }
    }

    #[test]
    fn identical_targets_yield_identical_records() {
        let first = solve(&hydrogen_line()).unwrap();
        let second = solve(&hydrogen_line()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn raising_frequency_shrinks_the_geometry() {
        let low = solve(&DesignInput::new(1000.0, 50.0, 18.0)).unwrap();
        let high = solve(&DesignInput::new(1100.0, 50.0, 18.0)).unwrap();

        assert!(high.wavelength < low.wavelength);
        assert!(high.waveguide_a < low.waveguide_a);
        assert!(high.waveguide_b < low.waveguide_b);
        assert!(high.aperture_wide < low.aperture_wide);
        assert!(high.aperture_narrow < low.aperture_narrow);
        assert!(high.waveguide_lambda_g < low.waveguide_lambda_g);
    }

    #[test]
    fn unreachable_impedance_is_reported() {
        // The matching term depends only on impedance for this geometry and
        // drops below -1 somewhere above 360 ohm.
        let input = DesignInput::new(1420.4, 1000.0, 20.2);
        assert_eq!(
            solve(&input),
            Err(DesignError::ImpedanceUnachievable(1000.0))
        );
    }
}

use crate::design::{DesignInput, HornDimensions};
use crate::report::format::{format_length, LengthUnit};
use crate::report::locale::{label, Language};
use std::fmt::Write;

const PANEL_RULE_WIDTH: usize = 61;

/// Renders the multi-panel text report for a finished design.
///
/// Pure formatting over an already-computed record; the solver itself never
/// prints anything.
pub fn render(
    input: &DesignInput,
    dims: &HornDimensions,
    unit: LengthUnit,
    lang: Language,
) -> String {
    let rule = "-".repeat(PANEL_RULE_WIDTH);
    let fmt = |value: f64| format_length(value, unit);
    let mut out = String::new();

    // Header panel: targets and the pattern estimates.
    let _ = writeln!(out, "{}", label(lang, "title"));
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "{} f: {} MHz",
        label(lang, "frequency"),
        input.frequency_mhz
    );
    let _ = writeln!(out, "{} λ: {}", label(lang, "wavelength"), fmt(dims.wavelength));
    let _ = writeln!(out, "{}: {} dBi", label(lang, "gain"), input.gain_dbi);
    let _ = writeln!(
        out,
        "{} Zo: {} Ω",
        label(lang, "impedance"),
        input.impedance_ohms
    );
    let _ = writeln!(
        out,
        "{}: {}°",
        label(lang, "beamwidth_h"),
        dims.beamwidth_h.round()
    );
    let _ = writeln!(
        out,
        "{}: {}°",
        label(lang, "beamwidth_v"),
        dims.beamwidth_v.round()
    );
    let _ = writeln!(
        out,
        "{}: {}",
        label(lang, "field_of_view"),
        dims.field_of_view()
    );
    let _ = writeln!(out, "{}", rule);

    // Waveguide panel.
    let _ = writeln!(
        out,
        "{} a×b×c: {} × {} × {}",
        label(lang, "waveguide_dimensions"),
        fmt(dims.waveguide_a),
        fmt(dims.waveguide_b),
        fmt(dims.waveguide_c)
    );
    let _ = writeln!(
        out,
        "{} ΔF: {}",
        label(lang, "waveguide_band"),
        dims.bandwidth_label()
    );
    let _ = writeln!(
        out,
        "{} λg: {}",
        label(lang, "waveguide_lambda_g"),
        fmt(dims.waveguide_lambda_g)
    );
    let _ = writeln!(out, "{}", rule);

    // Horn flare panel.
    let _ = writeln!(
        out,
        "{} Ap×Bp: {} × {}",
        label(lang, "aperture"),
        fmt(dims.aperture_wide),
        fmt(dims.aperture_narrow)
    );
    let _ = writeln!(
        out,
        "{} R: {}",
        label(lang, "horn_length_r"),
        fmt(dims.horn_length_r)
    );
    let _ = writeln!(
        out,
        "{} D1: {}",
        label(lang, "horn_slant_d1"),
        fmt(dims.horn_slant_d1)
    );
    let _ = writeln!(
        out,
        "{} D2: {}",
        label(lang, "horn_slant_d2"),
        fmt(dims.horn_slant_d2)
    );
    let _ = writeln!(out, "{}", rule);

    // Feed panel.
    let _ = writeln!(out, "{} h: {}", label(lang, "pin_height"), fmt(dims.pin_height));
    let _ = writeln!(
        out,
        "{} l1: {}",
        label(lang, "pin_to_rear_wall"),
        fmt(dims.pin_to_rear_wall)
    );
    let _ = writeln!(
        out,
        "{} l2: {}",
        label(lang, "pin_to_throat"),
        fmt(dims.pin_to_throat)
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    #[test]
    fn report_carries_every_panel() {
        let input = DesignInput::new(1420.4, 50.0, 20.2);
        let dims = solve(&input).unwrap();
        let report = render(&input, &dims, LengthUnit::Millimeters, Language::En);

        assert!(report.starts_with("Pyramidal Horn antenna\n"));
        assert_eq!(report.matches(&"-".repeat(61)).count(), 4);
        assert!(report.contains("f: 1420.4 MHz"));
        assert!(report.contains("Zo: 50 Ω"));
        assert!(report.contains("Waveguide dimensions a×b×c:"));
        assert!(report.contains("Horn length R:"));
        assert!(report.contains("l2:"));
    }

    #[test]
    fn unit_selector_changes_rendering_only() {
        let input = DesignInput::new(1420.4, 50.0, 20.2);
        let dims = solve(&input).unwrap();
        let mm = render(&input, &dims, LengthUnit::Millimeters, Language::En);
        let m = render(&input, &dims, LengthUnit::Meters, Language::En);

        assert!(mm.contains(" mm"));
        assert!(m.contains(" m\n"));
        // The record itself is untouched by formatting.
        assert_eq!(dims, solve(&input).unwrap());
    }

    #[test]
    fn russian_labels_are_used_when_requested() {
        let input = DesignInput::new(1420.4, 50.0, 20.2);
        let dims = solve(&input).unwrap();
        let report = render(&input, &dims, LengthUnit::Millimeters, Language::Ru);
        assert!(report.starts_with("Пирамидальная рупорная антенна\n"));
        assert!(report.contains("Длина рупора R:"));
    }
}

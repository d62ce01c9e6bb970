use serde::{Deserialize, Serialize};

/// Display unit for lengths. Stored values stay in millimeters; the unit
/// only affects string rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LengthUnit {
    #[default]
    Millimeters,
    Centimeters,
    Meters,
}

impl LengthUnit {
    /// Maps the 0/1/2 display selector; anything else falls back to mm.
    pub fn from_selector(selector: u8) -> Self {
        match selector {
            1 => Self::Centimeters,
            2 => Self::Meters,
            _ => Self::Millimeters,
        }
    }
}

/// Renders a millimeter value in the requested unit with fixed precision.
pub fn format_length(value_mm: f64, unit: LengthUnit) -> String {
    match unit {
        LengthUnit::Millimeters => format!("{:.1} mm", value_mm),
        LengthUnit::Centimeters => format!("{:.2} cm", value_mm / 10.0),
        LengthUnit::Meters => format!("{:.3} m", value_mm / 1000.0),
    }
}

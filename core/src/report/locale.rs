use serde::{Deserialize, Serialize};

/// Report label language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    /// Parses an ISO-ish language code; unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "ru" => Self::Ru,
            _ => Self::En,
        }
    }
}

/// Looks up the report label for a result field name.
///
/// Keys follow the `HornDimensions` field names plus the report-only keys
/// `title`, `gain_alert`, `frequency`, `gain`, `impedance`,
/// `waveguide_dimensions`, `aperture` and `field_of_view`. Unknown keys
/// return the key itself so a missing entry stays visible in the output.
pub fn label<'a>(lang: Language, key: &'a str) -> &'a str {
    match lang {
        Language::En => label_en(key),
        Language::Ru => label_ru(key),
    }
}

fn label_en(key: &str) -> &str {
    match key {
        "title" => "Pyramidal Horn antenna",
        "gain_alert" => "If the gain is less than 12 dBi, the calculation is incorrect",
        "frequency" => "Mean frequency of the range",
        "wavelength" => "Wavelength",
        "gain" => "Antenna Gain",
        "impedance" => "Antenna input impedance",
        "beamwidth_h" => "Major lobe HPBW in the horizontal plane H ΔΦ",
        "beamwidth_v" => "Major lobe HPBW in the vertical plane V ΔΦ",
        "field_of_view" => "Estimated Field of View",
        "waveguide_dimensions" => "Waveguide dimensions",
        "waveguide_band" => "Waveguide bandwidth",
        "waveguide_lambda_g" => "Wavelength in the waveguide",
        "aperture" => "Horn aperture dimensions",
        "horn_length_r" => "Horn length",
        "horn_slant_d1" => "Horn wide plane length",
        "horn_slant_d2" => "Horn narrow plane length",
        "pin_height" => "The exciting pin height",
        "pin_to_rear_wall" => "Distance from the pin to the rear wall of the waveguide",
        "pin_to_throat" => "Distance from the pin to the horn throat",
        other => other,
    }
}

fn label_ru(key: &str) -> &str {
    match key {
        "title" => "Пирамидальная рупорная антенна",
        "gain_alert" => "Если усиление меньше 12 дБи, расчёт некорректен",
        "frequency" => "Средняя частота диапазона",
        "wavelength" => "Длина волны",
        "gain" => "Коэффициент усиления антенны",
        "impedance" => "Входное сопротивление антенны",
        "beamwidth_h" => "Ширина главного лепестка в горизонтальной плоскости H ΔΦ",
        "beamwidth_v" => "Ширина главного лепестка в вертикальной плоскости V ΔΦ",
        "field_of_view" => "Расчётное поле обзора",
        "waveguide_dimensions" => "Размеры волновода",
        "waveguide_band" => "Рабочая полоса волновода",
        "waveguide_lambda_g" => "Длина волны в волноводе",
        "aperture" => "Размеры раскрыва рупора",
        "horn_length_r" => "Длина рупора",
        "horn_slant_d1" => "Длина рупора в широкой плоскости",
        "horn_slant_d2" => "Длина рупора в узкой плоскости",
        "pin_height" => "Высота возбуждающего штыря",
        "pin_to_rear_wall" => "Расстояние от штыря до задней стенки волновода",
        "pin_to_throat" => "Расстояние от штыря до горловины рупора",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_field_labels_per_language() {
        assert_eq!(label(Language::En, "horn_length_r"), "Horn length");
        assert_eq!(label(Language::Ru, "horn_length_r"), "Длина рупора");
    }

    #[test]
    fn unknown_code_defaults_to_english() {
        assert_eq!(Language::from_code("ru"), Language::Ru);
        assert_eq!(Language::from_code("RU"), Language::Ru);
        assert_eq!(Language::from_code("de"), Language::En);
    }

    #[test]
    fn unknown_key_echoes_back() {
        assert_eq!(label(Language::En, "no_such_field"), "no_such_field");
    }
}

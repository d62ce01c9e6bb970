use anyhow::Context;
use horncore::prelude::DesignInput;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A design request as supplied by the caller, before validation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DesignRequest {
    pub frequency_mhz: f64,
    pub impedance_ohms: f64,
    pub gain_dbi: f64,
}

impl DesignRequest {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading design request {}", path_ref.display()))?;
        let request: DesignRequest = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing design request {}", path_ref.display()))?;
        Ok(request)
    }

    pub fn from_args(frequency_mhz: f64, impedance_ohms: f64, gain_dbi: f64) -> Self {
        Self {
            frequency_mhz,
            impedance_ohms,
            gain_dbi,
        }
    }

    pub fn to_input(&self) -> DesignInput {
        DesignInput::new(self.frequency_mhz, self.impedance_ohms, self.gain_dbi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn request_from_args_produces_design_input() {
        let request = DesignRequest::from_args(1420.4, 50.0, 20.2);
        let input = request.to_input();
        assert_eq!(input.frequency_mhz, 1420.4);
        assert_eq!(input.gain_dbi, 20.2);
    }

    #[test]
    fn request_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"frequency_mhz: 2450.0\nimpedance_ohms: 75.0\ngain_dbi: 15.0\n")
            .unwrap();
        let path = temp.into_temp_path();
        let request = DesignRequest::load(&path).unwrap();
        assert_eq!(request.frequency_mhz, 2450.0);
        assert_eq!(request.impedance_ohms, 75.0);
    }
}

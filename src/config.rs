//! Control layout and display settings, loadable from TOML.
//!
//! Every field has a default matching the classroom setup, so an empty file
//! (or no file at all) gives the standard panels.

use crate::core::{PanelError, PI};
use crate::operations::{FixedGate, RotationFamily};
use crate::panels::{Choice, ChoiceStyle, FloatSlider};
use crate::visualization::ascii::{MAX_SIZE, MIN_SIZE};
use crate::visualization::RenderConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphericalControls {
    pub latitude: FloatSlider,
    pub longitude: FloatSlider,
}

impl Default for SphericalControls {
    fn default() -> Self {
        Self {
            latitude: FloatSlider::new("latitude (in °)", -90.0, 90.0)
                .with_step(10.0)
                .with_value(90.0)
                .with_precision(0),
            longitude: FloatSlider::new("longitude (in °)", -180.0, 180.0)
                .with_step(10.0)
                .with_value(0.0)
                .with_precision(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractionalControls {
    pub theta_factor: FloatSlider,
    pub phi_factor: FloatSlider,
    /// Print the bound circuit under the amplitudes.
    pub show_circuit: bool,
}

impl Default for FractionalControls {
    fn default() -> Self {
        Self {
            theta_factor: FloatSlider::new("θ/π", 0.0, 1.0),
            phi_factor: FloatSlider::new("φ/π", 0.0, 2.0),
            show_circuit: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedGateControls {
    pub gate: Choice<FixedGate>,
}

impl Default for FixedGateControls {
    fn default() -> Self {
        Self {
            gate: Choice::new(
                "Gate:",
                ChoiceStyle::ToggleButtons,
                FixedGate::ALL.to_vec(),
                FixedGate::I,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationControls {
    pub family: Choice<RotationFamily>,
    /// Angle as a multiple of π.
    pub theta_factor: FloatSlider,
}

impl Default for RotationControls {
    fn default() -> Self {
        Self {
            family: Choice::new(
                "Gate:",
                ChoiceStyle::RadioButtons,
                RotationFamily::ALL.to_vec(),
                RotationFamily::Rz,
            ),
            theta_factor: FloatSlider::new("θ", 0.0, 2.0 * PI),
        }
    }
}

/// Optional Z-basis sampling shown under the preparation panels.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementConfig {
    /// Number of shots; 0 disables sampling.
    pub shots: usize,
    /// Fixed sampler seed; derived from the state when absent.
    pub seed: Option<u64>,
}

/// Full configuration for a panel session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelsConfig {
    pub spherical: SphericalControls,
    pub fractional: FractionalControls,
    pub fixed_gate: FixedGateControls,
    pub rotation: RotationControls,
    pub render: RenderConfig,
    pub measurement: MeasurementConfig,
}

impl PanelsConfig {
    /// Reads and validates a TOML file.
    pub fn load(path: &Path) -> Result<Self, PanelError> {
        let source_name = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| config_error(&source_name, e))?;
        Self::from_toml_str(&text, &source_name)
    }

    /// Parses and validates a TOML document. `source_name` is only used in errors.
    pub fn from_toml_str(text: &str, source_name: &str) -> Result<Self, PanelError> {
        let config: PanelsConfig =
            toml::from_str(text).map_err(|e| config_error(source_name, e))?;
        config.validate().map_err(|message| config_error(source_name, message))?;
        Ok(config)
    }

    /// Serializes the effective configuration.
    pub fn to_toml_string(&self) -> Result<String, PanelError> {
        toml::to_string_pretty(self).map_err(|e| config_error("<inline>", e))
    }

    fn validate(&self) -> Result<(), String> {
        for slider in [
            &self.spherical.latitude,
            &self.spherical.longitude,
            &self.fractional.theta_factor,
            &self.fractional.phi_factor,
            &self.rotation.theta_factor,
        ] {
            check_slider(slider)?;
        }
        check_choice(&self.fixed_gate.gate)?;
        check_choice(&self.rotation.family)?;
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.render.size) {
            return Err(format!(
                "render size {} is outside [{}, {}]",
                self.render.size, MIN_SIZE, MAX_SIZE
            ));
        }
        Ok(())
    }
}

fn config_error(source_name: &str, message: impl ToString) -> PanelError {
    PanelError::Config {
        source_name: source_name.to_string(),
        message: message.to_string(),
    }
}

fn check_slider(slider: &FloatSlider) -> Result<(), String> {
    if !(slider.min.is_finite() && slider.max.is_finite()) || slider.min > slider.max {
        return Err(format!(
            "slider '{}' has invalid range [{}, {}]",
            slider.description, slider.min, slider.max
        ));
    }
    if !(slider.min..=slider.max).contains(&slider.value) {
        return Err(format!(
            "slider '{}' default {} is outside [{}, {}]",
            slider.description, slider.value, slider.min, slider.max
        ));
    }
    if slider.step.is_some_and(|s| !(s.is_finite() && s > 0.0)) {
        return Err(format!("slider '{}' step must be positive", slider.description));
    }
    Ok(())
}

fn check_choice<T: PartialEq + std::fmt::Display>(choice: &Choice<T>) -> Result<(), String> {
    if !choice.options.contains(&choice.value) {
        return Err(format!(
            "selector '{}' default {} is not one of its options",
            choice.description, choice.value
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_classroom_controls() {
        let config = PanelsConfig::default();
        assert_eq!(config.spherical.latitude.value, 90.0);
        assert_eq!(config.spherical.latitude.step, Some(10.0));
        assert_eq!(config.spherical.longitude.readout(), "0");
        assert_eq!(config.fixed_gate.gate.value, FixedGate::I);
        assert_eq!(config.rotation.family.value, RotationFamily::Rz);
        assert_eq!(config.rotation.family.style, ChoiceStyle::RadioButtons);
        assert_eq!(config.measurement.shots, 0);
    }

    #[test]
    fn test_empty_document_gives_defaults() -> Result<(), PanelError> {
        assert_eq!(PanelsConfig::from_toml_str("", "<test>")?, PanelsConfig::default());
        Ok(())
    }

    #[test]
    fn test_partial_override() -> Result<(), PanelError> {
        let text = r#"
            [fractional]
            show_circuit = true

            [measurement]
            shots = 256
            seed = 42

            [rotation.family]
            description = "Axis:"
            style = "toggle_buttons"
            options = ["RX", "RY"]
            value = "RX"
        "#;
        let config = PanelsConfig::from_toml_str(text, "<test>")?;
        assert!(config.fractional.show_circuit);
        assert_eq!(config.measurement, MeasurementConfig { shots: 256, seed: Some(42) });
        assert_eq!(config.rotation.family.options, vec![RotationFamily::Rx, RotationFamily::Ry]);
        assert_eq!(config.spherical, SphericalControls::default());
        Ok(())
    }

    #[test]
    fn test_invalid_default_rejected() {
        let text = r#"
            [fixed_gate.gate]
            description = "Gate:"
            style = "toggle_buttons"
            options = ["X", "Y"]
            value = "H"
        "#;
        let err = PanelsConfig::from_toml_str(text, "<test>").unwrap_err();
        assert!(matches!(err, PanelError::Config { .. }), "{}", err);
    }

    #[test]
    fn test_oversized_render_rejected() {
        let err = PanelsConfig::from_toml_str("[render]\nsize = 4611686018427387904\n", "<test>")
            .unwrap_err();
        let names_size = matches!(
            err,
            PanelError::Config { ref message, .. } if message.contains("render size")
        );
        assert!(names_size, "{}", err);
        assert!(PanelsConfig::from_toml_str("[render]\nsize = 1\n", "<test>").is_err());
        assert!(PanelsConfig::from_toml_str("[render]\nsize = 64\n", "<test>").is_ok());
    }

    #[test]
    fn test_roundtrip_through_file() -> Result<(), PanelError> {
        let mut config = PanelsConfig::default();
        config.measurement.shots = 100;
        let text = config.to_toml_string()?;

        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(text.as_bytes())?;
        assert_eq!(PanelsConfig::load(file.path())?, config);
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let err = PanelsConfig::load(Path::new("/nonexistent/bloch.toml")).unwrap_err();
        assert!(matches!(
            err,
            PanelError::Config { ref source_name, .. } if source_name.contains("bloch.toml")
        ));
    }
}

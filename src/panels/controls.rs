//! Descriptors for the interactive controls bound to each panel.
//!
//! The controls own range clamping and step snapping, so panel handlers can
//! assume every value they receive is in range.

use crate::core::PanelError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A numeric range slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatSlider {
    /// Label shown next to the slider.
    pub description: String,
    pub min: f64,
    pub max: f64,
    /// Snapping increment measured from `min`; `None` disables snapping.
    pub step: Option<f64>,
    /// Current (initially default) value.
    pub value: f64,
    /// Decimal places shown in the readout.
    pub readout_precision: usize,
}

impl FloatSlider {
    /// Creates a slider over `[min, max]` starting at `min`, with a 0.1 step and
    /// a two-decimal readout.
    pub fn new(description: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            description: description.into(),
            min,
            max,
            step: Some(0.1),
            value: min,
            readout_precision: 2,
        }
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = self.constrain(value);
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.readout_precision = precision;
        self
    }

    /// Clamps `raw` to the range and snaps it to the step grid.
    /// Non-finite input leaves the current value.
    pub fn constrain(&self, raw: f64) -> f64 {
        if !raw.is_finite() {
            return self.value;
        }
        let clamped = raw.clamp(self.min, self.max);
        let snapped = match self.step {
            Some(step) if step > 0.0 => self.min + ((clamped - self.min) / step).round() * step,
            _ => clamped,
        };
        // Strip accumulated binary noise so 7 * 0.1 reads back as 0.7
        let rounded = (snapped * 1e10).round() / 1e10;
        rounded.clamp(self.min, self.max)
    }

    /// Moves the slider to `raw` (constrained) and returns the stored value.
    pub fn set(&mut self, raw: f64) -> f64 {
        self.value = self.constrain(raw);
        self.value
    }

    /// The current value formatted with the readout precision.
    pub fn readout(&self) -> String {
        format!("{:.*}", self.readout_precision, self.value)
    }
}

/// How a single-choice control is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceStyle {
    ToggleButtons,
    RadioButtons,
}

/// A single-choice selector over a fixed option set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice<T> {
    pub description: String,
    pub style: ChoiceStyle,
    pub options: Vec<T>,
    /// Current (initially default) selection.
    pub value: T,
}

impl<T> Choice<T>
where
    T: Copy + PartialEq + FromStr<Err = PanelError> + std::fmt::Display,
{
    pub fn new(
        description: impl Into<String>,
        style: ChoiceStyle,
        options: Vec<T>,
        value: T,
    ) -> Self {
        Self { description: description.into(), style, options, value }
    }

    /// Selects the option whose label is `label`.
    ///
    /// # Returns
    /// * `Err(PanelError::UnknownLabel)` if the label does not parse or is not
    ///   one of this control's options; the selection is unchanged.
    pub fn select(&mut self, label: &str) -> Result<T, PanelError> {
        let parsed: T = label.parse()?;
        if !self.options.contains(&parsed) {
            return Err(PanelError::unknown_label("option", label.trim()));
        }
        self.value = parsed;
        Ok(parsed)
    }

    /// Option labels separated by `|`, e.g. `I|X|Y|Z|H`.
    pub fn option_labels(&self) -> String {
        self.options.iter().map(ToString::to_string).collect::<Vec<_>>().join("|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{FixedGate, RotationFamily};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_slider_clamps_and_snaps() {
        let slider = FloatSlider::new("latitude", -90.0, 90.0).with_step(10.0);
        assert_abs_diff_eq!(slider.constrain(123.0), 90.0);
        assert_abs_diff_eq!(slider.constrain(-95.0), -90.0);
        assert_abs_diff_eq!(slider.constrain(44.0), 40.0);
        assert_abs_diff_eq!(slider.constrain(46.0), 50.0);
    }

    #[test]
    fn test_slider_snap_is_exact_for_decimal_steps() {
        let slider = FloatSlider::new("θ", 0.0, 2.0);
        assert_eq!(slider.constrain(0.7), 0.7);
        assert_eq!(slider.constrain(0.73), 0.7);
        assert_eq!(format!("{}", slider.constrain(0.3)), "0.3");
    }

    #[test]
    fn test_slider_rejects_non_finite() {
        let mut slider = FloatSlider::new("φ", 0.0, 2.0).with_value(1.0);
        assert_eq!(slider.set(f64::NAN), 1.0);
        assert_eq!(slider.readout(), "1.00");
    }

    #[test]
    fn test_choice_select() -> Result<(), PanelError> {
        let mut gates =
            Choice::new("Gate:", ChoiceStyle::ToggleButtons, FixedGate::ALL.to_vec(), FixedGate::I);
        assert_eq!(gates.select("h")?, FixedGate::H);
        assert_eq!(gates.value, FixedGate::H);
        assert_eq!(gates.option_labels(), "I|X|Y|Z|H");
        assert!(gates.select("T").is_err());
        assert_eq!(gates.value, FixedGate::H);
        Ok(())
    }

    #[test]
    fn test_choice_restricted_options() {
        let only_rx = vec![RotationFamily::Rx];
        let mut families =
            Choice::new("Gate:", ChoiceStyle::RadioButtons, only_rx, RotationFamily::Rx);
        let err = families.select("RY").unwrap_err();
        assert_eq!(err, PanelError::unknown_label("option", "RY"));
    }
}

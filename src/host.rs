// src/host.rs

//! Text host for the panels.
//!
//! A [`Session`] plays the part of the notebook: it owns the controls built
//! from a [`PanelsConfig`], feeds clamped control values to the panels,
//! renders what they return and keeps the rotation panel's state between
//! invocations.

use crate::config::PanelsConfig;
use crate::core::PanelError;
use crate::panels::{
    FixedGatePanel, FractionalPanel, PanelOutput, PreparationOutput, PreparationTemplate,
    ReferenceStates, RotationPanel, RotationPanelState, SphericalPanel,
};
use crate::simulation::Simulator;
use crate::visualization::{AsciiRenderer, Renderer};
use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{info, warn};

pub const HELP: &str = "\
commands:
  spherical <lat> <lon>   prepare from latitude/longitude in degrees
  fractional <t> <p>      prepare from θ = t·π, φ = p·π
  gate <I|X|Y|Z|H>        apply a fixed gate to |0⟩, |+⟩, |r⟩
  rotate <RX|RY|RZ> [θ]   apply a rotation by θ·π (θ defaults to the slider)
  state                   show control values
  help                    show this text
  quit                    leave";

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Spherical { latitude: f64, longitude: f64 },
    Fractional { theta_factor: f64, phi_factor: f64 },
    Gate { label: String },
    Rotate { family: String, theta_factor: Option<f64> },
    State,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = PanelError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        let command = match (name.as_str(), args.as_slice()) {
            ("spherical" | "sph", [lat, lon]) => Command::Spherical {
                latitude: parse_number(lat)?,
                longitude: parse_number(lon)?,
            },
            ("fractional" | "frac", [t, p]) => Command::Fractional {
                theta_factor: parse_number(t)?,
                phi_factor: parse_number(p)?,
            },
            ("gate", [label]) => Command::Gate { label: label.to_string() },
            ("rotate" | "rot", [family]) => Command::Rotate {
                family: family.to_string(),
                theta_factor: None,
            },
            ("rotate" | "rot", [family, theta]) => Command::Rotate {
                family: family.to_string(),
                theta_factor: Some(parse_number(theta)?),
            },
            ("state", []) => Command::State,
            ("help" | "?", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            ("", _) => {
                return Err(PanelError::InvalidOperation {
                    message: "empty command".to_string(),
                });
            }
            _ => {
                return Err(PanelError::InvalidOperation {
                    message: format!("cannot parse '{}' (try 'help')", line.trim()),
                });
            }
        };
        Ok(command)
    }
}

fn parse_number(word: &str) -> Result<f64, PanelError> {
    word.parse::<f64>().map_err(|_| PanelError::InvalidOperation {
        message: format!("'{}' is not a number", word),
    })
}

/// Controls, panels and rotation memory for one interactive run.
#[derive(Debug, Clone)]
pub struct Session {
    config: PanelsConfig,
    simulator: Simulator,
    spherical: SphericalPanel,
    fractional: FractionalPanel,
    fixed_gate: FixedGatePanel,
    rotation: RotationPanel,
    renderer: AsciiRenderer,
    rotation_state: RotationPanelState,
}

impl Session {
    pub fn new(config: PanelsConfig) -> Self {
        let simulator = Simulator::new();
        let references = ReferenceStates::new();
        Self {
            simulator,
            spherical: SphericalPanel::new(PreparationTemplate::new(), simulator),
            fractional: FractionalPanel::new(PreparationTemplate::new(), simulator)
                .with_circuit_diagram(config.fractional.show_circuit),
            fixed_gate: FixedGatePanel::new(references.clone(), simulator),
            rotation: RotationPanel::new(references, simulator),
            renderer: AsciiRenderer::with_config(config.render.clone()),
            rotation_state: RotationPanelState::default(),
            config,
        }
    }

    /// Starts from a given rotation memory instead of "nothing selected yet".
    pub fn with_rotation_state(mut self, state: RotationPanelState) -> Self {
        self.rotation_state = state;
        self
    }

    /// Current control values.
    pub fn config(&self) -> &PanelsConfig {
        &self.config
    }

    pub fn rotation_state(&self) -> &RotationPanelState {
        &self.rotation_state
    }

    /// Runs one command and returns the text to print.
    ///
    /// Control values and the rotation state are only updated when the
    /// command succeeds.
    pub fn handle(&mut self, command: &Command) -> Result<String, PanelError> {
        match command {
            Command::Spherical { latitude, longitude } => {
                let lat = self.config.spherical.latitude.constrain(*latitude);
                let lon = self.config.spherical.longitude.constrain(*longitude);
                let out = self.spherical.update(lat, lon)?;
                self.config.spherical.latitude.set(lat);
                self.config.spherical.longitude.set(lon);
                info!(lat, lon, "spherical panel updated");
                Ok(self.present_preparation(&out))
            }
            Command::Fractional { theta_factor, phi_factor } => {
                let t = self.config.fractional.theta_factor.constrain(*theta_factor);
                let p = self.config.fractional.phi_factor.constrain(*phi_factor);
                let out = self.fractional.update(t, p)?;
                self.config.fractional.theta_factor.set(t);
                self.config.fractional.phi_factor.set(p);
                info!(t, p, "fractional panel updated");
                Ok(self.present_preparation(&out))
            }
            Command::Gate { label } => {
                let gate = self.config.fixed_gate.gate.select(label)?;
                let out = self.fixed_gate.update(gate);
                info!(%gate, "fixed-gate panel updated");
                Ok(self.present(&out.output))
            }
            Command::Rotate { family, theta_factor } => {
                let family = self.config.rotation.family.select(family)?;
                let slider = &self.config.rotation.theta_factor;
                let requested = theta_factor.map_or(slider.value, |t| slider.constrain(t));
                let update = self.rotation.update(&self.rotation_state, family, requested);
                if update.reset && requested != 0.0 {
                    warn!(%family, requested, "rotation family changed; angle reset to 0");
                }
                self.config.rotation.theta_factor.set(update.slider_value);
                self.rotation_state = update.state;
                info!(%family, angle = update.angle_used, "rotation panel updated");

                let mut text = self.present(&update.output);
                if update.reset {
                    let _ = writeln!(text, "(family changed: θ reset to 0)");
                }
                Ok(text)
            }
            Command::State => Ok(self.describe_controls()),
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok(String::new()),
        }
    }

    fn present(&self, output: &PanelOutput) -> String {
        let mut text = self.renderer.render(&output.figure);
        for line in &output.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    fn present_preparation(&self, out: &PreparationOutput) -> String {
        let mut text = self.present(&out.output);
        let shots = self.config.measurement.shots;
        if shots > 0 {
            let [p0, p1] = out.state.probabilities();
            let _ = writeln!(text, "P(0) = {:.3}, P(1) = {:.3}", p0, p1);
            let counts = self.simulator.sample(&out.state, shots, self.config.measurement.seed);
            let _ = write!(text, "{}", counts);
        }
        text
    }

    fn describe_controls(&self) -> String {
        let c = &self.config;
        let mut text = String::new();
        for slider in [
            &c.spherical.latitude,
            &c.spherical.longitude,
            &c.fractional.theta_factor,
            &c.fractional.phi_factor,
            &c.rotation.theta_factor,
        ] {
            let _ = writeln!(text, "{:<18} {}", slider.description, slider.readout());
        }
        let gate = &c.fixed_gate.gate;
        let _ = writeln!(text, "{:<18} {} [{}]", "gate", gate.value, gate.option_labels());
        let family = &c.rotation.family;
        let _ = writeln!(text, "{:<18} {} [{}]", "rotation", family.value, family.option_labels());
        match self.rotation_state.previous_family {
            Some(family) => {
                let angle = self.rotation_state.current_angle;
                let _ = writeln!(text, "{:<18} {}({:?}π)", "last rotation", family, angle);
            }
            None => {
                let _ = writeln!(text, "{:<18} none", "last rotation");
            }
        }
        text
    }
}

/// Reads commands from `input` until EOF or `quit`, writing results to `output`.
/// Command errors are reported and the loop continues.
pub fn run_repl<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut output: W,
) -> Result<(), PanelError> {
    writeln!(output, "Bloch panels. Type 'help' for commands.")?;
    write!(output, "bloch> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "bloch> ")?;
            output.flush()?;
            continue;
        }
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => match session.handle(&command) {
                Ok(text) => write!(output, "{}", text)?,
                Err(e) => writeln!(output, "error: {}", e)?,
            },
            Err(e) => writeln!(output, "error: {}", e)?,
        }
        write!(output, "bloch> ")?;
        output.flush()?;
    }
    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::RotationFamily;

    fn rotate(family: &str, theta_factor: Option<f64>) -> Command {
        Command::Rotate { family: family.to_string(), theta_factor }
    }

    #[test]
    fn test_parse_commands() -> Result<(), PanelError> {
        assert_eq!(
            "spherical 45 -30".parse::<Command>()?,
            Command::Spherical { latitude: 45.0, longitude: -30.0 }
        );
        assert_eq!("rotate rx".parse::<Command>()?, rotate("rx", None));
        assert_eq!("ROT RY 0.5".parse::<Command>()?, rotate("RY", Some(0.5)));
        assert_eq!("quit".parse::<Command>()?, Command::Quit);
        assert!("spherical 45".parse::<Command>().is_err());
        assert!("fractional a b".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
        Ok(())
    }

    #[test]
    fn test_spherical_clamps_into_slider_range() -> Result<(), PanelError> {
        let mut session = Session::new(PanelsConfig::default());
        let text = session.handle(&Command::Spherical { latitude: 200.0, longitude: 13.0 })?;
        assert_eq!(session.config().spherical.latitude.value, 90.0);
        assert_eq!(session.config().spherical.longitude.value, 10.0);
        assert!(text.contains("a = 1.000+0.000i"), "{}", text);
        Ok(())
    }

    #[test]
    fn test_family_switch_moves_slider_to_zero() -> Result<(), PanelError> {
        let mut session = Session::new(PanelsConfig::default());
        session.handle(&rotate("RZ", Some(0.0)))?;
        session.handle(&rotate("RZ", Some(0.7)))?;
        assert_eq!(session.rotation_state().current_angle, 0.7);

        let text = session.handle(&rotate("RX", Some(0.7)))?;
        assert!(text.contains("evolved with RX(0.0π)"), "{}", text);
        assert_eq!(session.config().rotation.theta_factor.value, 0.0);

        // Follow-up reads the slider, which now shows 0
        session.handle(&rotate("RX", None))?;
        assert_eq!(
            *session.rotation_state(),
            RotationPanelState { previous_family: Some(RotationFamily::Rx), current_angle: 0.0 }
        );
        Ok(())
    }

    #[test]
    fn test_failed_command_keeps_state() -> Result<(), PanelError> {
        let mut session = Session::new(PanelsConfig::default());
        session.handle(&rotate("RY", None))?;
        let before = *session.rotation_state();
        assert!(session.handle(&rotate("RW", Some(1.0))).is_err());
        assert!(session.handle(&Command::Gate { label: "T".to_string() }).is_err());
        assert_eq!(*session.rotation_state(), before);
        Ok(())
    }

    #[test]
    fn test_oversized_render_config_still_renders() -> Result<(), PanelError> {
        let mut config = PanelsConfig::default();
        config.render.size = 1 << 62;
        let mut session = Session::new(config);
        let text = session.handle(&Command::Gate { label: "X".to_string() })?;
        assert!(text.contains("evolved with X"));
        Ok(())
    }

    #[test]
    fn test_measurement_lines_when_enabled() -> Result<(), PanelError> {
        let mut config = PanelsConfig::default();
        config.measurement.shots = 50;
        config.measurement.seed = Some(3);
        let mut session = Session::new(config);
        let text = session.handle(&Command::Fractional { theta_factor: 1.0, phi_factor: 0.0 })?;
        assert!(text.contains("P(0) = 0.000, P(1) = 1.000"), "{}", text);
        assert!(text.contains("50 shots"), "{}", text);
        Ok(())
    }

    #[test]
    fn test_repl_reports_errors_and_quits() -> Result<(), PanelError> {
        let mut session = Session::new(PanelsConfig::default());
        let input = "gate X\nbogus\n\nrotate RZ\nquit\ngate H\n";
        let mut output = Vec::new();
        run_repl(&mut session, input.as_bytes(), &mut output)?;
        let text = String::from_utf8_lossy(&output);
        assert!(text.contains("evolved with X"));
        assert!(text.contains("error: "));
        assert!(text.contains("evolved with RZ(0.0π)"));
        assert!(!text.contains("evolved with H"), "Commands after quit must not run");
        assert_eq!(session.config().fixed_gate.gate.value, crate::operations::FixedGate::X);
        Ok(())
    }
}

// src/lib.rs

//! `bloch_panels` - interactive Bloch-sphere panels for single-qubit states
//!
//! Four panels let a learner prepare a qubit from spherical angles or from
//! fractions of π, and watch fixed gates and parameterized rotations act on
//! the reference states |0⟩, |+⟩ and |r⟩. Each panel is a pure function from
//! control values to a figure and some text; the [`host`] module drives them
//! from a terminal.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;
pub mod visualization;
pub mod panels;
pub mod config;
pub mod host;

// Re-export the most common types for easier top-level use
pub use core::{PanelError, QubitState};
pub use operations::{Angle, FixedGate, Gate, Operation, Parameter, RotationFamily};
pub use circuits::{Circuit, CircuitBuilder, ParameterBinding};
pub use simulation::{MeasurementCounts, Simulator};
pub use validation::{check_normalization, same_up_to_global_phase, validate_state};
pub use visualization::{AsciiRenderer, BlochVector, Figure, Renderer};
pub use panels::{
    FixedGatePanel, FractionalPanel, PanelOutput, ReferenceStates, RotationPanel,
    RotationPanelState, SphericalPanel,
};
pub use config::PanelsConfig;
pub use host::{Command, Session};

// Example 1: Preparing a state from latitude and longitude
/// ```
/// use bloch_panels::{BlochVector, PanelError, SphericalPanel};
///
/// # fn main() -> Result<(), PanelError> {
/// // The equator at longitude 90° is |r⟩ = (|0⟩ + i|1⟩)/√2
/// let out = SphericalPanel::default().update(0.0, 90.0)?;
/// let vector = BlochVector::from(&out.state);
/// assert!(vector.approx_eq(&BlochVector::new(0.0, 1.0, 0.0), 1e-12));
/// assert_eq!(out.output.lines[0], "Amplitudes:");
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = ();

// Example 2: Switching rotation family resets the angle
/// ```
/// use bloch_panels::{RotationFamily, RotationPanel, RotationPanelState};
///
/// let panel = RotationPanel::default();
/// let mut state = RotationPanelState::default();
///
/// let first = panel.update(&state, RotationFamily::Ry, 0.5);
/// assert_eq!(first.angle_used, 0.0); // nothing selected before
/// state = first.state;
///
/// let second = panel.update(&state, RotationFamily::Ry, 0.5);
/// assert_eq!(second.angle_used, 0.5);
/// state = second.state;
///
/// let third = panel.update(&state, RotationFamily::Rx, 0.5);
/// assert_eq!(third.slider_value, 0.0);
/// ```
#[doc(hidden)]
const _: () = ();

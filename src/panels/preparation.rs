//! The one-qubit preparation circuit shared by the spherical and
//! fractional-π panels.

use super::PanelOutput;
use crate::circuits::{Circuit, CircuitBuilder, ParameterBinding};
use crate::core::{format_amplitude, PanelError, QubitState};
use crate::operations::{Angle, Operation, Parameter, RotationFamily};
use crate::simulation::Simulator;
use crate::visualization::{BlochPlot, BlochVector, Figure};
use tracing::debug;

/// The template `RY(θ) · P(φ)` acting on |0⟩, producing
/// `cos(θ/2)|0⟩ + e^(iφ) sin(θ/2)|1⟩`.
#[derive(Debug, Clone)]
pub struct PreparationTemplate {
    circuit: Circuit,
    theta: Parameter,
    phi: Parameter,
}

/// Result of evaluating the template at one pair of angles.
#[derive(Debug, Clone)]
pub struct PreparationOutput {
    /// The prepared state.
    pub state: QubitState,
    /// The bound copy of the template that produced it.
    pub circuit: Circuit,
    pub output: PanelOutput,
}

impl PreparationTemplate {
    pub fn new() -> Self {
        let theta = Parameter::new("θ");
        let phi = Parameter::new("φ");
        let circuit = CircuitBuilder::new()
            .add_op(Operation::Rotate {
                family: RotationFamily::Ry,
                angle: Angle::Symbol(theta.clone()),
            })
            .add_op(Operation::Phase { angle: Angle::Symbol(phi.clone()) })
            .build();
        Self { circuit, theta, phi }
    }

    /// The unbound template.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// A bound copy of the template at polar angle `theta` and phase `phi` (radians).
    pub fn bind(&self, theta: f64, phi: f64) -> Result<Circuit, PanelError> {
        let binding = ParameterBinding::new()
            .with(self.theta.clone(), theta)
            .with(self.phi.clone(), phi);
        self.circuit.assign_parameters(&binding)
    }

    /// Binds, evaluates and plots the template; the amplitude lines form the text output.
    pub(crate) fn prepare(
        &self,
        simulator: &Simulator,
        theta: f64,
        phi: f64,
    ) -> Result<PreparationOutput, PanelError> {
        let circuit = self.bind(theta, phi)?;
        let state = simulator.statevector(&circuit)?;
        debug!(theta, phi, %state, "prepared state");

        let plot = BlochPlot::new("qubit 0").with_vector("ψ", BlochVector::from_state(&state));
        let figure = Figure::single(plot);
        let lines = vec![
            "Amplitudes:".to_string(),
            format!("  a = {}", format_amplitude(state.a())),
            format!("  b = {}", format_amplitude(state.b())),
        ];
        Ok(PreparationOutput { state, circuit, output: PanelOutput { figure, lines } })
    }
}

impl Default for PreparationTemplate {
    fn default() -> Self {
        Self::new()
    }
}

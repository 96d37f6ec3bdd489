use super::preparation::{PreparationOutput, PreparationTemplate};
use crate::core::{PanelError, PI};
use crate::simulation::Simulator;

/// Prepares a state from angles given as fractions of π.
#[derive(Debug, Clone, Default)]
pub struct FractionalPanel {
    template: PreparationTemplate,
    simulator: Simulator,
    show_circuit: bool,
}

impl FractionalPanel {
    pub fn new(template: PreparationTemplate, simulator: Simulator) -> Self {
        Self { template, simulator, show_circuit: false }
    }

    /// Appends the bound circuit diagram to the text output.
    pub fn with_circuit_diagram(mut self, show: bool) -> Self {
        self.show_circuit = show;
        self
    }

    /// Computes the state for `θ = theta_factor·π` (∈ [0, π]) and `φ = phi_factor·π` (∈ [0, 2π]).
    pub fn update(
        &self,
        theta_factor: f64,
        phi_factor: f64,
    ) -> Result<PreparationOutput, PanelError> {
        let mut out = self.template.prepare(&self.simulator, theta_factor * PI, phi_factor * PI)?;
        // Factors echo as float literals (`1.0`, not `1`)
        let echo = format!("θ = {:?} π, φ = {:?} π", theta_factor, phi_factor);
        out.output.lines.insert(0, echo);
        if self.show_circuit {
            out.output.lines.extend(out.circuit.to_string().lines().map(str::to_string));
        }
        Ok(out)
    }
}

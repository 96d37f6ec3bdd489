use super::reference::ReferenceStates;
use super::PanelOutput;
use crate::core::QubitState;
use crate::operations::{FixedGate, Gate};
use crate::simulation::Simulator;
use crate::visualization::{BlochPlot, BlochVector, Figure};

/// Original and evolved reference vectors for one fixed gate.
#[derive(Debug, Clone)]
pub struct ComparisonOutput {
    pub gate: FixedGate,
    pub original: Vec<BlochVector>,
    pub evolved: Vec<BlochVector>,
    pub output: PanelOutput,
}

/// Applies a parameter-free gate to the reference states and shows
/// before/after spheres side by side.
#[derive(Debug, Clone, Default)]
pub struct FixedGatePanel {
    references: ReferenceStates,
    simulator: Simulator,
}

impl FixedGatePanel {
    pub fn new(references: ReferenceStates, simulator: Simulator) -> Self {
        Self { references, simulator }
    }

    pub fn update(&self, gate: FixedGate) -> ComparisonOutput {
        let evolved_states =
            self.simulator.evolve_all(self.references.states(), &Gate::Fixed(gate));
        let original = self.references.bloch_vectors().to_vec();
        let evolved: Vec<BlochVector> = evolved_states.iter().map(BlochVector::from).collect();

        let before = BlochPlot::new("original").with_vectors(ReferenceStates::labelled(&original));
        let after = BlochPlot::new(format!("evolved with {}", gate))
            .with_vectors(ReferenceStates::labelled(&evolved));
        let figure = Figure::single(before).with_plot(after);

        ComparisonOutput {
            gate,
            original,
            evolved,
            output: PanelOutput { figure, lines: Vec::new() },
        }
    }

    /// Applies `gate` to arbitrary states, e.g. to chain two invocations.
    pub fn evolve(&self, states: &[QubitState], gate: FixedGate) -> Vec<QubitState> {
        self.simulator.evolve_all(states, &Gate::Fixed(gate))
    }

    pub fn references(&self) -> &ReferenceStates {
        &self.references
    }
}

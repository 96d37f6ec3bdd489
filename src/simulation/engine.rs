// src/simulation/engine.rs
use crate::core::{PanelError, QubitState};
use crate::operations::Operation;
use tracing::trace;

/// Evolves a single-qubit state through a sequence of bound operations.
/// (Internal visibility)
pub(crate) struct SimulationEngine {
    state: QubitState,
    steps: usize,
}

impl SimulationEngine {
    /// Initializes the engine in |0⟩.
    pub(crate) fn init() -> Self {
        Self { state: QubitState::zero(), steps: 0 }
    }

    // Add a crate-visible method to set the state directly for testing
    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: QubitState) {
        self.state = state;
    }

    /// Applies one operation.
    ///
    /// Fails with `UnboundParameter` if the operation still carries a symbolic
    /// angle; the state is left as it was before the call.
    pub(crate) fn apply_operation(&mut self, op: &Operation) -> Result<(), PanelError> {
        let gate = op.to_gate()?;
        self.state = self.state.evolve(&gate);
        self.steps += 1;
        trace!(step = self.steps, %gate, state = %self.state, "applied gate");
        Ok(())
    }

    pub(crate) fn state(&self) -> &QubitState {
        &self.state
    }

    pub(crate) fn into_state(self) -> QubitState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{Angle, FixedGate, Parameter, RotationFamily};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_init_is_zero_state() {
        let engine = SimulationEngine::init();
        assert_eq!(*engine.state(), QubitState::zero());
    }

    #[test]
    fn test_unbound_operation_leaves_state() {
        let mut engine = SimulationEngine::init();
        engine.set_state(QubitState::plus());
        let op = Operation::Rotate {
            family: RotationFamily::Rx,
            angle: Angle::Symbol(Parameter::new("θ")),
        };
        assert!(engine.apply_operation(&op).is_err());
        assert_eq!(*engine.state(), QubitState::plus());
    }

    #[test]
    fn test_hadamard_then_z() -> Result<(), PanelError> {
        let mut engine = SimulationEngine::init();
        engine.apply_operation(&Operation::Fixed(FixedGate::H))?;
        engine.apply_operation(&Operation::Fixed(FixedGate::Z))?;
        let state = engine.into_state();
        // H|0> = |+>, Z|+> = |->
        assert_abs_diff_eq!(state.a().re, QubitState::minus().a().re, epsilon = 1e-12);
        assert_abs_diff_eq!(state.b().re, QubitState::minus().b().re, epsilon = 1e-12);
        Ok(())
    }
}

// src/simulation/mod.rs

//! Evaluates circuits to state vectors and evolves states under gates.
//! This module contains the `Simulator` entry point and the internal
//! `SimulationEngine` that steps a single qubit through a circuit.

mod results;
pub(crate) mod engine;

// Re-export the main public interface types
pub use results::MeasurementCounts;

use crate::circuits::Circuit;
use crate::core::{PanelError, QubitState};
use crate::operations::Gate;
use crate::validation::validate_state;
use engine::SimulationEngine;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Single-qubit state-vector simulator.
#[derive(Debug, Default, Clone, Copy)]
pub struct Simulator;

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self
    }

    /// Computes the state produced by `circuit` acting on |0⟩.
    ///
    /// # Returns
    /// * `Ok(QubitState)` with the final amplitudes.
    /// * `Err(PanelError::UnboundParameter)` if the circuit still has symbolic angles.
    /// * `Err(PanelError::Incoherence)` if the result is not normalized.
    pub fn statevector(&self, circuit: &Circuit) -> Result<QubitState, PanelError> {
        let mut engine = SimulationEngine::init();
        for op in circuit.operations() {
            engine.apply_operation(op)?;
        }
        let state = engine.into_state();
        validate_state(&state, None)?;
        debug!(ops = circuit.len(), %state, "evaluated circuit");
        Ok(state)
    }

    /// Evolves each state under `gate`, returning new states in the same order.
    /// The inputs are not modified.
    pub fn evolve_all(&self, states: &[QubitState], gate: &Gate) -> Vec<QubitState> {
        debug!(%gate, count = states.len(), "evolving states");
        states.iter().map(|s| s.evolve(gate)).collect()
    }

    /// Samples `shots` Z-basis measurements of `state`.
    ///
    /// Without an explicit `seed` the seed is derived from the amplitudes, so
    /// the same state always yields the same histogram.
    pub fn sample(
        &self,
        state: &QubitState,
        shots: usize,
        seed: Option<u64>,
    ) -> MeasurementCounts {
        let seed = seed.unwrap_or_else(|| state_seed(state));
        let mut rng = StdRng::seed_from_u64(seed);
        let [p0, _] = state.probabilities();
        // Renormalize so slightly denormalized states still sample sensibly
        let p0 = p0 / state.norm_sqr();

        let mut counts = [0usize; 2];
        for _ in 0..shots {
            let outcome = if rng.random::<f64>() < p0 { 0 } else { 1 };
            counts[outcome] += 1;
        }
        debug!(shots, seed, zeros = counts[0], ones = counts[1], "sampled measurements");
        MeasurementCounts::new(counts, seed)
    }
}

/// Deterministic seed from the bit patterns of the amplitudes.
fn state_seed(state: &QubitState) -> u64 {
    let mut hasher = DefaultHasher::new();
    for c in state.amplitudes() {
        c.re.to_ne_bytes().hash(&mut hasher);
        c.im.to_ne_bytes().hash(&mut hasher);
    }
    hasher.finish()
}

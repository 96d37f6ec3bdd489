use crate::core::QubitState;
use crate::visualization::BlochVector;

/// The three baseline states shared by the comparison panels: |0⟩, |+⟩ and |r⟩.
///
/// Built once per session and only ever read; gate application always
/// produces new states.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceStates {
    states: [QubitState; 3],
    bloch: [BlochVector; 3],
}

impl ReferenceStates {
    /// Legend labels, in state order.
    pub const LABELS: [&'static str; 3] = ["|0⟩", "|+⟩", "|r⟩"];

    pub fn new() -> Self {
        let states = [QubitState::zero(), QubitState::plus(), QubitState::right()];
        let bloch = states.map(|s| BlochVector::from_state(&s));
        Self { states, bloch }
    }

    pub fn states(&self) -> &[QubitState; 3] {
        &self.states
    }

    /// Bloch vectors of the unevolved states, computed once.
    pub fn bloch_vectors(&self) -> &[BlochVector; 3] {
        &self.bloch
    }

    /// `(label, vector)` pairs for plotting.
    pub fn labelled(
        vectors: &[BlochVector],
    ) -> impl Iterator<Item = (&'static str, BlochVector)> + '_ {
        Self::LABELS.into_iter().zip(vectors.iter().copied())
    }
}

impl Default for ReferenceStates {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vectors_point_along_axes() {
        let refs = ReferenceStates::new();
        let [zero, plus, r] = refs.bloch_vectors();
        assert!(zero.approx_eq(&BlochVector::new(0.0, 0.0, 1.0), 1e-12));
        assert!(plus.approx_eq(&BlochVector::new(1.0, 0.0, 0.0), 1e-12));
        assert!(r.approx_eq(&BlochVector::new(0.0, 1.0, 0.0), 1e-12));
    }

    #[test]
    fn test_labelled_pairs_in_order() {
        let refs = ReferenceStates::new();
        let labels: Vec<&str> =
            ReferenceStates::labelled(refs.bloch_vectors()).map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["|0⟩", "|+⟩", "|r⟩"]);
    }
}

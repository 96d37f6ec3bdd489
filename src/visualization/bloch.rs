//! Bloch-sphere coordinates of single-qubit states.
//!
//! Any pure single-qubit state can be written as
//!
//! |ψ⟩ = cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩
//!
//! where θ ∈ [0, π] and φ ∈ [0, 2π) define a point on the unit sphere.
//!
//! # Example
//!
//! ```
//! use bloch_panels::{BlochVector, QubitState};
//!
//! // |0⟩ points to the north pole
//! let bloch = BlochVector::from_state(&QubitState::zero());
//! assert!((bloch.z - 1.0).abs() < 1e-10);
//!
//! // |+⟩ points along +x
//! let bloch = BlochVector::from_state(&QubitState::plus());
//! assert!((bloch.x - 1.0).abs() < 1e-10);
//! ```

use crate::core::QubitState;
use std::fmt;

/// A point on the Bloch sphere in Cartesian coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlochVector {
    /// X coordinate (-1 to 1)
    pub x: f64,
    /// Y coordinate (-1 to 1)
    pub y: f64,
    /// Z coordinate (-1 to 1), where +Z is |0⟩ and -Z is |1⟩
    pub z: f64,
}

impl BlochVector {
    /// Create a Bloch vector from Cartesian coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Pauli expectation values of `state`.
    pub fn from_state(state: &QubitState) -> Self {
        let alpha = state.a();
        let beta = state.b();

        // x = ⟨σ_x⟩ = 2Re(α*β)
        // y = ⟨σ_y⟩ = 2Im(α*β)
        // z = ⟨σ_z⟩ = |α|² - |β|²
        let alpha_conj_beta = alpha.conj() * beta;

        Self {
            x: 2.0 * alpha_conj_beta.re,
            y: 2.0 * alpha_conj_beta.im,
            z: alpha.norm_sqr() - beta.norm_sqr(),
        }
    }

    /// Length of the vector; 1.0 for pure states.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Component-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &BlochVector, tolerance: f64) -> bool {
        (self.x - other.x).abs() < tolerance
            && (self.y - other.y).abs() < tolerance
            && (self.z - other.z).abs() < tolerance
    }
}

impl From<&QubitState> for BlochVector {
    fn from(state: &QubitState) -> Self {
        BlochVector::from_state(state)
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values that round to zero print without a sign
        let c = |v: f64| if v.abs() < 5e-4 { 0.0 } else { v };
        write!(f, "({:.3}, {:.3}, {:.3})", c(self.x), c(self.y), c(self.z))
    }
}

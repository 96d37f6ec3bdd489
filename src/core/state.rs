// src/core/state.rs

use super::constants::bloch_constants::{DISPLAY_CHOP, FRAC_1_SQRT_2};
use super::error::PanelError;
use crate::operations::Gate;
use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;
use std::str::FromStr;

/// A 2x2 complex matrix acting on a single qubit, row-major.
pub type Matrix2 = [[Complex<f64>; 2]; 2];

/// The state vector `a|0⟩ + b|1⟩` of a single qubit.
///
/// States are values: evolving one returns a new state and leaves the
/// original intact, so reference states can be shared and re-displayed.
#[derive(Debug, Clone, Copy, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct QubitState {
    amplitudes: [Complex<f64>; 2],
}

impl QubitState {
    /// Creates a state from its two amplitudes.
    /// Normalization is not enforced here; see [`crate::validation`].
    pub fn new(a: Complex<f64>, b: Complex<f64>) -> Self {
        Self { amplitudes: [a, b] }
    }

    /// |0⟩, the north pole.
    pub fn zero() -> Self {
        Self::new(Complex::one(), Complex::zero())
    }

    /// |1⟩, the south pole.
    pub fn one() -> Self {
        Self::new(Complex::zero(), Complex::one())
    }

    /// |+⟩ = (|0⟩ + |1⟩)/√2
    pub fn plus() -> Self {
        Self::new(Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(FRAC_1_SQRT_2, 0.0))
    }

    /// |−⟩ = (|0⟩ − |1⟩)/√2
    pub fn minus() -> Self {
        Self::new(Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(-FRAC_1_SQRT_2, 0.0))
    }

    /// |r⟩ = (|0⟩ + i|1⟩)/√2, the +y direction.
    pub fn right() -> Self {
        Self::new(Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(0.0, FRAC_1_SQRT_2))
    }

    /// |l⟩ = (|0⟩ − i|1⟩)/√2, the −y direction.
    pub fn left() -> Self {
        Self::new(Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(0.0, -FRAC_1_SQRT_2))
    }

    /// Builds one of the six single-qubit label states: `0`, `1`, `+`, `-`, `r`, `l`.
    pub fn from_label(label: &str) -> Result<Self, PanelError> {
        match label {
            "0" => Ok(Self::zero()),
            "1" => Ok(Self::one()),
            "+" => Ok(Self::plus()),
            "-" => Ok(Self::minus()),
            "r" => Ok(Self::right()),
            "l" => Ok(Self::left()),
            other => Err(PanelError::unknown_label("state label", other)),
        }
    }

    /// Amplitude of |0⟩.
    pub fn a(&self) -> Complex<f64> {
        self.amplitudes[0]
    }

    /// Amplitude of |1⟩.
    pub fn b(&self) -> Complex<f64> {
        self.amplitudes[1]
    }

    /// Provides read-only access to both amplitudes.
    pub fn amplitudes(&self) -> &[Complex<f64>; 2] {
        &self.amplitudes
    }

    /// `|a|² + |b|²`
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Z-basis outcome probabilities `[P(0), P(1)]`.
    pub fn probabilities(&self) -> [f64; 2] {
        [self.amplitudes[0].norm_sqr(), self.amplitudes[1].norm_sqr()]
    }

    /// Applies a gate and returns the evolved state.
    pub fn evolve(&self, gate: &Gate) -> Self {
        self.apply_matrix(&gate.matrix())
    }

    /// `[a', b'] = m · [a, b]`
    pub(crate) fn apply_matrix(&self, m: &Matrix2) -> Self {
        let [a, b] = self.amplitudes;
        Self::new(m[0][0] * a + m[0][1] * b, m[1][0] * a + m[1][1] * b)
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for QubitState {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s.trim())
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Statevector[{}, {}]", format_amplitude(self.a()), format_amplitude(self.b()))
    }
}

/// Formats an amplitude to three decimals as `re±imi`.
///
/// Components below [`DISPLAY_CHOP`] print as `0.000`, so pole states never
/// show a stray `-0.000`.
pub fn format_amplitude(c: Complex<f64>) -> String {
    let chop = |x: f64| if x.abs() < DISPLAY_CHOP { 0.0 } else { x };
    format!("{:.3}", Complex::new(chop(c.re), chop(c.im)))
}

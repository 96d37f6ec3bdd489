// src/operations/mod.rs

//! Single-qubit gates and the circuit operations built from them.
//!
//! [`Gate`] is a fully resolved unitary (fixed or at a concrete angle) and is
//! what a state evolves under. [`Operation`] is a circuit element whose angle
//! may still be a symbolic [`Parameter`]; binding turns it into a gate.

use crate::circuits::ParameterBinding;
use crate::core::{Matrix2, PanelError};
use num_complex::Complex;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named symbolic angle in a circuit template (e.g. `θ`, `φ`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Parameter {
    name: String,
}

impl Parameter {
    /// Creates a parameter. Two parameters with the same name are the same parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Gets the parameter's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The parameter-free gates offered by the fixed-gate comparison panel.
///
/// Matching on this enum is exhaustive, so every selector value resolves to
/// an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixedGate {
    /// Identity
    I,
    /// Pauli X (bit flip)
    X,
    /// Pauli Y
    Y,
    /// Pauli Z (phase flip)
    Z,
    /// Hadamard
    H,
}

impl FixedGate {
    /// All selectable gates, in control order.
    pub const ALL: [FixedGate; 5] =
        [FixedGate::I, FixedGate::X, FixedGate::Y, FixedGate::Z, FixedGate::H];

    /// Short label used in titles and on the control.
    pub fn label(&self) -> &'static str {
        match self {
            FixedGate::I => "I",
            FixedGate::X => "X",
            FixedGate::Y => "Y",
            FixedGate::Z => "Z",
            FixedGate::H => "H",
        }
    }

    /// The 2x2 unitary of this gate.
    pub fn matrix(&self) -> Matrix2 {
        let one = Complex::one();
        let zero = Complex::zero();
        let i = Complex::i();
        let h = Complex::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
        match self {
            FixedGate::I => [[one, zero], [zero, one]],
            FixedGate::X => [[zero, one], [one, zero]],
            FixedGate::Y => [[zero, -i], [i, zero]],
            FixedGate::Z => [[one, zero], [zero, -one]],
            FixedGate::H => [[h, h], [h, -h]],
        }
    }
}

impl fmt::Display for FixedGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FixedGate {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        FixedGate::ALL
            .into_iter()
            .find(|g| g.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| PanelError::unknown_label("gate", label))
    }
}

/// The rotation families offered by the rotation comparison panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationFamily {
    /// Rotation about the X axis
    #[serde(rename = "RX")]
    Rx,
    /// Rotation about the Y axis
    #[serde(rename = "RY")]
    Ry,
    /// Rotation about the Z axis
    #[serde(rename = "RZ")]
    Rz,
}

impl RotationFamily {
    /// All selectable families, in control order.
    pub const ALL: [RotationFamily; 3] =
        [RotationFamily::Rx, RotationFamily::Ry, RotationFamily::Rz];

    /// Label used in titles and on the control.
    pub fn label(&self) -> &'static str {
        match self {
            RotationFamily::Rx => "RX",
            RotationFamily::Ry => "RY",
            RotationFamily::Rz => "RZ",
        }
    }

    /// Instantiates this family at `theta` radians.
    pub fn at(self, theta: f64) -> Gate {
        Gate::Rotation { family: self, theta }
    }

    /// The 2x2 unitary `exp(-i θ/2 σ)` of this family at `theta` radians.
    pub fn matrix(&self, theta: f64) -> Matrix2 {
        let half = theta / 2.0;
        let (c, s) = (half.cos(), half.sin());
        let zero = Complex::zero();
        match self {
            // RX(θ) = [[c, -i s], [-i s, c]]
            RotationFamily::Rx => [
                [Complex::new(c, 0.0), Complex::new(0.0, -s)],
                [Complex::new(0.0, -s), Complex::new(c, 0.0)],
            ],
            // RY(θ) = [[c, -s], [s, c]]
            RotationFamily::Ry => [
                [Complex::new(c, 0.0), Complex::new(-s, 0.0)],
                [Complex::new(s, 0.0), Complex::new(c, 0.0)],
            ],
            // RZ(θ) = diag(e^(-iθ/2), e^(iθ/2))
            RotationFamily::Rz => [
                [Complex::new(c, -s), zero],
                [zero, Complex::new(c, s)],
            ],
        }
    }
}

impl fmt::Display for RotationFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RotationFamily {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        RotationFamily::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| PanelError::unknown_label("rotation family", label))
    }
}

/// A fully resolved single-qubit unitary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    /// One of the parameter-free gates.
    Fixed(FixedGate),
    /// A rotation at a concrete angle (radians).
    Rotation {
        /// Rotation axis
        family: RotationFamily,
        /// Angle in radians
        theta: f64,
    },
    /// Phase gate `diag(1, e^(iλ))`.
    Phase {
        /// Phase angle in radians
        lambda: f64,
    },
}

impl Gate {
    /// The 2x2 unitary of this gate.
    pub fn matrix(&self) -> Matrix2 {
        match self {
            Gate::Fixed(g) => g.matrix(),
            Gate::Rotation { family, theta } => family.matrix(*theta),
            Gate::Phase { lambda } => [
                [Complex::one(), Complex::zero()],
                [Complex::zero(), Complex::new(lambda.cos(), lambda.sin())], // e^(i*lambda)
            ],
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Fixed(g) => write!(f, "{}", g),
            Gate::Rotation { family, theta } => write!(f, "{}({:.3})", family, theta),
            Gate::Phase { lambda } => write!(f, "P({:.3})", lambda),
        }
    }
}

/// An angle slot in a circuit operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Angle {
    /// A concrete angle in radians.
    Value(f64),
    /// A symbolic angle awaiting a binding.
    Symbol(Parameter),
}

impl Angle {
    fn bind(&self, binding: &ParameterBinding) -> Angle {
        match self {
            Angle::Symbol(p) => binding.get(p).map_or_else(|| self.clone(), Angle::Value),
            Angle::Value(_) => self.clone(),
        }
    }

    fn resolve(&self) -> Result<f64, PanelError> {
        match self {
            Angle::Value(v) => Ok(*v),
            Angle::Symbol(p) => Err(PanelError::UnboundParameter {
                parameter: p.name().to_string(),
            }),
        }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Angle::Value(v) => write!(f, "{:.3}", v),
            Angle::Symbol(p) => write!(f, "{}", p),
        }
    }
}

/// A single-qubit operation inside a circuit.
#[derive(Debug, Clone, PartialEq)] // f64 angles: PartialEq only
pub enum Operation {
    /// A parameter-free gate.
    Fixed(FixedGate),
    /// A rotation whose angle may be symbolic.
    Rotate {
        /// Rotation axis
        family: RotationFamily,
        /// Rotation angle
        angle: Angle,
    },
    /// A phase gate whose angle may be symbolic.
    Phase {
        /// Phase angle
        angle: Angle,
    },
}

impl Operation {
    /// The symbolic parameter this operation still depends on, if any.
    pub fn parameter(&self) -> Option<&Parameter> {
        match self {
            Operation::Fixed(_) => None,
            Operation::Rotate { angle, .. } | Operation::Phase { angle } => match angle {
                Angle::Symbol(p) => Some(p),
                Angle::Value(_) => None,
            },
        }
    }

    /// Returns a copy with every bound symbol replaced by its value.
    /// Symbols absent from `binding` are left symbolic.
    pub fn bind(&self, binding: &ParameterBinding) -> Operation {
        match self {
            Operation::Fixed(g) => Operation::Fixed(*g),
            Operation::Rotate { family, angle } => Operation::Rotate {
                family: *family,
                angle: angle.bind(binding),
            },
            Operation::Phase { angle } => Operation::Phase { angle: angle.bind(binding) },
        }
    }

    /// Resolves to a concrete gate.
    ///
    /// # Returns
    /// * `Err(PanelError::UnboundParameter)` if the angle is still symbolic.
    pub fn to_gate(&self) -> Result<Gate, PanelError> {
        Ok(match self {
            Operation::Fixed(g) => Gate::Fixed(*g),
            Operation::Rotate { family, angle } => family.at(angle.resolve()?),
            Operation::Phase { angle } => Gate::Phase { lambda: angle.resolve()? },
        })
    }

    /// Diagram symbol, e.g. `H`, `RY(θ)`, `P(1.571)`.
    pub fn symbol(&self) -> String {
        match self {
            Operation::Fixed(g) => g.label().to_string(),
            Operation::Rotate { family, angle } => format!("{}({})", family, angle),
            Operation::Phase { angle } => format!("P({})", angle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PI;
    use approx::assert_abs_diff_eq;

    fn assert_matrix_approx_eq(actual: &Matrix2, expected: &Matrix2, context: &str) {
        for r in 0..2 {
            for c in 0..2 {
                let diff = (actual[r][c] - expected[r][c]).norm();
                assert!(
                    diff < 1e-12,
                    "Mismatch at ({}, {}) - {}: {} vs {}",
                    r,
                    c,
                    context,
                    actual[r][c],
                    expected[r][c]
                );
            }
        }
    }

    fn product(m1: &Matrix2, m2: &Matrix2) -> Matrix2 {
        let mut out = [[Complex::zero(); 2]; 2];
        for r in 0..2 {
            for c in 0..2 {
                out[r][c] = m1[r][0] * m2[0][c] + m1[r][1] * m2[1][c];
            }
        }
        out
    }

    fn dagger(m: &Matrix2) -> Matrix2 {
        [[m[0][0].conj(), m[1][0].conj()], [m[0][1].conj(), m[1][1].conj()]]
    }

    #[test]
    fn test_fixed_gates_are_unitary() {
        let identity = FixedGate::I.matrix();
        for gate in FixedGate::ALL {
            let m = gate.matrix();
            assert_matrix_approx_eq(&product(&dagger(&m), &m), &identity, gate.label());
        }
    }

    #[test]
    fn test_rotations_at_zero_are_identity() {
        for family in RotationFamily::ALL {
            assert_matrix_approx_eq(&family.matrix(0.0), &FixedGate::I.matrix(), family.label());
        }
    }

    #[test]
    fn test_rx_pi_is_x_up_to_phase() {
        // RX(π) = -i X
        let rx = RotationFamily::Rx.matrix(PI);
        let x = FixedGate::X.matrix();
        let minus_i = Complex::new(0.0, -1.0);
        let expected = [
            [minus_i * x[0][0], minus_i * x[0][1]],
            [minus_i * x[1][0], minus_i * x[1][1]],
        ];
        assert_matrix_approx_eq(&rx, &expected, "RX(pi)");
    }

    #[test]
    fn test_phase_gate_matrix() {
        let m = Gate::Phase { lambda: PI / 2.0 }.matrix();
        assert_abs_diff_eq!(m[1][1].im, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m[1][1].re, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_labels() -> Result<(), PanelError> {
        assert_eq!("h".parse::<FixedGate>()?, FixedGate::H);
        assert_eq!(" RZ ".parse::<RotationFamily>()?, RotationFamily::Rz);
        assert_eq!("S".parse::<FixedGate>(), Err(PanelError::unknown_label("gate", "S")));
        assert!("RW".parse::<RotationFamily>().is_err());
        Ok(())
    }

    #[test]
    fn test_operation_binding() -> Result<(), PanelError> {
        let theta = Parameter::new("θ");
        let op = Operation::Rotate {
            family: RotationFamily::Ry,
            angle: Angle::Symbol(theta.clone()),
        };
        assert_eq!(op.parameter(), Some(&theta));
        assert_eq!(op.to_gate(), Err(PanelError::UnboundParameter { parameter: "θ".to_string() }));
        assert_eq!(op.symbol(), "RY(θ)");

        let binding = ParameterBinding::new().with(theta, 1.0);
        let bound = op.bind(&binding);
        assert_eq!(bound.parameter(), None);
        assert_eq!(bound.to_gate()?, Gate::Rotation { family: RotationFamily::Ry, theta: 1.0 });
        assert_eq!(bound.symbol(), "RY(1.000)");
        // The template operation is untouched
        assert!(op.parameter().is_some());
        Ok(())
    }
}

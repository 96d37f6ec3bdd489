// src/circuits/mod.rs

//! Defines single-qubit circuit templates and parameter binding.
//!
//! A [`Circuit`] is an ordered sequence of [`Operation`]s acting on one qubit
//! initialised to |0⟩. Templates carry symbolic angles; [`Circuit::assign_parameters`]
//! produces a new bound copy and never mutates the template, so one template can
//! be shared by several panels.

use crate::core::PanelError;
use crate::operations::{Operation, Parameter};
use std::collections::HashMap;
use std::fmt;

/// Values for symbolic parameters, valid for one state computation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterBinding {
    values: HashMap<Parameter, f64>,
}

impl ParameterBinding {
    /// Creates an empty binding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `parameter` to `value`, replacing any earlier value.
    pub fn bind(&mut self, parameter: Parameter, value: f64) {
        self.values.insert(parameter, value);
    }

    /// Chaining form of [`ParameterBinding::bind`].
    pub fn with(mut self, parameter: Parameter, value: f64) -> Self {
        self.bind(parameter, value);
        self
    }

    /// Value bound to `parameter`, if any.
    pub fn get(&self, parameter: &Parameter) -> Option<f64> {
        self.values.get(parameter).copied()
    }

    /// Iterates over the bound parameters.
    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.values.keys()
    }
}

/// An ordered sequence of single-qubit operations.
///
/// Analogy: a one-wire `qiskit.QuantumCircuit`.
#[derive(Clone, PartialEq)] // PartialEq useful for testing circuits
pub struct Circuit {
    /// The order is the application order.
    operations: Vec<Operation>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self { operations: Vec::new() }
    }

    /// Adds a single operation to the end of the circuit's sequence.
    pub fn add_operation(&mut self, op: Operation) {
        self.operations.push(op);
    }

    /// Adds multiple operations from an iterator to the end of the circuit's sequence.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        self.operations.extend(ops);
    }

    /// Returns a slice containing the ordered sequence of operations in this circuit.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Returns the total number of operations defined in the circuit.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the circuit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// The distinct symbolic parameters still present, in first-use order.
    pub fn parameters(&self) -> Vec<&Parameter> {
        let mut params: Vec<&Parameter> = Vec::new();
        for p in self.operations.iter().filter_map(Operation::parameter) {
            if !params.contains(&p) {
                params.push(p);
            }
        }
        params
    }

    /// Returns `true` if every angle is concrete.
    pub fn is_bound(&self) -> bool {
        self.operations.iter().all(|op| op.parameter().is_none())
    }

    /// Returns a new circuit with the parameters in `binding` replaced by their values.
    ///
    /// # Returns
    /// * `Err(PanelError::InvalidOperation)` if `binding` names a parameter this
    ///   circuit does not contain.
    pub fn assign_parameters(&self, binding: &ParameterBinding) -> Result<Circuit, PanelError> {
        let known = self.parameters();
        if let Some(unknown) = binding.parameters().find(|p| !known.contains(p)) {
            return Err(PanelError::InvalidOperation {
                message: format!(
                    "Cannot bind parameter '{}': it is not present in the circuit",
                    unknown
                ),
            });
        }
        Ok(Circuit { operations: self.operations.iter().map(|op| op.bind(binding)).collect() })
    }
}

// Implement Default for convenient creation of empty circuits.
impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing `Circuit` instances using method chaining.
#[derive(Default)]
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single operation to the circuit being built.
    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    /// Adds multiple operations from an iterator to the circuit being built.
    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.circuit.add_operations(ops);
        self
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const H_WIRE: &str = "──";

        if self.operations.is_empty() {
            return writeln!(f, "q0: {}", H_WIRE);
        }

        write!(f, "q0: {}", H_WIRE)?;
        for op in &self.operations {
            // Identity leaves a bare wire
            if matches!(op, Operation::Fixed(crate::operations::FixedGate::I)) {
                write!(f, "{}", H_WIRE)?;
                continue;
            }
            write!(f, "{}{}", op.symbol(), H_WIRE)?;
        }
        writeln!(f)
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{Angle, FixedGate, RotationFamily};

    fn template() -> (Circuit, Parameter, Parameter) {
        let theta = Parameter::new("θ");
        let phi = Parameter::new("φ");
        let circuit = CircuitBuilder::new()
            .add_op(Operation::Rotate {
                family: RotationFamily::Ry,
                angle: Angle::Symbol(theta.clone()),
            })
            .add_op(Operation::Phase { angle: Angle::Symbol(phi.clone()) })
            .build();
        (circuit, theta, phi)
    }

    #[test]
    fn test_parameters_in_first_use_order() {
        let (circuit, theta, phi) = template();
        assert_eq!(circuit.parameters(), vec![&theta, &phi]);
        assert!(!circuit.is_bound());
    }

    #[test]
    fn test_assign_parameters_returns_new_copy() -> Result<(), PanelError> {
        let (circuit, theta, phi) = template();
        let binding = ParameterBinding::new().with(theta, 0.5).with(phi, 0.25);
        let bound = circuit.assign_parameters(&binding)?;

        assert!(bound.is_bound());
        assert_eq!(bound.len(), 2);
        assert!(!circuit.is_bound(), "Template must not be mutated by binding");
        Ok(())
    }

    #[test]
    fn test_partial_binding_keeps_remaining_symbols() -> Result<(), PanelError> {
        let (circuit, theta, phi) = template();
        let bound = circuit.assign_parameters(&ParameterBinding::new().with(theta, 0.5))?;
        assert_eq!(bound.parameters(), vec![&phi]);
        Ok(())
    }

    #[test]
    fn test_binding_unknown_parameter_fails() {
        let (circuit, _, _) = template();
        let binding = ParameterBinding::new().with(Parameter::new("λ"), 1.0);
        assert!(matches!(
            circuit.assign_parameters(&binding),
            Err(PanelError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn test_display_diagram() -> Result<(), PanelError> {
        let (circuit, theta, phi) = template();
        assert_eq!(circuit.to_string(), "q0: ──RY(θ)──P(φ)──\n");

        let binding = ParameterBinding::new().with(theta, 1.0).with(phi, 2.0);
        let bound = circuit.assign_parameters(&binding)?;
        assert_eq!(bound.to_string(), "q0: ──RY(1.000)──P(2.000)──\n");

        let with_identity = CircuitBuilder::new()
            .add_op(Operation::Fixed(FixedGate::I))
            .add_op(Operation::Fixed(FixedGate::H))
            .build();
        assert_eq!(with_identity.to_string(), "q0: ────H──\n");
        Ok(())
    }
}

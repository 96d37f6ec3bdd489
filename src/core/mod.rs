// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod state;

// Re-export public types for convenient access via `bloch_panels::core::TypeName`
pub use error::PanelError;
pub use state::{format_amplitude, Matrix2, QubitState};

pub mod constants;
pub use constants::bloch_constants::{FRAC_1_SQRT_2, PI}; // Re-export

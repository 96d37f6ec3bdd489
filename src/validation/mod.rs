// src/validation/mod.rs

//! Checks applied to computed states before they are displayed.

use crate::core::constants::bloch_constants::NORM_TOLERANCE;
use crate::core::{PanelError, QubitState};

/// Checks if the state vector is normalized (`|a|² + |b|² ≈ 1`).
///
/// # Arguments
/// * `state` - The `QubitState` to check.
/// * `tolerance` - Allowed deviation from 1.0; defaults to `1e-9`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(PanelError::Incoherence)` if normalization fails.
pub fn check_normalization(state: &QubitState, tolerance: Option<f64>) -> Result<(), PanelError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sq = state.norm_sqr();
    if !norm_sq.is_finite() || (norm_sq - 1.0).abs() > effective_tolerance {
        Err(PanelError::Incoherence {
            message: format!(
                "State vector normalization failed. |a|^2 + |b|^2 = {} (Deviation > {})",
                norm_sq, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks that two states are equal up to a global phase, i.e. `|⟨s1|s2⟩| ≈ 1`.
pub fn same_up_to_global_phase(s1: &QubitState, s2: &QubitState, tolerance: f64) -> bool {
    let overlap = s1.a().conj() * s2.a() + s1.b().conj() * s2.b();
    (overlap.norm() - 1.0).abs() < tolerance
}

/// Performs the validation applied to every displayed state.
/// Currently only normalization.
pub fn validate_state(state: &QubitState, norm_tolerance: Option<f64>) -> Result<(), PanelError> {
    check_normalization(state, norm_tolerance)?;
    Ok(())
}

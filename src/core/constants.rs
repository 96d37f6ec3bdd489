//! Numerical constants shared across the crate.

/// Constants used by state construction, validation and formatting
pub mod bloch_constants {
    /// Used for angle conversions (`θ = factor·π`)
    pub const PI: f64 = std::f64::consts::PI;
    /// Amplitude of each basis state in an equal superposition.
    pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
    /// Allowed deviation of `|a|² + |b|²` from 1.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Components below this magnitude are printed as zero.
    pub const DISPLAY_CHOP: f64 = 1e-12;
}

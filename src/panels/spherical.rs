use super::preparation::{PreparationOutput, PreparationTemplate};
use crate::core::PanelError;
use crate::simulation::Simulator;

/// Prepares a state from geographic coordinates on the Bloch sphere.
///
/// Latitude 90° is the north pole (|0⟩), latitude −90° the south pole (|1⟩),
/// and longitude is the phase angle.
#[derive(Debug, Clone, Default)]
pub struct SphericalPanel {
    template: PreparationTemplate,
    simulator: Simulator,
}

impl SphericalPanel {
    pub fn new(template: PreparationTemplate, simulator: Simulator) -> Self {
        Self { template, simulator }
    }

    /// `polar = 90° − latitude`, `phase = longitude`, both converted to radians.
    pub fn angles(latitude_deg: f64, longitude_deg: f64) -> (f64, f64) {
        ((90.0 - latitude_deg).to_radians(), longitude_deg.to_radians())
    }

    /// Computes the state for `latitude_deg` ∈ [−90, 90] and `longitude_deg` ∈ [−180, 180].
    pub fn update(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<PreparationOutput, PanelError> {
        let (theta, phi) = Self::angles(latitude_deg, longitude_deg);
        self.template.prepare(&self.simulator, theta, phi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PI;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_angles_conversion() {
        let (theta, phi) = SphericalPanel::angles(0.0, -90.0);
        assert_abs_diff_eq!(theta, PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(phi, -PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_equator_prime_meridian_is_plus() -> Result<(), PanelError> {
        let out = SphericalPanel::default().update(0.0, 0.0)?;
        let bloch = out.output.figure.plots()[0].vectors()[0].vector;
        assert_abs_diff_eq!(bloch.x, 1.0, epsilon = 1e-12);
        assert_eq!(out.output.lines[1], "  a = 0.707+0.000i");
        assert_eq!(out.output.lines[2], "  b = 0.707+0.000i");
        Ok(())
    }
}

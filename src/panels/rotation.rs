//! Rotation comparison panel.
//!
//! Switching the rotation family restarts the angle at 0. The panel does not
//! keep that memory itself: the caller passes the previous
//! [`RotationPanelState`] in and stores the one returned, and moves the angle
//! slider to the returned `slider_value`.

use super::reference::ReferenceStates;
use super::PanelOutput;
use crate::core::PI;
use crate::operations::RotationFamily;
use crate::simulation::Simulator;
use crate::visualization::{BlochPlot, BlochVector, Figure};
use tracing::debug;

/// What the rotation panel remembers between invocations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationPanelState {
    /// Family used by the previous invocation; `None` before the first one.
    pub previous_family: Option<RotationFamily>,
    /// Angle factor actually used by the previous invocation.
    pub current_angle: f64,
}

/// Result of one rotation-panel invocation.
#[derive(Debug, Clone)]
pub struct RotationUpdate {
    pub family: RotationFamily,
    /// `true` if the family changed and the requested angle was discarded.
    pub reset: bool,
    /// θ/π used for the computation; 0 after a family switch.
    pub angle_used: f64,
    /// Value the host should show on the angle slider.
    pub slider_value: f64,
    /// State to pass into the next invocation.
    pub state: RotationPanelState,
    pub evolved: Vec<BlochVector>,
    pub output: PanelOutput,
}

/// Applies RX/RY/RZ at `θ_factor·π` to the reference states.
#[derive(Debug, Clone, Default)]
pub struct RotationPanel {
    references: ReferenceStates,
    simulator: Simulator,
}

impl RotationPanel {
    pub fn new(references: ReferenceStates, simulator: Simulator) -> Self {
        Self { references, simulator }
    }

    pub fn update(
        &self,
        previous: &RotationPanelState,
        family: RotationFamily,
        theta_factor: f64,
    ) -> RotationUpdate {
        // The family check comes first so a forced zero is the angle actually used
        let reset = previous.previous_family != Some(family);
        let angle_used = if reset {
            debug!(
                from = ?previous.previous_family,
                to = %family,
                requested = theta_factor,
                "rotation family changed, resetting angle"
            );
            0.0
        } else {
            theta_factor
        };

        let gate = family.at(angle_used * PI);
        let evolved: Vec<BlochVector> = self
            .simulator
            .evolve_all(self.references.states(), &gate)
            .iter()
            .map(BlochVector::from)
            .collect();

        let title = format!("evolved with {}({:?}π)", family, angle_used);
        let figure =
            Figure::single(BlochPlot::new(title).with_vectors(ReferenceStates::labelled(&evolved)));

        RotationUpdate {
            family,
            reset,
            angle_used,
            slider_value: angle_used,
            state: RotationPanelState { previous_family: Some(family), current_angle: angle_used },
            evolved,
            output: PanelOutput { figure, lines: Vec::new() },
        }
    }

    pub fn references(&self) -> &ReferenceStates {
        &self.references
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(family: RotationFamily, angle: f64) -> RotationPanelState {
        RotationPanelState { previous_family: Some(family), current_angle: angle }
    }

    #[test]
    fn test_first_invocation_resets() {
        let fresh = RotationPanelState::default();
        let update = RotationPanel::default().update(&fresh, RotationFamily::Rz, 0.5);
        assert_eq!(update.angle_used, 0.0);
        assert!(update.reset);
        assert_eq!(update.state.previous_family, Some(RotationFamily::Rz));
    }

    #[test]
    fn test_same_family_uses_requested_angle() {
        let panel = RotationPanel::default();
        let prior = after(RotationFamily::Ry, 0.0);
        let update = panel.update(&prior, RotationFamily::Ry, 0.5);
        assert_eq!(update.angle_used, 0.5);
        assert_eq!(update.slider_value, 0.5);
        assert_eq!(update.output.figure.titles(), vec!["evolved with RY(0.5π)"]);
        // RY(π/2) takes |0⟩ to |+⟩
        assert!(update.evolved[0].approx_eq(&BlochVector::new(1.0, 0.0, 0.0), 1e-12));
    }

    #[test]
    fn test_reset_title_shows_zero() {
        let prior = after(RotationFamily::Rz, 0.7);
        let update = RotationPanel::default().update(&prior, RotationFamily::Rx, 0.7);
        assert_eq!(update.output.figure.titles(), vec!["evolved with RX(0.0π)"]);
    }

    #[test]
    fn test_rx_half_turn_on_references() {
        let panel = RotationPanel::default();
        let prior = after(RotationFamily::Rx, 0.0);
        let update = panel.update(&prior, RotationFamily::Rx, 1.0);
        assert!(update.evolved[0].approx_eq(&BlochVector::new(0.0, 0.0, -1.0), 1e-12));
        assert!(update.evolved[1].approx_eq(&BlochVector::new(1.0, 0.0, 0.0), 1e-12));
        assert!(update.evolved[2].approx_eq(&BlochVector::new(0.0, -1.0, 0.0), 1e-12));
    }
}

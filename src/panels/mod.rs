// src/panels/mod.rs

//! The four interactive panels.
//!
//! Each panel is a function from control values to a [`PanelOutput`]: a
//! figure to render and lines of text to print. Panels never print or
//! render themselves; the host does.

pub mod controls;
pub mod fixed_gate;
pub mod fractional;
pub mod preparation;
pub mod reference;
pub mod rotation;
pub mod spherical;

pub use controls::{Choice, ChoiceStyle, FloatSlider};
pub use fixed_gate::{ComparisonOutput, FixedGatePanel};
pub use fractional::FractionalPanel;
pub use preparation::{PreparationOutput, PreparationTemplate};
pub use reference::ReferenceStates;
pub use rotation::{RotationPanel, RotationPanelState, RotationUpdate};
pub use spherical::SphericalPanel;

use crate::visualization::Figure;

/// What a panel hands back to its host for display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelOutput {
    pub figure: Figure,
    /// Text printed below the figure.
    pub lines: Vec<String>,
}

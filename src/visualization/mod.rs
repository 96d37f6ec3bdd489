// src/visualization/mod.rs

//! Bloch vectors, figures and their terminal rendering.

pub mod ascii;
pub mod bloch;
pub mod figure;

pub use ascii::{AsciiRenderer, RenderConfig, Renderer};
pub use bloch::BlochVector;
pub use figure::{BlochPlot, Figure, PlottedVector};

//! Terminal rendering of Bloch figures.
//!
//! Each sphere is drawn as two projections: a side view of the XZ plane
//! (|0⟩ at the top) and a top view of the XY plane (|r⟩ at the top). Subplots
//! of a figure are placed next to each other.

use super::bloch::BlochVector;
use super::figure::{BlochPlot, Figure};
use serde::{Deserialize, Serialize};

/// Markers assigned to vectors in plot order.
const MARKERS: [char; 6] = ['●', '▲', '■', '◆', '★', '✚'];
/// Gap between subplots.
const COLUMN_GAP: &str = "    ";

/// Smallest sphere radius that leaves room for the axes.
pub const MIN_SIZE: usize = 2;
/// Largest sphere radius accepted from configuration.
pub const MAX_SIZE: usize = 64;

/// Configuration for Bloch sphere rendering
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Radius of the sphere in characters
    pub size: usize,
    /// Show pole labels
    pub show_labels: bool,
    /// Print the coordinates of each vector under the plot
    pub show_coords: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: 12,
            show_labels: true,
            show_coords: true,
        }
    }
}

/// Turns a figure into displayable text.
pub trait Renderer {
    fn render(&self, figure: &Figure) -> String;
}

/// Renders figures as Unicode text for a terminal.
#[derive(Clone, Debug, Default)]
pub struct AsciiRenderer {
    config: RenderConfig,
}

impl AsciiRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        let size = config.size.clamp(MIN_SIZE, MAX_SIZE);
        Self {
            config: RenderConfig { size, ..config },
        }
    }

    /// Renders one plot as a block of lines.
    fn render_plot(&self, plot: &BlochPlot) -> Vec<String> {
        let mut lines = vec![plot.title().to_string(), String::new()];

        lines.push("Side view (XZ):".to_string());
        lines.extend(self.render_plane(plot, |v| (v.x, v.z), ("|0⟩", "|1⟩")));
        lines.push(String::new());
        lines.push("Top view (XY):".to_string());
        lines.extend(self.render_plane(plot, |v| (v.x, v.y), ("|r⟩", "|l⟩")));

        if self.config.show_coords {
            lines.push(String::new());
            for (i, pv) in plot.vectors().iter().enumerate() {
                lines.push(format!("{} {} {}", MARKERS[i % MARKERS.len()], pv.label, pv.vector));
            }
        }
        lines
    }

    /// Projects every vector onto one plane. `project` returns (horizontal, vertical).
    fn render_plane<F>(&self, plot: &BlochPlot, project: F, poles: (&str, &str)) -> Vec<String>
    where
        F: Fn(&BlochVector) -> (f64, f64),
    {
        let size = self.config.size;
        let width = size * 2 + 1;
        let height = size + 1;
        let mut grid = vec![vec![' '; width]; height];

        // Rows are half as dense as columns to keep the circle round in a terminal
        let to_cell = |h: f64, v: f64| -> (usize, usize) {
            let col = (size as f64 * (1.0 + h.clamp(-1.0, 1.0))).round() as usize;
            let row = (size as f64 / 2.0 * (1.0 - v.clamp(-1.0, 1.0))).round() as usize;
            (row.min(height - 1), col.min(width - 1))
        };

        for step in 0..120 {
            let rad = (step as f64 * 3.0).to_radians();
            let (r, c) = to_cell(rad.cos(), rad.sin());
            grid[r][c] = '·';
        }

        let (center_row, center_col) = to_cell(0.0, 0.0);
        for row in grid.iter_mut() {
            row[center_col] = '│';
        }
        for cell in grid[center_row].iter_mut() {
            *cell = '─';
        }
        grid[center_row][center_col] = '┼';

        for (i, pv) in plot.vectors().iter().enumerate() {
            let (h, v) = project(&pv.vector);
            let (r, c) = to_cell(h, v);
            grid[r][c] = MARKERS[i % MARKERS.len()];
        }

        let pad = " ".repeat(size.saturating_sub(1));
        let mut lines = Vec::with_capacity(height + 2);
        if self.config.show_labels {
            lines.push(format!("{}{}", pad, poles.0));
        }
        lines.extend(grid.into_iter().map(|row| row.into_iter().collect::<String>()));
        if self.config.show_labels {
            lines.push(format!("{}{}", pad, poles.1));
        }
        lines
    }
}

impl Renderer for AsciiRenderer {
    fn render(&self, figure: &Figure) -> String {
        let blocks: Vec<Vec<String>> = figure.plots().iter().map(|p| self.render_plot(p)).collect();
        join_side_by_side(&blocks)
    }
}

/// Places text blocks next to each other, padding each to its widest line.
fn join_side_by_side(blocks: &[Vec<String>]) -> String {
    let widths: Vec<usize> = blocks
        .iter()
        .map(|b| b.iter().map(|l| l.chars().count()).max().unwrap_or(0))
        .collect();
    let rows = blocks.iter().map(Vec::len).max().unwrap_or(0);

    let mut out = String::new();
    for r in 0..rows {
        let mut line = String::new();
        for (i, block) in blocks.iter().enumerate() {
            let cell = block.get(r).map(String::as_str).unwrap_or("");
            if i > 0 {
                line.push_str(COLUMN_GAP);
            }
            line.push_str(cell);
            if i + 1 < blocks.len() {
                line.push_str(&" ".repeat(widths[i] - cell.chars().count()));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

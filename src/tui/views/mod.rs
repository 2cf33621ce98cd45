//! Content views of the risk matrix TUI.

mod graph;
mod matrix;
mod overlays;

pub use graph::render_graph;
pub use matrix::render_matrix;
pub use overlays::render_help_overlay;

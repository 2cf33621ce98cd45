//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.

mod view;

pub use view::{render_summary, run_view};

// Re-export config types used by handlers
pub use crate::config::ViewConfig;

//! Shared utilities.

mod text;

pub use text::truncate_str;

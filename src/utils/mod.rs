//! Utility functions and helpers

pub mod display;

pub use display::{format_grid_summary, Color, ColorOutput};

//! Console formatting utilities

use crate::game_of_life::Grid;

/// Describe a grid's population and extent on one line
pub fn format_grid_summary(grid: &Grid) -> String {
    match grid.bounding_box() {
        None => "0 live cells".to_string(),
        Some(bbox) => {
            let plural = if grid.living_count() == 1 { "" } else { "s" };
            format!(
                "{} live cell{} within ({}, {})..=({}, {})",
                grid.living_count(),
                plural,
                bbox.min.x,
                bbox.min.y,
                bbox.max.x,
                bbox.max.y
            )
        }
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

//! Errors raised while reading Life 1.06 input

use thiserror::Error;

/// Header line every Life 1.06 document starts with
pub const LIFE_106_HEADER: &str = "#Life 1.06";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// The first line is not the Life 1.06 header
    #[error("input is not in Life 1.06 format: expected header `#Life 1.06`, found `{found}`")]
    MissingHeader { found: String },

    /// A cell line does not hold two integer coordinates
    #[error("line {line}: expected two integer coordinates `x y`, found `{content}`")]
    MalformedLine { line: usize, content: String },

    /// A coordinate does not fit a 64-bit signed integer
    #[error("line {line}: coordinate `{value}` is outside the 64-bit signed range")]
    OutOfRange { line: usize, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let err = LifeError::MissingHeader { found: "#Life 1.05".to_string() };
        assert!(err.to_string().contains("#Life 1.06"));
        assert!(err.to_string().contains("#Life 1.05"));

        let err = LifeError::OutOfRange { line: 3, value: "9223372036854775808".to_string() };
        assert!(err.to_string().starts_with("line 3"));
    }
}

/// Errors raised when the board is addressed or built incorrectly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    OutOfRange {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },
    EmptyDimensions {
        width: usize,
        height: usize,
    },
    TooLarge {
        width: usize,
        height: usize,
    },
    PatternOutOfBounds {
        name: &'static str,
        x: isize,
        y: isize,
    },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::OutOfRange {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "coordinate ({}, {}) is outside the {}x{} grid",
                x, y, width, height
            ),
            GridError::EmptyDimensions { width, height } => write!(
                f,
                "grid dimensions must be positive, got {}x{}",
                width, height
            ),
            GridError::TooLarge { width, height } => write!(
                f,
                "a {}x{} grid has more cells than can be addressed",
                width, height
            ),
            GridError::PatternOutOfBounds { name, x, y } => write!(
                f,
                "pattern '{}' placed at ({}, {}) does not fit on the grid",
                name, x, y
            ),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_coordinate_and_size() {
        let err = GridError::OutOfRange {
            x: -1,
            y: 2,
            width: 3,
            height: 4,
        };
        assert_eq!(err.to_string(), "coordinate (-1, 2) is outside the 3x4 grid");
    }
}

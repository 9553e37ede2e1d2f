use thiserror::Error;

/// Errors raised when mutating a bounded world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A mutation targeted a cell outside `[0, width) x [0, height)`.
    ///
    /// Coordinates are signed so a pattern translated past the top or left
    /// edge can be reported as-is.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i128,
        y: i128,
        width: usize,
        height: usize,
    },
    /// A world was requested with a zero width or height.
    #[error("world dimensions must be positive, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn out_of_bounds(x: i128, y: i128, width: usize, height: usize) -> Self {
        Error::OutOfBounds { x, y, width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = Error::out_of_bounds(-1, 4, 5, 5);
        assert_eq!(err.to_string(), "cell (-1, 4) is outside the 5x5 grid");
    }

    #[test]
    fn test_empty_dimensions_message() {
        let err = Error::EmptyDimensions { width: 0, height: 3 };
        assert_eq!(err.to_string(), "world dimensions must be positive, got 0x3");
    }
}

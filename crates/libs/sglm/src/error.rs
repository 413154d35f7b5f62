//! Errors reported by the checked variants of the numeric operations.
//!
//! The plain operations never fail: degenerate input propagates through
//! IEEE-754 arithmetic as NaN or infinite components. The `try_*` variants
//! detect the same situations up front and report them with [`MathError`].

/// Error type of the checked operations.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MathError {
    /// The matrix has no inverse.
    #[error("matrix is singular (determinant = {determinant})")]
    SingularMatrix {
        /// Determinant of the rejected matrix.
        determinant: f64,
    },

    /// The vector cannot be normalized.
    #[error("vector has zero or non-finite length")]
    ZeroLength,

    /// The picking region is empty.
    #[error("pick region must have a positive size, got {width} x {height}")]
    DegeneratePickRegion {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },

    /// A homogeneous point lies at infinity.
    #[error("homogeneous coordinate w is zero")]
    ZeroW,
}

/// Result type of the checked operations.
pub type Result<T> = std::result::Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            MathError::SingularMatrix { determinant: 0.0 }.to_string(),
            "matrix is singular (determinant = 0)"
        );
        assert_eq!(
            MathError::DegeneratePickRegion {
                width: 0.0,
                height: 2.5
            }
            .to_string(),
            "pick region must have a positive size, got 0 x 2.5"
        );
    }
}

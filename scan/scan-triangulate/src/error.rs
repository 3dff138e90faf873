//! Error types for depth-map triangulation.

use thiserror::Error;

/// Errors that can occur during depth-map triangulation.
#[derive(Debug, Error)]
pub enum TriangulateError {
    /// Depth map has no pixels.
    #[error("Depth map has no pixels")]
    EmptyDepthMap,

    /// Depth buffer length disagrees with the map dimensions.
    #[error("Depth buffer size mismatch: expected {expected}, got {actual}")]
    DepthBufferSizeMismatch {
        /// Expected buffer length (width × height).
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// Invalid discontinuity factor.
    #[error("Invalid discontinuity factor: {0} (must be non-negative)")]
    InvalidDiscontinuityFactor(f32),
}

/// Result type for triangulation operations.
pub type TriangulateResult<T> = std::result::Result<T, TriangulateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TriangulateError::EmptyDepthMap;
        assert_eq!(format!("{err}"), "Depth map has no pixels");

        let err = TriangulateError::DepthBufferSizeMismatch {
            expected: 12,
            actual: 10,
        };
        assert!(format!("{err}").contains("12"));
        assert!(format!("{err}").contains("10"));

        let err = TriangulateError::InvalidDiscontinuityFactor(-1.0);
        assert!(format!("{err}").contains("-1"));
    }
}

/// An error type for the homography estimation and projection.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HomographyError {
    /// Estimation needs exactly four source and four destination points.
    #[error("Exactly four source and destination points are required, got {src} and {dst}")]
    InvalidInputCount {
        /// Number of source points received.
        src: usize,
        /// Number of destination points received.
        dst: usize,
    },

    /// The matrix cannot be inverted.
    #[error("Homography is singular (det = {0})")]
    SingularMatrix(f64),

    /// The bottom right element is too close to zero to normalize by.
    #[error("Homography scale element H[2][2] is too close to zero")]
    ZeroScale,

    /// Input and output buffers have different lengths.
    #[error("Source length ({0}) does not match the destination length ({1})")]
    LengthMismatch(usize, usize),
}

use pitchview_geometry::HomographyError;

/// An error type for loading and replaying match data.
#[derive(thiserror::Error, Debug)]
pub enum MatchError {
    /// Error reading a file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing json.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Error estimating or applying a homography.
    #[error(transparent)]
    Geometry(#[from] HomographyError),

    /// A position needs at least two components.
    #[error("Invalid position with {0} components, expected at least 2")]
    InvalidPosition(usize),

    /// The frame rate must be finite and positive.
    #[error("Invalid frame rate {0}")]
    InvalidFrameRate(f64),
}

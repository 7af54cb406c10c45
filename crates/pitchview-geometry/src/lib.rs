#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the geometry module.
pub mod error;

/// Small dense 3x3 linear algebra utilities.
pub mod linalg;

/// 2d point type.
pub mod point;

/// Homography matrix and four point estimation.
pub mod homography;

/// Projection of points through a homography.
pub mod projection;

pub use error::HomographyError;
pub use homography::{
    coefficient_matrix, estimate_homography, estimate_homography_with_diagnostics, Homography,
    HomographyEstimate,
};
pub use point::Point2d;
pub use projection::{project_point, project_points, ProjectedPoint, PROJECTION_EPSILON};

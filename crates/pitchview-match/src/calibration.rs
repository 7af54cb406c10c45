use std::path::Path;

use pitchview_geometry::{estimate_homography_with_diagnostics, Homography, Point2d};
use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// Four correspondences between the camera image and the pitch plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// Landmarks in image pixel coordinates.
    pub image_points: Vec<Point2d>,
    /// The same landmarks in pitch coordinates.
    pub pitch_points: Vec<Point2d>,
}

impl Calibration {
    /// Parse a calibration from a json string.
    pub fn from_json_str(json: &str) -> Result<Self, MatchError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a calibration from a json file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MatchError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Estimate the homography from the image plane to the pitch plane.
    pub fn image_to_pitch(&self) -> Result<Homography, MatchError> {
        let estimate = estimate_homography_with_diagnostics(&self.image_points, &self.pitch_points)?;
        log::debug!(
            "calibration reprojection error: {:.3e}, degenerate: {}",
            self.reprojection_error(&estimate.homography),
            estimate.degenerate
        );
        Ok(estimate.homography)
    }

    /// Largest distance between a projected image landmark and its pitch landmark.
    pub fn reprojection_error(&self, image_to_pitch: &Homography) -> f64 {
        self.image_points
            .iter()
            .zip(self.pitch_points.iter())
            .map(|(img, pitch)| image_to_pitch.project(*img).point.distance(pitch))
            .fold(0.0, f64::max)
    }

    /// Estimate the homography from the pitch plane back to the image plane.
    pub fn pitch_to_image(&self) -> Result<Homography, MatchError> {
        Ok(self.image_to_pitch()?.inverse()?)
    }
}

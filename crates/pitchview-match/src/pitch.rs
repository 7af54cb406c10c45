use pitchview_geometry::{Homography, Point2d};

use crate::error::MatchError;

/// Scaling of tracking coordinates onto the rendered pitch plane.
///
/// The tracking x axis is scaled and mirrored around `mirror_length`, the y
/// axis is scaled and becomes the depth axis, and every object sits at a fixed
/// `height` above the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchMapping {
    /// Multiplier applied to both tracking coordinates.
    pub scale: f64,
    /// The scaled x coordinate is mirrored as `mirror_length - x`.
    pub mirror_length: f64,
    /// Constant vertical coordinate of the mapped positions.
    pub height: f64,
}

impl Default for PitchMapping {
    fn default() -> Self {
        Self {
            scale: 0.1,
            mirror_length: 12.0,
            height: 0.1,
        }
    }
}

impl PitchMapping {
    /// Map a point in tracking coordinates to a 3d pitch position `[x, height, z]`.
    pub fn map_point(&self, point: Point2d) -> [f64; 3] {
        [
            self.mirror_length - point.x * self.scale,
            self.height,
            point.y * self.scale,
        ]
    }

    /// Map a raw `[x, y, ..]` position. Extra components are ignored.
    pub fn map(&self, position: &[f64]) -> Result<[f64; 3], MatchError> {
        Ok(self.map_point(position_to_point(position)?))
    }
}

/// Maps tracked positions onto the pitch, optionally through a camera homography first.
#[derive(Debug, Clone, Default)]
pub struct PositionMapper {
    /// Homography from the tracking (image) plane to the pitch plane.
    pub homography: Option<Homography>,
    /// Scaling applied after the homography.
    pub pitch: PitchMapping,
}

impl PositionMapper {
    /// Create a mapper that only applies the pitch scaling.
    pub fn new(pitch: PitchMapping) -> Self {
        Self {
            homography: None,
            pitch,
        }
    }

    /// Project positions through `homography` before the pitch scaling.
    pub fn with_homography(mut self, homography: Homography) -> Self {
        self.homography = Some(homography);
        self
    }

    /// Map a raw tracked position to a 3d pitch position.
    pub fn map(&self, position: &[f64]) -> Result<[f64; 3], MatchError> {
        let mut point = position_to_point(position)?;
        if let Some(homo) = &self.homography {
            let projected = homo.project(point);
            if !projected.normalized {
                log::debug!("position {:?} projects to infinity", position);
            }
            point = projected.point;
        }
        Ok(self.pitch.map_point(point))
    }
}

fn position_to_point(position: &[f64]) -> Result<Point2d, MatchError> {
    match position {
        [x, y, ..] => Ok(Point2d::new(*x, *y)),
        _ => Err(MatchError::InvalidPosition(position.len())),
    }
}

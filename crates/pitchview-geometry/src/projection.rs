use crate::error::HomographyError;
use crate::homography::Homography;
use crate::linalg;
use crate::point::Point2d;

/// Threshold on `|w|` below which the homogeneous division is skipped.
pub const PROJECTION_EPSILON: f64 = f64::EPSILON;

/// A point projected through a homography.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    /// The projected point. When `normalized` is false these are the raw
    /// homogeneous `x'` and `y'` components.
    pub point: Point2d,
    /// The homogeneous scale `w'` before normalization.
    pub w: f64,
    /// Whether the components were divided by `w'`.
    pub normalized: bool,
}

/// Project a 2d point through a homography.
///
/// The point is lifted to `[x, y, 1]`, multiplied by `H` and divided by the
/// resulting `w'`. When `|w'| <= PROJECTION_EPSILON` the point lies at (or near)
/// infinity and the un-normalized `x'` and `y'` are returned instead.
///
/// # Arguments
///
/// * `homo` - The homography from the source to the destination plane.
/// * `point` - The point in the source plane.
pub fn project_point(homo: &Homography, point: Point2d) -> ProjectedPoint {
    let mut out = [0.0; 3];
    linalg::mat33_mul_vec3(homo.as_array(), &point.to_homogeneous(), &mut out);
    let [x, y, w] = out;

    if w.abs() > PROJECTION_EPSILON {
        ProjectedPoint {
            point: Point2d::new(x / w, y / w),
            w,
            normalized: true,
        }
    } else {
        ProjectedPoint {
            point: Point2d::new(x, y),
            w,
            normalized: false,
        }
    }
}

/// Project a set of points through a homography.
///
/// # Arguments
///
/// * `homo` - The homography from the source to the destination plane.
/// * `src_points` - The points in the source plane.
/// * `dst_points` - A pre-allocated slice to store the projected points.
///
/// PRECONDITION: dst_points has the same length as src_points.
pub fn project_points(
    homo: &Homography,
    src_points: &[Point2d],
    dst_points: &mut [Point2d],
) -> Result<(), HomographyError> {
    if src_points.len() != dst_points.len() {
        return Err(HomographyError::LengthMismatch(
            src_points.len(),
            dst_points.len(),
        ));
    }

    for (dst, src) in dst_points.iter_mut().zip(src_points.iter()) {
        *dst = project_point(homo, *src).point;
    }

    Ok(())
}

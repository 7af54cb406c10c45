use serde::{Deserialize, Serialize};

use crate::error::HomographyError;
use crate::linalg;
use crate::point::Point2d;
use crate::projection::{project_point, ProjectedPoint};

/// Separation ratio at or below which the correspondences are reported as degenerate.
///
/// The ratio is the second smallest singular value of the coefficient matrix over
/// the largest. Exactly collinear or coincident points drive it to rounding
/// level (about 1e-16), while valid configurations in pixel coordinates stay
/// around 1e-6 to 1e-8 because the matrix mixes unit and squared pixel columns.
/// The threshold sits between the two, so only numerical rank loss is flagged.
/// Callers wanting a stricter conditioning test can compare
/// [`HomographyEstimate::separation`] against their own bound.
pub const DEGENERACY_TOLERANCE: f64 = 1e-12;

/// A planar projective transform stored as a row-major 3x3 matrix.
///
/// The matrix is only defined up to a nonzero scale factor: `H` and `k * H`
/// map every point to the same location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Homography([[f64; 3]; 3]);

impl Homography {
    /// Create a homography from a row-major 3x3 matrix.
    pub const fn from_array(mat: [[f64; 3]; 3]) -> Self {
        Self(mat)
    }

    /// The identity transform.
    pub const fn identity() -> Self {
        Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Borrow the row-major matrix.
    pub fn as_array(&self) -> &[[f64; 3]; 3] {
        &self.0
    }

    /// Consume the homography and return the row-major matrix.
    pub fn into_array(self) -> [[f64; 3]; 3] {
        self.0
    }

    /// Multiply all nine elements by `k`.
    pub fn scaled(&self, k: f64) -> Self {
        Self(self.0.map(|row| row.map(|v| v * k)))
    }

    /// Rescale the matrix so that `H[2][2] == 1`.
    ///
    /// Fails with [`HomographyError::ZeroScale`] when the element is too close
    /// to zero relative to the rest of the matrix.
    pub fn normalized(&self) -> Result<Self, HomographyError> {
        let h22 = self.0[2][2];
        if h22.abs() <= f64::EPSILON * linalg::frobenius_norm_mat33(&self.0) {
            return Err(HomographyError::ZeroScale);
        }
        Ok(self.scaled(1.0 / h22))
    }

    /// The determinant of the matrix.
    pub fn determinant(&self) -> f64 {
        linalg::det_mat33(&self.0)
    }

    /// Compute the inverse transform, mapping destination points back to the source.
    ///
    /// The determinant is compared against the cube of the Frobenius norm so the
    /// singularity test does not depend on the arbitrary scale of the matrix.
    pub fn inverse(&self) -> Result<Self, HomographyError> {
        let det = self.determinant();
        let norm = linalg::frobenius_norm_mat33(&self.0);
        if !det.is_finite() || det.abs() <= f64::EPSILON * norm.powi(3) {
            return Err(HomographyError::SingularMatrix(det));
        }
        let adj = linalg::adjugate_mat33(&self.0);
        Ok(Self(adj).scaled(1.0 / det))
    }

    /// Project a point through this homography.
    pub fn project(&self, point: Point2d) -> ProjectedPoint {
        project_point(self, point)
    }
}

impl From<[[f64; 3]; 3]> for Homography {
    fn from(mat: [[f64; 3]; 3]) -> Self {
        Self(mat)
    }
}

/// Result of a four point homography estimation with solver diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct HomographyEstimate {
    /// The estimated homography, unit Frobenius norm with arbitrary sign.
    pub homography: Homography,
    /// Singular values of the coefficient matrix in the order the solver returned them.
    ///
    /// The ninth value is the implicit zero of the null space column of `V`.
    pub singular_values: [f64; 9],
    /// Index of the singular value whose right singular vector was selected.
    pub null_index: usize,
    /// Second smallest singular value over the largest, zero for an all zero matrix.
    ///
    /// Small values mean the solution is poorly separated from the rest of the
    /// near null space.
    pub separation: f64,
    /// Whether `separation <= DEGENERACY_TOLERANCE`.
    pub degenerate: bool,
}

/// Build the 8x9 coefficient matrix of the direct linear transform.
///
/// For every correspondence `(x, y) -> (u, v)` two rows are written:
///
/// ```text
/// [-x, -y, -1,  0,  0,  0, x*u, y*u, u]
/// [ 0,  0,  0, -x, -y, -1, x*v, y*v, v]
/// ```
pub fn coefficient_matrix(src: &[Point2d; 4], dst: &[Point2d; 4]) -> [[f64; 9]; 8] {
    let mut mat_a = [[0.0; 9]; 8];
    for (i, (s, d)) in src.iter().zip(dst.iter()).enumerate() {
        let (x, y, u, v) = (s.x, s.y, d.x, d.y);
        mat_a[2 * i] = [-x, -y, -1.0, 0.0, 0.0, 0.0, x * u, y * u, u];
        mat_a[2 * i + 1] = [0.0, 0.0, 0.0, -x, -y, -1.0, x * v, y * v, v];
    }
    mat_a
}

/// Compute the homography mapping four source points onto four destination points.
///
/// * `src` - The source 2d points, exactly four.
/// * `dst` - The destination 2d points, exactly four.
///
/// Returns the homography from src to dst, with unit Frobenius norm.
///
/// Example:
///
/// ```
/// use pitchview_geometry::{estimate_homography, Point2d};
///
/// let src = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]].map(Point2d::from);
/// let dst = [[2.0, 1.0], [3.0, 1.0], [2.0, 2.0], [3.0, 2.0]].map(Point2d::from);
/// let homo = estimate_homography(&src, &dst).unwrap();
/// let p = homo.project(Point2d::new(0.5, 0.5)).point;
/// assert!((p.x - 2.5).abs() < 1e-9 && (p.y - 1.5).abs() < 1e-9);
/// ```
pub fn estimate_homography(
    src: &[Point2d],
    dst: &[Point2d],
) -> Result<Homography, HomographyError> {
    estimate_homography_with_diagnostics(src, dst).map(|estimate| estimate.homography)
}

/// Compute the homography from four correspondences and report solver diagnostics.
///
/// The solution is the right singular vector of the coefficient matrix associated
/// with its smallest singular value. Degenerate configurations (collinear or
/// coincident points) are logged and flagged but still return a matrix.
pub fn estimate_homography_with_diagnostics(
    src: &[Point2d],
    dst: &[Point2d],
) -> Result<HomographyEstimate, HomographyError> {
    let (src4, dst4) = match (<&[Point2d; 4]>::try_from(src), <&[Point2d; 4]>::try_from(dst)) {
        (Ok(src4), Ok(dst4)) => (src4, dst4),
        _ => {
            return Err(HomographyError::InvalidInputCount {
                src: src.len(),
                dst: dst.len(),
            })
        }
    };

    let coeffs = coefficient_matrix(src4, dst4);
    let mat_a = faer::Mat::<f64>::from_fn(8, 9, |i, j| coeffs[i][j]);

    // full svd: V is 9x9, only 8 singular values are returned
    let svd = mat_a.svd();
    let s = svd.s_diagonal();
    let v = svd.v();

    let mut singular_values = [0.0; 9];
    for (i, sv) in singular_values.iter_mut().enumerate().take(s.nrows()) {
        *sv = s.read(i);
    }

    let null_index = smallest_singular_index(&singular_values);
    let h: [f64; 9] = std::array::from_fn(|k| v.read(k, null_index));

    let homography = Homography([[h[0], h[1], h[2]], [h[3], h[4], h[5]], [h[6], h[7], h[8]]]);

    let separation = separation_ratio(&singular_values);
    let degenerate = separation <= DEGENERACY_TOLERANCE;
    if degenerate {
        log::warn!(
            "degenerate point configuration, singular values: {:?}",
            singular_values
        );
    } else {
        log::debug!("homography singular values: {:?}", singular_values);
    }

    Ok(HomographyEstimate {
        homography,
        singular_values,
        null_index,
        separation,
        degenerate,
    })
}

// the solver ordering is not relied upon
fn smallest_singular_index(singular_values: &[f64; 9]) -> usize {
    singular_values
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
        .unwrap_or(8)
}

fn separation_ratio(singular_values: &[f64; 9]) -> f64 {
    let mut sorted = *singular_values;
    sorted.sort_by(f64::total_cmp);
    let largest = sorted[8];
    if largest <= 0.0 || !largest.is_finite() {
        return 0.0;
    }
    sorted[1] / largest
}

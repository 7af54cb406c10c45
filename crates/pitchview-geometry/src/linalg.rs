/// Multiply a 3x3 row-major matrix by a 3d vector.
///
/// # Arguments
///
/// * `mat` - The 3x3 matrix.
/// * `vec` - The 3d vector.
/// * `out` - The output vector.
pub fn mat33_mul_vec3(mat: &[[f64; 3]; 3], vec: &[f64; 3], out: &mut [f64; 3]) {
    for (out_i, row) in out.iter_mut().zip(mat.iter()) {
        *out_i = row[0] * vec[0] + row[1] * vec[1] + row[2] * vec[2];
    }
}

/// Compute the determinant of a 3x3 row-major matrix.
pub fn det_mat33(mat: &[[f64; 3]; 3]) -> f64 {
    mat[0][0] * (mat[1][1] * mat[2][2] - mat[1][2] * mat[2][1])
        - mat[0][1] * (mat[1][0] * mat[2][2] - mat[1][2] * mat[2][0])
        + mat[0][2] * (mat[1][0] * mat[2][1] - mat[1][1] * mat[2][0])
}

/// Compute the adjugate (transposed cofactor matrix) of a 3x3 row-major matrix.
pub fn adjugate_mat33(mat: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let m = mat;
    [
        [
            m[1][1] * m[2][2] - m[1][2] * m[2][1],
            m[0][2] * m[2][1] - m[0][1] * m[2][2],
            m[0][1] * m[1][2] - m[0][2] * m[1][1],
        ],
        [
            m[1][2] * m[2][0] - m[1][0] * m[2][2],
            m[0][0] * m[2][2] - m[0][2] * m[2][0],
            m[0][2] * m[1][0] - m[0][0] * m[1][2],
        ],
        [
            m[1][0] * m[2][1] - m[1][1] * m[2][0],
            m[0][1] * m[2][0] - m[0][0] * m[2][1],
            m[0][0] * m[1][1] - m[0][1] * m[1][0],
        ],
    ]
}

/// Frobenius norm of a 3x3 matrix.
pub fn frobenius_norm_mat33(mat: &[[f64; 3]; 3]) -> f64 {
    mat.iter().flatten().map(|v| v * v).sum::<f64>().sqrt()
}

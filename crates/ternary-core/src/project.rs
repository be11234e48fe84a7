// File: crates/ternary-core/src/project.rs
// Summary: Ternary (upper, right, left) to Cartesian projection for scalars, slices and arrays.
// Notes:
// - The reference triangle has vertices left (0, 0), right (1, 0) and upper (0.5, sqrt(3)/2).
// - A zero component sum is not guarded; the results are NaN/Inf and propagate.

use ndarray::{Array, ArrayBase, Data, Dimension, Zip};

use crate::error::{Result, TernaryError};
use crate::geometry::Point;

/// Height of the unit equilateral triangle, sqrt(3)/2.
pub const SQRT3_2: f64 = 0.866_025_403_784_438_6;

/// Cartesian x of a ternary triple.
#[inline]
pub fn project_x(upper: f64, right: f64, left: f64) -> f64 {
    0.5 * (upper + 2.0 * right) / (upper + right + left)
}

/// Cartesian y of a ternary triple.
#[inline]
pub fn project_y(upper: f64, right: f64, left: f64) -> f64 {
    SQRT3_2 * upper / (upper + right + left)
}

/// Normalize the triple by its sum and project it onto the reference triangle.
///
/// ```
/// let (x, y) = ternary_core::project(20.0, 10.5, 3.2);
/// assert!(x > 0.0 && y > 0.0);
/// ```
#[inline]
pub fn project(upper: f64, right: f64, left: f64) -> Point {
    let total = upper + right + left;
    let (u, r, l) = (upper / total, right / total, left / total);
    (project_x(u, r, l), project_y(u, r, l))
}

/// Element-wise [`project`] over three equal-length slices.
pub fn project_slices(upper: &[f64], right: &[f64], left: &[f64]) -> Result<Vec<Point>> {
    if upper.len() != right.len() || upper.len() != left.len() {
        return Err(TernaryError::LengthMismatch {
            upper: upper.len(),
            right: right.len(),
            left: left.len(),
        });
    }
    Ok(upper
        .iter()
        .zip(right)
        .zip(left)
        .map(|((&u, &r), &l)| project(u, r, l))
        .collect())
}

/// Element-wise [`project`] over arrays of identical shape. Returns `(xs, ys)`
/// with the input shape.
pub fn project_array<S1, S2, S3, D>(
    upper: &ArrayBase<S1, D>,
    right: &ArrayBase<S2, D>,
    left: &ArrayBase<S3, D>,
) -> Result<(Array<f64, D>, Array<f64, D>)>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
    D: Dimension,
{
    if upper.shape() != right.shape() || upper.shape() != left.shape() {
        return Err(TernaryError::ShapeMismatch {
            upper: upper.shape().to_vec(),
            right: right.shape().to_vec(),
            left: left.shape().to_vec(),
        });
    }

    let mut xs = Array::<f64, D>::zeros(upper.raw_dim());
    let mut ys = Array::<f64, D>::zeros(upper.raw_dim());
    Zip::from(&mut xs)
        .and(&mut ys)
        .and(upper)
        .and(right)
        .and(left)
        .for_each(|x, y, &u, &r, &l| {
            let (px, py) = project(u, r, l);
            *x = px;
            *y = py;
        });
    Ok((xs, ys))
}

//! Change of coordinates onto a basis.

use crate::gp::{Point, Points, Vector};
use crate::{Result, SpatialError};

/// Coordinates of `points` in the frame with origin `origin` and axes `basis`.
///
/// Each output row holds the dot products of `point − origin` with every
/// basis vector, so an orthonormal basis yields true coordinates. Operands of
/// smaller dimension are padded with zeros.
///
/// # Errors
/// `Empty` if `basis` has no vectors.
pub fn transform_coordinates(
    points: &Points,
    origin: &Point,
    basis: &[Vector],
) -> Result<Vec<Vec<f64>>> {
    if basis.is_empty() {
        return Err(SpatialError::Empty);
    }
    Ok(points
        .iter()
        .map(|point| {
            let relative = point - origin;
            basis.iter().map(|axis| relative.dot(axis)).collect()
        })
        .collect())
}

//! Measurements on raw point sets: triangle area, tetrahedron volume and the
//! signed area of a planar polygon.

use crate::gp::{Point, Points, Vector};
use crate::{Result, SpatialError};

/// Area of the triangle with vertices `a`, `b`, `c`.
///
/// Collinear vertices give zero.
///
/// # Errors
/// `ReduceDimension` above three dimensions.
pub fn area_triangle(a: &Point, b: &Point, c: &Point) -> Result<f64> {
    let ab = Vector::from_points(a, b);
    let ac = Vector::from_points(a, c);
    Ok(0.5 * ab.cross(&ac)?.norm())
}

/// Volume of the tetrahedron with vertices `a`, `b`, `c`, `d`:
/// `|AB · (AC × AD)| / 6`.
///
/// # Errors
/// `ReduceDimension` above three dimensions.
pub fn volume_tetrahedron(a: &Point, b: &Point, c: &Point, d: &Point) -> Result<f64> {
    let ab = Vector::from_points(a, b);
    let ac = Vector::from_points(a, c);
    let ad = Vector::from_points(a, d);
    Ok(ab.dot(&ac.cross(&ad)?).abs() / 6.0)
}

/// Signed area of the polygon whose vertices are `points`, in order
/// (shoelace formula). Positive for counter-clockwise vertices.
///
/// # Errors
/// * `Dimension` if the points are not 2-D
/// * `Shape` for fewer than three points
pub fn area_signed(points: &Points) -> Result<f64> {
    if points.dimension() != 2 {
        return Err(SpatialError::dimension("The points must be 2D."));
    }
    if points.len() < 3 {
        return Err(SpatialError::Shape("There must be at least 3 points.".into()));
    }
    let n = points.len();
    let twice_area: f64 = (0..n)
        .map(|i| {
            let (p, q) = (points.row(i), points.row((i + 1) % n));
            p[0] * q[1] - q[0] * p[1]
        })
        .sum();
    Ok(0.5 * twice_area)
}

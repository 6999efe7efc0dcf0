//! Ordered collection of points sharing one dimension.
//!
//! Points are the input to every best-fit routine, so the affine queries
//! (rank, collinearity, coplanarity) live here.

use std::fmt;

use nalgebra::DMatrix;

use super::{Array1d, Coords, Point};
use crate::foundation::matrix_rank;
use crate::precision::Tolerance;
use crate::{Result, SpatialError};

/// N points of dimension D (N ≥ 1, D ≥ 1).
#[derive(Clone, Debug, PartialEq)]
pub struct Points {
    rows: Vec<Point>,
}

impl Points {
    /// Creates a collection from raw rows.
    ///
    /// # Errors
    /// * `Empty` if there are no rows or a row is empty
    /// * `Shape` if rows have different lengths
    /// * `NonFinite` if any value is NaN or infinite
    pub fn new(rows: impl IntoIterator<Item = impl Into<Vec<f64>>>) -> Result<Self> {
        let rows = rows
            .into_iter()
            .map(Point::new)
            .collect::<Result<Vec<_>>>()?;
        Self::from_points(rows)
    }

    /// Creates a collection from points of equal dimension.
    pub fn from_points(rows: Vec<Point>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(SpatialError::Empty);
        };
        let dim = first.dimension();
        if rows.iter().any(|p| p.dimension() != dim) {
            return Err(SpatialError::Shape(
                "The array must not contain sequences with different lengths.".into(),
            ));
        }
        Ok(Self { rows })
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false; a collection holds at least one point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Dimension shared by every point.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.rows[0].dimension()
    }

    #[inline]
    pub fn row(&self, index: usize) -> &Point {
        &self.rows[index]
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.rows.iter()
    }

    /// Pads every point with trailing zeros up to `dim`.
    pub fn set_dimension(&self, dim: usize) -> Result<Points> {
        let rows = self
            .rows
            .iter()
            .map(|p| p.set_dimension(dim))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }

    /// Distinct points in lexicographic order.
    pub fn unique(&self) -> Points {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| {
            a.as_slice()
                .iter()
                .zip(b.as_slice())
                .map(|(x, y)| x.total_cmp(y))
                .find(|o| o.is_ne())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        rows.dedup_by(|a, b| a.as_slice() == b.as_slice());
        Self { rows }
    }

    /// Arithmetic mean of the points.
    pub fn centroid(&self) -> Point {
        let dim = self.dimension();
        let n = self.len() as f64;
        let mut sum = vec![0.0; dim];
        for p in &self.rows {
            for (acc, v) in sum.iter_mut().zip(p.as_slice()) {
                *acc += v;
            }
        }
        Point::from_coords(Coords::from_raw(sum.into_iter().map(|s| s / n).collect()))
    }

    /// Points translated so that their centroid is the origin.
    pub fn mean_center(&self) -> Points {
        self.mean_center_with_centroid().0
    }

    /// Mean-centred points together with the centroid they were shifted by.
    pub fn mean_center_with_centroid(&self) -> (Points, Point) {
        let centroid = self.centroid();
        let rows = self
            .rows
            .iter()
            .map(|p| Point::from_coords((p - &centroid).coords().clone()))
            .collect();
        (Self { rows }, centroid)
    }

    /// Points scaled so that the farthest one from the origin is at distance 1.
    ///
    /// # Errors
    /// `Degenerate` if every point is at the origin.
    pub fn normalize_distance(&self) -> Result<Points> {
        let max = self
            .rows
            .iter()
            .map(|p| p.coords().norm())
            .fold(0.0, f64::max);
        if max == 0.0 {
            return Err(SpatialError::degenerate(
                "The points must not all be at the origin.",
            ));
        }
        let rows = self
            .rows
            .iter()
            .map(|p| Point::from_coords(p.coords().map(|v| v / max)))
            .collect();
        Ok(Self { rows })
    }

    /// Row-major N×D matrix of the coordinates.
    pub fn to_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_row_iterator(
            self.len(),
            self.dimension(),
            self.rows.iter().flat_map(|p| p.as_slice().iter().copied()),
        )
    }

    /// Dimension of the smallest affine subspace containing the points:
    /// 0 for coincident points, 1 for collinear, 2 for coplanar.
    ///
    /// `tol` is forwarded to the rank computation as the singular value threshold.
    pub fn affine_rank(&self, tol: Option<f64>) -> usize {
        // Duplicates would pull the centroid towards them.
        matrix_rank(&self.unique().mean_center().to_matrix(), tol)
    }

    pub fn are_concurrent(&self, tol: Option<f64>) -> bool {
        self.affine_rank(tol) == 0
    }

    pub fn are_collinear(&self, tol: Option<f64>) -> bool {
        self.affine_rank(tol) <= 1
    }

    pub fn are_coplanar(&self, tol: Option<f64>) -> bool {
        self.affine_rank(tol) <= 2
    }

    /// Row-wise closeness; collections of different shape are never close.
    pub fn is_close(&self, other: &Points, tol: Tolerance) -> bool {
        self.len() == other.len()
            && self
                .rows
                .iter()
                .zip(&other.rows)
                .all(|(a, b)| a.is_close(b, tol))
    }

    /// Rounds every coordinate to `decimals` places.
    pub fn round(&self, decimals: u32) -> Points {
        Self {
            rows: self.rows.iter().map(|p| p.round(decimals)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Points {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Points([")?;
        for (i, p) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p.coords())?;
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(rows: &[&[f64]]) -> Points {
        Points::new(rows.iter().map(|r| r.to_vec())).unwrap()
    }

    #[test]
    fn test_points_validation() {
        assert_eq!(
            Points::new(Vec::<Vec<f64>>::new()),
            Err(SpatialError::Empty)
        );
        assert!(matches!(
            Points::new(vec![vec![1.0, 2.0], vec![1.0]]),
            Err(SpatialError::Shape(_))
        ));
        assert_eq!(
            Points::new(vec![vec![1.0, f64::NAN]]),
            Err(SpatialError::NonFinite)
        );
    }

    #[test]
    fn test_unique() {
        let points = pts(&[&[1.0, 1.0], &[0.0, 0.0], &[1.0, 1.0], &[0.0, 2.0]]);
        let unique = points.unique();
        assert_eq!(unique.len(), 3);
        assert!(unique.is_close(
            &pts(&[&[0.0, 0.0], &[0.0, 2.0], &[1.0, 1.0]]),
            Tolerance::DEFAULT
        ));
    }

    #[test]
    fn test_centroid_and_mean_center() {
        let points = pts(&[&[0.0, 0.0], &[2.0, 0.0], &[2.0, 2.0], &[0.0, 2.0]]);
        assert_eq!(points.centroid().as_slice(), &[1.0, 1.0]);
        let (centered, centroid) = points.mean_center_with_centroid();
        assert_eq!(centroid.as_slice(), &[1.0, 1.0]);
        assert_eq!(centered.row(0).as_slice(), &[-1.0, -1.0]);
        assert_eq!(centered.centroid().as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn test_normalize_distance() {
        let points = pts(&[&[1.0, 0.0], &[0.0, 4.0], &[2.0, 0.0]]);
        let scaled = points.normalize_distance().unwrap();
        assert!(scaled.is_close(
            &pts(&[&[0.25, 0.0], &[0.0, 1.0], &[0.5, 0.0]]),
            Tolerance::DEFAULT
        ));
        assert!(pts(&[&[0.0, 0.0]]).normalize_distance().is_err());
    }

    #[test]
    fn test_affine_rank() {
        assert_eq!(pts(&[&[1.0, 1.0], &[1.0, 1.0]]).affine_rank(None), 0);
        assert_eq!(
            pts(&[&[0.0, 0.0], &[1.0, 1.0], &[2.0, 2.0]]).affine_rank(None),
            1
        );
        assert_eq!(
            pts(&[&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[3.0, 4.0, 0.0]])
                .affine_rank(None),
            2
        );
        assert_eq!(
            pts(&[&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]])
                .affine_rank(None),
            3
        );
        assert_eq!(
            pts(&[&[1.0, 3.0, 2.0], &[3.0, 4.0, 5.0], &[2.0, 1.0, 5.0], &[5.0, 9.0, 8.0]])
                .affine_rank(None),
            3
        );
        assert_eq!(
            pts(&[&[0.0, 0.0], &[0.0, 1.0], &[1.0, 0.0], &[1.0, 1.0]]).affine_rank(None),
            2
        );
    }

    #[test]
    fn test_affine_predicates() {
        let coincident = pts(&[&[2.0, 3.0], &[2.0, 3.0], &[2.0, 3.0]]);
        assert!(coincident.are_concurrent(None));
        assert!(coincident.are_collinear(None));

        let collinear = pts(&[&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]]);
        assert!(!collinear.are_concurrent(None));
        assert!(collinear.are_collinear(None));
        assert!(collinear.are_coplanar(None));

        let spread = pts(&[&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]]);
        assert!(!spread.are_coplanar(None));
        // A generous threshold flattens everything.
        assert!(spread.are_concurrent(Some(10.0)));
    }

    #[test]
    fn test_set_dimension_and_display() {
        let points = pts(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let lifted = points.set_dimension(3).unwrap();
        assert_eq!(lifted.dimension(), 3);
        assert_eq!(lifted.to_string(), "Points([[1.0, 2.0, 0.0], [3.0, 4.0, 0.0]])");
        assert!(points.set_dimension(1).is_err());
    }
}

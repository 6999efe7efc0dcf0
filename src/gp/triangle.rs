//! Triangle and its derived geometry.
//!
//! Vertices are A, B and C. Side `a` is opposite vertex A and runs B → C,
//! side `b` runs C → A, side `c` runs A → B.

use std::fmt;

use super::{Array1d, Line, Point, Points, Vector};
use crate::precision::Tolerance;
use crate::{Result, SpatialError};

/// Triangle vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vertex {
    A,
    B,
    C,
}

/// Triangle side, named after the opposite vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
    C,
}

impl Vertex {
    pub const ALL: [Vertex; 3] = [Vertex::A, Vertex::B, Vertex::C];

    /// The side facing this vertex.
    pub fn opposite(self) -> Side {
        match self {
            Vertex::A => Side::A,
            Vertex::B => Side::B,
            Vertex::C => Side::C,
        }
    }
}

impl Side {
    pub const ALL: [Side; 3] = [Side::A, Side::B, Side::C];
}

/// Classification by side lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriangleKind {
    Equilateral,
    Isosceles,
    Scalene,
}

/// A triangle with three non-collinear vertices of equal dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    point_a: Point,
    point_b: Point,
    point_c: Point,
}

impl Triangle {
    /// Creates a triangle.
    ///
    /// # Errors
    /// * `Dimension` if the points differ in dimension
    /// * `Degenerate` if the points are collinear
    pub fn new(point_a: Point, point_b: Point, point_c: Point) -> Result<Self> {
        let dim = point_a.dimension();
        if point_b.dimension() != dim || point_c.dimension() != dim {
            return Err(SpatialError::dimension(
                "The points must have the same dimension.",
            ));
        }
        let points = Points::from_points(vec![point_a.clone(), point_b.clone(), point_c.clone()])?;
        if points.are_collinear(None) {
            return Err(SpatialError::degenerate("The points must not be collinear."));
        }
        Ok(Self {
            point_a,
            point_b,
            point_c,
        })
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.point_a.dimension()
    }

    pub fn point(&self, vertex: Vertex) -> &Point {
        match vertex {
            Vertex::A => &self.point_a,
            Vertex::B => &self.point_b,
            Vertex::C => &self.point_c,
        }
    }

    /// Line along `side`, from its first to its second endpoint.
    pub fn line(&self, side: Side) -> Line {
        let (from, to) = match side {
            Side::A => (&self.point_b, &self.point_c),
            Side::B => (&self.point_c, &self.point_a),
            Side::C => (&self.point_a, &self.point_b),
        };
        // Non-collinear vertices are pairwise distinct.
        Line::from_axis(from.clone(), Vector::from_points(from, to))
    }

    pub fn length(&self, side: Side) -> f64 {
        self.line(side).direction().norm()
    }

    pub fn perimeter(&self) -> f64 {
        Side::ALL.iter().map(|&s| self.length(s)).sum()
    }

    /// Interior angle at `vertex` (radians), from the law of cosines.
    pub fn angle(&self, vertex: Vertex) -> f64 {
        let [a, b, c] = self.lengths();
        let cos = match vertex {
            Vertex::A => (b * b + c * c - a * a) / (2.0 * b * c),
            Vertex::B => (a * a + c * c - b * b) / (2.0 * a * c),
            Vertex::C => (a * a + b * b - c * c) / (2.0 * a * b),
        };
        cos.clamp(-1.0, 1.0).acos()
    }

    pub fn centroid(&self) -> Point {
        let sum = &(&self.point_a.to_vector() + &self.point_b.to_vector())
            + &self.point_c.to_vector();
        Point::from_coords((sum / 3.0).coords().clone())
    }

    /// `(B − A) × (C − A)`; its magnitude is twice the area.
    ///
    /// # Errors
    /// `ReduceDimension` above three dimensions.
    pub fn normal(&self) -> Result<Vector> {
        let ab = Vector::from_points(&self.point_a, &self.point_b);
        let ac = Vector::from_points(&self.point_a, &self.point_c);
        ab.cross(&ac)
    }

    pub fn area(&self) -> Result<f64> {
        Ok(0.5 * self.normal()?.norm())
    }

    /// Line from `vertex` to its foot on the opposite side.
    pub fn altitude(&self, vertex: Vertex) -> Result<Line> {
        let from = self.point(vertex);
        let foot = self.line(vertex.opposite()).project_point(from);
        Line::from_points(from, &foot)
    }

    /// Intersection of the altitudes.
    pub fn orthocenter(&self) -> Result<Point> {
        let alt_a = self.altitude(Vertex::A)?;
        let alt_b = self.altitude(Vertex::B)?;
        alt_a.intersect_line(&alt_b, Tolerance::DEFAULT)
    }

    /// Equilateral when all three side-length pairs are close, isosceles
    /// when exactly one is.
    pub fn classify(&self, tol: Tolerance) -> TriangleKind {
        let [a, b, c] = self.lengths();
        let close = [(a, b), (a, c), (b, c)]
            .iter()
            .filter(|(x, y)| tol.is_close(*x, *y))
            .count();
        match close {
            3 => TriangleKind::Equilateral,
            1 => TriangleKind::Isosceles,
            _ => TriangleKind::Scalene,
        }
    }

    /// Pythagorean check on the sorted side lengths.
    pub fn is_right(&self, tol: Tolerance) -> bool {
        let mut lengths = self.lengths();
        lengths.sort_by(f64::total_cmp);
        let [a, b, c] = lengths;
        tol.is_close(a * a + b * b, c * c)
    }

    fn lengths(&self) -> [f64; 3] {
        [
            self.length(Side::A),
            self.length(Side::B),
            self.length(Side::C),
        ]
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Triangle(point_a={}, point_b={}, point_c={})",
            self.point_a, self.point_b, self.point_c
        )
    }
}

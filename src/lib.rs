//! spatial: spatial primitives and computational geometry
//!
//! Vectors, points, lines, planes, circles, spheres, cylinders and triangles,
//! plus the algorithms relating them: intersection, projection, distance,
//! best-fit regression and affine classification.
//!
//! Every primitive is an immutable value validated at construction.
//! Fallible operations return [`Result`]; comparisons take an explicit
//! [`Tolerance`].

pub mod precision;
pub mod foundation;
pub mod gp;
pub mod intersect;
pub mod fit;
pub mod measure;
pub mod transform;
pub mod visualization;

// Re-exports for convenience
pub use gp::{
    Array1d, Circle, Coords, Cylinder, Line, LineSegment, Plane, Point, Points, Side, Spatial,
    Sphere, Triangle, TriangleKind, Vector, Vertex,
};
pub use measure::{area_signed, area_triangle, volume_tetrahedron};
pub use precision::Tolerance;
pub use transform::transform_coordinates;
pub use visualization::{Canvas2d, Canvas3d, Plot, PlotOptions, PlotStyle, Plotter, SurfaceGrid};

/// Default tolerance for geometric comparisons
pub const TOLERANCE: Tolerance = Tolerance::DEFAULT;

/// Result type for spatial operations
pub type Result<T> = std::result::Result<T, SpatialError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpatialError {
    #[error("The array must not be empty.")]
    Empty,

    #[error("The values must all be finite.")]
    NonFinite,

    #[error("Invalid shape: {0}")]
    Shape(String),

    #[error("Invalid dimension: {0}")]
    Dimension(String),

    #[error("The desired dimension {requested} cannot be less than the current dimension {current}.")]
    ReduceDimension { current: usize, requested: usize },

    #[error("The vector must not be the zero vector.")]
    ZeroVector,

    #[error("The radius must be positive, got {0}.")]
    NonPositiveRadius(f64),

    #[error("Degenerate configuration: {0}")]
    Degenerate(String),

    #[error("No intersection: {0}")]
    NoIntersection(String),

    #[error("Cannot plot: {0}")]
    NotPlottable(String),
}

/// Broad classes of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input itself is malformed.
    Validation,
    /// The input is well-formed but the arrangement makes the operation undefined.
    Degeneracy,
    /// A solve produced no real intersection.
    NoIntersection,
}

impl SpatialError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SpatialError::Empty
            | SpatialError::NonFinite
            | SpatialError::Shape(_)
            | SpatialError::Dimension(_)
            | SpatialError::ReduceDimension { .. }
            | SpatialError::ZeroVector
            | SpatialError::NonPositiveRadius(_)
            | SpatialError::NotPlottable(_) => ErrorKind::Validation,
            SpatialError::Degenerate(_) => ErrorKind::Degeneracy,
            SpatialError::NoIntersection(_) => ErrorKind::NoIntersection,
        }
    }

    pub(crate) fn dimension(msg: impl Into<String>) -> Self {
        SpatialError::Dimension(msg.into())
    }

    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        log::debug!("degenerate configuration: {msg}");
        SpatialError::Degenerate(msg)
    }

    pub(crate) fn no_intersection(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        log::debug!("no intersection: {msg}");
        SpatialError::NoIntersection(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(SpatialError::NonFinite.kind(), ErrorKind::Validation);
        assert_eq!(SpatialError::ZeroVector.kind(), ErrorKind::Validation);
        assert_eq!(
            SpatialError::Degenerate("parallel".into()).kind(),
            ErrorKind::Degeneracy
        );
        assert_eq!(
            SpatialError::NoIntersection("separate".into()).kind(),
            ErrorKind::NoIntersection
        );
    }

    #[test]
    fn test_error_messages() {
        let err = SpatialError::ReduceDimension { current: 3, requested: 2 };
        assert!(err.to_string().contains("cannot be less than"));
        assert_eq!(
            SpatialError::NonPositiveRadius(-1.0).to_string(),
            "The radius must be positive, got -1."
        );
    }
}

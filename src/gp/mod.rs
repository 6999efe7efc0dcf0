//! Geometric primitives package.
//!
//! Every other module builds on these types. Primitives are immutable values
//! validated at construction; derived values are new objects.

// Numeric array base
mod coords;
mod vec;
mod pnt;
mod points;

pub use coords::{Array1d, Coords};
pub use pnt::Point;
pub use points::Points;
pub use vec::Vector;

// Point + vector primitives
mod axis;
mod lin;
mod pln;
mod segment;

pub use axis::Spatial;
pub use lin::Line;
pub use pln::Plane;
pub use segment::LineSegment;

// Center + radius primitives
mod n_sphere;
mod circ;
mod sphere;
mod cylinder;

pub use circ::Circle;
pub use cylinder::Cylinder;
pub use sphere::Sphere;

mod triangle;

pub use triangle::{Side, Triangle, TriangleKind, Vertex};

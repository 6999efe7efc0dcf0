//! Foundation numerics for the spatial primitives.
//!
//! Quadratic solving, SVD-based rank and singular vectors, least squares.

pub mod math;

pub use math::{
    det2, det3, left_singular_vectors, linspace, lstsq, matrix_rank, right_singular_vectors,
    round_to, sign, solve_quadratic,
};

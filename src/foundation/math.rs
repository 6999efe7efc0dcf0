//! Numeric kernels shared by the primitives.
//!
//! This module provides:
//! - `solve_quadratic` - real roots of `a x² + b x + c = 0`, optional coefficient rounding
//! - `matrix_rank` - tolerance-aware numeric rank (SVD)
//! - `right_singular_vectors` - right singular vectors ordered by decreasing singular value
//! - `left_singular_vectors` - same for the left side
//! - `lstsq` - linear least squares via SVD
//! - `round_to`, `sign`, `det2`, `det3`, `linspace`

use nalgebra::{DMatrix, DVector};

use crate::{Result, SpatialError};

/// Round `value` to `digits` decimal places.
#[inline]
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// Sign of `value` as -1, 0 or 1.
#[inline]
pub fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Determinant of the 2x2 matrix with rows `[a, b]`.
#[inline]
pub fn det2(a: [f64; 2], b: [f64; 2]) -> f64 {
    a[0] * b[1] - a[1] * b[0]
}

/// Determinant of the 3x3 matrix with rows `m`.
#[inline]
pub fn det3(m: [[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// `n` evenly spaced values from `start` to `stop`, both included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Solve `a x² + b x + c = 0`.
///
/// Returns `[x₋, x₊]`, the root with the minus sign first. With `n_digits`
/// the coefficients are rounded before solving, which absorbs floating noise
/// around tangency.
///
/// # Errors
/// * `Degenerate` if `a` is zero
/// * `NoIntersection` if the discriminant is negative
pub fn solve_quadratic(a: f64, b: f64, c: f64, n_digits: Option<u32>) -> Result<[f64; 2]> {
    let (a, b, c) = match n_digits {
        Some(d) => (round_to(a, d), round_to(b, d), round_to(c, d)),
        None => (a, b, c),
    };

    if a == 0.0 {
        return Err(SpatialError::degenerate("The coefficient `a` must be non-zero."));
    }

    let discriminant = b * b - 4.0 * a * c;
    log::trace!("quadratic a={a} b={b} c={c} discriminant={discriminant}");

    if discriminant < 0.0 {
        return Err(SpatialError::no_intersection(
            "The discriminant must not be negative.",
        ));
    }

    let root = discriminant.sqrt();
    Ok([(-b - root) / (2.0 * a), (-b + root) / (2.0 * a)])
}

/// Singular values below this are treated as zero: `σ_max · max(m, n) · ε`.
fn default_rank_tolerance(singular_values: &DVector<f64>, nrows: usize, ncols: usize) -> f64 {
    let s_max = singular_values.iter().cloned().fold(0.0, f64::max);
    s_max * nrows.max(ncols) as f64 * f64::EPSILON
}

/// Numeric rank of `m`.
///
/// `tol` is the threshold below which a singular value counts as zero;
/// `None` uses `σ_max · max(m, n) · ε`.
pub fn matrix_rank(m: &DMatrix<f64>, tol: Option<f64>) -> usize {
    if m.is_empty() {
        return 0;
    }
    let singular_values = m.clone().singular_values();
    let tol = tol.unwrap_or_else(|| default_rank_tolerance(&singular_values, m.nrows(), m.ncols()));
    let rank = singular_values.iter().filter(|s| **s > tol).count();
    log::trace!("matrix rank {rank} (tol={tol:e}, singular values {:?})", singular_values.as_slice());
    rank
}

/// Indices of `values` ordered by decreasing value.
fn descending_order(values: &DVector<f64>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&i, &j| values[j].total_cmp(&values[i]));
    order
}

/// Right singular vectors of `m`, ordered by decreasing singular value.
///
/// Each vector has length `m.ncols()`; there are `min(m.nrows(), m.ncols())` of them.
pub fn right_singular_vectors(m: &DMatrix<f64>) -> Result<Vec<Vec<f64>>> {
    let svd = m.clone().svd(false, true);
    let v_t = svd
        .v_t
        .as_ref()
        .ok_or_else(|| SpatialError::degenerate("singular value decomposition failed"))?;
    Ok(descending_order(&svd.singular_values)
        .into_iter()
        .map(|i| v_t.row(i).iter().cloned().collect())
        .collect())
}

/// Left singular vectors of `m`, ordered by decreasing singular value.
///
/// Each vector has length `m.nrows()`; there are `min(m.nrows(), m.ncols())` of them.
pub fn left_singular_vectors(m: &DMatrix<f64>) -> Result<Vec<Vec<f64>>> {
    let svd = m.clone().svd(true, false);
    let u = svd
        .u
        .as_ref()
        .ok_or_else(|| SpatialError::degenerate("singular value decomposition failed"))?;
    Ok(descending_order(&svd.singular_values)
        .into_iter()
        .map(|i| u.column(i).iter().cloned().collect())
        .collect())
}

/// Least-squares solution of `a x = b` (minimum norm when rank-deficient).
pub fn lstsq(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>> {
    if a.nrows() != b.len() {
        return Err(SpatialError::Shape(format!(
            "system has {} rows but right-hand side has {} entries",
            a.nrows(),
            b.len()
        )));
    }
    let svd = a.clone().svd(true, true);
    let eps = default_rank_tolerance(&svd.singular_values, a.nrows(), a.ncols());
    svd.solve(b, eps)
        .map_err(|msg| SpatialError::degenerate(format!("least squares failed: {msg}")))
}

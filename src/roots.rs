//! Polynomial root finding.
//!
//! Roots of a real polynomial given lowest-degree-first, found with the
//! Durand-Kerner (Weierstrass) simultaneous iteration. All `n` roots of the
//! monic polynomial are refined together:
//!
//! ```text
//! z_i <- z_i - p(z_i) / prod_{j != i} (z_i - z_j)
//! ```
//!
//! The finder never fails loudly. A polynomial of degree 0 (or the zero
//! polynomial) has no roots, and an iteration that produces NaN/Inf or runs
//! out of iterations degrades to an empty root set.

use tracing::debug;

use crate::complex::Complex;
use crate::config::RootFinderConfig;

// ============================================================================
// Preprocessing
// ============================================================================

/// Drop trailing (highest-degree) coefficients that are exactly zero.
///
/// Constant-term zeros are significant and kept. An all-zero polynomial
/// strips to the empty slice.
pub fn strip_high_zeros(poly: &[f64]) -> &[f64] {
    let len = poly
        .iter()
        .rposition(|&c| c != 0.0)
        .map_or(0, |top| top + 1);
    &poly[..len]
}

/// Degree of the polynomial after stripping, `None` for the zero polynomial.
pub fn degree(poly: &[f64]) -> Option<usize> {
    strip_high_zeros(poly).len().checked_sub(1)
}

// ============================================================================
// Durand-Kerner
// ============================================================================

/// Find all complex roots of `poly` with the default iteration limits.
pub fn find_roots(poly: &[f64]) -> Vec<Complex> {
    find_roots_with(poly, &RootFinderConfig::default())
}

/// Find all complex roots of `poly`.
///
/// Returns exactly `degree` roots on success, in no particular order, and an
/// empty vector when there are no roots or the iteration did not converge.
pub fn find_roots_with(poly: &[f64], config: &RootFinderConfig) -> Vec<Complex> {
    let poly = strip_high_zeros(poly);
    if poly.len() <= 1 {
        return Vec::new();
    }
    if poly.iter().any(|c| !c.is_finite()) {
        debug!(?poly, "non-finite coefficient, no roots");
        return Vec::new();
    }

    let n = poly.len() - 1;
    let lead = poly[n];
    // Monic form: z^n + monic[n-1] z^(n-1) + ... + monic[0]
    let monic: Vec<f64> = poly[..n].iter().map(|c| c / lead).collect();

    let mut z = initial_guesses(&monic);
    let mut next = z.clone();

    for iteration in 0..config.max_iterations {
        let mut max_step = 0.0_f64;
        for i in 0..n {
            let zi = z[i];
            let mut denom = Complex::ONE;
            for (j, &zj) in z.iter().enumerate() {
                if j != i {
                    denom = denom * (zi - zj);
                }
            }
            let step = eval_monic(&monic, zi) / denom;
            next[i] = zi - step;
            max_step = max_step.max(step.norm() / zi.norm().max(1.0));
        }
        core::mem::swap(&mut z, &mut next);

        if !z.iter().all(|r| r.is_finite()) || max_step.is_nan() {
            debug!(iteration, degree = n, "root iteration diverged");
            return Vec::new();
        }
        if max_step <= config.tolerance || residuals_converged(poly, &z, config.residual_tolerance)
        {
            return z;
        }
    }

    debug!(
        degree = n,
        max_iterations = config.max_iterations,
        "root iteration did not converge"
    );
    Vec::new()
}

/// Starting points on a circle enclosing every root (Cauchy bound), at
/// angles `2πk/n + π/(2n)`. The offset keeps the set from being symmetric
/// about the real axis, which would trap real polynomials on that axis.
fn initial_guesses(monic: &[f64]) -> Vec<Complex> {
    let n = monic.len();
    let radius = 1.0 + monic.iter().fold(0.0_f64, |m, c| m.max(c.abs()));
    let sector = 2.0 * core::f64::consts::PI / n as f64;
    (0..n)
        .map(|k| {
            let theta = sector * k as f64 + sector / 4.0;
            Complex::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

/// Horner evaluation of the monic polynomial with implied leading 1.
fn eval_monic(monic: &[f64], z: Complex) -> Complex {
    monic
        .iter()
        .rev()
        .fold(Complex::ONE, |acc, &c| acc * z + Complex::new(c, 0.0))
}

/// Every estimate's relative backward error `|p(z)| / Σ|c_k| max(1,|z|)^k`
/// is within `tol`. Repeated roots converge only linearly and stall at the
/// rounding floor, so this is what terminates them.
fn residuals_converged(poly: &[f64], z: &[Complex], tol: f64) -> bool {
    z.iter().all(|&zi| {
        let r = zi.norm().max(1.0);
        let mut value = Complex::ZERO;
        let mut bound = 0.0;
        for &c in poly.iter().rev() {
            value = value * zi + Complex::new(c, 0.0);
            bound = bound * r + c.abs();
        }
        value.norm() <= tol * bound
    })
}

// ============================================================================
// Tests
// ============================================================================

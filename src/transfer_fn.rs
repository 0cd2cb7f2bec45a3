//! Rational transfer functions.
//!
//! A [`TransferFunction`] is a numerator and a denominator polynomial, both
//! real and lowest-degree-first. Evaluation is plain complex arithmetic: a
//! pole hit exactly, or a zero denominator polynomial, gives NaN/Inf
//! components rather than an error. Consumers treat any NaN component as
//! "undefined here" and skip the sample.

use crate::complex::Complex;
use crate::config::{NyquistConfig, RootFinderConfig};
use crate::roots::find_roots_with;

// ============================================================================
// Polynomial evaluation
// ============================================================================

/// Evaluate `poly` at `s` by accumulating `c_i * s^i` with a running power.
///
/// The empty polynomial evaluates to `(0, 0)`.
pub fn eval_poly(poly: &[f64], s: Complex) -> Complex {
    let mut res = Complex::ZERO;
    let mut s_to_power = Complex::ONE;
    for &c in poly {
        res = res + Complex::scalar_mult(c, s_to_power);
        s_to_power = s_to_power * s;
    }
    res
}

// ============================================================================
// TransferFunction
// ============================================================================

/// `num(s) / den(s)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransferFunction {
    pub num: Vec<f64>,
    pub den: Vec<f64>,
}

impl TransferFunction {
    pub fn new(num: impl Into<Vec<f64>>, den: impl Into<Vec<f64>>) -> Self {
        Self {
            num: num.into(),
            den: den.into(),
        }
    }

    /// Value at `s`. Contains NaN components where the function is undefined.
    #[inline]
    pub fn eval(&self, s: Complex) -> Complex {
        eval_poly(&self.num, s) / eval_poly(&self.den, s)
    }

    /// Value at `s`, or `None` where the function is undefined.
    pub fn eval_defined(&self, s: Complex) -> Option<Complex> {
        Some(self.eval(s)).filter(|v| v.is_defined())
    }

    /// Roots of the numerator.
    pub fn zeros(&self, config: &RootFinderConfig) -> Vec<Complex> {
        find_roots_with(&self.num, config)
    }

    /// Roots of the denominator.
    pub fn poles(&self, config: &RootFinderConfig) -> Vec<Complex> {
        find_roots_with(&self.den, config)
    }

    /// Images of `jω` for `ω = k * step`, `k` in `[-half_range/step,
    /// half_range/step)`, undefined samples dropped.
    pub fn sample_imaginary_axis(&self, half_range: f64, step: f64) -> Vec<Complex> {
        let half = (half_range / step).round() as i64;
        (-half..half)
            .filter_map(|k| self.eval_defined(Complex::imag(step * k as f64)))
            .collect()
    }

    /// The Nyquist contour: the image of the imaginary axis.
    pub fn nyquist_contour(&self, config: &NyquistConfig) -> Vec<Complex> {
        self.sample_imaginary_axis(config.half_range, config.step)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Complex, b: Complex, eps: f64) -> bool {
        (a.re - b.re).abs() < eps && (a.im - b.im).abs() < eps
    }

    const SAMPLES: [Complex; 5] = [
        Complex::new(0.0, 0.0),
        Complex::new(1.0, 0.0),
        Complex::new(-2.5, 3.0),
        Complex::new(0.0, -7.0),
        Complex::new(1e3, 1e-3),
    ];

    #[test]
    fn test_eval_poly_zero() {
        for s in SAMPLES {
            assert_eq!(eval_poly(&[0.0], s), Complex::ZERO);
            assert_eq!(eval_poly(&[], s), Complex::ZERO);
        }
    }

    #[test]
    fn test_eval_poly_constant() {
        for s in SAMPLES {
            assert_eq!(eval_poly(&[1.0, 0.0, 0.0], s), Complex::ONE);
        }
    }

    #[test]
    fn test_eval_poly_quadratic() {
        // 1 + 2s + 3s^2 at s = i: 1 + 2i - 3
        assert_eq!(eval_poly(&[1.0, 2.0, 3.0], Complex::I), Complex::new(-2.0, 2.0));
        // at s = 2: 1 + 4 + 12
        assert_eq!(eval_poly(&[1.0, 2.0, 3.0], Complex::new(2.0, 0.0)), Complex::new(17.0, 0.0));
    }

    #[test]
    fn test_unit_denominator_is_polynomial() {
        let num = vec![0.5, -1.0, 2.0, 0.25];
        let tf = TransferFunction::new(num.clone(), vec![1.0]);
        for s in SAMPLES {
            assert!(close(tf.eval(s), eval_poly(&num, s), 1e-9));
        }
    }

    #[test]
    fn test_first_order_lag() {
        let tf = TransferFunction::new(vec![1.0], vec![1.0, 1.0]);
        assert_eq!(tf.eval(Complex::ZERO), Complex::ONE);
        // 1 / (1 + i) = (1 - i) / 2
        assert!(close(tf.eval(Complex::I), Complex::new(0.5, -0.5), 1e-15));
        assert!(!tf.eval(Complex::new(-1.0, 0.0)).is_defined());
        assert_eq!(tf.eval_defined(Complex::new(-1.0, 0.0)), None);
        assert_eq!(tf.eval_defined(Complex::ZERO), Some(Complex::ONE));
    }

    #[test]
    fn test_zero_denominator_is_undefined() {
        let tf = TransferFunction::new(vec![1.0, 2.0], vec![0.0, 0.0]);
        for s in SAMPLES {
            assert!(!tf.eval(s).is_defined());
        }
    }

    #[test]
    fn test_zeros_and_poles() {
        let tf = TransferFunction::new(vec![1.0], vec![1.0, 1.0]);
        let config = RootFinderConfig::default();
        assert!(tf.zeros(&config).is_empty());
        let poles = tf.poles(&config);
        assert_eq!(poles.len(), 1);
        assert!(close(poles[0], Complex::new(-1.0, 0.0), 1e-12));
    }

    #[test]
    fn test_sample_imaginary_axis_counts() {
        let tf = TransferFunction::new(vec![1.0], vec![1.0, 1.0]);
        assert_eq!(tf.sample_imaginary_axis(100.0, 0.1).len(), 2000);
        assert_eq!(tf.nyquist_contour(&NyquistConfig::default()).len(), 20000);
    }

    #[test]
    fn test_sample_imaginary_axis_drops_undefined() {
        // 1/s is undefined at ω = 0 only
        let tf = TransferFunction::new(vec![1.0], vec![0.0, 1.0]);
        let points = tf.sample_imaginary_axis(1.0, 0.5);
        assert_eq!(points.len(), 3);
        assert!(points.iter().all(|p| p.is_defined()));
        // 1/(jω) = -j/ω
        assert!(close(points[0], Complex::new(0.0, 1.0), 1e-15));
    }

    #[test]
    fn test_nyquist_first_order_is_circle() {
        // 1/(1+s) on the imaginary axis lies on |G - 1/2| = 1/2
        let tf = TransferFunction::new(vec![1.0], vec![1.0, 1.0]);
        for p in tf.nyquist_contour(&NyquistConfig::default()) {
            assert!(((p - Complex::new(0.5, 0.0)).norm() - 0.5).abs() < 1e-9);
        }
    }
}

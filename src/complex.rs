//! Complex arithmetic on `(re, im)` pairs.
//!
//! A [`Complex`] doubles as a 2D point: the same pair is a value in the
//! s-plane, a value in the output plane, or a pixel position on a canvas.
//! That is why the element-wise operations ([`Complex::element_mult`],
//! [`Complex::element_div`]) live next to the true complex product and
//! quotient. They treat the pair as two independent reals and are used for
//! axis-independent canvas scaling.
//!
//! Nothing here fails. Division by zero yields Inf/NaN components, and a
//! NaN component means "undefined at this point" to every consumer.

use core::ops::{Add, Div, Mul, Neg, Sub};

// ============================================================================
// Complex
// ============================================================================

/// A complex number, or equivalently an `(x, y)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };
    pub const I: Complex = Complex { re: 0.0, im: 1.0 };
    pub const NAN: Complex = Complex {
        re: f64::NAN,
        im: f64::NAN,
    };

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// A point on the imaginary axis, `jω`.
    #[inline]
    pub const fn imag(im: f64) -> Self {
        Self { re: 0.0, im }
    }

    /// `(s·re, s·im)`.
    #[inline]
    pub fn scalar_mult(s: f64, c: Complex) -> Complex {
        Complex::new(s * c.re, s * c.im)
    }

    /// `scalar_mult(1/s, c)`. A zero divisor gives Inf/NaN components.
    #[inline]
    pub fn scalar_div(s: f64, c: Complex) -> Complex {
        Self::scalar_mult(1.0 / s, c)
    }

    /// Component-wise product. Not complex multiplication.
    #[inline]
    pub fn element_mult(self, rhs: Complex) -> Complex {
        Complex::new(self.re * rhs.re, self.im * rhs.im)
    }

    /// Component-wise quotient. Not complex division.
    #[inline]
    pub fn element_div(self, rhs: Complex) -> Complex {
        Complex::new(self.re / rhs.re, self.im / rhs.im)
    }

    #[inline]
    pub fn conj(self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    /// Squared magnitude, `re² + im²`.
    ///
    /// Used in place of the modulus on the per-pixel color path to avoid a
    /// square root. The color map that consumes it is monotonic, so the true
    /// modulus would work as well with a re-tuned map domain.
    #[inline]
    pub fn mag_sq(self) -> f64 {
        let sq = self.element_mult(self);
        sq.re + sq.im
    }

    /// Angle of the point in radians, `atan2(im, re)`.
    #[inline]
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// True modulus.
    #[inline]
    pub fn norm(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// False when either component is NaN.
    #[inline]
    pub fn is_defined(self) -> bool {
        !(self.re.is_nan() || self.im.is_nan())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, rhs: Complex) -> Complex {
        Complex::new(self.re.min(rhs.re), self.im.min(rhs.im))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, rhs: Complex) -> Complex {
        Complex::new(self.re.max(rhs.re), self.im.max(rhs.im))
    }
}

impl Add for Complex {
    type Output = Complex;
    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;
    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Neg for Complex {
    type Output = Complex;
    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

/// Complex product `(ac − bd, bc + ad)`.
impl Mul for Complex {
    type Output = Complex;
    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.im * rhs.re + self.re * rhs.im,
        )
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;
    #[inline]
    fn mul(self, s: f64) -> Complex {
        Complex::scalar_mult(s, self)
    }
}

/// Complex quotient: the numerator times the conjugate of the denominator,
/// scaled by `1 / |den|²`. A `(0, 0)` denominator gives NaN/Inf.
impl Div for Complex {
    type Output = Complex;
    #[inline]
    fn div(self, rhs: Complex) -> Complex {
        Complex::scalar_div(rhs.mag_sq(), self * rhs.conj())
    }
}

impl Div<f64> for Complex {
    type Output = Complex;
    #[inline]
    fn div(self, s: f64) -> Complex {
        Complex::scalar_div(s, self)
    }
}

// ============================================================================
// Tests
// ============================================================================

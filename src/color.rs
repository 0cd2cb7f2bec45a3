//! Color types and HSL conversion.
//!
//! The field renderer writes 8-bit RGBA pixels. Colors are produced in HSL
//! (hue from the angle of a point, lightness from its magnitude) and
//! converted with the standard HSL to RGB formula.

// ============================================================================
// Component order
// ============================================================================

/// RGBA component order inside a pixel buffer: R=0, G=1, B=2, A=3.
pub struct OrderRgba;
impl OrderRgba {
    pub const R: usize = 0;
    pub const G: usize = 1;
    pub const B: usize = 2;
    pub const A: usize = 3;
    pub const N: usize = 4;
}

// ============================================================================
// Rgba8
// ============================================================================

/// RGBA color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_MASK: u8 = 255;

    pub const TRANSPARENT: Rgba8 = Rgba8 {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn new_opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, Self::BASE_MASK)
    }

    /// Build an opaque color from unit-range channels.
    ///
    /// Channels are rounded and clamped into `0..=255`; NaN maps to 0.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new_opaque(
            Self::from_double(r),
            Self::from_double(g),
            Self::from_double(b),
        )
    }

    /// Convert a unit-range value to a channel, saturating at both ends.
    #[inline]
    pub fn from_double(v: f64) -> u8 {
        // `as` saturates and sends NaN to 0
        (v * Self::BASE_MASK as f64).round() as u8
    }

    /// Components in [`OrderRgba`] order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn is_opaque(&self) -> bool {
        self.a == Self::BASE_MASK
    }
}

// ============================================================================
// HSL
// ============================================================================

/// Convert hue (degrees), saturation and lightness to an opaque color.
///
/// Uses the CSS formulation: `a = s * min(l, 1 - l)` and per channel
/// `l - a * max(min(k - 3, 9 - k, 1), -1)` with `k = (n + h / 30) mod 12`
/// for `n` = 0 (red), 8 (green), 4 (blue). Lightness outside `[0, 1]` is
/// allowed; the result is clamped when it is quantized.
pub fn hsl_to_rgba(h: f64, s: f64, l: f64) -> Rgba8 {
    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = (n + h / 30.0).rem_euclid(12.0);
        l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };
    Rgba8::from_unit(f(0.0), f(8.0), f(4.0))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba8_new() {
        let c = Rgba8::new(128, 64, 32, 255);
        assert_eq!(c.r, 128);
        assert_eq!(c.g, 64);
        assert_eq!(c.b, 32);
        assert!(c.is_opaque());
        assert_eq!(c.to_array(), [128, 64, 32, 255]);
    }

    #[test]
    fn test_from_double_clamps() {
        assert_eq!(Rgba8::from_double(0.0), 0);
        assert_eq!(Rgba8::from_double(1.0), 255);
        assert_eq!(Rgba8::from_double(0.5), 128);
        assert_eq!(Rgba8::from_double(-3.0), 0);
        assert_eq!(Rgba8::from_double(7.0), 255);
        assert_eq!(Rgba8::from_double(f64::NAN), 0);
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgba(0.0, 1.0, 0.5), Rgba8::new_opaque(255, 0, 0));
        assert_eq!(hsl_to_rgba(120.0, 1.0, 0.5), Rgba8::new_opaque(0, 255, 0));
        assert_eq!(hsl_to_rgba(240.0, 1.0, 0.5), Rgba8::new_opaque(0, 0, 255));
        assert_eq!(hsl_to_rgba(360.0, 1.0, 0.5), Rgba8::new_opaque(255, 0, 0));
    }

    #[test]
    fn test_hsl_secondaries() {
        assert_eq!(hsl_to_rgba(60.0, 1.0, 0.5), Rgba8::new_opaque(255, 255, 0));
        assert_eq!(hsl_to_rgba(180.0, 1.0, 0.5), Rgba8::new_opaque(0, 255, 255));
        assert_eq!(hsl_to_rgba(300.0, 1.0, 0.5), Rgba8::new_opaque(255, 0, 255));
    }

    #[test]
    fn test_hsl_lightness_extremes() {
        assert_eq!(hsl_to_rgba(77.0, 1.0, 0.0), Rgba8::new_opaque(0, 0, 0));
        assert_eq!(hsl_to_rgba(77.0, 1.0, 1.0), Rgba8::new_opaque(255, 255, 255));
        // out of range lightness saturates instead of wrapping
        assert_eq!(hsl_to_rgba(77.0, 1.0, 1.8), Rgba8::new_opaque(255, 255, 255));
        assert_eq!(hsl_to_rgba(77.0, 1.0, -0.4), Rgba8::new_opaque(0, 0, 0));
    }

    #[test]
    fn test_hsl_gray() {
        assert_eq!(hsl_to_rgba(200.0, 0.0, 0.5), Rgba8::new_opaque(128, 128, 128));
    }
}

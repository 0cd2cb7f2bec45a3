//! Plot-space to canvas-space transformation.
//!
//! Plot space is the mathematical complex plane (y up). Canvas space is
//! pixels with a top-left origin (y down), shifted by an offset that
//! reserves room for axis labels. A [`CanvasTransform`] (the view: center
//! and per-axis scale) produces a [`CanvasMapping`] for a given canvas size
//! and offset:
//!
//! ```text
//! flipped      = (scale.x, -scale.y)
//! total_offset = canvas_offset + canvas_size / 2
//! to_canvas(p)   = p * flipped + (total_offset - center * flipped)
//! from_canvas(q) = q / flipped + (center - total_offset / flipped)
//! ```
//!
//! All products are element-wise. Substituting one into the other gives
//! `p * f / f + (T - c*f) / f + c - T / f = p`, so the pair are exact
//! algebraic inverses and only rounding separates a round trip from the
//! identity.

use crate::complex::Complex;

// ============================================================================
// CanvasTransform
// ============================================================================

/// A view of plot space: the point shown at the canvas center and the
/// pixels per plot unit along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    pub center: Complex,
    pub scale: Complex,
}

impl CanvasTransform {
    pub fn new(center: Complex, scale: Complex) -> Self {
        Self { center, scale }
    }

    /// Build the forward and inverse mappings for a canvas of `canvas_size`
    /// pixels whose plot area starts at `canvas_offset`.
    pub fn create_transforms(&self, canvas_size: Complex, canvas_offset: Complex) -> CanvasMapping {
        let total_offset = canvas_offset + Complex::scalar_div(2.0, canvas_size);
        let flipped_scale = self.scale.element_mult(Complex::new(1.0, -1.0));

        CanvasMapping {
            flipped_scale,
            to_offset: total_offset - self.center.element_mult(flipped_scale),
            from_offset: self.center - total_offset.element_div(flipped_scale),
        }
    }
}

// ============================================================================
// CanvasMapping
// ============================================================================

/// Precomputed `to_canvas` / `from_canvas` pair for one view and canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMapping {
    flipped_scale: Complex,
    to_offset: Complex,
    from_offset: Complex,
}

impl CanvasMapping {
    /// Plot-space point to canvas pixel coordinates.
    #[inline]
    pub fn to_canvas(&self, p: Complex) -> Complex {
        p.element_mult(self.flipped_scale) + self.to_offset
    }

    /// Canvas pixel coordinates to plot-space point.
    #[inline]
    pub fn from_canvas(&self, p: Complex) -> Complex {
        p.element_div(self.flipped_scale) + self.from_offset
    }

    /// Per-axis pixels per plot unit, y negated.
    pub fn flipped_scale(&self) -> Complex {
        self.flipped_scale
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Complex, b: Complex) {
        let tol = 1e-9 * (1.0 + b.re.abs().max(b.im.abs()));
        assert!(
            (a.re - b.re).abs() < tol && (a.im - b.im).abs() < tol,
            "{:?} != {:?}",
            a,
            b
        );
    }

    fn mapping() -> CanvasMapping {
        CanvasTransform::new(Complex::new(-1.5, 0.25), Complex::new(40.0, 25.0))
            .create_transforms(Complex::new(300.0, 300.0), Complex::new(32.0, 0.0))
    }

    #[test]
    fn test_center_maps_to_plot_center() {
        let m = mapping();
        // offset 32 + half of 300
        assert_close(m.to_canvas(Complex::new(-1.5, 0.25)), Complex::new(182.0, 150.0));
        assert_close(m.from_canvas(Complex::new(182.0, 150.0)), Complex::new(-1.5, 0.25));
    }

    #[test]
    fn test_y_axis_is_flipped() {
        let m = mapping();
        let up = m.to_canvas(Complex::new(-1.5, 1.25));
        // one plot unit up is 25 pixels toward the top
        assert_close(up, Complex::new(182.0, 125.0));
        let right = m.to_canvas(Complex::new(-0.5, 0.25));
        assert_close(right, Complex::new(222.0, 150.0));
    }

    #[test]
    fn test_round_trip_from_plot() {
        let m = mapping();
        let points = [
            Complex::new(0.0, 0.0),
            Complex::new(3.0, -4.0),
            Complex::new(-1e4, 2e3),
            Complex::new(1e-7, -1e-9),
        ];
        for p in points {
            assert_close(m.from_canvas(m.to_canvas(p)), p);
        }
    }

    #[test]
    fn test_round_trip_from_canvas() {
        let m = mapping();
        for x in (0..340).step_by(17) {
            for y in (0..300).step_by(13) {
                let q = Complex::new(x as f64, y as f64);
                assert_close(m.to_canvas(m.from_canvas(q)), q);
            }
        }
    }

    #[test]
    fn test_canvas_corners() {
        let m = CanvasTransform::new(Complex::ZERO, Complex::new(10.0, 10.0))
            .create_transforms(Complex::new(100.0, 100.0), Complex::new(0.0, 0.0));
        // top-left pixel is the upper-left of plot space
        assert_close(m.from_canvas(Complex::ZERO), Complex::new(-5.0, 5.0));
        assert_close(m.from_canvas(Complex::new(100.0, 100.0)), Complex::new(5.0, -5.0));
        assert_eq!(m.flipped_scale(), Complex::new(10.0, -10.0));
    }
}

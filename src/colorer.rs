//! Per-point color functions for the field renderer.
//!
//! A [`ColorFn`] maps a plot-space point to a pixel color. The field
//! renderer calls it once per pixel, so implementations hold every constant
//! they need by value (view scale, plot size, color-map parameters) instead
//! of reaching for shared state.
//!
//! - [`OutputPlaneColorer`] colors the output plane: hue from the angle of
//!   the point, lightness from a log-compressed magnitude.
//! - [`InputPlaneColorer`] colors the s-plane by pushing each point through
//!   the transfer function and coloring the result like the output plane.
//! - [`SolidColorer`] paints one color everywhere.

use crate::color::{hsl_to_rgba, Rgba8};
use crate::complex::Complex;
use crate::config::ColorMapConfig;
use crate::trans_canvas::CanvasTransform;
use crate::transfer_fn::TransferFunction;

// ============================================================================
// ColorFn
// ============================================================================

/// Color of a plot-space point.
pub trait ColorFn {
    fn color(&self, p: Complex) -> Rgba8;
}

impl<F: Fn(Complex) -> Rgba8> ColorFn for F {
    #[inline]
    fn color(&self, p: Complex) -> Rgba8 {
        self(p)
    }
}

// ============================================================================
// SolidColorer
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidColorer(pub Rgba8);

impl ColorFn for SolidColorer {
    #[inline]
    fn color(&self, _p: Complex) -> Rgba8 {
        self.0
    }
}

// ============================================================================
// OutputPlaneColorer
// ============================================================================

/// Angle/magnitude color map for output-plane points.
///
/// The point is first brought to plot-relative units with the output view's
/// scale, `scaled = p * scale / plot_size` (element-wise). Then
///
/// ```text
/// hue       = hue_offset + atan2(scaled) in degrees
/// lightness = lightness_scale * (1 - log_base(mag_sq(scaled) + floor))
/// ```
///
/// at full saturation. Points near the origin come out bright and distant
/// points dark. Lightness is not clamped here; quantization clamps it.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPlaneColorer {
    scale: Complex,
    plot_size: Complex,
    inv_ln_base: f64,
    lightness_scale: f64,
    magnitude_floor: f64,
    hue_offset_deg: f64,
}

impl OutputPlaneColorer {
    pub fn new(view: &CanvasTransform, plot_size: Complex, config: &ColorMapConfig) -> Self {
        Self {
            scale: view.scale,
            plot_size,
            inv_ln_base: 1.0 / config.log_base.ln(),
            lightness_scale: config.lightness_scale,
            magnitude_floor: config.magnitude_floor,
            hue_offset_deg: config.hue_offset_deg,
        }
    }

    #[inline]
    fn lightness(&self, mag_sq: f64) -> f64 {
        self.lightness_scale * (1.0 - self.inv_ln_base * (mag_sq + self.magnitude_floor).ln())
    }
}

impl ColorFn for OutputPlaneColorer {
    fn color(&self, p: Complex) -> Rgba8 {
        let scaled = p.element_mult(self.scale).element_div(self.plot_size);
        let hue = self.hue_offset_deg + scaled.arg().to_degrees();
        hsl_to_rgba(hue, 1.0, self.lightness(scaled.mag_sq()))
    }
}

// ============================================================================
// InputPlaneColorer
// ============================================================================

/// Colors s-plane points by their image under the transfer function.
///
/// Where the function is undefined (a pole hit exactly, a zero denominator)
/// or no function is set, the neutral `undefined` color is used.
#[derive(Debug, Clone, PartialEq)]
pub struct InputPlaneColorer {
    tf: Option<TransferFunction>,
    output: OutputPlaneColorer,
    undefined: Rgba8,
}

impl InputPlaneColorer {
    pub fn new(
        tf: Option<TransferFunction>,
        output: OutputPlaneColorer,
        config: &ColorMapConfig,
    ) -> Self {
        Self {
            tf,
            output,
            undefined: config.undefined_rgba(),
        }
    }
}

impl ColorFn for InputPlaneColorer {
    fn color(&self, p: Complex) -> Rgba8 {
        self.tf
            .as_ref()
            .and_then(|tf| tf.eval_defined(p))
            .map_or(self.undefined, |out| self.output.color(out))
    }
}

// ============================================================================
// Tests
// ============================================================================

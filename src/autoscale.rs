//! Automatic view framing.
//!
//! Picks a [`CanvasTransform`] that frames a set of plot-space points: the
//! bounding box of the points (never smaller than a minimum box around the
//! origin) is centered and scaled to cover a fixed fraction of the canvas.
//! With no points to frame, a default view around the origin is used.

use crate::complex::Complex;
use crate::config::AutoscaleConfig;
use crate::trans_canvas::CanvasTransform;
use crate::transfer_fn::TransferFunction;

// ============================================================================
// Bounding box
// ============================================================================

/// Axis-aligned box over `points`, seeded with `[-e, -e]..[e, e]`.
///
/// Returns the bottom-left and top-right corners.
pub fn bounding_box(points: &[Complex], min_half_extent: f64) -> (Complex, Complex) {
    let seed = (
        Complex::new(-min_half_extent, -min_half_extent),
        Complex::new(min_half_extent, min_half_extent),
    );
    points
        .iter()
        .fold(seed, |(bl, tr), &p| (bl.min(p), tr.max(p)))
}

// ============================================================================
// Autoscale
// ============================================================================

/// Frame `points` on a canvas of `canvas_size` pixels.
///
/// Non-empty: center is the bounding box midpoint and the scale maps the box
/// onto `config.margin` of the canvas. Empty: center at the origin with a
/// uniform scale of `min(w, h) / config.default_zoom_divisor`.
pub fn autoscale_s_plane(
    canvas_size: Complex,
    points: &[Complex],
    config: &AutoscaleConfig,
) -> CanvasTransform {
    if points.is_empty() {
        let k = canvas_size.re.min(canvas_size.im) / config.default_zoom_divisor;
        return CanvasTransform::new(Complex::ZERO, Complex::new(k, k));
    }

    let (bl, tr) = bounding_box(points, config.min_half_extent);
    let center = Complex::scalar_mult(0.5, bl) + Complex::scalar_mult(0.5, tr);
    let scale = Complex::scalar_mult(config.margin, canvas_size.element_div(tr - bl));
    CanvasTransform::new(center, scale)
}

/// Frame the image of the imaginary axis under `tf`.
///
/// Samples `tf(jω)` over `config.sample_half_range` with
/// `config.sample_step`, drops undefined samples, and frames the rest. With
/// no transfer function the default view is returned.
pub fn autoscale_output_plane(
    canvas_size: Complex,
    tf: Option<&TransferFunction>,
    config: &AutoscaleConfig,
) -> CanvasTransform {
    let points = tf
        .map(|tf| tf.sample_imaginary_axis(config.sample_half_range, config.sample_step))
        .unwrap_or_default();
    autoscale_s_plane(canvas_size, &points, config)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Complex, b: Complex) -> bool {
        (a.re - b.re).abs() < 1e-9 && (a.im - b.im).abs() < 1e-9
    }

    #[test]
    fn test_bounding_box_seeded() {
        let (bl, tr) = bounding_box(&[Complex::new(0.2, 0.3)], 1.0);
        assert_eq!(bl, Complex::new(-1.0, -1.0));
        assert_eq!(tr, Complex::new(1.0, 1.0));

        let (bl, tr) = bounding_box(&[Complex::new(-4.0, 0.5), Complex::new(2.0, 3.0)], 1.0);
        assert_eq!(bl, Complex::new(-4.0, -1.0));
        assert_eq!(tr, Complex::new(2.0, 3.0));
    }

    #[test]
    fn test_empty_set_default_view() {
        let config = AutoscaleConfig::default();
        let view = autoscale_s_plane(Complex::new(200.0, 120.0), &[], &config);
        assert_eq!(view.center, Complex::ZERO);
        assert_eq!(view.scale, Complex::new(30.0, 30.0));
    }

    #[test]
    fn test_symmetric_pair() {
        let config = AutoscaleConfig::default();
        let points = [Complex::new(2.0, 0.0), Complex::new(-2.0, 0.0)];
        let view = autoscale_s_plane(Complex::new(100.0, 100.0), &points, &config);
        assert!(close(view.center, Complex::ZERO));
        // box is 4 wide and the seeded 2 high
        assert!(close(view.scale, Complex::new(8.25, 16.5)));
    }

    #[test]
    fn test_square_box_scale() {
        let config = AutoscaleConfig::default();
        let points = [Complex::new(2.0, 2.0), Complex::new(-2.0, -2.0)];
        let view = autoscale_s_plane(Complex::new(100.0, 100.0), &points, &config);
        assert!(close(view.center, Complex::ZERO));
        assert!(close(view.scale, Complex::new(8.25, 8.25)));
    }

    #[test]
    fn test_single_point_never_degenerate() {
        let config = AutoscaleConfig::default();
        let view = autoscale_s_plane(Complex::new(100.0, 100.0), &[Complex::ZERO], &config);
        assert!(close(view.center, Complex::ZERO));
        assert!(close(view.scale, Complex::new(16.5, 16.5)));
    }

    #[test]
    fn test_off_center_points() {
        let config = AutoscaleConfig::default();
        let points = [Complex::new(3.0, 4.0), Complex::new(5.0, 0.0)];
        let view = autoscale_s_plane(Complex::new(100.0, 100.0), &points, &config);
        // box [-1, -1]..[5, 4]
        assert!(close(view.center, Complex::new(2.0, 1.5)));
        assert!(close(view.scale, Complex::new(33.0 / 6.0, 33.0 / 5.0)));
    }

    #[test]
    fn test_output_plane_without_tf() {
        let config = AutoscaleConfig::default();
        let view = autoscale_output_plane(Complex::new(80.0, 80.0), None, &config);
        assert_eq!(view.center, Complex::ZERO);
        assert_eq!(view.scale, Complex::new(20.0, 20.0));
    }

    #[test]
    fn test_output_plane_first_order() {
        // 1/(1+jω) stays inside the seed box
        let config = AutoscaleConfig::default();
        let tf = TransferFunction::new(vec![1.0], vec![1.0, 1.0]);
        let view = autoscale_output_plane(Complex::new(100.0, 100.0), Some(&tf), &config);
        assert!(close(view.center, Complex::ZERO));
        assert!(close(view.scale, Complex::new(16.5, 16.5)));
    }

    #[test]
    fn test_output_plane_all_undefined() {
        let config = AutoscaleConfig::default();
        let tf = TransferFunction::new(vec![1.0], vec![0.0]);
        let view = autoscale_output_plane(Complex::new(100.0, 100.0), Some(&tf), &config);
        assert_eq!(view.scale, Complex::new(25.0, 25.0));
    }

    #[test]
    fn test_output_plane_gain() {
        // 10/(1+s): real part spans (0, 10]
        let config = AutoscaleConfig::default();
        let tf = TransferFunction::new(vec![10.0], vec![1.0, 1.0]);
        let view = autoscale_output_plane(Complex::new(100.0, 100.0), Some(&tf), &config);
        assert!((view.center.re - 4.5).abs() < 1e-9);
        assert!((view.scale.re - 3.0).abs() < 1e-9);
    }
}

use wasm_bindgen::prelude::*;

mod render;

use render::{Job, Plane};
use tf_plane::PlotFrame;

fn js_error(err: tf_plane::Error) -> JsError {
    JsError::new(&err.to_string())
}

/// Roots of a lowest-degree-first polynomial as `[re0, im0, re1, im1, ...]`.
///
/// Empty when the root finder does not converge.
#[wasm_bindgen]
pub fn find_roots(coeffs: &[f64]) -> Vec<f64> {
    render::flatten(tf_plane::roots::find_roots(coeffs))
}

/// Get the library version string.
#[wasm_bindgen]
pub fn version() -> String {
    format!("tf-plane {}", env!("CARGO_PKG_VERSION"))
}

/// Everything the page draws for one transfer function and canvas size.
///
/// Point lists come back in canvas pixels, ready for `lineTo`/`arc`.
#[wasm_bindgen]
pub struct Plot {
    frame: PlotFrame,
}

#[wasm_bindgen]
impl Plot {
    /// Pass empty `num` and `den` to plot without a transfer function.
    #[wasm_bindgen(constructor)]
    pub fn new(num: &[f64], den: &[f64], canvas_dim: u32) -> Result<Plot, JsError> {
        let frame = render::compute_frame(num, den, canvas_dim).map_err(js_error)?;
        Ok(Plot { frame })
    }

    pub fn zeros(&self) -> Vec<f64> {
        render::to_canvas_flat(&self.frame.input_mapping(), &self.frame.zeros)
    }

    pub fn poles(&self) -> Vec<f64> {
        render::to_canvas_flat(&self.frame.input_mapping(), &self.frame.poles)
    }

    pub fn nyquist(&self) -> js_sys::Float64Array {
        let points = render::to_canvas_flat(&self.frame.output_mapping(), &self.frame.nyquist);
        js_sys::Float64Array::from(points.as_slice())
    }

    /// `[s.re, s.im, H(s).re, H(s).im]` for an s-plane canvas pixel.
    pub fn probe(&self, x: f64, y: f64) -> Vec<f64> {
        render::probe_flat(&self.frame, x, y)
    }

    pub fn input_field(&self) -> FieldJob {
        FieldJob {
            job: Job::new(&self.frame, Plane::Input),
        }
    }

    pub fn output_field(&self) -> FieldJob {
        FieldJob {
            job: Job::new(&self.frame, Plane::Output),
        }
    }
}

/// An in-progress field render. Call `free()` to cancel it.
#[wasm_bindgen]
pub struct FieldJob {
    job: Job,
}

#[wasm_bindgen]
impl FieldJob {
    /// Render up to `rows` more rows. Returns `true` while rows remain.
    pub fn step(&mut self, rows: u32) -> bool {
        self.job.step(rows)
    }

    pub fn progress(&self) -> f64 {
        self.job.progress()
    }

    /// RGBA pixel data (width * height * 4 bytes) rendered so far.
    pub fn pixels(&self) -> Vec<u8> {
        self.job.pixels()
    }
}

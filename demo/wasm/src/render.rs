//! Demo-side plumbing between the browser and `tf_plane`.
//!
//! Everything here is plain Rust so it can be tested natively; `lib.rs`
//! only adds the `wasm_bindgen` surface. Points cross the boundary as flat
//! `[x0, y0, x1, y1, ...]` arrays.

use tf_plane::colorer::{InputPlaneColorer, OutputPlaneColorer};
use tf_plane::field_raster::FieldRaster;
use tf_plane::trans_canvas::CanvasMapping;
use tf_plane::{Complex, PlotConfig, PlotFrame, TransferFunction};

/// Empty numerator and denominator mean "no transfer function".
pub fn parse_tf(num: &[f64], den: &[f64]) -> Option<TransferFunction> {
    if num.is_empty() && den.is_empty() {
        None
    } else {
        Some(TransferFunction::new(num, den))
    }
}

pub fn flatten(points: impl IntoIterator<Item = Complex>) -> Vec<f64> {
    points.into_iter().flat_map(|p| [p.re, p.im]).collect()
}

pub fn to_canvas_flat(mapping: &CanvasMapping, points: &[Complex]) -> Vec<f64> {
    flatten(points.iter().map(|&p| mapping.to_canvas(p)))
}

/// `[s.re, s.im, H(s).re, H(s).im]`, the last two NaN where undefined.
pub fn probe_flat(frame: &PlotFrame, x: f64, y: f64) -> Vec<f64> {
    let probe = frame.probe(Complex::new(x, y));
    let value = probe.value.unwrap_or(Complex::NAN);
    vec![probe.s.re, probe.s.im, value.re, value.im]
}

pub fn compute_frame(num: &[f64], den: &[f64], canvas_dim: u32) -> tf_plane::Result<PlotFrame> {
    PlotFrame::compute(parse_tf(num, den).as_ref(), canvas_dim, &PlotConfig::default())
}

// ============================================================================
// Field jobs
// ============================================================================

/// Which field a job renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    Input,
    Output,
}

enum Raster {
    Input(FieldRaster<InputPlaneColorer>),
    Output(FieldRaster<OutputPlaneColorer>),
}

/// A field render stepped from the browser's animation loop.
///
/// There are no threads on `wasm32-unknown-unknown`, so instead of a worker
/// the page calls [`Job::step`] once per frame with a row budget. Dropping
/// the job is cancellation.
pub struct Job {
    raster: Raster,
}

impl Job {
    pub fn new(frame: &PlotFrame, plane: Plane) -> Self {
        let raster = match plane {
            Plane::Input => Raster::Input(FieldRaster::new(
                frame.input_request,
                frame.input_colorer.clone(),
            )),
            Plane::Output => Raster::Output(FieldRaster::new(
                frame.output_request,
                frame.output_colorer.clone(),
            )),
        };
        Self { raster }
    }

    /// Render up to `rows` rows. Returns `true` while rows remain.
    pub fn step(&mut self, rows: u32) -> bool {
        let mut more = !self.is_done();
        for _ in 0..rows {
            more = match &mut self.raster {
                Raster::Input(r) => r.render_row(),
                Raster::Output(r) => r.render_row(),
            };
            if !more {
                break;
            }
        }
        more
    }

    pub fn is_done(&self) -> bool {
        match &self.raster {
            Raster::Input(r) => r.is_done(),
            Raster::Output(r) => r.is_done(),
        }
    }

    pub fn progress(&self) -> f64 {
        let (done, total) = match &self.raster {
            Raster::Input(r) => (r.rows_done(), r.rows_total()),
            Raster::Output(r) => (r.rows_done(), r.rows_total()),
        };
        done as f64 / total.max(1) as f64
    }

    /// RGBA bytes rendered so far, `canvas_dim * canvas_dim * 4` long.
    pub fn pixels(&self) -> Vec<u8> {
        match &self.raster {
            Raster::Input(r) => r.buffer().as_bytes().to_vec(),
            Raster::Output(r) => r.buffer().as_bytes().to_vec(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

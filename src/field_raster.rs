//! Row-by-row field rasterization.
//!
//! A [`FieldRaster`] fills a square RGBA buffer with `colorer(from_canvas(x, y))`
//! for every pixel of the plot area. The sweep is split into rows so the
//! caller decides when to continue: one call to [`FieldRaster::render_row`]
//! colors one pixel column `x` over the full plot height, and returns
//! whether columns remain. Between calls the caller may yield, check a
//! cancellation flag, or drop the raster altogether.
//!
//! Pixels left of the axis margin are never written and keep their initial
//! transparent value.

use crate::colorer::ColorFn;
use crate::complex::Complex;
use crate::config::PlotConfig;
use crate::error::{Error, Result};
use crate::rendering_buffer::PixelBuffer;
use crate::trans_canvas::{CanvasMapping, CanvasTransform};

// ============================================================================
// FieldRequest
// ============================================================================

/// Geometry of one field render: a square canvas, the margin reserved for
/// axis labels on its left, and the view of plot space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRequest {
    canvas_dim: u32,
    axis_margin: u32,
    view: CanvasTransform,
}

impl FieldRequest {
    /// Fails with [`Error::CanvasTooSmall`] when the margin eats the canvas.
    pub fn new(canvas_dim: u32, view: CanvasTransform, config: &PlotConfig) -> Result<Self> {
        Self::with_margin(canvas_dim, config.axis_margin, view)
    }

    pub fn with_margin(canvas_dim: u32, axis_margin: u32, view: CanvasTransform) -> Result<Self> {
        if canvas_dim <= axis_margin {
            return Err(Error::CanvasTooSmall {
                canvas_dim,
                axis_margin,
            });
        }
        Ok(Self {
            canvas_dim,
            axis_margin,
            view,
        })
    }

    pub fn canvas_dim(&self) -> u32 {
        self.canvas_dim
    }

    pub fn axis_margin(&self) -> u32 {
        self.axis_margin
    }

    pub fn view(&self) -> &CanvasTransform {
        &self.view
    }

    /// Side of the square plot area, `canvas_dim - axis_margin`.
    pub fn plot_dim(&self) -> u32 {
        self.canvas_dim - self.axis_margin
    }

    pub fn plot_size(&self) -> Complex {
        let d = self.plot_dim() as f64;
        Complex::new(d, d)
    }

    /// Canvas mapping for this view, offset right by the axis margin.
    pub fn mapping(&self) -> CanvasMapping {
        self.view
            .create_transforms(self.plot_size(), Complex::new(self.axis_margin as f64, 0.0))
    }
}

// ============================================================================
// FieldRaster
// ============================================================================

/// Incremental rasterization of one field.
pub struct FieldRaster<C> {
    request: FieldRequest,
    mapping: CanvasMapping,
    colorer: C,
    buffer: PixelBuffer,
    next_x: u32,
}

impl<C: ColorFn> FieldRaster<C> {
    pub fn new(request: FieldRequest, colorer: C) -> Self {
        Self {
            mapping: request.mapping(),
            buffer: PixelBuffer::new(request.canvas_dim, request.canvas_dim),
            next_x: request.axis_margin,
            request,
            colorer,
        }
    }

    pub fn request(&self) -> &FieldRequest {
        &self.request
    }

    /// Number of rows in the sweep.
    pub fn rows_total(&self) -> u32 {
        self.request.plot_dim()
    }

    pub fn rows_done(&self) -> u32 {
        self.next_x - self.request.axis_margin
    }

    pub fn is_done(&self) -> bool {
        self.next_x >= self.request.canvas_dim
    }

    /// Color the next pixel column. Returns `true` while columns remain.
    pub fn render_row(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        let x = self.next_x;
        for y in 0..self.request.plot_dim() {
            let p = self.mapping.from_canvas(Complex::new(x as f64, y as f64));
            self.buffer.set_pixel(x, y, self.colorer.color(p));
        }
        self.next_x += 1;
        !self.is_done()
    }

    /// Run every remaining row without interruption.
    pub fn render_all(mut self) -> PixelBuffer {
        while self.render_row() {}
        self.buffer
    }

    /// The buffer as rendered so far.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn finish(self) -> PixelBuffer {
        self.buffer
    }
}

// ============================================================================
// Tests
// ============================================================================

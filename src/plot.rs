//! The s-plane / output-plane pipeline.
//!
//! [`PlotFrame::compute`] is a pure function from a transfer function and a
//! canvas size to everything the presentation layer draws: zeros and poles,
//! the two autoscaled views, the Nyquist contour, and the colorers for both
//! fields. [`PoleZeroPlot`] runs that function when its inputs change and
//! keeps one [`FieldRenderer`] per field, so a new transfer function
//! cancels the renders started for the previous one.

use crossbeam_channel::Receiver;
use tracing::debug;

use crate::autoscale::{autoscale_output_plane, autoscale_s_plane};
use crate::colorer::{InputPlaneColorer, OutputPlaneColorer};
use crate::complex::Complex;
use crate::config::PlotConfig;
use crate::error::{Error, Result};
use crate::field_raster::FieldRequest;
use crate::field_render::{FieldRenderer, RenderedField};
use crate::trans_canvas::CanvasMapping;
use crate::transfer_fn::TransferFunction;

pub const INPUT_TARGET: &str = "input";
pub const OUTPUT_TARGET: &str = "output";

// ============================================================================
// PlotFrame
// ============================================================================

/// Everything derived from one `(transfer function, canvas size)` pair.
#[derive(Debug, Clone)]
pub struct PlotFrame {
    pub tf: Option<TransferFunction>,
    pub zeros: Vec<Complex>,
    pub poles: Vec<Complex>,
    /// Image of the imaginary axis, undefined samples removed.
    pub nyquist: Vec<Complex>,
    pub input_request: FieldRequest,
    pub output_request: FieldRequest,
    pub input_colorer: InputPlaneColorer,
    pub output_colorer: OutputPlaneColorer,
}

/// A canvas position resolved to the s-plane and its image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe {
    pub s: Complex,
    /// `None` where the transfer function is undefined or not set.
    pub value: Option<Complex>,
}

impl PlotFrame {
    /// Run the whole pipeline for `tf` on a `canvas_dim`-pixel square canvas.
    ///
    /// With no transfer function the views fall back to their defaults, the
    /// root sets and contour are empty, and the s-plane field is neutral.
    pub fn compute(
        tf: Option<&TransferFunction>,
        canvas_dim: u32,
        config: &PlotConfig,
    ) -> Result<Self> {
        // both fields share one geometry; the view decides what they show
        if canvas_dim <= config.axis_margin {
            return Err(Error::CanvasTooSmall {
                canvas_dim,
                axis_margin: config.axis_margin,
            });
        }
        let plot_dim = (canvas_dim - config.axis_margin) as f64;
        let plot_size = Complex::new(plot_dim, plot_dim);

        let zeros = tf.map_or_else(Vec::new, |tf| tf.zeros(&config.root_finder));
        let poles = tf.map_or_else(Vec::new, |tf| tf.poles(&config.root_finder));
        let nyquist = tf.map_or_else(Vec::new, |tf| tf.nyquist_contour(&config.nyquist));

        let roots: Vec<Complex> = zeros.iter().chain(poles.iter()).copied().collect();
        let input_view = autoscale_s_plane(plot_size, &roots, &config.autoscale);
        let output_view = autoscale_output_plane(plot_size, tf, &config.autoscale);

        let output_colorer = OutputPlaneColorer::new(&output_view, plot_size, &config.color_map);
        let input_colorer =
            InputPlaneColorer::new(tf.cloned(), output_colorer.clone(), &config.color_map);

        debug!(
            zeros = zeros.len(),
            poles = poles.len(),
            nyquist = nyquist.len(),
            canvas_dim,
            "computed plot frame"
        );

        Ok(Self {
            tf: tf.cloned(),
            zeros,
            poles,
            nyquist,
            input_request: FieldRequest::new(canvas_dim, input_view, config)?,
            output_request: FieldRequest::new(canvas_dim, output_view, config)?,
            input_colorer,
            output_colorer,
        })
    }

    /// Mapping for drawing zero/pole markers on the s-plane canvas.
    pub fn input_mapping(&self) -> CanvasMapping {
        self.input_request.mapping()
    }

    /// Mapping for drawing the Nyquist contour on the output canvas.
    pub fn output_mapping(&self) -> CanvasMapping {
        self.output_request.mapping()
    }

    fn is_for(&self, tf: Option<&TransferFunction>, canvas_dim: u32) -> bool {
        self.input_request.canvas_dim() == canvas_dim && self.tf.as_ref() == tf
    }

    /// Resolve a pixel on the s-plane canvas.
    pub fn probe(&self, canvas_point: Complex) -> Probe {
        let s = self.input_mapping().from_canvas(canvas_point);
        Probe {
            s,
            value: self.tf.as_ref().and_then(|tf| tf.eval_defined(s)),
        }
    }
}

// ============================================================================
// PoleZeroPlot
// ============================================================================

/// Receiving ends for the two rendered fields.
pub struct PlotFields {
    pub input: Receiver<RenderedField>,
    pub output: Receiver<RenderedField>,
}

/// Recomputes the pipeline when its inputs change and keeps the two field
/// renders in step with the latest frame.
pub struct PoleZeroPlot {
    config: PlotConfig,
    input: FieldRenderer,
    output: FieldRenderer,
    frame: Option<PlotFrame>,
    /// Set when the fields of `frame` were cancelled before publishing.
    stale: bool,
}

impl PoleZeroPlot {
    pub fn new(config: PlotConfig) -> Result<(Self, PlotFields)> {
        config.validate()?;
        let (input, input_rx) = FieldRenderer::new(INPUT_TARGET);
        let (output, output_rx) = FieldRenderer::new(OUTPUT_TARGET);
        let plot = Self {
            config,
            input,
            output,
            frame: None,
            stale: false,
        };
        let fields = PlotFields {
            input: input_rx,
            output: output_rx,
        };
        Ok((plot, fields))
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// The frame for the most recent inputs, if any.
    pub fn frame(&self) -> Option<&PlotFrame> {
        self.frame.as_ref()
    }

    /// Bring the plot up to date with `tf` and `canvas_dim`.
    ///
    /// Unchanged inputs return the cached frame without re-rendering, unless
    /// its renders were cancelled, in which case both fields are rendered
    /// again. Otherwise the frame is recomputed and both fields are
    /// re-rendered, cancelling renders still running for the previous inputs.
    pub fn update(&mut self, tf: Option<&TransferFunction>, canvas_dim: u32) -> Result<&PlotFrame> {
        let frame = match self.frame.take() {
            Some(frame) if frame.is_for(tf, canvas_dim) => {
                if self.stale {
                    self.render(&frame);
                }
                frame
            }
            previous => match PlotFrame::compute(tf, canvas_dim, &self.config) {
                Ok(frame) => {
                    self.render(&frame);
                    frame
                }
                Err(err) => {
                    self.frame = previous;
                    return Err(err);
                }
            },
        };
        Ok(&*self.frame.insert(frame))
    }

    fn render(&mut self, frame: &PlotFrame) {
        self.input
            .render(frame.input_request, frame.input_colorer.clone());
        self.output
            .render(frame.output_request, frame.output_colorer.clone());
        self.stale = false;
    }

    /// Stop both field renders. The next `update` renders them again, even
    /// for unchanged inputs.
    pub fn cancel(&mut self) {
        self.input.cancel();
        self.output.cancel();
        self.stale = true;
    }
}

// ============================================================================
// Tests
// ============================================================================

//! # tf-plane
//!
//! Pole/zero and Nyquist visualization engine for rational transfer
//! functions `H(s) = num(s) / den(s)`.
//!
//! Given a transfer function and a canvas size the crate produces:
//!
//! - the zeros and poles, found with a Durand–Kerner root finder
//! - autoscaled views of the s-plane and of the output plane
//! - the Nyquist contour, the image of the imaginary axis
//! - two colored fields, rendered in the background and cancellable
//!
//! ## Architecture
//!
//! Evaluation runs as a short pipeline:
//!
//! 1. **Roots**: zeros and poles of the transfer function
//! 2. **Autoscale**: a [`trans_canvas::CanvasTransform`] per plane
//! 3. **Colorers**: per-point color functions built from the output view
//! 4. **Field render**: a worker per plane sweeps a [`rendering_buffer::PixelBuffer`]
//!    row by row and publishes it unless superseded
//!
//! [`plot::PoleZeroPlot`] ties the stages together and only reruns them when
//! its inputs change.

// Numeric foundation
pub mod complex;
pub mod roots;
pub mod transfer_fn;

// Geometry
pub mod autoscale;
pub mod trans_canvas;

// Pixels & color
pub mod color;
pub mod colorer;
pub mod rendering_buffer;

// Field rendering
pub mod field_raster;
pub mod field_render;

// Pipeline
pub mod config;
pub mod error;
pub mod plot;

pub use complex::Complex;
pub use config::PlotConfig;
pub use error::{Error, Result};
pub use plot::{PlotFrame, PoleZeroPlot};
pub use transfer_fn::TransferFunction;

//! Error types for tf-plane.
//!
//! The numeric core never fails: degenerate input produces empty root sets
//! and NaN-bearing values instead. Errors only arise where external data is
//! parsed or validated (configuration, render requests).

use thiserror::Error;

/// Result type alias using tf-plane's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the configuration and request boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration text is not valid TOML for [`crate::config::PlotConfig`].
    #[error("failed to parse plot configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration value is outside its usable range.
    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidConfig {
        /// Dotted path of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// The canvas leaves no plot area once the axis margin is reserved.
    #[error("canvas of {canvas_dim}px leaves no plot area with a {axis_margin}px axis margin")]
    CanvasTooSmall {
        /// Requested square canvas dimension
        canvas_dim: u32,
        /// Configured axis margin
        axis_margin: u32,
    },
}

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

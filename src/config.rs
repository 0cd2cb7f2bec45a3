//! Plot configuration.
//!
//! Every tunable constant of the engine lives here: the axis margin, the
//! autoscale framing, the color map, the Nyquist sampling and the root
//! finder limits. All tables default field by field, so a TOML document only
//! needs to name what it changes:
//!
//! ```toml
//! axis_margin = 40
//!
//! [nyquist]
//! step = 0.02
//!
//! [root_finder]
//! max_iterations = 1000
//! ```

use serde::Deserialize;

use crate::color::Rgba8;
use crate::error::{Error, Result};

// ============================================================================
// PlotConfig
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Pixels reserved on the left of the canvas for axis labels.
    pub axis_margin: u32,
    pub autoscale: AutoscaleConfig,
    pub color_map: ColorMapConfig,
    pub nyquist: NyquistConfig,
    pub root_finder: RootFinderConfig,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            axis_margin: 32,
            autoscale: AutoscaleConfig::default(),
            color_map: ColorMapConfig::default(),
            nyquist: NyquistConfig::default(),
            root_finder: RootFinderConfig::default(),
        }
    }
}

impl PlotConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: PlotConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is inside its usable range.
    pub fn validate(&self) -> Result<()> {
        self.autoscale.validate()?;
        self.color_map.validate()?;
        self.nyquist.validate()?;
        self.root_finder.validate()
    }
}

/// Upper bound on `half_range / step` for the sampled ranges.
pub const MAX_SAMPLES_PER_SIDE: f64 = 1_000_000.0;

fn require_sample_count(field: &'static str, half_range: f64, step: f64) -> Result<()> {
    let per_side = (half_range / step).round();
    if per_side <= MAX_SAMPLES_PER_SIDE {
        Ok(())
    } else {
        Err(Error::invalid(
            field,
            format!("{per_side} samples per side exceeds {MAX_SAMPLES_PER_SIDE}"),
        ))
    }
}

fn require_positive(field: &'static str, v: f64) -> Result<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(field, format!("must be finite and > 0, got {v}")))
    }
}

// ============================================================================
// AutoscaleConfig
// ============================================================================

/// How a view is framed around a point set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AutoscaleConfig {
    /// Fraction of the canvas the bounding box occupies.
    pub margin: f64,
    /// Zoom for an empty point set: `min(w, h) / default_zoom_divisor`.
    pub default_zoom_divisor: f64,
    /// The bounding box always covers `[-e, -e]..[e, e]`.
    pub min_half_extent: f64,
    /// Output-plane autoscale samples `jω` for `ω` in `[-range, range)`.
    pub sample_half_range: f64,
    pub sample_step: f64,
}

impl Default for AutoscaleConfig {
    fn default() -> Self {
        Self {
            margin: 0.33,
            default_zoom_divisor: 4.0,
            min_half_extent: 1.0,
            sample_half_range: 100.0,
            sample_step: 0.1,
        }
    }
}

impl AutoscaleConfig {
    fn validate(&self) -> Result<()> {
        require_positive("autoscale.margin", self.margin)?;
        require_positive("autoscale.default_zoom_divisor", self.default_zoom_divisor)?;
        require_positive("autoscale.min_half_extent", self.min_half_extent)?;
        require_positive("autoscale.sample_half_range", self.sample_half_range)?;
        require_positive("autoscale.sample_step", self.sample_step)?;
        require_sample_count("autoscale.sample_step", self.sample_half_range, self.sample_step)
    }
}

// ============================================================================
// ColorMapConfig
// ============================================================================

/// Constants of the angle/magnitude color map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorMapConfig {
    /// Base of the logarithm compressing the squared magnitude.
    pub log_base: f64,
    /// `lightness = lightness_scale * (1 - log(mag_sq + magnitude_floor))`.
    pub lightness_scale: f64,
    pub magnitude_floor: f64,
    /// Added to the angle (degrees) to get the hue.
    pub hue_offset_deg: f64,
    /// RGBA used where the transfer function is undefined.
    pub undefined_color: [u8; 4],
}

impl Default for ColorMapConfig {
    fn default() -> Self {
        Self {
            log_base: 15.0,
            lightness_scale: 0.35,
            magnitude_floor: 0.01,
            hue_offset_deg: 180.0,
            undefined_color: [150, 150, 150, 255],
        }
    }
}

impl ColorMapConfig {
    pub fn undefined_rgba(&self) -> Rgba8 {
        let [r, g, b, a] = self.undefined_color;
        Rgba8 { r, g, b, a }
    }

    fn validate(&self) -> Result<()> {
        if !(self.log_base.is_finite() && self.log_base > 1.0) {
            return Err(Error::invalid(
                "color_map.log_base",
                format!("must be finite and > 1, got {}", self.log_base),
            ));
        }
        require_positive("color_map.lightness_scale", self.lightness_scale)?;
        require_positive("color_map.magnitude_floor", self.magnitude_floor)
    }
}

// ============================================================================
// NyquistConfig
// ============================================================================

/// Sampling of the imaginary axis for the Nyquist contour.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NyquistConfig {
    pub half_range: f64,
    pub step: f64,
}

impl Default for NyquistConfig {
    fn default() -> Self {
        Self {
            half_range: 100.0,
            step: 0.01,
        }
    }
}

impl NyquistConfig {
    fn validate(&self) -> Result<()> {
        require_positive("nyquist.half_range", self.half_range)?;
        require_positive("nyquist.step", self.step)?;
        require_sample_count("nyquist.step", self.half_range, self.step)
    }
}

// ============================================================================
// RootFinderConfig
// ============================================================================

/// Limits of the Durand-Kerner iteration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RootFinderConfig {
    pub max_iterations: usize,
    /// Converged when every step is below `tolerance * max(1, |z|)`.
    pub tolerance: f64,
    /// Or when every estimate's relative backward error is below this.
    pub residual_tolerance: f64,
}

impl Default for RootFinderConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            tolerance: 1e-12,
            residual_tolerance: 1e-14,
        }
    }
}

impl RootFinderConfig {
    fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(Error::invalid("root_finder.max_iterations", "must be > 0"));
        }
        require_positive("root_finder.tolerance", self.tolerance)?;
        require_positive("root_finder.residual_tolerance", self.residual_tolerance)
    }
}

// ============================================================================
// Tests
// ============================================================================

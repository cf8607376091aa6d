//! Print configuration for one mask generation run.
//!
//! The pipeline itself assumes validated values; call [`MaskConfig::validate`]
//! at the boundary before running it. There is no process-wide configuration
//! state, a run owns the value it is given.

use serde::{Deserialize, Serialize};

use crate::{MaskError, Result};

/// Physical print options. Distances are millimeters, `marker_size` is pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    /// Print resolution in dots per inch.
    pub dpi: f64,

    /// Physical page width in millimeters.
    pub a4_width_mm: f64,

    /// Physical page height in millimeters.
    pub a4_height_mm: f64,

    /// Printed overlap between consecutive pages in millimeters.
    pub overlap_mm: f64,

    /// Side length of one alignment-marker square in pixels.
    pub marker_size: u32,

    /// Target width of the printed face in millimeters.
    pub face_width_mm: f64,

    /// Target height of the printed face in millimeters.
    pub face_height_mm: f64,

    /// Thickness of the fold-over edge strips in millimeters.
    pub edge_thickness_mm: f64,

    /// Scale multiplier for the overlay layer, which renders slightly
    /// larger than the base layer in game.
    pub outer_scale_factor: f64,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            dpi: 300.0,
            a4_width_mm: 210.0,
            a4_height_mm: 297.0,
            overlap_mm: 15.0,
            marker_size: 15,
            face_width_mm: 185.0,
            face_height_mm: 215.0,
            edge_thickness_mm: 35.0,
            outer_scale_factor: 1.125,
        }
    }
}

impl MaskConfig {
    /// Check that every option is usable: all distances, the resolution and
    /// the overlay scale must be positive and finite, the marker must be at
    /// least one pixel, and the overlap must leave the page loop room to
    /// advance.
    pub fn validate(&self) -> Result<()> {
        for (option, value) in [
            ("dpi", self.dpi),
            ("a4_width_mm", self.a4_width_mm),
            ("a4_height_mm", self.a4_height_mm),
            ("overlap_mm", self.overlap_mm),
            ("face_width_mm", self.face_width_mm),
            ("face_height_mm", self.face_height_mm),
            ("edge_thickness_mm", self.edge_thickness_mm),
            ("outer_scale_factor", self.outer_scale_factor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MaskError::NonPositiveOption { option, value });
            }
        }
        if self.marker_size == 0 {
            return Err(MaskError::NonPositiveOption {
                option: "marker_size",
                value: 0.0,
            });
        }
        if self.overlap_mm >= self.a4_width_mm {
            return Err(MaskError::OverlapExceedsPage {
                overlap_mm: self.overlap_mm,
                a4_width_mm: self.a4_width_mm,
            });
        }
        Ok(())
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Run configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextdistoError};

/// Settings for a single distorted-text run.
///
/// Loaded from a JSON file with [`DistortConfig::load`] or built from
/// [`Default`]; command-line flags are layered on top by the binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistortConfig {
    /// Output image width in pixels.
    pub width: u32,
    /// Output image height in pixels.
    pub height: u32,
    /// Font size in pixels.
    pub font_size: f32,
    /// Built-in font to draw with (`mono` or `regular`).
    pub font_name: String,
    /// TrueType/OpenType font file; overrides `font_name` when set.
    pub font_path: Option<PathBuf>,
    /// Text to draw.
    pub text: String,
    /// Destination JPEG file.
    pub output: PathBuf,
    /// JPEG quality (1-100).
    pub jpeg_quality: u8,
    /// Append an invert stage to the default pipeline.
    pub default_invert: bool,
    /// Distortion commands, e.g. `["cosh,0.12,6", "blky,32,16"]`.
    pub commands: Vec<String>,
}

impl Default for DistortConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 80,
            font_size: 72.0,
            font_name: "mono".into(),
            font_path: None,
            text: "123789".into(),
            output: PathBuf::from("disto-text-output.jpg"),
            jpeg_quality: 50,
            default_invert: true,
            commands: Vec::new(),
        }
    }
}

impl DistortConfig {
    /// Read a JSON configuration file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Reject settings that cannot produce an image.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TextdistoError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(TextdistoError::Config(format!(
                "font size must be positive, got {}",
                self.font_size
            )));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(TextdistoError::Config(format!(
                "JPEG quality must be within 1-100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }

    /// Whether the output file name carries a JPEG extension.
    pub fn has_jpeg_extension(&self) -> bool {
        self.output
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "jpg" || ext == "jpeg")
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments, layered over an optional JSON configuration file.

use std::path::PathBuf;

use clap::Parser;
use textdisto_core::{DistortConfig, Result};

/// Render a string and distort it into a CAPTCHA-style JPEG.
///
/// Positional arguments are distortion commands applied in order:
/// `cosh,<step>,<amp>`, `cosv,<step>,<amp>`, `tanh,<step>,<amp>`,
/// `tanv,<step>,<amp>`, `blky,<width>,<height>` and `inv`. Without any
/// usable command the default `cosv,0.16,6 cosh,0.07,6 blky,32,16 inv` runs.
#[derive(Parser, Debug)]
#[command(name = "textdisto", author, version, about)]
pub struct Args {
    /// JSON configuration file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// TrueType/OpenType font file; overrides --font-name
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Built-in font: mono or regular [default: mono]
    #[arg(long)]
    pub font_name: Option<String>,

    /// Image width in pixels [default: 256]
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels [default: 80]
    #[arg(long)]
    pub height: Option<u32>,

    /// Font size in pixels [default: 72]
    #[arg(long)]
    pub font_size: Option<f32>,

    /// Text content to draw [default: 123789]
    #[arg(long)]
    pub text: Option<String>,

    /// Output file name, should end in .jpg or .jpeg [default: disto-text-output.jpg]
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// JPEG quality, 1-100 [default: 50]
    #[arg(long)]
    pub quality: Option<u8>,

    /// Leave the invert stage out of the default pipeline
    #[arg(long)]
    pub no_default_invert: bool,

    /// Distortion commands, applied left to right
    pub commands: Vec<String>,
}

impl Args {
    /// Resolve the effective configuration: file (or defaults), then flags.
    pub fn into_config(self) -> Result<DistortConfig> {
        let mut config = match &self.config {
            Some(path) => DistortConfig::load(path)?,
            None => DistortConfig::default(),
        };

        if let Some(font) = self.font {
            config.font_path = Some(font);
        }
        if let Some(font_name) = self.font_name {
            config.font_name = font_name;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(font_size) = self.font_size {
            config.font_size = font_size;
        }
        if let Some(text) = self.text {
            config.text = text;
        }
        if let Some(out) = self.out {
            config.output = out;
        }
        if let Some(quality) = self.quality {
            config.jpeg_quality = quality;
        }
        if self.no_default_invert {
            config.default_invert = false;
        }
        if !self.commands.is_empty() {
            config.commands = self.commands;
        }
        Ok(config)
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// JPEG output for finished rasters.

use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use textdisto_core::error::TextdistoError;
use textdisto_core::{Raster, Result};
use tracing::{info, instrument};

/// Encode the raster as a single-channel JPEG with the given quality (1-100).
pub fn encode_jpeg(raster: &Raster, quality: u8) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
    raster
        .to_gray_image()
        .write_with_encoder(encoder)
        .map_err(|err| TextdistoError::ImageError(format!("JPEG encoding failed: {}", err)))?;
    Ok(buffer)
}

/// Encode and write the raster to `path`, creating parent directories.
#[instrument(skip(raster), fields(path = %path.as_ref().display()))]
pub fn save_jpeg(raster: &Raster, path: impl AsRef<Path>, quality: u8) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_jpeg(raster, quality)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, &bytes)?;
    info!(bytes = bytes.len(), "JPEG written");
    Ok(())
}

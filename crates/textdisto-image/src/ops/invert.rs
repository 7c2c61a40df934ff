// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use textdisto_core::Raster;
use tracing::instrument;

/// Tone inversion: every pixel becomes `255 - v`.
#[instrument(skip_all, fields(width = src.width(), height = src.height()))]
pub fn invert(src: &Raster) -> Raster {
    src.map_pixels(|v| u8::MAX - v)
}

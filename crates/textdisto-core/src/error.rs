// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for textdisto.

use thiserror::Error;

/// Top-level error type for all textdisto operations.
#[derive(Debug, Error)]
pub enum TextdistoError {
    // -- Raster errors --
    #[error("invalid raster dimensions {width}x{height}: both must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("raster buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    // -- Text rendering errors --
    #[error("failed to load font: {0}")]
    FontLoad(String),

    #[error("text rasterization failed: {0}")]
    Rasterize(String),

    // -- Output errors --
    #[error("image encoding failed: {0}")]
    ImageError(String),

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TextdistoError>;

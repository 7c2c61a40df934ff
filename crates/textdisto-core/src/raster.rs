// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster — owned 8-bit grayscale intensity grid, row-major, stride == width.

use image::{GrayImage, Luma};

use crate::error::{Result, TextdistoError};

/// Fixed-size grid of 8-bit grayscale intensities.
///
/// Every raster is zero-initialized on construction and never changes size.
/// Distortion operators read one raster and allocate a fresh one of the same
/// dimensions with [`Raster::blank_like`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    // -- Construction ---------------------------------------------------------

    /// Create a zero-filled raster. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TextdistoError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        })
    }

    /// Wrap an existing row-major buffer of exactly `width * height` bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TextdistoError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(TextdistoError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Zero-filled raster with the same dimensions as `self`.
    pub fn blank_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: vec![0; self.data.len()],
        }
    }

    /// New raster with `f` applied to every intensity.
    pub fn map_pixels(&self, f: impl Fn(u8) -> u8) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Convert an `image` grayscale buffer.
    pub fn from_gray_image(image: GrayImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::from_raw(width, height, image.into_raw())
    }

    // -- Accessors ------------------------------------------------------------

    /// Raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn idx(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }

    /// Intensity at (x, y). Panics if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[self.idx(x, y)]
    }

    /// Set the intensity at (x, y). Panics if the coordinate is out of bounds.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        let i = self.idx(x, y);
        self.data[i] = value;
    }

    /// One row as a slice.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = self.idx(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// Backing storage in row-major order.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Copy the raster into an `image` grayscale buffer for encoding.
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| Luma([self.get(x, y)]))
    }
}

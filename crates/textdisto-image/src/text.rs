// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text rasterizer — draws a string white-on-black into a fixed-size raster,
// centred by its horizontal and vertical bearing. Glyphs come from `fontdue`.

use std::path::Path;
use std::str::FromStr;

use fontdue::{Font, FontSettings};
use textdisto_core::error::TextdistoError;
use textdisto_core::{Raster, Result};
use tracing::{debug, info, instrument};

/// A rendered string plus where its bounding box was placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextImage {
    pub raster: Raster,
    /// Left edge of the text box (may be negative if the text overflows).
    pub bearing_x: i32,
    /// Top edge of the text box (may be negative if the text overflows).
    pub bearing_y: i32,
}

/// Anything that can turn a string into the pipeline's input raster.
pub trait TextRasterizer {
    fn rasterize(&self, text: &str) -> Result<TextImage>;
}

/// Placement of a text box inside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    bearing_x: i32,
    bearing_y: i32,
    /// Y of the baseline, `bearing_y` plus the tallest ascent.
    baseline: i32,
}

/// Centre a text box of `advance` width whose glyphs reach `ascent` pixels
/// above and `descent` pixels below the baseline (descent is <= 0).
fn center(canvas_w: u32, canvas_h: u32, advance: f32, ascent: i32, descent: i32) -> Layout {
    let text_height = ascent - descent;
    let bearing_x = ((canvas_w as f32 - advance) / 2.0) as i32;
    let bearing_y = (canvas_h as i32 - text_height) / 2;
    Layout {
        bearing_x,
        bearing_y,
        baseline: bearing_y + ascent,
    }
}

const DEJAVU_SANS_MONO: &[u8] = include_bytes!("../fonts/DejaVuSansMono.ttf");
const DEJAVU_SANS: &[u8] = include_bytes!("../fonts/DejaVuSans.ttf");

/// Fonts compiled into the binary, so a run works without any font file.
///
/// Both faces are DejaVu (Bitstream Vera licence, see `fonts/LICENSE-DejaVu`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuiltinFont {
    /// DejaVu Sans Mono.
    #[default]
    Mono,
    /// DejaVu Sans.
    Regular,
}

impl BuiltinFont {
    /// Every name accepted by [`BuiltinFont::from_str`].
    pub const NAMES: [&'static str; 2] = ["mono", "regular"];

    pub fn name(self) -> &'static str {
        match self {
            BuiltinFont::Mono => "mono",
            BuiltinFont::Regular => "regular",
        }
    }

    /// Raw TrueType data.
    pub fn data(self) -> &'static [u8] {
        match self {
            BuiltinFont::Mono => DEJAVU_SANS_MONO,
            BuiltinFont::Regular => DEJAVU_SANS,
        }
    }
}

impl FromStr for BuiltinFont {
    type Err = TextdistoError;

    /// Case-insensitive lookup by name.
    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "mono" => Ok(BuiltinFont::Mono),
            "regular" => Ok(BuiltinFont::Regular),
            other => Err(TextdistoError::Config(format!(
                "unknown font name `{other}`, expected one of: {}",
                Self::NAMES.join(", ")
            ))),
        }
    }
}

/// [`TextRasterizer`] backed by a TrueType/OpenType font.
pub struct FontTextRasterizer {
    font: Font,
    width: u32,
    height: u32,
    font_size: f32,
}

impl FontTextRasterizer {
    /// Parse font data. `font_size` is in pixels.
    pub fn new(font_data: &[u8], width: u32, height: u32, font_size: f32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TextdistoError::InvalidDimensions { width, height });
        }
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(TextdistoError::Rasterize(format!(
                "font size must be positive, got {font_size}"
            )));
        }
        let settings = FontSettings {
            scale: font_size,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(font_data, settings)
            .map_err(|err| TextdistoError::FontLoad(err.to_string()))?;
        Ok(Self {
            font,
            width,
            height,
            font_size,
        })
    }

    /// Load a font file from disk.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(
        path: impl AsRef<Path>,
        width: u32,
        height: u32,
        font_size: f32,
    ) -> Result<Self> {
        let data = std::fs::read(path.as_ref()).map_err(|err| {
            TextdistoError::FontLoad(format!("{}: {}", path.as_ref().display(), err))
        })?;
        let rasterizer = Self::new(&data, width, height, font_size)?;
        info!(
            glyphs = rasterizer.font.glyph_count(),
            font_size, "Font loaded"
        );
        Ok(rasterizer)
    }

    /// Use one of the fonts compiled into the binary.
    #[instrument(skip_all, fields(font = font.name()))]
    pub fn builtin(font: BuiltinFont, width: u32, height: u32, font_size: f32) -> Result<Self> {
        let rasterizer = Self::new(font.data(), width, height, font_size)?;
        info!(
            glyphs = rasterizer.font.glyph_count(),
            font_size, "Built-in font loaded"
        );
        Ok(rasterizer)
    }
}

impl TextRasterizer for FontTextRasterizer {
    #[instrument(skip(self), fields(width = self.width, height = self.height))]
    fn rasterize(&self, text: &str) -> Result<TextImage> {
        let glyphs: Vec<_> = text
            .chars()
            .map(|ch| self.font.rasterize(ch, self.font_size))
            .collect();

        let advance: f32 = glyphs.iter().map(|(m, _)| m.advance_width).sum();
        let ascent = glyphs
            .iter()
            .map(|(m, _)| m.ymin + m.height as i32)
            .fold(0, i32::max);
        let descent = glyphs.iter().map(|(m, _)| m.ymin).fold(0, i32::min);
        let layout = center(self.width, self.height, advance, ascent, descent);
        debug!(advance, ascent, descent, ?layout, "Text measured");

        let mut raster = Raster::new(self.width, self.height)?;
        let (canvas_w, canvas_h) = (i64::from(self.width), i64::from(self.height));
        let mut pen_x = layout.bearing_x as f32;

        for (metrics, coverage) in &glyphs {
            let left = pen_x.round() as i64 + i64::from(metrics.xmin);
            let top = i64::from(layout.baseline) - i64::from(metrics.ymin) - metrics.height as i64;
            for (row, line) in coverage.chunks(metrics.width.max(1)).enumerate() {
                let y = top + row as i64;
                if !(0..canvas_h).contains(&y) {
                    continue;
                }
                for (col, &alpha) in line.iter().enumerate() {
                    let x = left + col as i64;
                    if alpha == 0 || !(0..canvas_w).contains(&x) {
                        continue;
                    }
                    let (x, y) = (x as u32, y as u32);
                    raster.set(x, y, raster.get(x, y).max(alpha));
                }
            }
            pen_x += metrics.advance_width;
        }

        Ok(TextImage {
            raster,
            bearing_x: layout.bearing_x,
            bearing_y: layout.bearing_y,
        })
    }
}

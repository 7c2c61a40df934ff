// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// One generator run: rasterize the text, distort it, write the JPEG.

use textdisto_core::{DistortConfig, Raster, Result};
use textdisto_image::{BuiltinFont, FontTextRasterizer, Pipeline, TextRasterizer, save_jpeg};
use tracing::{info, instrument, warn};

/// Rasterize `config.text` and run it through the configured pipeline.
///
/// A rasterizer failure is returned before any distortion runs.
pub fn render(rasterizer: &impl TextRasterizer, config: &DistortConfig) -> Result<Raster> {
    let pipeline = Pipeline::from_commands(&config.commands, config.default_invert);
    let text_image = rasterizer.rasterize(&config.text)?;
    info!(
        bearing_x = text_image.bearing_x,
        bearing_y = text_image.bearing_y,
        "Text rendered"
    );
    Ok(pipeline.run(text_image.raster))
}

/// Full run: the font file if one is configured, otherwise the built-in font
/// named by `font_name`.
#[instrument(skip_all, fields(output = %config.output.display()))]
pub fn execute(config: &DistortConfig) -> Result<()> {
    config.validate()?;
    if !config.has_jpeg_extension() {
        warn!("Output file name not suffixed with `.jpg` or `.jpeg`");
    }

    let (width, height, size) = (config.width, config.height, config.font_size);
    let rasterizer = match &config.font_path {
        Some(path) => FontTextRasterizer::from_file(path, width, height, size)?,
        None => {
            let font: BuiltinFont = config.font_name.parse()?;
            FontTextRasterizer::builtin(font, width, height, size)?
        }
    };

    let raster = render(&rasterizer, config)?;
    save_jpeg(&raster, &config.output, config.jpeg_quality)?;
    info!(quality = config.jpeg_quality, "Distorted text image written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use textdisto_core::error::TextdistoError;
    use textdisto_image::TextImage;

    /// Draws a fixed bar instead of glyphs.
    struct BarRasterizer {
        width: u32,
        height: u32,
    }

    impl TextRasterizer for BarRasterizer {
        fn rasterize(&self, _text: &str) -> Result<TextImage> {
            let mut raster = Raster::new(self.width, self.height)?;
            for x in 0..self.width {
                raster.set(x, self.height / 2, 255);
            }
            Ok(TextImage {
                raster,
                bearing_x: 0,
                bearing_y: 0,
            })
        }
    }

    struct BrokenRasterizer;

    impl TextRasterizer for BrokenRasterizer {
        fn rasterize(&self, _text: &str) -> Result<TextImage> {
            Err(TextdistoError::FontLoad("face creation failed".into()))
        }
    }

    #[test]
    fn render_runs_configured_commands() {
        let config = DistortConfig {
            width: 8,
            height: 4,
            commands: vec!["inv".into()],
            ..Default::default()
        };
        let out = render(&BarRasterizer { width: 8, height: 4 }, &config).unwrap();
        assert_eq!(out.row(0), &[255; 8]);
        assert_eq!(out.row(2), &[0; 8]);
    }

    #[test]
    fn render_uses_default_pipeline_without_commands() {
        let config = DistortConfig {
            commands: vec!["nonsense".into()],
            ..Default::default()
        };
        let rasterizer = BarRasterizer {
            width: config.width,
            height: config.height,
        };
        let out = render(&rasterizer, &config).unwrap();
        let expected =
            Pipeline::default_sequence(true).run(rasterizer.rasterize("").unwrap().raster);
        assert_eq!(out, expected);
    }

    #[test]
    fn render_surfaces_rasterizer_failure() {
        let err = render(&BrokenRasterizer, &DistortConfig::default()).unwrap_err();
        assert!(matches!(err, TextdistoError::FontLoad(_)));
    }

    #[test]
    fn execute_with_defaults_writes_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let config = DistortConfig {
            output: dir.path().join("out.jpg"),
            ..Default::default()
        };
        execute(&config).unwrap();
        let bytes = std::fs::read(&config.output).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn execute_unknown_font_name_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = DistortConfig {
            font_name: "inconsolata".into(),
            output: dir.path().join("out.jpg"),
            ..Default::default()
        };
        assert!(matches!(execute(&config), Err(TextdistoError::Config(_))));
        assert!(!config.output.exists());
    }

    #[test]
    fn execute_missing_font_file_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = DistortConfig {
            font_path: Some(dir.path().join("absent.ttf")),
            output: dir.path().join("out.jpg"),
            ..Default::default()
        };
        assert!(matches!(execute(&config), Err(TextdistoError::FontLoad(_))));
        assert!(!config.output.exists());
    }

    #[test]
    fn execute_rejects_invalid_config_first() {
        let config = DistortConfig {
            jpeg_quality: 0,
            ..Default::default()
        };
        assert!(matches!(execute(&config), Err(TextdistoError::Config(_))));
    }
}

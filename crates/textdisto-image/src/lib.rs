// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// textdisto-image — Image side of the distorted-text generator.
//
// Provides the distortion operators (cosine/tangent wave shifts, block flip,
// invert), the comma-separated command grammar that instantiates them, the
// pipeline executor, a font-backed text rasterizer and JPEG output.

pub mod command;
pub mod encode;
pub mod ops;
pub mod pipeline;
pub mod text;

// Re-export the primary types so callers can use `textdisto_image::Pipeline` etc.
pub use command::{CommandError, parse_command, parse_commands};
pub use encode::{encode_jpeg, save_jpeg};
pub use ops::{Axis, Operator};
pub use pipeline::Pipeline;
pub use text::{BuiltinFont, FontTextRasterizer, TextImage, TextRasterizer};

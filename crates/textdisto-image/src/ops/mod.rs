// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Distortion operators — every operator maps a raster to a freshly allocated
// raster of the same dimensions and never touches its input.

pub mod blocky;
pub mod invert;
pub mod wave;

use std::fmt;
use std::num::NonZeroU32;

use textdisto_core::Raster;

pub use blocky::block_flip;
pub use invert::invert;
pub use wave::{cosine_shift, tangent_shift};

/// Direction in which a wave shift displaces pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Each row is displaced along X; the phase advances per row.
    Horizontal,
    /// Each column is displaced along Y; the phase advances per column.
    Vertical,
}

/// One distortion stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    /// Ripple driven by `cos(phase)`, phase wrapping to 0 past 2π.
    CosineShift { axis: Axis, step: f64, amplitude: f64 },
    /// Saw-tooth ripple driven by `tan(phase)` with phase in [−π/4, π/4].
    TangentShift { axis: Axis, step: f64, amplitude: f64 },
    /// Tone inversion of a modulo-7 selection of rectangular blocks.
    BlockFlip {
        block_width: NonZeroU32,
        block_height: NonZeroU32,
    },
    /// Tone inversion of every pixel.
    Invert,
}

impl Operator {
    /// Command keyword selecting this operator (`cosh`, `blky`, ...).
    pub fn keyword(&self) -> &'static str {
        match self {
            Operator::CosineShift {
                axis: Axis::Horizontal,
                ..
            } => "cosh",
            Operator::CosineShift {
                axis: Axis::Vertical,
                ..
            } => "cosv",
            Operator::TangentShift {
                axis: Axis::Horizontal,
                ..
            } => "tanh",
            Operator::TangentShift {
                axis: Axis::Vertical,
                ..
            } => "tanv",
            Operator::BlockFlip { .. } => "blky",
            Operator::Invert => "inv",
        }
    }

    /// Run the operator on `src`.
    pub fn apply(&self, src: &Raster) -> Raster {
        match *self {
            Operator::CosineShift {
                axis,
                step,
                amplitude,
            } => cosine_shift(src, axis, step, amplitude),
            Operator::TangentShift {
                axis,
                step,
                amplitude,
            } => tangent_shift(src, axis, step, amplitude),
            Operator::BlockFlip {
                block_width,
                block_height,
            } => block_flip(src, block_width, block_height),
            Operator::Invert => invert(src),
        }
    }
}

/// Renders the operator back into its command form, e.g. `cosh,0.12,6`.
impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::CosineShift {
                step, amplitude, ..
            }
            | Operator::TangentShift {
                step, amplitude, ..
            } => write!(f, "{},{},{}", self.keyword(), step, amplitude),
            Operator::BlockFlip {
                block_width,
                block_height,
            } => write!(f, "{},{},{}", self.keyword(), block_width, block_height),
            Operator::Invert => f.write_str(self.keyword()),
        }
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline executor — threads a raster through an ordered list of operators.

use std::fmt;
use std::num::NonZeroU32;

use textdisto_core::Raster;
use tracing::{debug, info, instrument};

use crate::command::parse_commands;
use crate::ops::{Axis, Operator};

const DEFAULT_BLOCK_WIDTH: NonZeroU32 = NonZeroU32::new(32).unwrap();
const DEFAULT_BLOCK_HEIGHT: NonZeroU32 = NonZeroU32::new(16).unwrap();

/// Ordered sequence of distortion operators, applied left to right.
///
/// ```ignore
/// let pipeline = Pipeline::from_commands(["cosh,0.12,6", "blky,32,16"], true);
/// let distorted = pipeline.run(text_image.raster);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    operators: Vec<Operator>,
}

impl Pipeline {
    pub fn new(operators: Vec<Operator>) -> Self {
        Self { operators }
    }

    /// `cosv,0.16,6 cosh,0.07,6 blky,32,16`, followed by `inv` when
    /// `with_invert` is set.
    pub fn default_sequence(with_invert: bool) -> Self {
        let mut operators = vec![
            Operator::CosineShift {
                axis: Axis::Vertical,
                step: 0.16,
                amplitude: 6.0,
            },
            Operator::CosineShift {
                axis: Axis::Horizontal,
                step: 0.07,
                amplitude: 6.0,
            },
            Operator::BlockFlip {
                block_width: DEFAULT_BLOCK_WIDTH,
                block_height: DEFAULT_BLOCK_HEIGHT,
            },
        ];
        if with_invert {
            operators.push(Operator::Invert);
        }
        Self { operators }
    }

    /// Build from textual commands, skipping rejected ones. Falls back to
    /// [`Pipeline::default_sequence`] when nothing is accepted.
    pub fn from_commands<I>(commands: I, default_with_invert: bool) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let operators = parse_commands(commands);
        if operators.is_empty() {
            let pipeline = Self::default_sequence(default_with_invert);
            info!(distortion = %pipeline, "No usable distortion command, using default");
            return pipeline;
        }
        Self { operators }
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Apply every operator in order; each stage consumes the previous output.
    #[instrument(
        skip_all,
        fields(stages = self.operators.len(), width = input.width(), height = input.height())
    )]
    pub fn run(&self, input: Raster) -> Raster {
        info!(distortion = %self, "Running distortion pipeline");
        self.operators
            .iter()
            .enumerate()
            .fold(input, |raster, (stage, op)| {
                debug!(stage, %op, "Applying distortion");
                op.apply(&raster)
            })
    }
}

/// Space-separated command form, e.g. `cosv,0.16,6 cosh,0.07,6 inv`.
impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.operators.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Wave shifts — displace every scan-line (or scan-column) by an integer
// offset taken from a cosine or tangent wave.

use std::f64::consts::{FRAC_PI_4, TAU};

use textdisto_core::Raster;
use tracing::{debug, instrument};

use super::Axis;

/// Lower bound of the tangent phase window.
pub const TAN_MIN_PHASE: f64 = -FRAC_PI_4;
/// Upper bound of the tangent phase window.
pub const TAN_MAX_PHASE: f64 = FRAC_PI_4;

/// Per-line offsets `trunc(cos(phase) * amplitude)`.
///
/// The phase starts one `step` above zero and advances by `step` before each
/// line; once it passes 2π it restarts at 0.
#[derive(Debug, Clone)]
pub struct CosineWave {
    phase: f64,
    step: f64,
    amplitude: f64,
}

impl CosineWave {
    pub fn new(step: f64, amplitude: f64) -> Self {
        Self {
            phase: step,
            step,
            amplitude,
        }
    }
}

impl Iterator for CosineWave {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.phase += self.step;
        if self.phase > TAU {
            self.phase = 0.0;
        }
        Some(truncate_offset(self.phase.cos() * self.amplitude))
    }
}

/// Per-line offsets `trunc(tan(phase) * sign * amplitude)`.
///
/// The phase is confined to [`TAN_MIN_PHASE`, `TAN_MAX_PHASE`]: whenever it
/// passes the upper bound it restarts at the lower bound and `sign` flips, so
/// successive cycles alternate direction.
#[derive(Debug, Clone)]
pub struct TangentWave {
    phase: f64,
    step: f64,
    amplitude: f64,
    sign: f64,
}

impl TangentWave {
    pub fn new(step: f64, amplitude: f64) -> Self {
        Self {
            phase: step.clamp(TAN_MIN_PHASE, TAN_MAX_PHASE),
            step,
            amplitude,
            sign: 1.0,
        }
    }
}

impl Iterator for TangentWave {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.phase += self.step;
        if self.phase > TAN_MAX_PHASE {
            self.phase = TAN_MIN_PHASE;
            self.sign = -self.sign;
        }
        Some(truncate_offset(self.phase.tan() * self.sign * self.amplitude))
    }
}

/// Truncate toward zero. NaN becomes 0 and infinities saturate.
#[inline]
fn truncate_offset(value: f64) -> i64 {
    value as i64
}

/// Shift rows (horizontal) or columns (vertical) with a cosine wave.
#[instrument(skip(src), fields(width = src.width(), height = src.height()))]
pub fn cosine_shift(src: &Raster, axis: Axis, step: f64, amplitude: f64) -> Raster {
    shift_lines(src, axis, CosineWave::new(step, amplitude))
}

/// Shift rows (horizontal) or columns (vertical) with a tangent wave.
#[instrument(skip(src), fields(width = src.width(), height = src.height()))]
pub fn tangent_shift(src: &Raster, axis: Axis, step: f64, amplitude: f64) -> Raster {
    shift_lines(src, axis, TangentWave::new(step, amplitude))
}

/// Move each line by the next offset from `offsets`.
///
/// Pixels pushed past the edge are dropped; destinations nothing lands on
/// keep the zero the output raster starts with.
fn shift_lines(src: &Raster, axis: Axis, offsets: impl Iterator<Item = i64>) -> Raster {
    let (width, height) = (src.width(), src.height());
    let mut dst = src.blank_like();
    let mut moved_lines = 0usize;

    match axis {
        Axis::Horizontal => {
            for (y, shift) in (0..height).zip(offsets) {
                moved_lines += usize::from(shift != 0);
                for x in 0..width {
                    if let Some(tx) = displace(x, shift, width) {
                        dst.set(tx, y, src.get(x, y));
                    }
                }
            }
        }
        Axis::Vertical => {
            for (x, shift) in (0..width).zip(offsets) {
                moved_lines += usize::from(shift != 0);
                for y in 0..height {
                    if let Some(ty) = displace(y, shift, height) {
                        dst.set(x, ty, src.get(x, y));
                    }
                }
            }
        }
    }

    debug!(moved_lines, "Wave shift complete");
    dst
}

/// `pos + shift` if it lands inside `0..len`.
#[inline]
fn displace(pos: u32, shift: i64, len: u32) -> Option<u32> {
    let target = i64::from(pos).checked_add(shift)?;
    u32::try_from(target).ok().filter(|&t| t < len)
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Block flip — inverts the tone of a modulo-7 selection of rectangular blocks,
// giving a content-independent pseudo-checkerboard.

use std::num::NonZeroU32;

use textdisto_core::Raster;
use tracing::{debug, instrument};

/// Block indices are compared modulo this period.
const FLIP_PERIOD: u64 = 7;
/// Flip target of the first band.
const FIRST_FLIP_TARGET: u64 = 3;
/// Added to the flip target at every band boundary.
const FLIP_TARGET_STRIDE: u64 = 3;

/// Invert every block whose running index hits the band's flip target.
///
/// The raster is cut into bands of `block_height` rows and each band into
/// blocks of `block_width` columns. Blocks are numbered continuously across
/// bands (`ceil(width / block_width)` per band); band `b` flips the blocks
/// whose index is congruent to its target modulo 7, the target starting at
/// 3 and moving by 3 per band.
#[instrument(skip(src), fields(width = src.width(), height = src.height()))]
pub fn block_flip(src: &Raster, block_width: NonZeroU32, block_height: NonZeroU32) -> Raster {
    let (width, height) = (src.width(), src.height());
    let (bw, bh) = (block_width.get(), block_height.get());
    let blocks_per_band = u64::from(width.div_ceil(bw));

    let mut dst = src.blank_like();
    let mut band_offset = 0u64;
    let mut flip_target = FIRST_FLIP_TARGET;
    let mut flipped = 0usize;

    for y in 0..height {
        if y > 0 && y % bh == 0 {
            band_offset += blocks_per_band;
            flip_target = (flip_target + FLIP_TARGET_STRIDE) % FLIP_PERIOD;
        }
        for x in 0..width {
            let block_index = band_offset + u64::from(x / bw);
            let value = src.get(x, y);
            if block_index % FLIP_PERIOD == flip_target {
                dst.set(x, y, u8::MAX - value);
                flipped += 1;
            } else {
                dst.set(x, y, value);
            }
        }
    }

    debug!(flipped, "Block flip complete");
    dst
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// textdisto — Core raster type, configuration and error definitions shared
// across all crates.

pub mod config;
pub mod error;
pub mod raster;

pub use config::DistortConfig;
pub use error::{Result, TextdistoError};
pub use raster::Raster;

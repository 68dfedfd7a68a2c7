// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors
//!
//! Every failure the carver reports is an invalid argument handed in
//! at the API boundary: a malformed raster, a seam that does not fit
//! the current picture, or a target size the carver cannot reach.
//! The energy and cost computations are total over valid input and
//! never fail.

use failure::Fail;

#[derive(Debug, Fail, PartialEq, Eq, Clone)]
pub enum SeamError {
    #[fail(display = "image dimensions must be non-zero, got {}x{}", width, height)]
    EmptyRaster { width: u32, height: u32 },

    #[fail(
        display = "a {}x{} image needs {} pixels, got {}",
        width, height, expected, found
    )]
    PixelCount {
        width: u32,
        height: u32,
        expected: usize,
        found: usize,
    },

    #[fail(
        display = "pixel ({}, {}) is outside a {}x{} image",
        x, y, width, height
    )]
    PixelOutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    #[fail(display = "seam is empty")]
    EmptySeam,

    #[fail(display = "seam has {} entries, expected {}", found, expected)]
    SeamLength { expected: usize, found: usize },

    #[fail(
        display = "seam entry {} at position {} is outside [0, {})",
        value, position, extent
    )]
    SeamOutOfBounds {
        position: usize,
        value: u32,
        extent: u32,
    },

    #[fail(
        display = "seam jumps from {} to {} at position {}",
        from, to, position
    )]
    SeamDisconnected { position: usize, from: u32, to: u32 },

    #[fail(display = "cannot remove a seam from an image {} pixel across", extent)]
    TooNarrow { extent: u32 },

    #[fail(
        display = "cannot carve a {}x{} image to {}x{}",
        width, height, target_width, target_height
    )]
    Upscale {
        width: u32,
        height: u32,
        target_width: u32,
        target_height: u32,
    },
}

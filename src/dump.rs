// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render an energy field as a grayscale picture, scaled so the most
//! energetic pixel is white.

use crate::energy::EnergyField;
use image::{GrayImage, ImageBuffer, Luma};
use num_traits::{clamp, NumCast};

pub fn energy_to_image(energy: &EnergyField) -> GrayImage {
    let factor = energy.cells().iter().cloned().fold(0.0, f64::max);
    ImageBuffer::from_fn(energy.width, energy.height, |x, y| {
        if factor <= 0.0 {
            return Luma([0]);
        }
        let scaled = clamp((energy[(x, y)] * 255.0 / factor).round(), 0.0, 255.0);
        Luma([NumCast::from(scaled).unwrap_or(0)])
    })
}

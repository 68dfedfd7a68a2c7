// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Transposed image view
//!
//! A read-only proxy for `GenericImageView` that swaps width with
//! height and every `x` with `y`.  Running the vertical-seam pipeline
//! against a `Flipper` finds a horizontal seam, so the energy, cost
//! and removal code exists exactly once and never needs to know which
//! way it is facing.

use image::GenericImageView;

pub struct Flipper<'a, I: GenericImageView> {
    image: &'a I,
}

impl<'a, I: GenericImageView> Flipper<'a, I> {
    pub fn new(image: &'a I) -> Self {
        Flipper { image }
    }
}

impl<'a, I: GenericImageView> GenericImageView for Flipper<'a, I> {
    type Pixel = I::Pixel;

    fn dimensions(&self) -> (u32, u32) {
        let (x, y) = self.image.dimensions();
        (y, x)
    }

    fn get_pixel(&self, x: u32, y: u32) -> Self::Pixel {
        self.image.get_pixel(y, x)
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The picture being carved
//!
//! A `Raster` is an immutable RGB grid.  Removing a seam never edits
//! one in place; it builds a new, smaller `Raster` and the pipeline
//! swaps it in.  `Orientation` says whether an algorithm reads the
//! raster directly or through a transposed view.

use crate::errors::SeamError;
use crate::flipper::Flipper;
use image::{GenericImageView, ImageBuffer, Pixel, Rgb, RgbImage};

/// The axis a seam runs along.  A vertical seam runs top to bottom and
/// removes one column; a horizontal seam runs left to right and
/// removes one row.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    /// The other orientation.
    pub fn turn(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }

    /// Map plain `(width, height)` to the (oriented width, oriented
    /// height) an algorithm sees under this orientation.
    pub fn orient(self, (width, height): (u32, u32)) -> (u32, u32) {
        match self {
            Orientation::Vertical => (width, height),
            Orientation::Horizontal => (height, width),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgb<u8>>,
}

impl Raster {
    /// Build a raster from row-major pixels.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb<u8>>) -> Result<Self, SeamError> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(SeamError::PixelCount {
                width,
                height,
                expected,
                found: pixels.len(),
            });
        }
        Ok(Raster {
            width,
            height,
            pixels,
        })
    }

    /// Build a raster by calling `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Result<Self, SeamError>
    where
        F: FnMut(u32, u32) -> Rgb<u8>,
    {
        check_dimensions(width, height)?;
        Ok(Raster::generate(width, height, f))
    }

    /// Copy any 8-bit image (or view) into a raster, converting each
    /// pixel to RGB.
    pub fn from_image<I, P>(image: &I) -> Result<Self, SeamError>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8>,
    {
        let (width, height) = image.dimensions();
        Raster::from_fn(width, height, |x, y| image.get_pixel(x, y).to_rgb())
    }

    // Callers guarantee non-zero dimensions.
    pub(crate) fn generate<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Rgb<u8>,
    {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Raster {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Dimensions as seen by an algorithm running in `orientation`.
    pub fn oriented_dimensions(&self, orientation: Orientation) -> (u32, u32) {
        orientation.orient(self.dimensions())
    }

    /// The pixel at column `x`, row `y`.  Panics if out of range.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// A new raster with rows and columns exchanged.
    pub fn transpose(&self) -> Raster {
        let flipped = Flipper::new(self);
        let (width, height) = flipped.dimensions();
        Raster::generate(width, height, |x, y| flipped.get_pixel(x, y))
    }

    pub fn into_image(self) -> RgbImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| self.pixel(x, y))
    }
}

impl GenericImageView for Raster {
    type Pixel = Rgb<u8>;

    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        self.pixel(x, y)
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), SeamError> {
    if width == 0 || height == 0 {
        Err(SeamError::EmptyRaster { width, height })
    } else {
        Ok(())
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The pipeline driver
//!
//! `SeamCarver` holds the current picture.  Finding seams never
//! changes it; removing a seam swaps in a new, smaller picture, and
//! only after the seam has been checked.

use crate::energy::pixel_energy;
use crate::errors::SeamError;
use crate::raster::{Orientation, Raster};
use crate::remover::remove_seam;
use crate::seam::Seam;
use crate::seamfinder::SeamFinder;
use image::{GenericImageView, Pixel};
use log::{debug, trace};

#[derive(Debug, Clone)]
pub struct SeamCarver {
    picture: Raster,
}

impl SeamCarver {
    /// Creates a new SeamCarver with a picture to be carved.
    pub fn new(picture: Raster) -> Self {
        SeamCarver { picture }
    }

    /// Copy an 8-bit image into a new SeamCarver.
    pub fn from_image<I, P>(image: &I) -> Result<Self, SeamError>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8>,
    {
        Ok(SeamCarver::new(Raster::from_image(image)?))
    }

    /// The current picture.
    pub fn picture(&self) -> &Raster {
        &self.picture
    }

    pub fn into_picture(self) -> Raster {
        self.picture
    }

    pub fn width(&self) -> u32 {
        self.picture.width()
    }

    pub fn height(&self) -> u32 {
        self.picture.height()
    }

    /// Energy of the pixel at column `x`, row `y` of the current
    /// picture.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64, SeamError> {
        let (width, height) = self.picture.dimensions();
        if x >= width || y >= height {
            return Err(SeamError::PixelOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        Ok(pixel_energy(&self.picture, x, y))
    }

    /// Cut `seam` out of the current picture.  On error the picture is
    /// unchanged.
    pub fn remove_seam(&mut self, seam: &Seam, orientation: Orientation) -> Result<(), SeamError> {
        self.picture = remove_seam(&self.picture, seam, orientation)?;
        Ok(())
    }

    pub fn remove_vertical_seam(&mut self, seam: &Seam) -> Result<(), SeamError> {
        self.remove_seam(seam, Orientation::Vertical)
    }

    pub fn remove_horizontal_seam(&mut self, seam: &Seam) -> Result<(), SeamError> {
        self.remove_seam(seam, Orientation::Horizontal)
    }

    fn carve_once(&mut self, orientation: Orientation) -> Result<(), SeamError> {
        let seam = self.find_seam(orientation);
        trace!("{:?} seam: {:?}", orientation, &seam[..]);
        self.remove_seam(&seam, orientation)
    }

    // This recalculates the whole energy field for every seam.  Only
    // the pixels next to the removed seam actually change, so a
    // cache of the untouched spans would save most of that work.

    /// Repeatedly carve seams until the picture is `new_width` by
    /// `new_height`.  While both dimensions are too large, vertical
    /// and horizontal seams alternate; then the remaining axis is
    /// finished on its own.  The carver cannot upscale.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<(), SeamError> {
        let (width, height) = self.picture.dimensions();
        if new_width == 0 || new_height == 0 {
            return Err(SeamError::EmptyRaster {
                width: new_width,
                height: new_height,
            });
        }
        if width < new_width || height < new_height {
            return Err(SeamError::Upscale {
                width,
                height,
                target_width: new_width,
                target_height: new_height,
            });
        }

        let mut direction = Orientation::Vertical;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.turn();
            debug!("B: {}, {}", self.width(), self.height());
        }
        while self.width() > new_width {
            self.carve_once(Orientation::Vertical)?;
            debug!("W: {}, {}", self.width(), self.height());
        }
        while self.height() > new_height {
            self.carve_once(Orientation::Horizontal)?;
            debug!("H: {}, {}", self.width(), self.height());
        }
        Ok(())
    }
}

impl SeamFinder for SeamCarver {
    fn find_seam(&self, orientation: Orientation) -> Seam {
        self.picture.find_seam(orientation)
    }
}

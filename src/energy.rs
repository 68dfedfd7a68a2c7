// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The dual-gradient energy: for each pixel, sum the squared channel
//! differences between its left and right neighbours and between its
//! upper and lower neighbours, and take the square root.  Neighbours
//! that fall off the image wrap around to the opposite edge (see
//! `boundary::wrap`).
//!
//! ```text
//!        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//!        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//!       e(x,y) = √(|Δx|²+|Δy|²)
//! ```
//!
//! The field is always recomputed from the current raster; once a
//! seam is gone every energy along it is stale.

use crate::boundary::wrap;
use crate::flipper::Flipper;
use crate::raster::{Orientation, Raster};
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive};
use itertools::iproduct;
use num_traits::NumCast;

/// One non-negative energy per pixel, in the orientation it was
/// computed for.
pub type EnergyField = TwoDimensionalMap<f64>;

/// (Pixel, Pixel) -> squared colour distance over R, G and B.
#[inline]
pub fn energy_of_pair<P, S>(p1: &P, p2: &P) -> f64
where
    P: Pixel<Subpixel = S>,
    S: Primitive,
{
    let (c1, c2) = (p1.to_rgb().0, p2.to_rgb().0);
    c1.iter()
        .zip(c2.iter())
        .map(|(a, b)| {
            let a: f64 = NumCast::from(*a).unwrap_or(0.0);
            let b: f64 = NumCast::from(*b).unwrap_or(0.0);
            (a - b) * (a - b)
        })
        .sum()
}

/// The energy of a single pixel.  `(x, y)` must lie inside the view.
pub fn pixel_energy<I, P, S>(image: &I, x: u32, y: u32) -> f64
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S>,
    S: Primitive,
{
    let (width, height) = image.dimensions();
    let (left, right) = wrap(x, width);
    let (up, down) = wrap(y, height);
    let dx = energy_of_pair(&image.get_pixel(right, y), &image.get_pixel(left, y));
    let dy = energy_of_pair(&image.get_pixel(x, down), &image.get_pixel(x, up));
    (dx + dy).sqrt()
}

/// Compute the energy of every pixel in a view, row by row.
pub fn calculate_energy<I, P, S>(image: &I) -> EnergyField
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S>,
    S: Primitive,
{
    let (width, height) = image.dimensions();
    let mut field = EnergyField::new(width, height);
    for (cell, (y, x)) in field
        .cells_mut()
        .iter_mut()
        .zip(iproduct!(0..height, 0..width))
    {
        *cell = pixel_energy(image, x, y);
    }
    field
}

/// Same result as `calculate_energy`, but the rows are split into
/// bands and each band is filled by its own thread.  The view is only
/// ever read.
#[cfg(feature = "threaded")]
pub fn calculate_energy_threaded<I, P, S>(image: &I, workers: usize) -> EnergyField
where
    I: GenericImageView<Pixel = P> + Sync,
    P: Pixel<Subpixel = S>,
    S: Primitive,
{
    let (width, height) = image.dimensions();
    let mut field = EnergyField::new(width, height);
    let rows_per_band = (height as usize + workers.max(1) - 1) / workers.max(1);
    let band = rows_per_band.max(1) * width as usize;
    let stride = width as usize;

    let result = crossbeam::scope(|scope| {
        for (i, chunk) in field.cells_mut().chunks_mut(band).enumerate() {
            scope.spawn(move |_| {
                let first = i * band;
                for (offset, cell) in chunk.iter_mut().enumerate() {
                    let index = first + offset;
                    *cell = pixel_energy(image, (index % stride) as u32, (index / stride) as u32);
                }
            });
        }
    });
    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
    field
}

#[cfg(feature = "threaded")]
fn compute<I, P, S>(image: &I) -> EnergyField
where
    I: GenericImageView<Pixel = P> + Sync,
    P: Pixel<Subpixel = S>,
    S: Primitive,
{
    calculate_energy_threaded(image, num_cpus::get())
}

#[cfg(not(feature = "threaded"))]
fn compute<I, P, S>(image: &I) -> EnergyField
where
    I: GenericImageView<Pixel = P> + Sync,
    P: Pixel<Subpixel = S>,
    S: Primitive,
{
    calculate_energy(image)
}

/// The energy field of `raster` as seen in `orientation`.  For a
/// horizontal orientation the field is transposed: cell `(x, y)`
/// holds the energy of raster pixel `(y, x)`.
pub fn energy_field(raster: &Raster, orientation: Orientation) -> EnergyField {
    match orientation {
        Orientation::Vertical => compute(raster),
        Orientation::Horizontal => compute(&Flipper::new(raster)),
    }
}

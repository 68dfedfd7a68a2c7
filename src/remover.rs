// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam removal
//!
//! Cutting a seam builds a new raster one pixel narrower (or shorter)
//! and leaves the old one untouched.  A horizontal cut is a vertical
//! cut through a `Flipper`, transposed back afterwards.

use crate::cq;
use crate::errors::SeamError;
use crate::flipper::Flipper;
use crate::raster::{Orientation, Raster};
use crate::seam::Seam;
use image::{GenericImageView, Rgb};

// Every output pixel left of the seam keeps its column; every pixel at
// or right of it is pulled in from one column further right.
fn without_vertical_seam<I>(image: &I, seam: &[u32]) -> Raster
where
    I: GenericImageView<Pixel = Rgb<u8>>,
{
    let (width, height) = image.dimensions();
    Raster::generate(width - 1, height, |x, y| {
        image.get_pixel(cq!(x < seam[y as usize], x, x + 1), y)
    })
}

/// Remove `seam` from `raster`, reading the seam in `orientation`.
/// The seam is validated first; on any error `raster` is not touched
/// and nothing is built.
pub fn remove_seam(
    raster: &Raster,
    seam: &Seam,
    orientation: Orientation,
) -> Result<Raster, SeamError> {
    let (width, height) = raster.oriented_dimensions(orientation);
    seam.validate(width, height)?;
    if width < 2 {
        return Err(SeamError::TooNarrow { extent: width });
    }
    Ok(match orientation {
        Orientation::Vertical => without_vertical_seam(raster, seam),
        Orientation::Horizontal => without_vertical_seam(&Flipper::new(raster), seam).transpose(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{noise, six_by_five};
    use crate::seamfinder::SeamFinder;

    fn row(raster: &Raster, y: u32) -> Vec<Rgb<u8>> {
        (0..raster.width()).map(|x| raster.pixel(x, y)).collect()
    }

    fn column(raster: &Raster, x: u32) -> Vec<Rgb<u8>> {
        (0..raster.height()).map(|y| raster.pixel(x, y)).collect()
    }

    #[test]
    fn vertical_removal_drops_one_pixel_per_row() {
        let raster = noise(6, 4, 3);
        let seam = Seam::new(vec![0, 1, 2, 2]);
        let carved = remove_seam(&raster, &seam, Orientation::Vertical).unwrap();
        assert_eq!(carved.dimensions(), (5, 4));
        for y in 0..4 {
            let mut expected = row(&raster, y);
            expected.remove(seam[y as usize] as usize);
            assert_eq!(row(&carved, y), expected);
        }
    }

    #[test]
    fn horizontal_removal_drops_one_pixel_per_column() {
        let raster = noise(4, 5, 11);
        let seam = Seam::new(vec![4, 3, 3, 2]);
        let carved = remove_seam(&raster, &seam, Orientation::Horizontal).unwrap();
        assert_eq!(carved.dimensions(), (4, 4));
        for x in 0..4 {
            let mut expected = column(&raster, x);
            expected.remove(seam[x as usize] as usize);
            assert_eq!(column(&carved, x), expected);
        }
    }

    #[test]
    fn found_seams_remove_cleanly() {
        let raster = six_by_five();
        let seam = raster.find_vertical_seam();
        let carved = remove_seam(&raster, &seam, Orientation::Vertical).unwrap();
        assert_eq!(carved.dimensions(), (5, 5));
        let seam = carved.find_horizontal_seam();
        let carved = remove_seam(&carved, &seam, Orientation::Horizontal).unwrap();
        assert_eq!(carved.dimensions(), (5, 4));
    }

    #[test]
    fn invalid_seams_are_rejected() {
        let raster = noise(3, 3, 1);
        assert_eq!(
            remove_seam(&raster, &Seam::new(vec![]), Orientation::Vertical),
            Err(SeamError::EmptySeam)
        );
        assert_eq!(
            remove_seam(&raster, &Seam::new(vec![0, 0]), Orientation::Horizontal),
            Err(SeamError::SeamLength {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            remove_seam(&raster, &Seam::new(vec![0, 1, 3]), Orientation::Vertical),
            Err(SeamError::SeamOutOfBounds {
                position: 2,
                value: 3,
                extent: 3
            })
        );
        assert_eq!(
            remove_seam(&raster, &Seam::new(vec![0, 2, 2]), Orientation::Vertical),
            Err(SeamError::SeamDisconnected {
                position: 1,
                from: 0,
                to: 2
            })
        );
    }

    #[test]
    fn single_row_image_narrows() {
        let raster = noise(4, 1, 5);
        let seam = raster.find_vertical_seam();
        let carved = remove_seam(&raster, &seam, Orientation::Vertical).unwrap();
        assert_eq!(carved.dimensions(), (3, 1));
    }

    #[test]
    fn single_column_image_gets_shorter() {
        let raster = noise(1, 4, 7);
        let found = raster.find_horizontal_seam();
        assert_eq!(found.len(), 1);
        let carved = remove_seam(&raster, &found, Orientation::Horizontal).unwrap();
        assert_eq!(carved.dimensions(), (1, 3));
        let carved = remove_seam(&raster, &Seam::new(vec![2]), Orientation::Horizontal).unwrap();
        assert_eq!(carved.dimensions(), (1, 3));
        assert_eq!(
            column(&carved, 0),
            vec![raster.pixel(0, 0), raster.pixel(0, 1), raster.pixel(0, 3)]
        );
    }

    #[test]
    fn nothing_left_to_remove() {
        let raster = noise(1, 3, 5);
        assert_eq!(
            remove_seam(&raster, &Seam::new(vec![0, 0, 0]), Orientation::Vertical),
            Err(SeamError::TooNarrow { extent: 1 })
        );
        let raster = noise(3, 1, 5);
        assert_eq!(
            remove_seam(&raster, &Seam::new(vec![0, 0, 0]), Orientation::Horizontal),
            Err(SeamError::TooNarrow { extent: 1 })
        );
    }
}

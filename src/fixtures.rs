// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Shared test pictures.

use crate::raster::Raster;
use image::Rgb;

/// The 3x4 picture from the classic seam-carving exercise.
pub fn three_by_four() -> Raster {
    let rows: [[[u8; 3]; 3]; 4] = [
        [[255, 101, 51], [255, 101, 153], [255, 101, 255]],
        [[255, 153, 51], [255, 153, 153], [255, 153, 255]],
        [[255, 203, 51], [255, 204, 153], [255, 205, 255]],
        [[255, 255, 51], [255, 255, 153], [255, 255, 255]],
    ];
    Raster::from_fn(3, 4, |x, y| Rgb(rows[y as usize][x as usize])).unwrap()
}

/// A 6x5 picture of assorted colours.
pub fn six_by_five() -> Raster {
    let rows: [[[u8; 3]; 6]; 5] = [
        [
            [97, 82, 107],
            [220, 172, 186],
            [121, 79, 223],
            [31, 20, 189],
            [133, 200, 36],
            [116, 44, 101],
        ],
        [
            [54, 129, 25],
            [208, 147, 140],
            [201, 181, 95],
            [57, 6, 207],
            [42, 203, 247],
            [158, 110, 146],
        ],
        [
            [35, 154, 196],
            [236, 162, 113],
            [131, 181, 136],
            [6, 21, 171],
            [230, 174, 129],
            [23, 151, 70],
        ],
        [
            [161, 86, 82],
            [162, 138, 36],
            [78, 23, 58],
            [80, 37, 205],
            [45, 44, 112],
            [92, 173, 107],
        ],
        [
            [217, 241, 231],
            [57, 114, 170],
            [103, 19, 82],
            [51, 198, 249],
            [249, 246, 85],
            [101, 11, 108],
        ],
    ];
    Raster::from_fn(6, 5, |x, y| Rgb(rows[y as usize][x as usize])).unwrap()
}

/// Deterministic pseudo-random noise.
pub fn noise(width: u32, height: u32, seed: u32) -> Raster {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    Raster::from_fn(width, height, |_, _| {
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        };
        Rgb([next(), next(), next()])
    })
    .unwrap()
}

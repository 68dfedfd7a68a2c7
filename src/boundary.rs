// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Edge rules
//!
//! Two different rules decide what happens at the edge of the image,
//! and they must stay different:
//!
//! * `wrap`: the energy gradient of an edge pixel borrows its missing
//!   neighbour from the opposite edge (`-1` becomes `extent - 1`,
//!   `extent` becomes `0`).
//! * `clip`: the dynamic program and the seam walk only consider
//!   predecessor columns that exist; nothing wraps around.

use crate::cq;
use std::ops::RangeInclusive;

/// The (previous, next) neighbours of `coord` along an axis of length
/// `extent`, wrapping at both ends.  A single-pixel axis is its own
/// neighbour on both sides.
pub fn wrap(coord: u32, extent: u32) -> (u32, u32) {
    (
        cq!(coord == 0, extent - 1, coord - 1),
        cq!(coord + 1 >= extent, 0, coord + 1),
    )
}

/// The columns `coord - 1 ..= coord + 1` that lie inside
/// `[0, extent)`.
pub fn clip(coord: u32, extent: u32) -> RangeInclusive<u32> {
    cq!(coord == 0, 0, coord - 1)..=cq!(coord + 1 >= extent, extent - 1, coord + 1)
}

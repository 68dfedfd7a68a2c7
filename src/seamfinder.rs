// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::cost::accumulate;
use crate::energy::energy_field;
use crate::raster::{Orientation, Raster};
use crate::seam::{locate, Seam};

/// How we ask for seams.  Both queries are pure: nothing about the
/// picture changes, and a horizontal query is the vertical pipeline
/// run against the transposed picture.
pub trait SeamFinder {
    /// The cheapest seam running in `orientation`.
    fn find_seam(&self, orientation: Orientation) -> Seam;

    /// One column index per row, top to bottom.
    fn find_vertical_seam(&self) -> Seam {
        self.find_seam(Orientation::Vertical)
    }

    /// One row index per column, left to right.
    fn find_horizontal_seam(&self) -> Seam {
        self.find_seam(Orientation::Horizontal)
    }
}

impl SeamFinder for Raster {
    fn find_seam(&self, orientation: Orientation) -> Seam {
        locate(&accumulate(&energy_field(self, orientation)))
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cumulative cost
//!
//! The dynamic program behind seam carving.  The first row costs what
//! its energy says; every later cell costs its own energy plus the
//! cheapest of the (up to) three cells above it:
//!
//! ```text
//!                          ⎧ M(x−1,y−1)
//!     M(x,y) = e(x,y) + min⎨ M(x,y−1)
//!                          ⎩ M(x+1,y−1)
//! ```
//!
//! Predecessors outside the image are skipped (`boundary::clip`), never
//! wrapped.  Rows depend on the row above, so they are filled top to
//! bottom; cells within a row are independent.

use crate::boundary::clip;
use crate::energy::EnergyField;
use crate::twodmap::TwoDimensionalMap;

/// Minimal cumulative energy of any path from the top row to each
/// cell.  `None` marks a cell the sweep has not reached; a computed
/// cost of exactly `0.0` is a real cost.
pub type CostMatrix = TwoDimensionalMap<Option<f64>>;

/// Run the sweep over a whole energy field.
pub fn accumulate(energy: &EnergyField) -> CostMatrix {
    let (width, height) = (energy.width, energy.height);
    let mut cost = CostMatrix::new(width, height);

    for x in 0..width {
        cost[(x, 0)] = Some(energy[(x, 0)]);
    }

    for y in 1..height {
        for x in 0..width {
            let cheapest = clip(x, width)
                .filter_map(|px| cost[(px, y - 1)])
                .min_by(|a, b| a.total_cmp(b));
            cost[(x, y)] = cheapest.map(|c| c + energy[(x, y)]);
        }
    }
    cost
}

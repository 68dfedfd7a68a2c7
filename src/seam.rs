// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seams, and finding the cheapest one
//!
//! A seam is one cross-axis index per line along the traversal axis:
//! for a vertical seam, entry `y` is the column removed from row `y`.
//! Adjacent entries never differ by more than one.

use crate::boundary::clip;
use crate::cost::CostMatrix;
use crate::cq;
use crate::errors::SeamError;
use itertools::Itertools;
use std::ops::{Deref, RangeInclusive};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam(Vec<u32>);

impl Seam {
    pub fn new(indices: Vec<u32>) -> Self {
        Seam(indices)
    }

    pub fn into_inner(self) -> Vec<u32> {
        self.0
    }

    /// True when every pair of neighbouring entries is at most one
    /// apart.
    pub fn is_connected(&self) -> bool {
        self.0
            .iter()
            .tuple_windows()
            .all(|(a, b)| cq!(a > b, a - b, b - a) <= 1)
    }

    /// Check that this seam can be cut from a picture whose oriented
    /// dimensions are `(width, height)`: it must be non-empty, have
    /// exactly `height` entries, keep every entry in `[0, width)`, and
    /// be connected.
    pub fn validate(&self, width: u32, height: u32) -> Result<(), SeamError> {
        if self.0.is_empty() {
            return Err(SeamError::EmptySeam);
        }
        if self.0.len() != height as usize {
            return Err(SeamError::SeamLength {
                expected: height as usize,
                found: self.0.len(),
            });
        }
        if let Some((position, &value)) = self.0.iter().find_position(|&&v| v >= width) {
            return Err(SeamError::SeamOutOfBounds {
                position,
                value,
                extent: width,
            });
        }
        match self
            .0
            .iter()
            .tuple_windows()
            .find_position(|&(&a, &b)| cq!(a > b, a - b, b - a) > 1)
        {
            Some((position, (&from, &to))) => Err(SeamError::SeamDisconnected {
                position: position + 1,
                from,
                to,
            }),
            None => Ok(()),
        }
    }
}

impl Deref for Seam {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.0
    }
}

impl From<Vec<u32>> for Seam {
    fn from(indices: Vec<u32>) -> Self {
        Seam(indices)
    }
}

// A computed cost beats an uncomputed one; two uncomputed cells never
// beat each other.
fn cheaper(candidate: Option<f64>, best: Option<f64>) -> bool {
    match (candidate, best) {
        (Some(c), Some(b)) => c < b,
        (Some(_), None) => true,
        _ => false,
    }
}

// Strictly-less comparison keeps the leftmost of several equal costs.
fn cheapest_in(cost: &CostMatrix, y: u32, window: RangeInclusive<u32>) -> u32 {
    let start = *window.start();
    window.fold(start, |best, x| {
        cq!(cheaper(cost[(x, y)], cost[(best, y)]), x, best)
    })
}

/// Walk a cost matrix from the bottom row up.  The bottom entry is the
/// cheapest cell of the last row; every entry above is the cheapest of
/// the (clipped) three cells over the entry below it.  Ties go to the
/// leftmost column at every row.
pub fn locate(cost: &CostMatrix) -> Seam {
    let (width, height) = (cost.width, cost.height);
    let mut indices: Vec<u32> = (0..height)
        .rev()
        .scan(None, |below: &mut Option<u32>, y| {
            let window = match *below {
                None => 0..=width - 1,
                Some(column) => clip(column, width),
            };
            let column = cheapest_in(cost, y, window);
            *below = Some(column);
            Some(column)
        })
        .collect();
    indices.reverse();
    Seam(indices)
}

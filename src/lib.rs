// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam carving with a wraparound dual-gradient energy.
//!
//! Raster → energy field → cumulative cost → seam → smaller raster,
//! once per removed seam.  Horizontal seams are vertical seams found
//! on a transposed view of the picture.

pub mod ternary;

pub mod boundary;
pub mod cost;
pub mod dump;
pub mod energy;
pub mod errors;
pub mod flipper;
pub mod raster;
pub mod remover;
pub mod seam;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

#[cfg(test)]
mod fixtures;

pub use cost::{accumulate, CostMatrix};
pub use dump::energy_to_image;
pub use energy::{calculate_energy, energy_field, pixel_energy, EnergyField};
pub use errors::SeamError;
pub use raster::{Orientation, Raster};
pub use remover::remove_seam;
pub use seam::{locate, Seam};
pub use seamcarver::SeamCarver;
pub use seamfinder::SeamFinder;

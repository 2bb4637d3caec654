// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving, using the
//! dual-gradient energy function.

mod ternary;

pub mod config;
pub mod dump;
pub mod energy;
pub mod error;
pub mod flipper;
pub mod resize;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

pub use config::CarverConfig;
pub use energy::{calculate_energy, EnergyMap};
pub use error::{Result, SeamError};
pub use resize::resize;
pub use seamcarver::SeamCarver;
pub use seamfinder::{Orientation, SeamFinder};

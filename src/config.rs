// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Energy given to every pixel on the image frame unless configured
/// otherwise.
pub const DEFAULT_BORDER_ENERGY: f64 = 1000.0;

/// Tunables for a carving session.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CarverConfig {
    /// The energy pinned to pixels in the first and last rows and
    /// columns.  It should exceed any interior gradient the images
    /// being carved can produce; the largest possible 8-bit RGB dual
    /// gradient is a little over 624.
    pub border_energy: f64,
}

impl Default for CarverConfig {
    fn default() -> Self {
        CarverConfig {
            border_energy: DEFAULT_BORDER_ENERGY,
        }
    }
}

impl CarverConfig {
    pub fn with_border_energy(border_energy: f64) -> Self {
        CarverConfig { border_energy }
    }
}

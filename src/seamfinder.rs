// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::error::Result;

/// This trait defines how we will ask a carving session about its
/// current image without changing it.  Seams returned here are only
/// good until the next removal.
pub trait SeamFinder {
    /// Width of the current image.
    fn width(&self) -> u32;

    /// Height of the current image.
    fn height(&self) -> u32;

    /// The energy of the pixel at column `col`, row `row`.
    fn energy_at(&self, col: u32, row: u32) -> Result<f64>;

    /// The cheapest left-to-right seam: one row index per column.
    fn find_horizontal_seam(&self) -> Vec<u32>;

    /// The cheapest top-to-bottom seam: one column index per row.
    fn find_vertical_seam(&self) -> Vec<u32>;
}

/// Which way a seam runs across the image.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Orientation {
    /// Top to bottom; removing it makes the image narrower.
    Vertical,
    /// Left to right; removing it makes the image shorter.
    Horizontal,
}

impl Orientation {
    /// Whether the pixel at `(x, y)` lies on `seam`.
    pub fn on_seam(self, seam: &[u32], x: u32, y: u32) -> bool {
        match self {
            Orientation::Vertical => seam.get(y as usize) == Some(&x),
            Orientation::Horizontal => seam.get(x as usize) == Some(&y),
        }
    }
}

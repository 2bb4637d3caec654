// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the dual gradient of its four neighbors:
//! the colour distance between the pixels to its left and right,
//! plus the colour distance between the pixels above and below it,
//! square-rooted.  The gradient is meaningless on the frame of the
//! image, where a neighbor is missing, so frame pixels get a fixed
//! border energy instead.  Since the border energy is larger than any
//! gradient, seams never wander along the edge of the picture.

use crate::twodmap::TwoDimensionalMap;
use image::{Rgb, RgbImage};
use num_traits::pow;

/// The energy of every pixel of an image, addressed `(x, y)`.
pub type EnergyMap = TwoDimensionalMap<f64>;

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up.  This
// is the rusty expression of:
//
//        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//
// The largest possible value, 3 * 255², fits comfortably in a u32.
#[inline]
fn energy_of_pair(p1: &Rgb<u8>, p2: &Rgb<u8>) -> u32 {
    p1.0.iter()
        .zip(p2.0.iter())
        .map(|(&c1, &c2)| pow(i32::from(c1) - i32::from(c2), 2) as u32)
        .sum()
}

/// The dual-gradient energy of the pixel at `(x, y)`, or
/// `border_energy` if the pixel lies on the first or last row or
/// column.  The address must be inside the image.
pub fn pixel_energy(image: &RgbImage, x: u32, y: u32, border_energy: f64) -> f64 {
    let (width, height) = image.dimensions();
    if x == 0 || y == 0 || x + 1 >= width || y + 1 >= height {
        return border_energy;
    }
    let dx = energy_of_pair(image.get_pixel(x - 1, y), image.get_pixel(x + 1, y));
    let dy = energy_of_pair(image.get_pixel(x, y - 1), image.get_pixel(x, y + 1));
    f64::from(dx + dy).sqrt()
}

/// Compute the energy of every pixel in an image.
pub fn calculate_energy(image: &RgbImage, border_energy: f64) -> EnergyMap {
    let (width, height) = image.dimensions();
    EnergyMap::from_fn(width, height, |x, y| pixel_energy(image, x, y, border_energy))
}

// Removing a connected vertical seam only disturbs the neighborhoods
// of the two pixels that ended up on either side of the cut: the one
// now at the seam's column, and the one just left of it.  Everything
// else sees the same four neighbors it saw before the cut, or sits on
// the frame both before and after.

/// Bring an energy map that was compacted along `seam` back in line
/// with `image`, the image that was compacted along the same seam.
/// Only the pixels bordering the cut are recomputed; the result is the
/// same as calling `calculate_energy` on the new image.
pub fn refresh_after_vertical_seam(
    image: &RgbImage,
    energy: &mut EnergyMap,
    seam: &[u32],
    border_energy: f64,
) {
    let width = image.width();
    for (y, &cut) in (0..image.height()).zip(seam.iter()) {
        for x in cut.saturating_sub(1)..=cut {
            if x < width {
                energy[(x, y)] = pixel_energy(image, x, y, border_energy);
            }
        }
    }
}

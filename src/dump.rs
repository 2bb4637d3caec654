// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Diagnostics: look at what the carver sees.

use crate::energy::EnergyMap;
use crate::seamfinder::{Orientation, SeamFinder};
use image::{GrayImage, Luma};
use std::fmt::Write;

/// Render the energy of every pixel as a table, one line per row,
/// with the pixels of `seam` starred and the seam's total energy at
/// the bottom.
pub fn energy_table<F: SeamFinder>(finder: &F, seam: &[u32], orientation: Orientation) -> String {
    let mut table = String::new();
    let mut total = 0.0;
    for y in 0..finder.height() {
        for x in 0..finder.width() {
            let energy = finder.energy_at(x, y).unwrap_or(0.0);
            let marker = if orientation.on_seam(seam, x, y) {
                total += energy;
                '*'
            } else {
                ' '
            };
            let _ = write!(table, "{:7.2}{} ", energy, marker);
        }
        table.push('\n');
    }
    let _ = writeln!(table, "Total energy = {:.6}", total);
    table
}

/// Render an energy map as a greyscale image, brightest where the
/// energy is highest.
pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let (width, height) = energy.dimensions();
    let factor = (0..height)
        .flat_map(move |y| energy.row(y).iter().copied())
        .fold(0.0, f64::max);
    GrayImage::from_fn(width, height, |x, y| {
        if factor > 0.0 {
            Luma([(energy[(x, y)] / factor * 255.0).round() as u8])
        } else {
            Luma([0])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seamcarver::SeamCarver;
    use image::{Rgb, RgbImage};

    #[test]
    fn table_stars_the_seam() {
        let carver = SeamCarver::new(RgbImage::from_pixel(3, 3, Rgb([1, 2, 3]))).unwrap();
        let table = energy_table(&carver, &[1, 1, 1], Orientation::Vertical);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "1000.00  1000.00* 1000.00  ");
        assert_eq!(lines[1], "1000.00     0.00* 1000.00  ");
        assert_eq!(lines[3], "Total energy = 2000.000000");
    }

    #[test]
    fn horizontal_seams_are_starred_by_column() {
        let carver = SeamCarver::new(RgbImage::from_pixel(3, 2, Rgb([1, 2, 3]))).unwrap();
        let table = energy_table(&carver, &[0, 1, 0], Orientation::Horizontal);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "1000.00* 1000.00  1000.00* ");
        assert_eq!(lines[1], "1000.00  1000.00* 1000.00  ");
        assert_eq!(lines[2], "Total energy = 3000.000000");
    }

    #[test]
    fn energy_image_is_scaled_to_the_peak() {
        let mut energy = EnergyMap::filled(2, 2, 0.0);
        energy[(1, 0)] = 10.0;
        energy[(0, 1)] = 5.0;
        let image = energy_to_image(&energy);
        assert_eq!(image.get_pixel(0, 0)[0], 0);
        assert_eq!(image.get_pixel(1, 0)[0], 255);
        assert_eq!(image.get_pixel(0, 1)[0], 128);
        assert_eq!(energy_to_image(&EnergyMap::filled(2, 1, 0.0)).get_pixel(1, 0)[0], 0);
    }
}

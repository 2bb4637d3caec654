// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Two-dimensional maps
//!
//! The energy cache and the seam search's distance table are both
//! rectangular fields of plain values laid over the image.  They
//! share one container, addressed by `(x, y)` the same way
//! `image::ImageBuffer` addresses its pixels.

use itertools::iproduct;
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field of `Copy` values, stored
/// row-major in a single flat vector.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Copy> TwoDimensionalMap<P> {
    /// A map with every cell set to `value`.
    pub fn filled(width: u32, height: u32, value: P) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![value; width as usize * height as usize],
        }
    }

    /// A map whose cell at `(x, y)` is `f(x, y)`.  Cells are visited in
    /// row-major order.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        TwoDimensionalMap {
            width,
            height,
            cells: iproduct!(0..height, 0..width)
                .map(|(y, x)| f(x, y))
                .collect(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// The value at `(x, y)`, or `None` if the address is off the map.
    pub fn get(&self, x: u32, y: u32) -> Option<P> {
        if x < self.width && y < self.height {
            Some(self.cells[self.get_index(x, y)])
        } else {
            None
        }
    }

    /// One full row of the map.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    /// A deep copy with rows and columns exchanged: the value at
    /// `(x, y)` moves to `(y, x)`.
    pub fn transposed(&self) -> Self {
        TwoDimensionalMap::from_fn(self.height, self.width, |x, y| self[(y, x)])
    }

    /// A copy one column narrower, with the cell at `(seam[y], y)`
    /// dropped from every row and the cells right of it shifted left.
    /// The seam must already have been checked against this map.
    pub fn without_vertical_seam(&self, seam: &[u32]) -> Self {
        let cells = (0..self.height)
            .zip(seam.iter())
            .flat_map(move |(y, &cut)| {
                let row = self.row(y);
                let cut = cut as usize;
                row[..cut].iter().chain(row[cut + 1..].iter()).copied()
            })
            .collect();
        TwoDimensionalMap {
            width: self.width - 1,
            height: self.height,
            cells,
        }
    }
}

impl<P: Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

/// One cell of the seam search: the cheapest known distance from the
/// first row, and the column in the row above it was reached from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct EnergyAndBackPointer {
    pub energy: f64,
    pub parent: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // 4 wide, 3 high.
    const CELLS: [u32; 12] = [0, 1, 2, 3, 10, 11, 12, 13, 20, 21, 22, 23];

    fn sample() -> TwoDimensionalMap<u32> {
        TwoDimensionalMap::from_fn(4, 3, |x, y| CELLS[(y * 4 + x) as usize])
    }

    #[test]
    fn addresses_are_row_major() {
        let map = sample();
        assert_eq!(map[(0, 0)], 0);
        assert_eq!(map[(3, 0)], 3);
        assert_eq!(map[(1, 2)], 21);
        assert_eq!(map.row(1), &[10, 11, 12, 13]);
        assert_eq!(map.get(4, 0), None);
        assert_eq!(map.get(0, 3), None);
        assert_eq!(map.get(2, 1), Some(12));
    }

    #[test]
    fn index_mut_writes_one_cell() {
        let mut map = TwoDimensionalMap::filled(2, 2, 0u8);
        map[(1, 0)] = 7;
        assert_eq!(map.row(0), &[0, 7]);
        assert_eq!(map.row(1), &[0, 0]);
    }

    #[test]
    fn transposition_swaps_axes() {
        let flipped = sample().transposed();
        assert_eq!(flipped.dimensions(), (3, 4));
        assert_eq!(flipped.row(0), &[0, 10, 20]);
        assert_eq!(flipped.row(3), &[3, 13, 23]);
        assert_eq!(flipped.transposed(), sample());
    }

    #[test]
    fn vertical_seam_is_compacted_out() {
        let narrowed = sample().without_vertical_seam(&[0, 1, 3]);
        assert_eq!(narrowed.dimensions(), (3, 3));
        assert_eq!(narrowed.row(0), &[1, 2, 3]);
        assert_eq!(narrowed.row(1), &[10, 12, 13]);
        assert_eq!(narrowed.row(2), &[20, 21, 22]);
    }
}

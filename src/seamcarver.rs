// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - the seam engine
//!
//! A `SeamCarver` owns an image and the energy of every one of its
//! pixels.  It finds the cheapest seam in either direction and cuts
//! seams out, replacing the image and the energy map together.
//!
//! Only vertical seams are really implemented.  Horizontal ones are
//! found and removed by flipping the image on its diagonal, doing the
//! vertical thing, and flipping back.

use crate::config::CarverConfig;
use crate::cq;
use crate::energy::{calculate_energy, refresh_after_vertical_seam, EnergyMap};
use crate::error::{Result, SeamError};
use crate::flipper::transpose;
use crate::seamfinder::SeamFinder;
use crate::twodmap::{EnergyAndBackPointer, TwoDimensionalMap};
use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel, Primitive, RgbImage};
use log::debug;

// The image is a directed acyclic graph: every pixel has an edge to
// the (up to) three pixels touching it in the row below, weighted by
// the energy of the pixel the edge lands on.  Rows are a topological
// order, so one sweep from top to bottom relaxes every edge exactly
// once.  The first row starts at distance zero no matter what its own
// energy is.

/// Given an energy map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates of the
/// cheapest top-to-bottom seam.  Ties go to the leftmost candidate.
pub fn vertical_seam(energy: &EnergyMap) -> Vec<u32> {
    let (width, height) = energy.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut target = TwoDimensionalMap::filled(
        width,
        height,
        EnergyAndBackPointer {
            energy: f64::INFINITY,
            parent: None,
        },
    );
    for x in 0..width {
        target[(x, 0)].energy = 0.0;
    }

    let maxwidth = width - 1;
    for y in 0..height - 1 {
        for x in 0..width {
            let distance = target[(x, y)].energy;
            for child in cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1) {
                let candidate = distance + energy[(child, y + 1)];
                if candidate < target[(child, y + 1)].energy {
                    target[(child, y + 1)] = EnergyAndBackPointer {
                        energy: candidate,
                        parent: Some(x),
                    };
                }
            }
        }
    }

    // Find the x coordinate of the bottommost seam end with the least
    // energy.
    let last = height - 1;
    let mut seam_col = (1..width).fold(0, |best, x| {
        cq!(target[(x, last)].energy < target[(best, last)].energy, x, best)
    });
    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    (0..height)
        .rev()
        .fold(Vec::<u32>::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            if let Some(parent) = target[(seam_col, y)].parent {
                seam_col = parent;
            }
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

/// Given an energy map, return the list of y-coordinates that, when
/// mapped with the range (0..width), give the XY coordinates of the
/// cheapest left-to-right seam.
pub fn horizontal_seam(energy: &EnergyMap) -> Vec<u32> {
    vertical_seam(&energy.transposed())
}

fn validate_vertical_seam(seam: &[u32], width: u32, height: u32) -> Result<()> {
    if width <= 1 {
        return Err(SeamError::ExhaustedDimension { extent: width });
    }
    if seam.len() != height as usize {
        return Err(SeamError::SeamLength {
            expected: height as usize,
            actual: seam.len(),
        });
    }
    if let Some((position, &value)) = seam.iter().enumerate().find(|(_, &x)| x >= width) {
        return Err(SeamError::SeamOutOfRange {
            position,
            value,
            limit: width,
        });
    }
    if let Some(position) = seam
        .windows(2)
        .position(|pair| cq!(pair[0] > pair[1], pair[0] - pair[1], pair[1] - pair[0]) > 1)
    {
        return Err(SeamError::DisconnectedSeam(position, position + 1));
    }
    Ok(())
}

// Every pixel left of the seam stays put; every pixel right of it
// moves one column left, over the gap.
fn remove_vertical_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    ImageBuffer::from_fn(width - 1, height, |x, y| {
        image.get_pixel(cq!(x < seam[y as usize], x, x + 1), y)
    })
}

// Builds the narrower image and its energy map without touching the
// carver, so that a bad seam can be rejected with nothing changed.
fn carve_vertical(
    image: &RgbImage,
    energy: &EnergyMap,
    seam: &[u32],
    border_energy: f64,
) -> Result<(RgbImage, EnergyMap)> {
    validate_vertical_seam(seam, image.width(), image.height())?;
    let carved = remove_vertical_seam(image, seam);
    let mut energy = energy.without_vertical_seam(seam);
    refresh_after_vertical_seam(&carved, &mut energy, seam, border_energy);
    Ok((carved, energy))
}

/// A carving session: an image, and the energy of each of its pixels.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    image: RgbImage,
    energy: EnergyMap,
    config: CarverConfig,
}

impl SeamCarver {
    /// Start carving `image` with the default border energy.
    pub fn new(image: RgbImage) -> Result<Self> {
        SeamCarver::with_config(image, CarverConfig::default())
    }

    /// Start carving `image`.  Fails if the image has no pixels.
    pub fn with_config(image: RgbImage, config: CarverConfig) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(SeamError::EmptyImage { width, height });
        }
        let energy = calculate_energy(&image, config.border_energy);
        Ok(SeamCarver {
            image,
            energy,
            config,
        })
    }

    /// Start carving a decoded image of any colour type, as RGB8.
    pub fn from_dynamic(image: &DynamicImage) -> Result<Self> {
        SeamCarver::new(image.to_rgb8())
    }

    /// The current image.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// The energy of every pixel of the current image.
    pub fn energy(&self) -> &EnergyMap {
        &self.energy
    }

    pub fn config(&self) -> &CarverConfig {
        &self.config
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Cut a top-to-bottom seam out of the image, making it one pixel
    /// narrower.  `seam` holds one column per row and must be
    /// connected.  On error nothing changes.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        let (image, energy) =
            carve_vertical(&self.image, &self.energy, seam, self.config.border_energy)?;
        self.image = image;
        self.energy = energy;
        debug!(
            "removed vertical seam, now {}x{}",
            self.image.width(),
            self.image.height()
        );
        Ok(())
    }

    /// Cut a left-to-right seam out of the image, making it one pixel
    /// shorter.  `seam` holds one row per column and must be
    /// connected.  On error nothing changes.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        let (width, height) = self.image.dimensions();
        validate_vertical_seam(seam, height, width)?;
        let (image, energy) = carve_vertical(
            &transpose(&self.image),
            &self.energy.transposed(),
            seam,
            self.config.border_energy,
        )?;
        self.image = transpose(&image);
        self.energy = energy.transposed();
        debug!(
            "removed horizontal seam, now {}x{}",
            self.image.width(),
            self.image.height()
        );
        Ok(())
    }
}

impl SeamFinder for SeamCarver {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn energy_at(&self, col: u32, row: u32) -> Result<f64> {
        self.energy.get(col, row).ok_or(SeamError::OutOfBounds {
            col,
            row,
            width: self.image.width(),
            height: self.image.height(),
        })
    }

    fn find_horizontal_seam(&self) -> Vec<u32> {
        horizontal_seam(&self.energy)
    }

    fn find_vertical_seam(&self) -> Vec<u32> {
        vertical_seam(&self.energy)
    }
}

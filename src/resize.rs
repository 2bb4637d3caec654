// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Resize - carve an image down to a target size
//!
//! All the vertical seams come out first, then all the horizontal
//! ones.  Seams are only ever removed, so both target dimensions have
//! to be smaller than the image's.

use crate::config::CarverConfig;
use crate::error::{Result, SeamError};
use crate::seamcarver::SeamCarver;
use crate::seamfinder::SeamFinder;
use image::RgbImage;
use log::info;
use std::time::Instant;

/// Given an image and a desired new width and height, repeatedly carve
/// seams out of the image.  Fails before carving anything unless both
/// `newwidth` and `newheight` are strictly less than the image's.
pub fn resize(
    image: &RgbImage,
    newwidth: u32,
    newheight: u32,
    config: CarverConfig,
) -> Result<RgbImage> {
    let (width, height) = image.dimensions();
    if newwidth >= width || newheight >= height {
        return Err(SeamError::InvalidTarget {
            width,
            height,
            target_width: newwidth,
            target_height: newheight,
        });
    }

    let started = Instant::now();
    let mut carver = SeamCarver::with_config(image.clone(), config)?;
    carve(&mut carver, newwidth, newheight)?;
    info!(
        "carved {}x{} down to {}x{} in {:.3} seconds",
        width,
        height,
        newwidth,
        newheight,
        started.elapsed().as_secs_f64()
    );
    Ok(carver.into_image())
}

/// Carve an existing session down to `newwidth` by `newheight`,
/// removing vertical seams first.  Dimensions already at or below
/// their target are left alone.
pub fn carve(carver: &mut SeamCarver, newwidth: u32, newheight: u32) -> Result<()> {
    while carver.width() > newwidth {
        let seam = carver.find_vertical_seam();
        carver.remove_vertical_seam(&seam)?;
    }
    while carver.height() > newheight {
        let seam = carver.find_horizontal_seam();
        carver.remove_horizontal_seam(&seam)?;
    }
    Ok(())
}

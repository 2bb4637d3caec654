// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use dualseam::{resize, CarverConfig, SeamCarver, SeamError, SeamFinder};
use image::{Rgb, RgbImage};
use std::collections::HashMap;

// Red and green record where each pixel started, so every pixel of a
// carved image can be traced back to the original.
fn labelled_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 25) as u8, (y * 20) as u8, ((x * 7 + y * 13) % 251) as u8])
    })
}

fn origins(image: &RgbImage) -> HashMap<[u8; 3], (u32, u32)> {
    image
        .enumerate_pixels()
        .map(|(x, y, pixel)| (pixel.0, (x, y)))
        .collect()
}

#[test]
fn ten_by_twelve_resizes_to_four_by_five() {
    let _ = env_logger::builder().is_test(true).try_init();
    let original = labelled_image(10, 12);
    let resized = resize(&original, 4, 5, CarverConfig::default()).unwrap();
    assert_eq!(resized.dimensions(), (4, 5));

    let origins = origins(&original);
    assert_eq!(origins.len(), 120);
    for x in 0..4 {
        let mut previous_row = None;
        for y in 0..5 {
            let &(_, row) = origins
                .get(&resized.get_pixel(x, y).0)
                .expect("every carved pixel comes from the original");
            // Horizontal seams never reorder a column.
            if let Some(previous) = previous_row {
                assert!(row > previous, "column {} is out of order", x);
            }
            previous_row = Some(row);
        }
    }
}

#[test]
fn vertical_carving_keeps_rows_in_order() {
    let original = labelled_image(10, 12);
    let origins = origins(&original);
    let mut carver = SeamCarver::new(original.clone()).unwrap();
    for _ in 0..6 {
        let seam = carver.find_vertical_seam();
        carver.remove_vertical_seam(&seam).unwrap();
    }
    let carved = carver.image();
    for y in 0..12 {
        let columns: Vec<u32> = (0..4)
            .map(|x| {
                let &(column, row) = origins.get(&carved.get_pixel(x, y).0).unwrap();
                assert_eq!(row, y);
                column
            })
            .collect();
        assert!(columns.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn invalid_targets_are_refused_up_front() {
    let original = labelled_image(10, 12);
    let err = resize(&original, 10, 11, CarverConfig::default()).unwrap_err();
    assert_eq!(
        err,
        SeamError::InvalidTarget {
            width: 10,
            height: 12,
            target_width: 10,
            target_height: 11
        }
    );
    assert!(err.to_string().contains("strictly smaller"));
}

#[test]
fn a_textured_stripe_survives_carving() {
    // A shaded vertical stripe in a flat field is the only thing worth
    // keeping; every vertical seam should go around it.
    let dark = Rgb([10, 10, 10]);
    let original = RgbImage::from_fn(12, 6, |x, y| {
        if x == 6 {
            Rgb([200, (y * 40) as u8, (255 - y * 40) as u8])
        } else {
            dark
        }
    });
    let resized = resize(&original, 6, 5, CarverConfig::default()).unwrap();
    for y in 0..5 {
        let shaded = (0..6).filter(|&x| resized.get_pixel(x, y) != &dark).count();
        assert_eq!(shaded, 1, "row {}", y);
    }
}

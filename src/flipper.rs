// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper
//!
//! A proxy for the ImageRS `GenericImageView` trait that maps the
//! width to the original height, and vice versa, as well as every x
//! to y and vice versa.
//!
//! Horizontal seams are carved by flipping the image, carving a
//! vertical seam, and flipping back, so that only one seam algorithm
//! has to exist.  The flipped image handed to the carver is always a
//! fresh buffer built through this view, never the view itself.

use image::{GenericImageView, ImageBuffer, Pixel, Primitive};

pub struct Flipper<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    pub image: &'a I,
}

impl<'a, I, P, S> GenericImageView for Flipper<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    type Pixel = P;
    type InnerImageView = I;

    fn dimensions(&self) -> (u32, u32) {
        let (x, y) = self.image.dimensions();
        (y, x)
    }

    fn width(&self) -> u32 {
        self.image.height()
    }

    fn height(&self) -> u32 {
        self.image.width()
    }

    fn get_pixel(&self, x: u32, y: u32) -> P {
        self.image.get_pixel(y, x)
    }

    fn inner(&self) -> &Self::InnerImageView {
        self.image
    }

    fn bounds(&self) -> (u32, u32, u32, u32) {
        let (x1, y1, x2, y2) = self.image.bounds();
        (y1, x1, y2, x2)
    }
}

/// Copy an image into a new buffer with its rows and columns
/// exchanged.
pub fn transpose<I, P, S>(image: &I) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let flipped = Flipper { image };
    let (width, height) = flipped.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| flipped.get_pixel(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn flipper_swaps_coordinates() {
        let image = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 0]));
        let view = Flipper { image: &image };
        assert_eq!(view.dimensions(), (2, 3));
        assert_eq!(view.get_pixel(1, 2), Rgb([2, 1, 0]));
    }

    #[test]
    fn transpose_is_a_deep_copy() {
        let mut image = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 9]));
        let flipped = transpose(&image);
        image.put_pixel(0, 0, Rgb([200, 200, 200]));
        assert_eq!(flipped.dimensions(), (2, 3));
        assert_eq!(*flipped.get_pixel(0, 0), Rgb([0, 0, 9]));
        assert_eq!(*flipped.get_pixel(1, 2), Rgb([2, 1, 9]));
        assert_eq!(transpose(&flipped).get_pixel(2, 1), image.get_pixel(2, 1));
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while carving.
//!
//! None of these are recoverable inside the carver: each one is
//! reported by the call that detected it, and the carver's image and
//! energy cache are left exactly as they were before that call.

use failure::Fail;

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum SeamError {
    #[fail(display = "cannot carve an empty {}x{} image", width, height)]
    EmptyImage { width: u32, height: u32 },

    #[fail(
        display = "pixel ({}, {}) lies outside the {}x{} image",
        col, row, width, height
    )]
    OutOfBounds {
        col: u32,
        row: u32,
        width: u32,
        height: u32,
    },

    #[fail(
        display = "cannot remove a seam across an image only {} pixel(s) wide",
        extent
    )]
    ExhaustedDimension { extent: u32 },

    #[fail(
        display = "seam has {} entries but the image needs {}",
        actual, expected
    )]
    SeamLength { expected: usize, actual: usize },

    #[fail(
        display = "seam entry {} is {}, outside 0..{}",
        position, value, limit
    )]
    SeamOutOfRange { position: usize, value: u32, limit: u32 },

    #[fail(
        display = "seam jumps by more than one pixel between entries {} and {}",
        _0, _1
    )]
    DisconnectedSeam(usize, usize),

    #[fail(
        display = "target {}x{} must be strictly smaller than {}x{} in both dimensions",
        target_width, target_height, width, height
    )]
    InvalidTarget {
        width: u32,
        height: u32,
        target_width: u32,
        target_height: u32,
    },
}

pub type Result<T> = std::result::Result<T, SeamError>;

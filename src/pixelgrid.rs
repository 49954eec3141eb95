// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid, and its conversions to and from the image crate.

use crate::colour::Colour;
use crate::twodmap::TwoDimensionalMap;
use image::{ImageBuffer, RgbaImage};

/// A rectangle of RGBA samples addressed by (x, y).
pub type PixelGrid = TwoDimensionalMap<Colour>;

impl TwoDimensionalMap<Colour> {
    /// A grid of `width` x `height` pixels all set to `colour`.
    pub fn filled(width: u32, height: u32, colour: Colour) -> Self {
        Self::from_fn(width, height, |_, _| colour)
    }

    pub fn from_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self::from_fn(width, height, |x, y| Colour::from(*image.get_pixel(x, y)))
    }

    /// Hand the grid to anything that can encode an `RgbaImage`.
    pub fn to_image(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.width(), self.height(), |x, y| self[(x, y)].into())
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The colour sample
//!
//! A single, fixed-layout RGBA value.  Every colour model the decoder
//! understands is converted to this once, at decode time; nothing
//! downstream ever has to ask what kind of colour it is holding.

use image::Rgba;

/// Four independent 8-bit channels.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Transparent black.  Indistinguishable, for the energy model,
    /// from the padding outside the grid.
    pub const TRANSPARENT: Colour = Colour::new(0, 0, 0, 0);

    /// The colour a marked seam is painted with.
    pub const MAGENTA: Colour = Colour::new(255, 0, 255, 255);

    pub const BLACK: Colour = Colour::new(0, 0, 0, 255);
    pub const WHITE: Colour = Colour::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Colour { r, g, b, a }
    }

    /// An opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b, a: 255 }
    }

    /// Summed channel distance between two colours, with alpha
    /// counting three times as much as any one colour channel.
    pub fn contrast(&self, other: &Colour) -> u32 {
        #[inline]
        fn d(l: u8, r: u8) -> u32 {
            (i32::from(l) - i32::from(r)).abs() as u32
        }

        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b) + 3 * d(self.a, other.a)
    }
}

impl From<Rgba<u8>> for Colour {
    fn from(p: Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Colour { r, g, b, a }
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(c: Colour) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contrast_weighs_alpha_three_times() {
        let a = Colour::new(10, 20, 30, 255);
        let b = Colour::new(20, 10, 30, 250);
        assert_eq!(a.contrast(&b), 10 + 10 + 0 + 15);
        assert_eq!(a.contrast(&b), b.contrast(&a));
    }

    #[test]
    fn converts_through_image_pixels() {
        let c = Colour::new(1, 2, 3, 4);
        let p: Rgba<u8> = c.into();
        assert_eq!(p, Rgba([1, 2, 3, 4]));
        assert_eq!(Colour::from(p), c);
    }
}

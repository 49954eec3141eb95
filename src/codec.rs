// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Decoding
//!
//! The image crate does the actual format work.  Whatever colour model
//! the source uses (palette, greyscale, 16-bit, YCbCr JPEG), it is
//! converted to 8-bit RGBA exactly once, here.

use crate::errors::Result;
use crate::pixelgrid::PixelGrid;
use log::debug;

/// Decode PNG, JPEG, or GIF bytes into a pixel grid.
pub fn decode(bytes: &[u8]) -> Result<PixelGrid> {
    let image = image::load_from_memory(bytes)?;
    debug!(
        "decoded a {}x{} {:?} image",
        image.width(),
        image.height(),
        image.color()
    );
    Ok(PixelGrid::from_image(&image.to_rgba8()))
}

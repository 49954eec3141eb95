// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the average contrast between it and the
//! distinct pixels around it, where contrast is the summed difference
//! of the colour channels plus three times the difference in alpha.
//! High energy marks pixels that stand out from their surroundings,
//! which the seam search treats as expensive to pass through.
//!
//! A neighbor that is exactly transparent black is skipped, just like
//! the padding outside the grid, because the two cannot be told apart
//! in the window.  Energy is never cached; the seam search asks for it
//! as it goes.

use crate::colour::Colour;
use crate::errors::{Error, Result};
use crate::pixelgrid::PixelGrid;
use crate::twodmap::TwoDimensionalMap;
use crate::window::KernelWindow;
use image::{GrayImage, ImageBuffer, Luma};
use num_traits::clamp;

/// The energy of the pixel at (x, y).
pub fn energy_of(grid: &PixelGrid, x: u32, y: u32) -> Result<f64> {
    grid.ensure_not_empty()?;
    if !grid.contains(x, y) {
        return Err(Error::OutOfBounds {
            x,
            y,
            width: grid.width(),
            height: grid.height(),
        });
    }
    Ok(pixel_energy(grid, x, y))
}

// Callers guarantee (x, y) is inside the grid.
pub(crate) fn pixel_energy(grid: &PixelGrid, x: u32, y: u32) -> f64 {
    let window = KernelWindow::extract(grid, x, y, 1);
    let centre = grid[(x, y)];

    let (total, count) = window
        .cells()
        .filter(|(i, j, _)| !(*i == 1 && *j == 1))
        .filter_map(|(_, _, cell)| cell)
        .filter(|colour| *colour != Colour::TRANSPARENT)
        .fold((0u32, 0u32), |(total, count), colour| {
            (total + centre.contrast(&colour), count + 1)
        });

    if count == 0 {
        0.0
    } else {
        f64::from(total) / f64::from(count)
    }
}

/// The energy of every pixel in the grid.
pub fn energy_map(grid: &PixelGrid) -> Result<TwoDimensionalMap<f64>> {
    grid.ensure_not_empty()?;
    Ok(TwoDimensionalMap::from_fn(grid.width(), grid.height(), |x, y| {
        pixel_energy(grid, x, y)
    }))
}

/// Render an energy map as a greyscale image, brightest where the
/// energy is highest.  A map with no energy anywhere renders black.
pub fn energy_to_image(energy: &TwoDimensionalMap<f64>) -> GrayImage {
    let factor = energy.as_slice().iter().cloned().fold(0.0, f64::max);
    ImageBuffer::from_fn(energy.width(), energy.height(), |x, y| {
        if factor <= 0.0 {
            return Luma([0]);
        }
        let scaled = clamp(energy[(x, y)] * 255.0 / factor, 0.0, 255.0);
        Luma([num_traits::cast(scaled.round()).unwrap_or(0)])
    })
}

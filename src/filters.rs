// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Named kernel presets
//!
//! The presets are data, not behavior: each one is a constant matrix
//! handed to the convolution routine.

use crate::convolution::{convolve, convolve_with, Uniform, WeightFunction};
use crate::errors::{Error, Result};
use crate::kernel::Kernel;
use crate::pixelgrid::PixelGrid;
use std::fmt;
use std::str::FromStr;

pub const IDENTITY: [[i32; 3]; 3] = [[0, 0, 0], [0, 1, 0], [0, 0, 0]];
pub const SHARPEN: [[i32; 3]; 3] = [[0, -1, 0], [-1, 5, -1], [0, -1, 0]];
pub const EDGE_DETECT: [[i32; 3]; 3] = [[0, 1, 0], [1, -4, 1], [0, 1, 0]];
pub const EMBOSS: [[i32; 3]; 3] = [[-2, -1, 0], [-1, 1, 1], [0, 1, 2]];
pub const GAUSSIAN: [[i32; 3]; 3] = [[1, 2, 1], [2, 4, 2], [1, 2, 1]];
pub const AVERAGE_BLUR: [[i32; 3]; 3] = [[1, 1, 1], [1, 1, 1], [1, 1, 1]];
pub const RELIEF: [[i32; 3]; 3] = [[2, 1, 0], [1, 1, -1], [0, -1, -2]];
pub const STREAK: [[i32; 7]; 7] = [
    [4, 4, 4, 0, 0, 0, 0],
    [4, 2, 2, 0, 0, 0, 0],
    [4, 2, 1, 0, 0, 0, 0],
    [4, 2, 1, 0, -1, -2, -4],
    [0, 0, 0, 0, -1, -2, -4],
    [0, 0, 0, 0, -2, -2, -4],
    [0, 0, 0, 0, -4, -4, -4],
];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Filter {
    Identity,
    Sharpen,
    EdgeDetect,
    Emboss,
    Gaussian,
    AverageBlur,
    Relief,
    Streak,
}

impl Filter {
    /// Every preset, in the order `pixelseam filters` lists them.
    pub const ALL: [Filter; 8] = [
        Filter::Identity,
        Filter::Sharpen,
        Filter::EdgeDetect,
        Filter::Emboss,
        Filter::Gaussian,
        Filter::AverageBlur,
        Filter::Relief,
        Filter::Streak,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Filter::Identity => "identity",
            Filter::Sharpen => "sharpen",
            Filter::EdgeDetect => "edge-detect",
            Filter::Emboss => "emboss",
            Filter::Gaussian => "gaussian",
            Filter::AverageBlur => "blur",
            Filter::Relief => "relief",
            Filter::Streak => "streak",
        }
    }

    pub fn kernel(self) -> Kernel {
        match self {
            Filter::Identity => Kernel::from_square(&IDENTITY),
            Filter::Sharpen => Kernel::from_square(&SHARPEN),
            Filter::EdgeDetect => Kernel::from_square(&EDGE_DETECT),
            Filter::Emboss => Kernel::from_square(&EMBOSS),
            Filter::Gaussian => Kernel::from_square(&GAUSSIAN),
            Filter::AverageBlur => Kernel::from_square(&AVERAGE_BLUR),
            Filter::Relief => Kernel::from_square(&RELIEF),
            Filter::Streak => Kernel::from_square(&STREAK),
        }
    }

    pub fn apply(self, grid: &PixelGrid) -> Result<PixelGrid> {
        convolve(grid, &self.kernel())
    }
}

/// An average blur over a (2 * radius + 1) square.  Radius 1 is the
/// same as `Filter::AverageBlur`.
///
/// A radius of `max(width, height) - 1` already reaches every pixel from
/// every other, so anything wider is refused.
pub fn box_blur(grid: &PixelGrid, radius: u32) -> Result<PixelGrid> {
    box_blur_with(grid, radius, &Uniform)
}

/// `box_blur`, with each sample's weight scaled by `weight_fn`.
pub fn box_blur_with<W>(grid: &PixelGrid, radius: u32, weight_fn: &W) -> Result<PixelGrid>
where
    W: WeightFunction + ?Sized,
{
    grid.ensure_not_empty()?;
    let reach = grid.width().max(grid.height()) - 1;
    if radius > reach {
        return Err(Error::Configuration {
            reason: format!(
                "blur radius {} is wider than a {}x{} grid needs (at most {})",
                radius,
                grid.width(),
                grid.height(),
                reach
            ),
        });
    }
    convolve_with(grid, &Kernel::ones(radius)?, weight_fn)
}

impl FromStr for Filter {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Filter::ALL
            .iter()
            .copied()
            .find(|f| f.name() == name)
            .ok_or_else(|| Error::UnknownFilter {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The kernel window
//!
//! A square snapshot of the neighborhood around a pixel.  The window
//! is always (2k+1) on a side, no matter where the pixel sits; cells
//! that fall off the edge of the grid are `None`, which is not the same
//! thing as a black or transparent pixel.  That uniform shape is what
//! lets the convolution and the energy model treat edge pixels exactly
//! like interior ones.

use crate::colour::Colour;
use crate::cq;
use crate::pixelgrid::PixelGrid;

#[derive(Debug, Clone, PartialEq)]
pub struct KernelWindow {
    radius: u32,
    side: usize,
    // i-major: cells[i * side + j] is the sample at offset (i - k, j - k).
    cells: Vec<Option<Colour>>,
}

impl KernelWindow {
    /// Snapshot the (2k+1)-square neighborhood centred on (x, y).
    pub fn extract(grid: &PixelGrid, x: u32, y: u32, k: u32) -> Self {
        let side = 2 * k as usize + 1;
        let (x, y, k) = (i64::from(x), i64::from(y), i64::from(k));
        let (width, height) = (i64::from(grid.width()), i64::from(grid.height()));

        let mut cells = Vec::with_capacity(side * side);
        for sx in (x - k)..=(x + k) {
            for sy in (y - k)..=(y + k) {
                let inside = sx >= 0 && sx < width && sy >= 0 && sy < height;
                cells.push(cq!(inside, Some(grid[(sx as u32, sy as u32)]), None));
            }
        }

        KernelWindow {
            radius: k as u32,
            side,
            cells,
        }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// The cell at window position (i, j).  `(k, k)` is the centre.
    pub fn get(&self, i: usize, j: usize) -> Option<Colour> {
        self.cells[i * self.side + j]
    }

    pub fn centre(&self) -> Option<Colour> {
        let k = self.radius as usize;
        self.get(k, k)
    }

    /// Euclidean distance of window position (i, j) from the centre.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        let k = self.radius as f64;
        let (di, dj) = (k - i as f64, k - j as f64);
        (di * di + dj * dj).sqrt()
    }

    /// Every cell with its window position, i-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Option<Colour>)> + '_ {
        let side = self.side;
        self.cells
            .iter()
            .enumerate()
            .map(move |(n, c)| (n / side, n % side, *c))
    }
}

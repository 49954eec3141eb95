// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The exhaustive horizontal seam
//!
//! The classic cumulative-cost table: every cell records the cheapest
//! total energy of any seam that reaches it from the left edge, and
//! the row it came from.  Walking the back pointers from the cheapest
//! cell in the last column yields the globally cheapest seam.  It uses
//! the same energy model and the same moves as the lookahead search,
//! so it is the floor the lookahead seam can be measured against.

use crate::energy::energy_map;
use crate::errors::{Error, Result};
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::{Path, Point, Seam, SeamFinder};
use crate::twodmap::{EnergyAndBackPointer, TwoDimensionalMap};
use log::debug;

type CostMap = TwoDimensionalMap<EnergyAndBackPointer<f64>>;

// For every subsequent column, each cell holds its own energy plus the
// *lowest adjacent cost in the column to its left*, and the row that
// cost came from.  Candidates are tried in move order (same row, the
// row above, the row below) and the first minimum wins.
fn calculate_cost(energy: &TwoDimensionalMap<f64>) -> CostMap {
    let (width, height) = energy.dimensions();
    let mut target = CostMap::new(width, height);

    for y in 0..height {
        target[(0, y)].energy = energy[(0, y)];
    }

    for x in 1..width {
        for y in 0..height {
            let mut parents = vec![y];
            if y > 0 {
                parents.push(y - 1);
            }
            if y + 1 < height {
                parents.push(y + 1);
            }
            let parent = parents
                .into_iter()
                .min_by(|a, b| {
                    target[(x - 1, *a)]
                        .energy
                        .total_cmp(&target[(x - 1, *b)].energy)
                })
                .unwrap_or(y);
            target[(x, y)] = EnergyAndBackPointer {
                energy: target[(x - 1, parent)].energy + energy[(x, y)],
                parent,
            };
        }
    }
    target
}

/// Finds the cheapest seam there is, at the cost of a full table.
#[derive(Debug, Clone)]
pub struct OptimalSeamFinder<'a> {
    grid: &'a PixelGrid,
}

impl<'a> OptimalSeamFinder<'a> {
    pub fn new(grid: &'a PixelGrid) -> Result<Self> {
        grid.ensure_not_empty()?;
        Ok(OptimalSeamFinder { grid })
    }
}

impl<'a> SeamFinder for OptimalSeamFinder<'a> {
    fn find_horizontal_seam(&self) -> Result<Seam> {
        let cost = calculate_cost(&energy_map(self.grid)?);
        let (width, height) = cost.dimensions();
        let last = width - 1;

        // Find the row of the rightmost cell with the least energy.
        let mut seam_row = (0..height)
            .min_by(|a, b| cost[(last, *a)].energy.total_cmp(&cost[(last, *b)].energy))
            .ok_or(Error::EmptyGrid)?;
        debug!("cheapest seam costs {}", cost[(last, seam_row)].energy);

        // Working backwards, collect the rows, then reverse them.
        let rows: Vec<u32> = (0..width)
            .rev()
            .fold(Vec::with_capacity(width as usize), |mut acc, x| {
                acc.push(seam_row);
                seam_row = cost[(x, seam_row)].parent;
                acc
            })
            .into_iter()
            .rev()
            .collect();

        let mut seam = Path::new(Point::new(0, rows[0]));
        for (x, y) in rows.iter().enumerate().skip(1) {
            seam.push(Point::new(x as u32, *y));
        }
        Ok(seam)
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! Find a horizontal seam and paint it magenta.  The seam is marked,
//! not removed: the carved grid is the same size as the original.

use crate::colour::Colour;
use crate::errors::Result;
use crate::lookahead::{check_depth, LookaheadSeamFinder};
use crate::optimal::OptimalSeamFinder;
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::{Seam, SeamFinder};
use log::debug;

/// Which search picks the seams.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Finder {
    /// The bounded lookahead heuristic.
    Lookahead,
    /// The full cumulative-cost table.
    Optimal,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CarveOptions {
    /// Steps the lookahead search explores before committing.
    pub lookahead: u32,
    /// How many seams to mark, one after the other.
    pub seams: u32,
    pub finder: Finder,
}

impl Default for CarveOptions {
    fn default() -> Self {
        CarveOptions {
            lookahead: 3,
            seams: 1,
            finder: Finder::Lookahead,
        }
    }
}

/// A copy of `grid` with every point of `seam` painted magenta.
pub fn mark_seam(grid: &PixelGrid, seam: &Seam) -> Result<PixelGrid> {
    let mut marked = grid.clone();
    for p in seam.points() {
        marked.set(p.x, p.y, Colour::MAGENTA)?;
    }
    Ok(marked)
}

/// The grid after carving, and the seams that were marked on it, in
/// the order they were found.
#[derive(Debug, Clone)]
pub struct Carved {
    pub grid: PixelGrid,
    pub seams: Vec<Seam>,
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a> {
    grid: &'a PixelGrid,
    options: CarveOptions,
}

impl<'a> SeamCarver<'a> {
    pub fn new(grid: &'a PixelGrid, options: CarveOptions) -> Self {
        SeamCarver { grid, options }
    }

    /// Mark `options.seams` seams.  Each search runs on the grid as
    /// already marked, so later seams route around earlier ones.
    pub fn carve(&self) -> Result<Carved> {
        self.grid.ensure_not_empty()?;
        if self.options.finder == Finder::Lookahead {
            check_depth(self.options.lookahead)?;
        }

        let mut scratch = self.grid.clone();
        let mut seams = Vec::with_capacity(self.options.seams as usize);
        for n in 0..self.options.seams {
            let seam = self.find(&scratch)?;
            debug!("seam {} runs through rows {:?}", n, seam.rows());
            scratch = mark_seam(&scratch, &seam)?;
            seams.push(seam);
        }
        Ok(Carved {
            grid: scratch,
            seams,
        })
    }

    fn find(&self, grid: &PixelGrid) -> Result<Seam> {
        match self.options.finder {
            Finder::Lookahead => {
                LookaheadSeamFinder::new(grid, self.options.lookahead)?.find_horizontal_seam()
            }
            Finder::Optimal => OptimalSeamFinder::new(grid)?.find_horizontal_seam(),
        }
    }
}

/// Mark one seam found with a lookahead of `depth`.
pub fn seamcarve(grid: &PixelGrid, depth: u32) -> Result<PixelGrid> {
    let options = CarveOptions {
        lookahead: depth,
        ..CarveOptions::default()
    };
    Ok(SeamCarver::new(grid, options).carve()?.grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::seamfinder::{Path, Point};

    fn dotted() -> PixelGrid {
        let mut grid = PixelGrid::filled(4, 4, Colour::WHITE);
        grid[(2, 2)] = Colour::BLACK;
        grid
    }

    #[test]
    fn marking_paints_only_the_seam() {
        let grid = dotted();
        let marked = seamcarve(&grid, 2).unwrap();
        assert_eq!(marked.dimensions(), grid.dimensions());
        for y in 0..4 {
            for x in 0..4 {
                let expected = if y == 0 { Colour::MAGENTA } else { grid[(x, y)] };
                assert_eq!(marked[(x, y)], expected);
            }
        }
    }

    #[test]
    fn marking_outside_the_grid_fails() {
        let grid = dotted();
        let seam = Path::new(Point::new(0, 4));
        assert!(matches!(
            mark_seam(&grid, &seam),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn later_seams_avoid_earlier_ones() {
        let grid = PixelGrid::filled(6, 5, Colour::rgb(40, 80, 120));
        let carved = SeamCarver::new(
            &grid,
            CarveOptions {
                seams: 3,
                ..CarveOptions::default()
            },
        )
        .carve()
        .unwrap();
        assert_eq!(carved.seams.len(), 3);
        assert_ne!(carved.seams[0], carved.seams[1]);
        assert_ne!(carved.seams[1], carved.seams[2]);
        for seam in &carved.seams {
            assert!(seam.is_connected_in(&grid));
            for p in seam.points() {
                assert_eq!(carved.grid[(p.x, p.y)], Colour::MAGENTA);
            }
        }
    }

    #[test]
    fn both_finders_agree_on_an_obvious_seam() {
        let grid = dotted();
        for finder in &[Finder::Lookahead, Finder::Optimal] {
            let options = CarveOptions {
                lookahead: 2,
                finder: *finder,
                ..CarveOptions::default()
            };
            let carved = SeamCarver::new(&grid, options).carve().unwrap();
            assert_eq!(carved.seams[0].rows(), vec![0, 0, 0, 0]);
        }
    }

    #[test]
    fn a_zero_lookahead_is_refused_up_front() {
        let grid = dotted();
        let options = CarveOptions {
            lookahead: 0,
            ..CarveOptions::default()
        };
        assert!(matches!(
            SeamCarver::new(&grid, options).carve(),
            Err(Error::InvalidLookahead { depth: 0, .. })
        ));
        let deep = CarveOptions {
            lookahead: 25,
            ..CarveOptions::default()
        };
        assert!(matches!(
            SeamCarver::new(&grid, deep).carve(),
            Err(Error::InvalidLookahead { depth: 25, .. })
        ));
    }
}

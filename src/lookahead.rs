// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Bounded lookahead seam search
//!
//! Rather than build the full cumulative cost table, this search looks
//! a fixed number of steps ahead of the seam it has so far, scores
//! every reachable continuation by its total energy, and commits to
//! the cheapest one.  The number of continuations is 3^depth, so the
//! depth has to stay small.
//!
//! 1. From every row of the first column, look `depth` steps ahead and
//!    keep that row's cheapest path.
//! 2. The cheapest of those is the start of the seam.
//! 3. Until the seam reaches the right edge, look `depth` steps ahead
//!    of its end (fewer near the edge) and replace it with the
//!    cheapest continuation.
//!
//! Ties always go to the first candidate in enumeration order: right
//! before diagonally up before diagonally down, lower rows first.

use crate::cq;
use crate::energy::pixel_energy;
use crate::errors::{Error, Result};
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::{Path, Point, Seam, SeamFinder};
use log::{debug, trace};

/// The deepest lookahead accepted.  Each starting row already weighs
/// hundreds of thousands of candidates at this depth.
pub const MAX_LOOKAHEAD: u32 = 12;

/// Refuse depths the search cannot make progress with, or cannot
/// finish in reasonable time.
pub fn check_depth(depth: u32) -> Result<()> {
    if depth == 0 || depth > MAX_LOOKAHEAD {
        return Err(Error::InvalidLookahead {
            depth,
            max: MAX_LOOKAHEAD,
        });
    }
    Ok(())
}

/// The legal next points after `p`: right, diagonally up, diagonally
/// down, in that order, each only if it is inside the grid.
pub fn next_points(grid: &PixelGrid, p: Point) -> Vec<Point> {
    let x = p.x + 1;
    if x >= grid.width() {
        return vec![];
    }
    let mut moves = Vec::with_capacity(3);
    moves.push(Point::new(x, p.y));
    if p.y > 0 {
        moves.push(Point::new(x, p.y - 1));
    }
    if p.y + 1 < grid.height() {
        moves.push(Point::new(x, p.y + 1));
    }
    moves
}

/// Every path reachable from `path` by `depth` further legal steps.  A
/// path that runs out of moves early is carried along as it is.
///
/// The frontier is grown one step at a time from a work list, so the
/// depth costs no stack.
pub fn expand(grid: &PixelGrid, path: &Path, depth: u32) -> Vec<Path> {
    let mut frontier = vec![path.clone()];
    for _ in 0..depth {
        let mut next = Vec::with_capacity(frontier.len() * 3);
        for candidate in frontier {
            let moves = next_points(grid, candidate.last());
            if moves.is_empty() {
                next.push(candidate);
                continue;
            }
            next.extend(moves.into_iter().map(|p| candidate.extended(p)));
        }
        frontier = next;
    }
    frontier
}

/// The cheapest path, with its energy.  `None` only for an empty list.
pub fn pick_best(grid: &PixelGrid, paths: Vec<Path>) -> Option<(Path, f64)> {
    pick_best_after(grid, paths, 0, 0.0)
}

// Every candidate shares the same first `prefix_len` points, whose
// energy has already been summed left to right into `prefix_energy`.
// Continuing that same left-to-right sum gives exactly the total a
// fresh sum over the whole path would.
fn pick_best_after(
    grid: &PixelGrid,
    paths: Vec<Path>,
    prefix_len: usize,
    prefix_energy: f64,
) -> Option<(Path, f64)> {
    paths
        .into_iter()
        .map(|path| {
            let energy = path.points()[prefix_len..]
                .iter()
                .fold(prefix_energy, |total, p| total + pixel_energy(grid, p.x, p.y));
            trace!("candidate {:?} costs {}", path.rows(), energy);
            (path, energy)
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// The lookahead seam finder.
#[derive(Debug, Clone)]
pub struct LookaheadSeamFinder<'a> {
    grid: &'a PixelGrid,
    depth: u32,
}

impl<'a> LookaheadSeamFinder<'a> {
    /// A finder that looks `depth` steps ahead.  `depth` must be
    /// between 1 and `MAX_LOOKAHEAD`.
    pub fn new(grid: &'a PixelGrid, depth: u32) -> Result<Self> {
        grid.ensure_not_empty()?;
        check_depth(depth)?;
        Ok(LookaheadSeamFinder { grid, depth })
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    fn best_from_row(&self, y: u32, depth: u32) -> Option<(Path, f64)> {
        let start = Path::new(Point::new(0, y));
        pick_best(self.grid, expand(self.grid, &start, depth))
    }

    #[cfg(not(feature = "threaded"))]
    fn best_starts(&self, depth: u32) -> Vec<(Path, f64)> {
        (0..self.grid.height())
            .filter_map(|y| self.best_from_row(y, depth))
            .collect()
    }

    // Each starting row is independent; bands of rows are searched on
    // their own threads and the results rejoined in row order.
    #[cfg(feature = "threaded")]
    fn best_starts(&self, depth: u32) -> Vec<(Path, f64)> {
        use std::panic::resume_unwind;

        let rows: Vec<u32> = (0..self.grid.height()).collect();
        let band = ((rows.len() + num_cpus::get() - 1) / num_cpus::get()).max(1);
        crossbeam::scope(|scope| {
            let handles: Vec<_> = rows
                .chunks(band)
                .map(|chunk| {
                    scope.spawn(move |_| {
                        chunk
                            .iter()
                            .filter_map(|y| self.best_from_row(*y, depth))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap_or_else(|panic| resume_unwind(panic)))
                .collect::<Vec<_>>()
        })
        .unwrap_or_else(|panic| resume_unwind(panic))
    }
}

impl<'a> SeamFinder for LookaheadSeamFinder<'a> {
    fn find_horizontal_seam(&self) -> Result<Seam> {
        let width = self.grid.width();
        let first = cq!(self.depth < width, self.depth, width - 1);

        let (mut seam, mut energy) = self
            .best_starts(first)
            .into_iter()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .ok_or(Error::EmptyGrid)?;
        debug!("seam starts at row {} with energy {}", seam.points()[0].y, energy);

        while (seam.len() as u32) < width {
            let remaining = width - seam.len() as u32;
            let depth = cq!(self.depth < remaining, self.depth, remaining);
            let candidates = expand(self.grid, &seam, depth);
            let (next, next_energy) = pick_best_after(self.grid, candidates, seam.len(), energy)
                .ok_or(Error::EmptyGrid)?;
            seam = next;
            energy = next_energy;
            debug!("seam reaches column {} with energy {}", seam.last().x, energy);
        }

        Ok(seam)
    }
}

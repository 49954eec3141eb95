// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seams, and the trait for finding them
//!
//! A seam runs left to right across the grid, one pixel per column,
//! and each step moves right, diagonally up, or diagonally down.

use crate::energy::energy_of;
use crate::errors::Result;
use crate::pixelgrid::PixelGrid;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Point { x, y }
    }
}

/// A connected run of points.  Paths only ever grow at the right end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    points: Vec<Point>,
}

/// A path that spans the full width of its grid.
pub type Seam = Path;

impl Path {
    pub fn new(start: Point) -> Self {
        Path {
            points: vec![start],
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    // Never true: a path starts with one point and only grows.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// A copy of this path with one more point on the end.
    pub fn extended(&self, point: Point) -> Self {
        let mut next = Path {
            points: Vec::with_capacity(self.points.len() + 1),
        };
        next.points.extend_from_slice(&self.points);
        next.points.push(point);
        next
    }

    /// The y coordinate of each point, left to right.
    pub fn rows(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// True when every point is inside `grid` and every step is
    /// (+1, -1..=1).
    pub fn is_connected_in(&self, grid: &PixelGrid) -> bool {
        self.points.iter().all(|p| grid.contains(p.x, p.y))
            && self.points.windows(2).all(|pair| {
                pair[1].x == pair[0].x + 1
                    && (i64::from(pair[1].y) - i64::from(pair[0].y)).abs() <= 1
            })
    }
}

/// The summed energy of every point on the path.
pub fn path_energy(grid: &PixelGrid, path: &Path) -> Result<f64> {
    path.points()
        .iter()
        .try_fold(0.0, |total, p| Ok(total + energy_of(grid, p.x, p.y)?))
}

/// Anything that can pick the next horizontal seam out of a grid.
pub trait SeamFinder {
    fn find_horizontal_seam(&self) -> Result<Seam>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;

    #[test]
    fn extended_paths_leave_the_original_alone() {
        let start = Path::new(Point::new(0, 1));
        let longer = start.extended(Point::new(1, 2));
        assert_eq!(start.len(), 1);
        assert_eq!(longer.rows(), vec![1, 2]);
        assert_eq!(longer.last(), Point::new(1, 2));
    }

    #[test]
    fn connectivity_checks_each_step() {
        let grid = PixelGrid::filled(3, 3, Colour::WHITE);
        let mut path = Path::new(Point::new(0, 0));
        path.push(Point::new(1, 1));
        path.push(Point::new(2, 2));
        assert!(path.is_connected_in(&grid));

        let jump = Path::new(Point::new(0, 0)).extended(Point::new(1, 2));
        assert!(!jump.is_connected_in(&grid));
        let outside = Path::new(Point::new(0, 2)).extended(Point::new(1, 3));
        assert!(!outside.is_connected_in(&grid));
    }

    #[test]
    fn path_energy_sums_the_points() {
        let mut grid = PixelGrid::filled(3, 1, Colour::WHITE);
        grid[(2, 0)] = Colour::BLACK;
        let path = Path::new(Point::new(0, 0))
            .extended(Point::new(1, 0))
            .extended(Point::new(2, 0));
        // (1, 0) sees one black neighbor out of two, (2, 0) one white.
        assert_eq!(path_energy(&grid, &path).unwrap(), 0.0 + 382.5 + 765.0);
    }
}

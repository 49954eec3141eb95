// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The two-dimensional field
//!
//! An addressable, rectangular field of values: colours for a pixel
//! grid, `f64` for an energy map, or energy plus back pointer for the
//! seam cost table.  The storage is a single vector, so every row has
//! the same length by construction.

use crate::errors::{Error, Result};
use itertools::iproduct;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A new field with every cell at its default value.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// A new field whose cells are produced by `f(x, y)`, visited in
    /// storage order.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        TwoDimensionalMap {
            width,
            height,
            data: iproduct!(0..height, 0..width).map(|(y, x)| f(x, y)).collect(),
        }
    }

    /// Build a field from columns, so that `columns[x][y]` becomes the
    /// cell at (x, y).  Every column must be the same, non-zero,
    /// length.
    pub fn from_columns(columns: &[Vec<P>]) -> Result<Self> {
        let height = columns.first().map(Vec::len).unwrap_or(0);
        if height == 0 {
            return Err(Error::EmptyGrid);
        }
        if let Some((column, found)) = columns
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != height)
        {
            return Err(Error::RaggedGrid {
                column,
                expected: height,
                found,
            });
        }
        let width = columns.len() as u32;
        Ok(Self::from_fn(width, height as u32, |x, y| {
            columns[x as usize][y as usize]
        }))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Fails with `EmptyGrid` for a field with no cells.
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(Error::EmptyGrid)
        } else {
            Ok(())
        }
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Checked read.
    pub fn get(&self, x: u32, y: u32) -> Result<P> {
        self.check(x, y)?;
        Ok(self[(x, y)])
    }

    /// Checked write.
    pub fn set(&mut self, x: u32, y: u32, value: P) -> Result<()> {
        self.check(x, y)?;
        self[(x, y)] = value;
        Ok(())
    }

    /// The raw cells, one row after another.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    /// Mutable rows, top to bottom.  Each row is a disjoint slice, so
    /// rows can be handed to different threads.
    pub fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, P> {
        let width = (self.width as usize).max(1);
        self.data.chunks_mut(width)
    }

    fn check(&self, x: u32, y: u32) -> Result<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    // Keep the index math in exactly one place.  Row-major, the same
    // layout the image crate uses, so conversion is a straight copy.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// Unchecked addressing, for loops that have already bounded their
    /// coordinates.  Panics outside the field.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

/// A cost table cell: the cheapest cumulative energy to reach a cell,
/// and the row of the cell it was reached from.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub(crate) struct EnergyAndBackPointer<E: Default + Copy> {
    pub energy: E,
    pub parent: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_visits_every_cell() {
        let map = TwoDimensionalMap::from_fn(3, 2, |x, y| x + 10 * y);
        assert_eq!(map.as_slice(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(map[(2, 1)], 12);
    }

    #[test]
    fn checked_access_reports_bounds() {
        let mut map: TwoDimensionalMap<u8> = TwoDimensionalMap::new(2, 2);
        assert!(map.set(1, 1, 7).is_ok());
        assert_eq!(map.get(1, 1).unwrap(), 7);
        match map.get(2, 0) {
            Err(Error::OutOfBounds { x: 2, y: 0, width: 2, height: 2 }) => {}
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
        assert!(map.set(0, 5, 1).is_err());
    }

    #[test]
    fn columns_become_x_coordinates() {
        let map = TwoDimensionalMap::from_columns(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(map.dimensions(), (2, 3));
        assert_eq!(map[(1, 0)], 4);
        assert_eq!(map[(0, 2)], 3);
    }

    #[test]
    fn ragged_columns_are_rejected() {
        match TwoDimensionalMap::from_columns(&[vec![1, 2], vec![3]]) {
            Err(Error::RaggedGrid { column: 1, expected: 2, found: 1 }) => {}
            other => panic!("expected RaggedGrid, got {:?}", other),
        }
        let empty: Vec<Vec<u8>> = vec![];
        assert!(matches!(
            TwoDimensionalMap::from_columns(&empty),
            Err(Error::EmptyGrid)
        ));
    }

    #[test]
    fn zero_area_is_empty() {
        let map: TwoDimensionalMap<u8> = TwoDimensionalMap::new(0, 4);
        assert!(map.is_empty());
        assert!(map.ensure_not_empty().is_err());
    }
}

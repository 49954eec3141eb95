// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Convolution kernels
//!
//! A kernel must be square with an odd side, so that the pixel being
//! rewritten sits exactly in the middle.  Anything else is a
//! configuration error, reported before a single pixel is touched.

use crate::errors::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    side: usize,
    // i-major, matching the window layout.
    weights: Vec<i32>,
}

impl Kernel {
    /// Build a kernel from its rows.  `rows[i][j]` weighs the sample at
    /// offset (i - k, j - k) from the target pixel.
    pub fn new<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self> {
        let side = rows.len();
        if side == 0 {
            return Err(Error::Configuration {
                reason: "the kernel has no rows".to_string(),
            });
        }
        if let Some(row) = rows.iter().find(|row| row.as_ref().len() != side) {
            return Err(Error::Configuration {
                reason: format!(
                    "the kernel is not square: {} rows, but a row of {}",
                    side,
                    row.as_ref().len()
                ),
            });
        }
        if side % 2 == 0 {
            return Err(Error::Configuration {
                reason: format!("the kernel side must be odd, got {}", side),
            });
        }
        Ok(Kernel {
            side,
            weights: rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect(),
        })
    }

    /// A kernel from a fixed-size square array.  Squareness is given by
    /// the type; an even `N` is caught by `validate` when the kernel is
    /// applied.
    pub fn from_square<const N: usize>(rows: &[[i32; N]; N]) -> Self {
        Kernel {
            side: N,
            weights: rows.iter().flat_map(|r| r.iter().copied()).collect(),
        }
    }

    /// A kernel of side `2 * radius + 1` in which every weight is 1.
    pub fn ones(radius: u32) -> Result<Self> {
        let too_large = || Error::Configuration {
            reason: format!("a kernel of radius {} is too large", radius),
        };
        let side = (radius as usize)
            .checked_mul(2)
            .and_then(|d| d.checked_add(1))
            .ok_or_else(too_large)?;
        let cells = side.checked_mul(side).ok_or_else(too_large)?;
        Ok(Kernel {
            side,
            weights: vec![1; cells],
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// k, for a kernel of side 2k+1.
    pub fn radius(&self) -> u32 {
        ((self.side - 1) / 2) as u32
    }

    pub fn at(&self, i: usize, j: usize) -> i32 {
        self.weights[i * self.side + j]
    }

    pub fn sum(&self) -> i64 {
        self.weights.iter().map(|w| i64::from(*w)).sum()
    }

    /// Re-check the shape invariant.  `new` already enforces it, but
    /// the convolution refuses to run without asking again.
    pub fn validate(&self) -> Result<()> {
        if self.side % 2 == 1 && self.weights.len() == self.side * self.side {
            Ok(())
        } else {
            Err(Error::Configuration {
                reason: format!(
                    "{} weights do not form an odd square of side {}",
                    self.weights.len(),
                    self.side
                ),
            })
        }
    }
}

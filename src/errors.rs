// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors
//!
//! Every failure in this crate is terminal: there is no partial output
//! and nothing is retried.  Out-of-bounds reads inside the operators
//! are prevented by the window padding, so `OutOfBounds` only ever
//! reaches a caller through direct grid access.

use failure::Fail;

/// All the ways an operation on a pixel grid can fail.
#[derive(Debug, Fail)]
pub enum Error {
    /// The convolution kernel is not square or does not have an odd
    /// side.
    #[fail(display = "malformed convolution kernel: {}", reason)]
    Configuration { reason: String },

    #[fail(
        display = "coordinate ({}, {}) is outside a {}x{} grid",
        x, y, width, height
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[fail(display = "the pixel grid has no pixels")]
    EmptyGrid,

    /// Column-major input in which one column is a different length
    /// than the first.
    #[fail(
        display = "column {} has {} pixels, expected {}",
        column, found, expected
    )]
    RaggedGrid {
        column: usize,
        expected: usize,
        found: usize,
    },

    /// The search enumerates 3^depth continuations, so the depth is
    /// held to a small range.
    #[fail(
        display = "seam lookahead depth must be between 1 and {}, got {}",
        max, depth
    )]
    InvalidLookahead { depth: u32, max: u32 },

    /// A command-line value that could not be understood.
    #[fail(display = "invalid argument: {}", reason)]
    Argument { reason: String },

    #[fail(display = "no filter named '{}'", name)]
    UnknownFilter { name: String },

    #[fail(display = "could not decode image: {}", _0)]
    Decode(#[cause] image::ImageError),

    #[fail(display = "could not encode image: {}", _0)]
    Encode(#[cause] image::ImageError),

    #[fail(display = "i/o error: {}", _0)]
    Io(#[cause] std::io::Error),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Decode(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

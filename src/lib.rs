// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Convolution filters and lookahead seam carving on RGBA pixel grids.

pub mod ternary;

pub mod errors;
pub use errors::{Error, Result};

pub mod colour;
pub use colour::Colour;

pub mod twodmap;
pub use twodmap::TwoDimensionalMap;

pub mod pixelgrid;
pub use pixelgrid::PixelGrid;

pub mod window;
pub use window::KernelWindow;

pub mod kernel;
pub use kernel::Kernel;

pub mod convolution;
pub use convolution::{convolve, convolve_with, RedInfluence, Uniform, WeightFunction, WeightSample};

pub mod filters;
pub use filters::{box_blur, box_blur_with, Filter};

pub mod energy;
pub use energy::{energy_map, energy_of, energy_to_image};

pub mod seamfinder;
pub use seamfinder::{path_energy, Path, Point, Seam, SeamFinder};

pub mod lookahead;
pub use lookahead::LookaheadSeamFinder;

pub mod optimal;
pub use optimal::OptimalSeamFinder;

pub mod seamcarver;
pub use seamcarver::{mark_seam, seamcarve, CarveOptions, Carved, Finder, SeamCarver};

pub mod codec;
pub use codec::decode;

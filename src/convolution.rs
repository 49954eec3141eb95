// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Apply a convolution kernel to a pixel grid
//!
//! One generic routine produces every fixed-kernel filter: blur,
//! sharpen, edge detection, emboss, and so on differ only in the
//! weights.  Each cell's weight can be further scaled by a pluggable
//! weight function, which sees the whole grid, the target pixel, the
//! kernel position, the sampled colour, and its distance from the
//! centre of the kernel.
//!
//! The result is always written to a separate buffer, so no pixel's
//! neighborhood read can ever observe another pixel's write.

use crate::colour::Colour;
use crate::cq;
use crate::errors::Result;
use crate::kernel::Kernel;
use crate::pixelgrid::PixelGrid;
use crate::window::KernelWindow;
use log::debug;
use num_traits::clamp;

/// Everything a weight function may consider about one kernel cell,
/// besides the grid itself.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WeightSample {
    /// The pixel being rewritten.
    pub x: u32,
    pub y: u32,
    /// Position within the kernel; (k, k) is the centre.
    pub i: usize,
    pub j: usize,
    /// The colour found at that kernel position.
    pub colour: Colour,
    pub distance: f64,
}

/// A multiplier applied on top of the kernel's own weight.  Must be
/// pure: it is called once per kernel cell per pixel, possibly from
/// several threads at once.
pub trait WeightFunction: Sync {
    fn weight(&self, grid: &PixelGrid, sample: &WeightSample) -> i32;
}

impl<F> WeightFunction for F
where
    F: Fn(&PixelGrid, &WeightSample) -> i32 + Sync,
{
    fn weight(&self, grid: &PixelGrid, sample: &WeightSample) -> i32 {
        self(grid, sample)
    }
}

/// Leaves the kernel weights alone.
#[derive(Debug, Default, Copy, Clone)]
pub struct Uniform;

impl WeightFunction for Uniform {
    fn weight(&self, _: &PixelGrid, _: &WeightSample) -> i32 {
        1
    }
}

/// An example weight function: strongly red samples pull harder the
/// farther they are from the centre, every other neighbor counts five
/// times as much as the centre itself.
#[derive(Debug, Default, Copy, Clone)]
pub struct RedInfluence;

impl WeightFunction for RedInfluence {
    fn weight(&self, _: &PixelGrid, sample: &WeightSample) -> i32 {
        let c = sample.colour;
        if sample.distance < 1.0 {
            1
        } else if c.r > 150 && c.g < 100 && c.b < 100 {
            (5.0 * sample.distance) as i32
        } else {
            5
        }
    }
}

/// Convolve every pixel of `grid` with `kernel`.
pub fn convolve(grid: &PixelGrid, kernel: &Kernel) -> Result<PixelGrid> {
    convolve_with(grid, kernel, &Uniform)
}

/// Convolve every pixel of `grid` with `kernel`, scaling each kernel
/// cell by `weight_fn`.
pub fn convolve_with<W>(grid: &PixelGrid, kernel: &Kernel, weight_fn: &W) -> Result<PixelGrid>
where
    W: WeightFunction + ?Sized,
{
    kernel.validate()?;
    grid.ensure_not_empty()?;
    debug!(
        "convolving a {}x{} grid with a {}x{} kernel",
        grid.width(),
        grid.height(),
        kernel.side(),
        kernel.side()
    );

    let mut target = PixelGrid::new(grid.width(), grid.height());
    fill(grid, kernel, weight_fn, &mut target);
    Ok(target)
}

#[cfg(not(feature = "threaded"))]
fn fill<W>(grid: &PixelGrid, kernel: &Kernel, weight_fn: &W, target: &mut PixelGrid)
where
    W: WeightFunction + ?Sized,
{
    for (y, row) in target.rows_mut().enumerate() {
        convolve_row(grid, kernel, weight_fn, y as u32, row);
    }
}

// Rows of the target are disjoint slices, so each band of rows can be
// filled on its own thread while every thread reads the same source.
#[cfg(feature = "threaded")]
fn fill<W>(grid: &PixelGrid, kernel: &Kernel, weight_fn: &W, target: &mut PixelGrid)
where
    W: WeightFunction + ?Sized,
{
    let band = (grid.height() as usize + num_cpus::get() - 1) / num_cpus::get();
    let mut rows: Vec<_> = target
        .rows_mut()
        .enumerate()
        .map(|(y, row)| (y as u32, row))
        .collect();

    crossbeam::scope(|scope| {
        for chunk in rows.chunks_mut(band.max(1)) {
            scope.spawn(move |_| {
                for (y, row) in chunk.iter_mut() {
                    convolve_row(grid, kernel, weight_fn, *y, row);
                }
            });
        }
    })
    .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
}

fn convolve_row<W>(grid: &PixelGrid, kernel: &Kernel, weight_fn: &W, y: u32, row: &mut [Colour])
where
    W: WeightFunction + ?Sized,
{
    for (x, cell) in row.iter_mut().enumerate() {
        *cell = convolve_pixel(grid, kernel, weight_fn, x as u32, y);
    }
}

fn convolve_pixel<W>(grid: &PixelGrid, kernel: &Kernel, weight_fn: &W, x: u32, y: u32) -> Colour
where
    W: WeightFunction + ?Sized,
{
    let window = KernelWindow::extract(grid, x, y, kernel.radius());
    let (mut red, mut green, mut blue, mut total_weight) = (0i64, 0i64, 0i64, 0i64);

    for (i, j, cell) in window.cells() {
        let colour = match cell {
            Some(colour) => colour,
            None => continue,
        };
        let sample = WeightSample {
            x,
            y,
            i,
            j,
            colour,
            distance: window.distance(i, j),
        };
        let weight = i64::from(weight_fn.weight(grid, &sample)) * i64::from(kernel.at(i, j));
        red += i64::from(colour.r) * weight;
        green += i64::from(colour.g) * weight;
        blue += i64::from(colour.b) * weight;
        total_weight += weight;
    }

    // Zero-sum kernels (a Laplacian, say) normalise themselves.
    let divisor = cq!(total_weight == 0, 1, total_weight);
    let channel = |total: i64| clamp(total / divisor, 0, 255) as u8;

    Colour::new(channel(red), channel(green), channel(blue), grid[(x, y)].a)
}

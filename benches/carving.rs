use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pixelseam::{
    convolve, CarveOptions, Colour, Filter, Finder, LookaheadSeamFinder, PixelGrid, SeamCarver,
    SeamFinder,
};

fn pattern(width: u32, height: u32) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        let v = (x * 31 + y * 17 + x * y) % 256;
        Colour::rgb(v as u8, (255 - v) as u8, (v / 2) as u8)
    })
}

fn convolution(c: &mut Criterion) {
    let grid = pattern(128, 96);
    let gaussian = Filter::Gaussian.kernel();
    let streak = Filter::Streak.kernel();
    c.bench_function("gaussian 128x96", |b| {
        b.iter(|| convolve(black_box(&grid), &gaussian))
    });
    c.bench_function("streak 128x96", |b| {
        b.iter(|| convolve(black_box(&grid), &streak))
    });
}

fn seams(c: &mut Criterion) {
    let grid = pattern(96, 48);
    for depth in &[1u32, 3, 5] {
        c.bench_function(&format!("lookahead depth {}", depth), |b| {
            b.iter(|| {
                LookaheadSeamFinder::new(black_box(&grid), *depth)
                    .and_then(|f| f.find_horizontal_seam())
            })
        });
    }
    let options = CarveOptions {
        finder: Finder::Optimal,
        ..CarveOptions::default()
    };
    c.bench_function("optimal 96x48", |b| {
        b.iter(|| SeamCarver::new(black_box(&grid), options).carve())
    });
}

criterion_group!(benches, convolution, seams);
criterion_main!(benches);

use assert_cmd::Command;
use image::{Rgba, RgbaImage};
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const MAGENTA: Rgba<u8> = Rgba([255, 0, 255, 255]);

// A 6x5 white field with a black dot at (3, 3).
fn fixture(dir: &Path) -> PathBuf {
    let mut img = RgbaImage::from_pixel(6, 5, Rgba([255, 255, 255, 255]));
    img.put_pixel(3, 3, Rgba([0, 0, 0, 255]));
    let path = dir.join("dot.png");
    img.save(&path).unwrap();
    path
}

fn pixelseam() -> Command {
    Command::cargo_bin("pixelseam").unwrap()
}

#[test]
fn lists_the_presets() {
    pixelseam()
        .arg("filters")
        .assert()
        .success()
        .stdout(predicate::str::contains("edge-detect"))
        .stdout(predicate::str::contains("gaussian"));
}

#[test]
fn identity_filter_writes_an_identical_image() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path());
    let output = dir.path().join("same.png");
    pixelseam()
        .arg("filter")
        .arg("identity")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();
    let before = image::open(&input).unwrap().to_rgba8();
    let after = image::open(&output).unwrap().to_rgba8();
    assert_eq!(before, after);
}

#[test]
fn blur_accepts_a_radius() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path());
    let output = dir.path().join("blurred.png");
    pixelseam()
        .args(&["filter", "blur", "--radius", "2"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success();
    let after = image::open(&output).unwrap().to_rgba8();
    assert_eq!(after.dimensions(), (6, 5));
    assert!(after.get_pixel(3, 3).0[0] > 0);
}

#[test]
fn carving_marks_a_full_width_seam() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path());
    let output = dir.path().join("carved.png");
    pixelseam()
        .args(&["carve", "--lookahead", "2"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success();
    let after = image::open(&output).unwrap().to_rgba8();
    assert_eq!(after.dimensions(), (6, 5));
    for x in 0..6 {
        let marked = (0..5).filter(|y| *after.get_pixel(x, *y) == MAGENTA).count();
        assert_eq!(marked, 1);
    }
}

#[test]
fn energy_renders_greyscale() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path());
    let output = dir.path().join("energy.png");
    pixelseam()
        .arg("energy")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();
    let after = image::open(&output).unwrap().to_luma8();
    assert_eq!(after.get_pixel(3, 3).0[0], 255);
    assert_eq!(after.get_pixel(0, 0).0[0], 0);
}

#[test]
fn unknown_filters_fail_without_output() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path());
    let output = dir.path().join("never.png");
    pixelseam()
        .arg("filter")
        .arg("posterize")
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no filter named 'posterize'"));
    assert!(!output.exists());
}

#[test]
fn undecodable_input_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("junk.png");
    std::fs::write(&input, b"not a png at all").unwrap();
    let output = dir.path().join("never.png");
    pixelseam()
        .arg("carve")
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not decode image"));
    assert!(!output.exists());
}

#[test]
fn zero_lookahead_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path());
    let output = dir.path().join("never.png");
    pixelseam()
        .args(&["carve", "--lookahead", "0"])
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("lookahead"));
    assert!(!output.exists());
}

#[test]
fn excessive_lookahead_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path());
    let output = dir.path().join("never.png");
    pixelseam()
        .args(&["carve", "--lookahead", "40"])
        .arg(&input)
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("between 1 and 12, got 40"));
    assert!(!output.exists());
}

#[test]
fn huge_blur_radius_is_an_error_not_a_crash() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path());
    let output = dir.path().join("never.png");
    pixelseam()
        .args(&["filter", "blur", "--radius", "3000000000"])
        .arg(&input)
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("blur radius 3000000000"));
    assert!(!output.exists());
}

#[test]
fn radius_is_refused_for_other_presets() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path());
    let output = dir.path().join("never.png");
    pixelseam()
        .args(&["filter", "gaussian", "--radius", "2"])
        .arg(&input)
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--radius only applies to the blur preset"));
    assert!(!output.exists());
}

#[test]
fn blur_radius_composes_with_red_influence() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path());
    let plain = dir.path().join("plain.png");
    let red = dir.path().join("red.png");
    pixelseam()
        .args(&["filter", "blur", "--radius", "2"])
        .arg(&input)
        .arg(&plain)
        .assert()
        .success();
    pixelseam()
        .args(&["filter", "blur", "--radius", "2", "--red-influence"])
        .arg(&input)
        .arg(&red)
        .assert()
        .success();
    let plain = image::open(&plain).unwrap().to_rgba8();
    let red = image::open(&red).unwrap().to_rgba8();
    assert_eq!(red.dimensions(), (6, 5));
    // The dot weighs 1 against 5 for each white neighbor, so it washes
    // out further: 19 * 255 / 20 plain, 95 * 255 / 96 weighted.
    assert_eq!(plain.get_pixel(3, 3).0[0], 242);
    assert_eq!(red.get_pixel(3, 3).0[0], 252);
}

use assert_cmd::Command;
use image::{GenericImageView, ImageBuffer, Rgb, RgbImage};
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn write_stripes(path: &Path, width: u32, height: u32) {
    let image: RgbImage = ImageBuffer::from_fn(width, height, |x, y| {
        if (x / 3 + y) % 2 == 0 {
            Rgb([220, 40, 40])
        } else {
            Rgb([30, 30, 200])
        }
    });
    image.save(path).unwrap();
}

#[test]
fn carves_to_the_requested_size() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_stripes(&input, 12, 9);

    Command::cargo_bin("wrapseam")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "8", "--height", "6"])
        .assert()
        .success();

    let carved = image::open(&output).unwrap();
    assert_eq!(carved.dimensions(), (8, 6));
}

#[test]
fn missing_target_keeps_that_dimension() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_stripes(&input, 10, 7);

    Command::cargo_bin("wrapseam")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "7"])
        .assert()
        .success();

    assert_eq!(image::open(&output).unwrap().dimensions(), (7, 7));
}

#[test]
fn energy_dump_keeps_the_input_size() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("energy.png");
    write_stripes(&input, 6, 4);

    Command::cargo_bin("wrapseam")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .arg("--energy")
        .assert()
        .success();

    let energy = image::open(&output).unwrap();
    assert_eq!(energy.dimensions(), (6, 4));
}

#[test]
fn refuses_to_upscale() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_stripes(&input, 5, 5);

    Command::cargo_bin("wrapseam")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot carve a 5x5 image to 9x5"));

    assert!(!output.exists());
}

#[test]
fn rejects_a_bad_number() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    write_stripes(&input, 5, 5);

    Command::cargo_bin("wrapseam")
        .unwrap()
        .arg(&input)
        .arg(dir.path().join("out.png"))
        .args(&["--height", "tall"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("wrapseam:"));
}

//! Shared fixtures for integration tests.
//!
//! Builds small pixel-map files inside temporary directories.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Pixels of the 2x2 reference image, row-major RGB.
pub const RGB_2X2: [u8; 12] = [255, 0, 0, 0, 255, 0, 0, 0, 255, 12, 34, 56];

/// Write a binary (P6) pixel map with 8-bit channels.
pub fn write_ppm(path: &Path, width: u32, height: u32, pixels: &[u8]) {
    let mut data = format!("P6\n{} {}\n255\n", width, height).into_bytes();
    data.extend_from_slice(pixels);
    fs::write(path, data).expect("failed to write ppm fixture");
}

/// Write the 2x2 reference image.
pub fn write_reference_ppm(path: &Path) {
    write_ppm(path, 2, 2, &RGB_2X2);
}

/// Decode a file and return its dimensions and RGB8 pixels.
pub fn decode_rgb(path: &Path) -> ((u32, u32), Vec<u8>) {
    let img = image::open(path).expect("artifact should decode").to_rgb8();
    (img.dimensions(), img.into_raw())
}

/// Sorted file names inside `dir`.
pub fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("failed to list directory")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

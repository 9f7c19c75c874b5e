//! PNG fixtures for seeding capture directories.

use std::path::Path;

use image::{Rgba, RgbaImage};

use super::env::TestEnv;

/// Capture directory used by the integration tests, relative to the
/// environment root.
pub const CAPTURES: &str = "images";

/// Standard argument set pointing the CLI at the test layout.
pub const PATH_ARGS: [&str; 6] = [
    "--captures",
    "images",
    "--archive",
    "screenshots",
    "--manifest",
    "screenshots/html/data.js",
];

/// Write a deterministic solid-color PNG. Equal shades produce
/// byte-identical files; different shades differ in every pixel.
pub fn write_png(path: &Path, shade: u8) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create directories");
    }
    let img = RgbaImage::from_pixel(8, 8, Rgba([shade, shade / 2, 255 - shade, 255]));
    img.save(path).expect("failed to write png fixture");
}

/// Seed one capture file under the test capture directory.
pub fn seed_capture(env: &TestEnv, name: &str, shade: u8) {
    write_png(&env.path(CAPTURES).join(name), shade);
}

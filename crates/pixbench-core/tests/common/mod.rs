#![allow(dead_code)]

use std::path::PathBuf;

use image::{Rgb, RgbImage, Rgba, RgbaImage};

/// Path in the system temp dir unique to this process and `name`.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pixbench-{}-{name}", std::process::id()))
}

/// Write a `width`×`height` RGB PNG whose pixel at (x, y) is `f(x, y)`.
pub fn write_rgb_png(name: &str, width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 3]) -> PathBuf {
    let path = temp_path(name);
    let img = RgbImage::from_fn(width, height, |x, y| Rgb(f(x, y)));
    img.save(&path).expect("write test png");
    path
}

/// Write a single-pixel RGBA PNG.
pub fn write_rgba_pixel_png(name: &str, px: [u8; 4]) -> PathBuf {
    let path = temp_path(name);
    let img = RgbaImage::from_pixel(1, 1, Rgba(px));
    img.save(&path).expect("write test png");
    path
}

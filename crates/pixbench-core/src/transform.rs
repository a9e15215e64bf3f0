//! Elementwise transforms over [`Image`] grids.
//!
//! Samples are `u8` and every operation wraps modulo 256. Nothing widens or
//! clamps: `255 + 70` is `69`, not `255`.

use ndarray::Zip;

use crate::error::BenchError;
use crate::image::Image;

/// Add `offset` to every sample, wrapping on overflow.
pub fn add_scalar_wrapping(image: &Image, offset: u8) -> Image {
    let samples = image.samples().mapv(|v| v.wrapping_add(offset));
    Image::new(samples, image.channel_order())
}

/// Add two images sample by sample, wrapping on overflow.
///
/// The result keeps the channel order of `lhs`.
pub fn add_wrapping(lhs: &Image, rhs: &Image) -> Result<Image, BenchError> {
    if lhs.shape() != rhs.shape() {
        return Err(BenchError::ShapeMismatch {
            left: lhs.shape(),
            right: rhs.shape(),
        });
    }

    let samples = Zip::from(lhs.samples())
        .and(rhs.samples())
        .map_collect(|&a, &b| a.wrapping_add(b));
    Ok(Image::new(samples, lhs.channel_order()))
}

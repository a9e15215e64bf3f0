//! In-memory image grid used by the benchmark.

use std::fmt;

use ndarray::{Array3, Axis};

use crate::error::BenchError;

/// Layout of colour channels along the last axis of an [`Image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    /// Blue, green, red. The conventional layout of 8-bit decoders.
    #[default]
    Bgr,
    /// Red, green, blue.
    Rgb,
}

impl fmt::Display for ChannelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bgr => write!(f, "BGR"),
            Self::Rgb => write!(f, "RGB"),
        }
    }
}

/// A `[height][width][channels]` grid of `u8` samples.
///
/// The shape is fixed at construction. Transforms produce a new `Image`
/// rather than resizing this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    samples: Array3<u8>,
    order: ChannelOrder,
}

impl Image {
    /// Wrap an existing sample grid.
    pub fn new(samples: Array3<u8>, order: ChannelOrder) -> Self {
        Self { samples, order }
    }

    /// Grid where every sample holds `value`.
    pub fn filled(height: usize, width: usize, channels: usize, value: u8) -> Self {
        Self::new(
            Array3::from_elem((height, width, channels), value),
            ChannelOrder::default(),
        )
    }

    /// Grid whose samples are produced by `f(row, col, channel)`.
    pub fn from_fn<F>(height: usize, width: usize, channels: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize, usize) -> u8,
    {
        let samples = Array3::from_shape_fn((height, width, channels), |(r, c, k)| f(r, c, k));
        Self::new(samples, ChannelOrder::default())
    }

    /// Build from a row-major interleaved buffer of `height * width * channels` bytes.
    pub fn from_raw(
        height: usize,
        width: usize,
        channels: usize,
        data: Vec<u8>,
        order: ChannelOrder,
    ) -> Result<Self, BenchError> {
        let samples = Array3::from_shape_vec((height, width, channels), data)?;
        Ok(Self::new(samples, order))
    }

    /// `[height, width, channels]`.
    pub fn shape(&self) -> [usize; 3] {
        let (h, w, c) = self.samples.dim();
        [h, w, c]
    }

    pub fn height(&self) -> usize {
        self.samples.len_of(Axis(0))
    }

    pub fn width(&self) -> usize {
        self.samples.len_of(Axis(1))
    }

    pub fn channels(&self) -> usize {
        self.samples.len_of(Axis(2))
    }

    /// Number of dimensions. Always 3.
    pub fn ndim(&self) -> usize {
        self.samples.ndim()
    }

    pub fn channel_order(&self) -> ChannelOrder {
        self.order
    }

    /// Sample at `(row, col, channel)`.
    pub fn sample(&self, row: usize, col: usize, channel: usize) -> Result<u8, BenchError> {
        self.samples
            .get((row, col, channel))
            .copied()
            .ok_or(BenchError::OutOfBounds {
                index: [row, col, channel],
                shape: self.shape(),
            })
    }

    /// Sample at an `[row, col, channel]` index.
    pub fn sample_at(&self, index: [usize; 3]) -> Result<u8, BenchError> {
        self.sample(index[0], index[1], index[2])
    }

    pub fn samples(&self) -> &Array3<u8> {
        &self.samples
    }

    pub fn into_samples(self) -> Array3<u8> {
        self.samples
    }
}

/// Formats as `(h, w, c)`.
pub struct ShapeDisplay(pub [usize; 3]);

impl fmt::Display for ShapeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [h, w, c] = self.0;
        write!(f, "({h}, {w}, {c})")
    }
}

/// Deterministic 3-channel test pattern of the given size.
///
/// Samples cover the full `0..=255` range so wraparound paths are hit.
pub fn synthetic_image(width: usize, height: usize) -> Image {
    Image::from_fn(height, width, 3, |r, c, k| {
        (r.wrapping_mul(31) ^ c.wrapping_mul(17) ^ k.wrapping_mul(101)) as u8
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_shape_and_values() {
        let img = Image::filled(2, 3, 3, 9);
        assert_eq!(img.shape(), [2, 3, 3]);
        assert_eq!(img.ndim(), 3);
        assert!(img.samples().iter().all(|&v| v == 9));
    }

    #[test]
    fn test_sample_out_of_bounds_is_error() {
        let img = Image::filled(1, 1, 3, 0);
        assert_eq!(img.sample(0, 0, 2).unwrap(), 0);
        let err = img.sample(0, 0, 3).unwrap_err();
        assert!(matches!(
            err,
            BenchError::OutOfBounds { index: [0, 0, 3], shape: [1, 1, 3] }
        ));
    }

    #[test]
    fn test_from_raw_rejects_wrong_length() {
        let err = Image::from_raw(2, 2, 3, vec![0; 11], ChannelOrder::Rgb).unwrap_err();
        assert!(matches!(err, BenchError::Layout(_)));
    }

    #[test]
    fn test_from_raw_is_row_major_interleaved() {
        let data: Vec<u8> = (0..12).collect();
        let img = Image::from_raw(2, 2, 3, data, ChannelOrder::Rgb).unwrap();
        assert_eq!(img.sample(0, 1, 0).unwrap(), 3);
        assert_eq!(img.sample(1, 0, 2).unwrap(), 8);
        assert_eq!(img.channel_order(), ChannelOrder::Rgb);
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(ShapeDisplay([1080, 1920, 3]).to_string(), "(1080, 1920, 3)");
    }

    #[test]
    fn test_synthetic_image_is_deterministic() {
        let a = synthetic_image(16, 8);
        let b = synthetic_image(16, 8);
        assert_eq!(a.shape(), [8, 16, 3]);
        assert_eq!(a, b);
    }
}

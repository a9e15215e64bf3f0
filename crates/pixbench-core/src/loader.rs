//! Decoding images from disk into [`Image`] grids.

use std::path::Path;

use crate::diagnostics::DiagnosticSink;
use crate::error::BenchError;
use crate::image::{ChannelOrder, Image, ShapeDisplay};

/// Load an image from disk with channels in the default BGR order.
///
/// Supports whatever formats the `image` crate decodes (PNG, JPEG, ...).
/// Alpha is discarded, so the result always has 3 channels.
pub fn load_image(path: &Path, sink: &mut dyn DiagnosticSink) -> Result<Image, BenchError> {
    load_image_with_order(path, ChannelOrder::default(), sink)
}

/// Load an image from disk, laying channels out in `order`.
pub fn load_image_with_order(
    path: &Path,
    order: ChannelOrder,
    sink: &mut dyn DiagnosticSink,
) -> Result<Image, BenchError> {
    let decoded = ::image::open(path).map_err(|source| {
        tracing::warn!("failed to load image from {}: {source}", path.display());
        BenchError::Decode {
            path: path.to_path_buf(),
            source,
        }
    })?;
    tracing::debug!("decoded {} as {:?}", path.display(), decoded.color());

    let rgb = decoded.into_rgb8();
    let (width, height) = rgb.dimensions();
    let mut data = rgb.into_raw();
    if order == ChannelOrder::Bgr {
        for px in data.chunks_exact_mut(3) {
            px.swap(0, 2);
        }
    }

    let image = Image::from_raw(height as usize, width as usize, 3, data, order)?;
    sink.emit(&format!(
        "Image loaded from {} with shape: {}",
        path.display(),
        ShapeDisplay(image.shape())
    ));
    Ok(image)
}

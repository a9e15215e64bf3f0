use std::path::PathBuf;

/// Errors raised while loading or transforming an image.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("image not found or not decodable at path: {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },
    #[error("index {index:?} out of bounds for shape {shape:?}")]
    OutOfBounds { index: [usize; 3], shape: [usize; 3] },
    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch { left: [usize; 3], right: [usize; 3] },
    #[error("decoded buffer does not fit image shape: {0}")]
    Layout(#[from] ndarray::ShapeError),
}

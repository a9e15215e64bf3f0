//! pixbench core — image loading and elementwise transforms.
//!
//! Loads an image into a `[height][width][channels]` grid of `u8` samples,
//! applies a wrapping scalar add, and reports how long the transform took.
//! Diagnostics flow through an injected [`DiagnosticSink`] so the loader and
//! runner can be exercised without touching stdout.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod loader;
pub mod runner;
pub mod transform;

// Re-exports for convenience.
pub use config::BenchConfig;
pub use diagnostics::{DiagnosticSink, MemorySink, StdoutSink};
pub use error::BenchError;
pub use crate::image::{ChannelOrder, Image};
pub use loader::{load_image, load_image_with_order};
pub use runner::{BenchmarkReport, run_benchmark};
pub use transform::{add_scalar_wrapping, add_wrapping};

//! Benchmark configuration.

use std::path::PathBuf;

use crate::image::ChannelOrder;

/// Asset loaded by the benchmark, relative to the working directory.
pub const DEFAULT_ASSET_PATH: &str = "assets/banner.png";
/// Constant added to every sample.
pub const DEFAULT_OFFSET: u8 = 70;
/// Sample reported before and after the transform.
pub const DEFAULT_PROBE: [usize; 3] = [0, 0, 0];
/// Decimal places in the elapsed-time line.
pub const DEFAULT_PRECISION: usize = 7;

/// Runtime configuration for a benchmark run.
///
/// The benchmark takes no flags or environment variables; [`Default`] is the
/// configuration the `pixbench` binary runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Image file to load.
    pub asset_path: PathBuf,
    /// Value added (wrapping) to every sample.
    pub offset: u8,
    /// `[row, col, channel]` of the sample printed around the transform.
    pub probe: [usize; 3],
    /// Decimal places used when reporting elapsed seconds.
    pub precision: usize,
    /// Channel layout of the loaded image.
    pub channel_order: ChannelOrder,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            asset_path: PathBuf::from(DEFAULT_ASSET_PATH),
            offset: DEFAULT_OFFSET,
            probe: DEFAULT_PROBE,
            precision: DEFAULT_PRECISION,
            channel_order: ChannelOrder::default(),
        }
    }
}

impl BenchConfig {
    /// Default configuration pointed at a different asset.
    pub fn with_asset(path: impl Into<PathBuf>) -> Self {
        Self {
            asset_path: path.into(),
            ..Self::default()
        }
    }
}

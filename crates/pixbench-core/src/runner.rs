//! Timed load-and-transform run.

use std::time::{Duration, Instant};

use crate::config::BenchConfig;
use crate::diagnostics::{DiagnosticSink, format_elapsed};
use crate::error::BenchError;
use crate::loader::load_image_with_order;
use crate::transform::add_scalar_wrapping;

/// Outcome of a single benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkReport {
    /// `[height, width, channels]` of the loaded image.
    pub shape: [usize; 3],
    /// Probe sample before the transform.
    pub before: u8,
    /// Probe sample after the transform.
    pub after: u8,
    /// Wall-clock time from the first probe print to the end of the transform.
    pub elapsed: Duration,
}

/// Load the configured asset, add `config.offset` to every sample and report
/// how long it took.
///
/// Emits four lines on success: the load line, the probe sample before and
/// after, and the elapsed time. A load failure returns before any timing
/// starts.
pub fn run_benchmark(
    config: &BenchConfig,
    sink: &mut dyn DiagnosticSink,
) -> Result<BenchmarkReport, BenchError> {
    let image = load_image_with_order(&config.asset_path, config.channel_order, sink)?;
    let before = image.sample_at(config.probe)?;

    let start = Instant::now();
    sink.emit(&before.to_string());
    let image = add_scalar_wrapping(&image, config.offset);
    let after = image.sample_at(config.probe)?;
    sink.emit(&after.to_string());
    let elapsed = start.elapsed();

    sink.emit(&format_elapsed(elapsed, config.precision));
    tracing::debug!(
        "transformed {:?} samples in {:?}",
        image.shape(),
        elapsed
    );

    Ok(BenchmarkReport {
        shape: image.shape(),
        before,
        after,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;

    #[test]
    fn test_missing_asset_reports_nothing() {
        let config = BenchConfig::with_asset("assets/missing.png");
        let mut sink = MemorySink::new();
        let err = run_benchmark(&config, &mut sink).unwrap_err();
        assert!(matches!(err, BenchError::Decode { .. }));
        assert!(sink.lines.is_empty());
    }
}

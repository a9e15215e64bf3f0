//! pixbench — times a wrapping `+70` over every sample of `assets/banner.png`.
//!
//! Diagnostics go to stdout with the `----->>>` marker; logs go to stderr and
//! are filtered with `RUST_LOG`.

use std::process::ExitCode;

use pixbench_core::{BenchConfig, StdoutSink, run_benchmark};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = BenchConfig::default();
    match run_benchmark(&config, &mut StdoutSink) {
        Ok(report) => {
            tracing::info!(
                "benchmark finished: shape {:?}, {} -> {}",
                report.shape,
                report.before,
                report.after
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("benchmark failed: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

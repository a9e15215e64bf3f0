//! Prefixed diagnostic output shared by the loader and runner.

use std::time::Duration;

/// Marker printed before every diagnostic line.
pub const DIAGNOSTIC_PREFIX: &str = "----->>>";

/// Destination for benchmark diagnostics.
pub trait DiagnosticSink {
    fn emit(&mut self, message: &str);
}

/// Writes `----->>> <message>` lines to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn emit(&mut self, message: &str) {
        println!("{}", prefixed(message));
    }
}

/// Collects messages in memory, unprefixed.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&mut self, message: &str) {
        self.lines.push(message.to_owned());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, message: &str) {
        (**self).emit(message);
    }
}

/// `message` with the diagnostic marker in front.
pub fn prefixed(message: &str) -> String {
    format!("{DIAGNOSTIC_PREFIX} {message}")
}

/// Completion line for a timed transform, seconds shown to `precision` decimals.
pub fn format_elapsed(elapsed: Duration, precision: usize) -> String {
    format!(
        "Image processing completed in {:.*} seconds.",
        precision,
        elapsed.as_secs_f64()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_line() {
        assert_eq!(prefixed("hello"), "----->>> hello");
    }

    #[test]
    fn test_memory_sink_records_in_order() {
        let mut sink = MemorySink::new();
        sink.emit("a");
        (&mut sink).emit("b");
        assert_eq!(sink.lines, vec!["a", "b"]);
    }

    #[test]
    fn test_format_elapsed_seven_decimals() {
        let line = format_elapsed(Duration::from_micros(1_234_567), 7);
        assert_eq!(line, "Image processing completed in 1.2345670 seconds.");
    }

    #[test]
    fn test_format_elapsed_zero() {
        let line = format_elapsed(Duration::ZERO, 7);
        assert_eq!(line, "Image processing completed in 0.0000000 seconds.");
    }
}

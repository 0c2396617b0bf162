use tracing::{error, warn};

use super::errors::Error;

/// Receiver for everything the scanner finds wrong with its input.
///
/// The scanner never formats or prints; it hands each problem, with the span
/// it occurred at, to whatever sink the caller plugged in.
pub trait DiagnosticSink {
    fn report(&mut self, error: Error);
}

impl DiagnosticSink for Vec<Error> {
    fn report(&mut self, error: Error) {
        self.push(error);
    }
}

/// Sink that forwards reports to `tracing` and only keeps counts.
#[derive(Debug, Default)]
pub struct LogSink {
    reported: usize,
    fatal: usize,
}

impl LogSink {
    pub fn new() -> Self {
        LogSink::default()
    }

    pub fn reported(&self) -> usize {
        self.reported
    }

    pub fn fatal(&self) -> usize {
        self.fatal
    }
}

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Error) {
        let span = diagnostic.get_span();
        self.reported += 1;

        if diagnostic.is_fatal() {
            self.fatal += 1;
            error!(line = span.line, column = span.first_column, "{}", diagnostic.get_impl());
        } else {
            warn!(line = span.line, column = span.first_column, "{}", diagnostic.get_impl());
        }
    }
}

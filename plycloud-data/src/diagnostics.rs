//! Diagnostic sinks for reader failures and warnings.

use tracing::{error, warn};

/// Receives human-readable diagnostics emitted while reading.
pub trait Diagnostics {
    /// A read failed.
    fn error(&mut self, message: &str);

    /// A read succeeded but something in the input was ignored.
    fn warning(&mut self, message: &str);
}

/// Forwards diagnostics to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn error(&mut self, message: &str) {
        error!("{}", message);
    }

    fn warning(&mut self, message: &str) {
        warn!("{}", message);
    }
}

/// Keeps diagnostics in memory.
#[derive(Debug, Default, Clone)]
pub struct CollectingDiagnostics {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
        self.warnings.clear();
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn error(&mut self, message: &str) {
        (**self).error(message);
    }

    fn warning(&mut self, message: &str) {
        (**self).warning(message);
    }
}

//! Reader configuration.

/// Line that ends a PLY header.
pub const DEFAULT_HEADER_TERMINATOR: &str = "end_header";

/// Options controlling how a PLY file is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    /// Trimmed line content that ends the header.
    pub header_terminator: String,
    /// Emit a warning when the body ends on a non-numeric token or an
    /// incomplete triple.
    pub warn_on_truncation: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            header_terminator: DEFAULT_HEADER_TERMINATOR.to_string(),
            warn_on_truncation: true,
        }
    }
}

impl ReadOptions {
    pub fn with_header_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.header_terminator = terminator.into();
        self
    }

    pub fn with_truncation_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_truncation = enabled;
        self
    }
}

//! Header scanning.
//!
//! The header is not validated. Lines are skipped until one whose trimmed
//! content equals the terminator; `format` and `element vertex` lines are
//! recorded along the way for reporting only.

use std::io::{self, BufRead};

/// What the header scan saw before the terminator line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlyHeader {
    /// Lines consumed, terminator included.
    pub line_count: usize,
    /// Value of the `format` line, e.g. `ascii 1.0`.
    pub format: Option<String>,
    /// Count from an `element vertex N` line.
    pub declared_vertices: Option<usize>,
}

impl PlyHeader {
    fn observe(&mut self, line: &[u8]) {
        let Ok(line) = std::str::from_utf8(line) else {
            return;
        };
        let mut words = line.split_ascii_whitespace();
        match words.next() {
            Some("format") => {
                let value = words.collect::<Vec<_>>().join(" ");
                if !value.is_empty() {
                    self.format = Some(value);
                }
            }
            Some("element") => {
                if words.next() == Some("vertex") {
                    if let Some(count) = words.next().and_then(|n| n.parse().ok()) {
                        self.declared_vertices = Some(count);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Consume lines up to and including the terminator.
///
/// Returns `Ok(None)` when input ends first.
pub(crate) fn scan_header<R: BufRead>(
    reader: &mut R,
    terminator: &str,
) -> io::Result<Option<PlyHeader>> {
    let mut header = PlyHeader::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        header.line_count += 1;

        let trimmed = line.trim_ascii();
        if trimmed == terminator.as_bytes() {
            return Ok(Some(header));
        }
        header.observe(trimmed);
    }
}

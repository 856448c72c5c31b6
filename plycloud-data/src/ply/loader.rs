//! PLY file loading functions

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::PlyError;
use crate::ply::header::{PlyHeader, scan_header};
use crate::ply::options::ReadOptions;
use crate::types::{Point3, PointCloud};

// Header vertex counts are untrusted; the vector grows past this on demand.
const MAX_PREALLOCATED_POINTS: usize = 1 << 16;

/// How the body scan ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// Every token was consumed as part of a complete triple.
    EndOfInput,
    /// Input ended with 1 or 2 coordinates that were dropped.
    IncompleteTriple { trailing: usize },
    /// Parsing stopped at a token that is not a number.
    NonNumericToken { token: String, line: usize },
    /// The source failed mid-body; treated as end of input.
    ReadError { message: String, line: usize },
}

impl Termination {
    pub fn is_clean(&self) -> bool {
        matches!(self, Termination::EndOfInput)
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::EndOfInput => write!(f, "end of input"),
            Termination::IncompleteTriple { trailing } => {
                write!(f, "incomplete point ({} trailing coordinate(s))", trailing)
            }
            Termination::NonNumericToken { token, line } => {
                write!(f, "non-numeric token '{}' on line {}", token, line)
            }
            Termination::ReadError { message, line } => {
                write!(f, "read error on line {} ({})", line, message)
            }
        }
    }
}

/// Result of a successful read.
#[derive(Debug, Clone)]
pub struct PlyRead {
    pub header: PlyHeader,
    pub cloud: PointCloud,
    pub termination: Termination,
}

/// Reads ASCII PLY point clouds, reporting problems to a [`Diagnostics`] sink.
pub struct PlyReader<D: Diagnostics = TracingDiagnostics> {
    options: ReadOptions,
    diagnostics: D,
}

impl PlyReader<TracingDiagnostics> {
    /// Create a reader with default options that logs through `tracing`.
    pub fn new() -> Self {
        Self::with_options(ReadOptions::default())
    }

    pub fn with_options(options: ReadOptions) -> Self {
        Self {
            options,
            diagnostics: TracingDiagnostics,
        }
    }
}

impl Default for PlyReader<TracingDiagnostics> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Diagnostics> PlyReader<D> {
    /// Replace the diagnostics sink.
    pub fn with_diagnostics<E: Diagnostics>(self, diagnostics: E) -> PlyReader<E> {
        PlyReader {
            options: self.options,
            diagnostics,
        }
    }

    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> D {
        self.diagnostics
    }

    /// Read the point cloud stored in the file at `path`.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn read<P: AsRef<Path>>(&mut self, path: P) -> Result<PlyRead, PlyError> {
        let path = path.as_ref();
        debug!("Loading PLY points from: {}", path.display());

        let file = match File::open(path) {
            Ok(file) => file,
            Err(source) => {
                return Err(self.fail(PlyError::Open {
                    path: path.to_path_buf(),
                    source,
                }));
            }
        };

        // The handle is dropped with the BufReader on every return path.
        self.read_from(BufReader::new(file), path)
    }

    /// Read a point cloud from an already opened source.
    ///
    /// `path` is only used to label errors and diagnostics.
    pub fn read_from<R: BufRead>(&mut self, mut reader: R, path: &Path) -> Result<PlyRead, PlyError> {
        let header = match scan_header(&mut reader, &self.options.header_terminator) {
            Ok(Some(header)) => header,
            // A read failure ends the header scan just like end of input.
            result => {
                return Err(self.fail(PlyError::MissingHeaderTerminator {
                    path: path.to_path_buf(),
                    terminator: self.options.header_terminator.clone(),
                    source: result.err(),
                }));
            }
        };
        debug!(
            "PLY header ended after {} lines (format: {:?}, declared vertices: {:?})",
            header.line_count, header.format, header.declared_vertices
        );

        let capacity = header
            .declared_vertices
            .unwrap_or(0)
            .min(MAX_PREALLOCATED_POINTS);
        let mut cloud = PointCloud::with_capacity(capacity);

        let termination = scan_body(&mut reader, header.line_count + 1, &mut cloud);

        if let Some(declared) = header.declared_vertices {
            if declared != cloud.len() {
                debug!(
                    "Header declares {} vertices but {} points were parsed",
                    declared,
                    cloud.len()
                );
            }
        }

        if !termination.is_clean() && self.options.warn_on_truncation {
            self.diagnostics.warning(&format!(
                "PLY point data in {} stopped at {}; kept {} points",
                path.display(),
                termination,
                cloud.len()
            ));
        }

        info!("PLY file parsed: {} points", cloud.len());
        Ok(PlyRead {
            header,
            cloud,
            termination,
        })
    }

    fn fail(&mut self, err: PlyError) -> PlyError {
        self.diagnostics.error(&err.describe());
        err
    }
}

/// Parse whitespace-separated coordinates into points until input ends or a
/// token fails to parse. `first_line` is the 1-based line number of the body.
fn scan_body<R: BufRead>(
    reader: &mut R,
    first_line: usize,
    cloud: &mut PointCloud,
) -> Termination {
    let mut pending = [0.0f64; 3];
    let mut filled = 0;
    let mut line = Vec::new();
    let mut line_number = first_line;

    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                return Termination::ReadError {
                    message: err.to_string(),
                    line: line_number,
                };
            }
        }

        let tokens = line
            .split(|b| b.is_ascii_whitespace())
            .filter(|token| !token.is_empty());
        for token in tokens {
            let Some(value) = parse_coordinate(token) else {
                return Termination::NonNumericToken {
                    token: String::from_utf8_lossy(token).into_owned(),
                    line: line_number,
                };
            };

            pending[filled] = value;
            filled += 1;
            if filled == 3 {
                cloud.push(Point3::new(pending[0], pending[1], pending[2]));
                filled = 0;
            }
        }
        line_number += 1;
    }

    match filled {
        0 => Termination::EndOfInput,
        trailing => Termination::IncompleteTriple { trailing },
    }
}

fn parse_coordinate(token: &[u8]) -> Option<f64> {
    std::str::from_utf8(token).ok()?.parse().ok()
}

/// Read a PLY file with default options, logging through `tracing`.
pub fn read_ply<P: AsRef<Path>>(path: P) -> Result<PlyRead, PlyError> {
    PlyReader::new().read(path)
}

/// Read only the points of a PLY file with default options.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<PointCloud, PlyError> {
    read_ply(path).map(|read| read.cloud)
}

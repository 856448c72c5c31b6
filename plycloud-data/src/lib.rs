//! Plycloud Data Crate
//!
//! Reads point clouds from ASCII PLY files for use as mesh reconstruction input.
//! The header is skipped up to its terminator line and the body is consumed as
//! whitespace-separated `x y z` triples.

pub mod diagnostics;
pub mod error;
pub mod ply;
pub mod types;

pub use diagnostics::{CollectingDiagnostics, Diagnostics, TracingDiagnostics};
pub use error::PlyError;
pub use ply::{
    DEFAULT_HEADER_TERMINATOR, PlyHeader, PlyRead, PlyReader, ReadOptions, Termination, read_ply,
    read_points,
};
pub use types::{CloudBounds, Point3, PointCloud};

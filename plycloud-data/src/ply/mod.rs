//! PLY file loading and parsing

mod header;
mod loader;
mod options;

pub use header::PlyHeader;
pub use loader::{PlyRead, PlyReader, Termination, read_ply, read_points};
pub use options::{DEFAULT_HEADER_TERMINATOR, ReadOptions};

//! Error types for PLY reading.

use std::error::Error as _;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a PLY point cloud.
///
/// Malformed numbers in the body are not errors: they end the point list and
/// are reported through [`crate::Termination`] instead.
#[derive(Debug, Error)]
pub enum PlyError {
    #[error("Cannot load PLY: {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The header ended, or could not be read further, before its terminator.
    #[error("PLY format not valid: missing '{terminator}' in {}", .path.display())]
    MissingHeaderTerminator {
        path: PathBuf,
        terminator: String,
        #[source]
        source: Option<io::Error>,
    },
}

impl PlyError {
    /// Path of the file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            PlyError::Open { path, .. } | PlyError::MissingHeaderTerminator { path, .. } => path,
        }
    }

    /// Error message followed by its causes, on one line.
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        let mut cause = self.source();
        while let Some(err) = cause {
            message.push_str(": ");
            message.push_str(&err.to_string());
            cause = err.source();
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_open_error_names_path_and_keeps_source() {
        let err = PlyError::Open {
            path: PathBuf::from("/data/missing.ply"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "Cannot load PLY: /data/missing.ply");
        assert!(err.source().is_some());
        assert_eq!(err.path(), std::path::Path::new("/data/missing.ply"));
    }

    #[test]
    fn test_missing_terminator_message() {
        let err = PlyError::MissingHeaderTerminator {
            path: PathBuf::from("cloud.ply"),
            terminator: "end_header".to_string(),
            source: None,
        };
        assert_eq!(
            err.to_string(),
            "PLY format not valid: missing 'end_header' in cloud.ply"
        );
        assert!(err.source().is_none());
        assert_eq!(err.describe(), err.to_string());
    }

    #[test]
    fn test_describe_folds_cause_into_one_line() {
        let err = PlyError::MissingHeaderTerminator {
            path: PathBuf::from("scans"),
            terminator: "end_header".to_string(),
            source: Some(io::Error::other("is a directory")),
        };
        assert!(err.source().is_some());
        assert_eq!(
            err.describe(),
            "PLY format not valid: missing 'end_header' in scans: is a directory"
        );
    }
}

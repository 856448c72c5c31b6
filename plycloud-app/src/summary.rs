//! Per-file report printed by the CLI.

use std::fmt;
use std::path::Path;

use glam::DVec3;
use plycloud_data::{CloudBounds, PlyRead};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BoundsSummary {
    pub min: DVec3,
    pub max: DVec3,
}

impl From<CloudBounds> for BoundsSummary {
    fn from(bounds: CloudBounds) -> Self {
        Self {
            min: bounds.min,
            max: bounds.max,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileSummary {
    pub path: String,
    pub points: usize,
    pub declared_vertices: Option<usize>,
    pub format: Option<String>,
    pub clean: bool,
    pub termination: String,
    pub bounds: Option<BoundsSummary>,
}

impl FileSummary {
    pub fn new(path: &Path, read: &PlyRead) -> Self {
        Self {
            path: path.display().to_string(),
            points: read.cloud.len(),
            declared_vertices: read.header.declared_vertices,
            format: read.header.format.clone(),
            clean: read.termination.is_clean(),
            termination: read.termination.to_string(),
            bounds: read.cloud.bounds().map(BoundsSummary::from),
        }
    }
}

fn fmt_vec(v: DVec3) -> String {
    format!("({}, {}, {})", v.x, v.y, v.z)
}

impl fmt::Display for FileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} points", self.path, self.points)?;
        match self.declared_vertices {
            Some(declared) => write!(f, " (declared {})", declared)?,
            None => write!(f, " (no vertex count declared)")?,
        }
        write!(f, ", stopped at {}", self.termination)?;
        if let Some(bounds) = &self.bounds {
            write!(f, ", bounds {} .. {}", fmt_vec(bounds.min), fmt_vec(bounds.max))?;
        }
        Ok(())
    }
}

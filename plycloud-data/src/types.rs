//! Core data types for point clouds read from PLY files.
//!
//! Coordinates are kept in double precision exactly as parsed; nothing here
//! transforms, deduplicates or reorders points.

use glam::DVec3;

/// A point in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Point3 {
    /// Create a point from its coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Position as a glam vector.
    pub fn position(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<DVec3> for Point3 {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for DVec3 {
    fn from(p: Point3) -> Self {
        p.position()
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self {
        p.to_array()
    }
}

/// Axis-aligned bounds of a point cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudBounds {
    pub min: DVec3,
    pub max: DVec3,
}

impl CloudBounds {
    /// Size of the box along each axis.
    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }

    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }
}

/// Points in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<Point3>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point at the end of the cloud.
    pub fn push(&mut self, point: Point3) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point3> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }

    /// Compute the bounding box, or `None` for an empty cloud.
    ///
    /// NaN coordinates are skipped by the min/max fold.
    pub fn bounds(&self) -> Option<CloudBounds> {
        let first = self.points.first()?.position();
        let (min, max) = self
            .points
            .iter()
            .skip(1)
            .map(Point3::position)
            .fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(CloudBounds { min, max })
    }
}

impl From<Vec<Point3>> for PointCloud {
    fn from(points: Vec<Point3>) -> Self {
        Self { points }
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Point3;
    type IntoIter = std::slice::Iter<'a, Point3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for PointCloud {
    type Item = Point3;
    type IntoIter = std::vec::IntoIter<Point3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

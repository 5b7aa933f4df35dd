//! Core geometry types for vastu.
//!
//! `Point` and `Line` are plain copyable values. `Polygon` owns an ordered,
//! cyclic vertex list and refuses any edit that would leave it with fewer
//! than three vertices.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// A 2D point in canvas units (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A line segment defined by two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// A closed polygon: edge `i` joins vertex `i` to vertex `(i + 1) % n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Polygon {
    vertices: Vec<Point>,
}

/// Vertices of the board's starting square.
pub const DEFAULT_SQUARE: [Point; 4] = [
    Point { x: 120.0, y: 120.0 },
    Point { x: 560.0, y: 120.0 },
    Point { x: 560.0, y: 560.0 },
    Point { x: 120.0, y: 560.0 },
];

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point a fraction `t` of the way from `self` toward `target`.
    #[inline]
    pub fn lerp(&self, target: Point, t: f64) -> Point {
        Point::new(
            self.x + (target.x - self.x) * t,
            self.y + (target.y - self.y) * t,
        )
    }

    #[inline]
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// True when both coordinates differ by less than `tolerance`.
    #[inline]
    pub fn approx_eq(&self, other: Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Line {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    pub fn from_points(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }
}

impl Polygon {
    /// Build a polygon, rejecting fewer than 3 vertices or non-finite ones.
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices { count: vertices.len() });
        }
        if vertices.iter().any(|p| !p.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        Ok(Self { vertices })
    }

    /// The 440×440 starting square, centered at (340, 340).
    pub fn default_square() -> Self {
        Self { vertices: DEFAULT_SQUARE.to_vec() }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Never true for a constructed polygon.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges in vertex order, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Line::from_points(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Arithmetic mean of the vertices.
    pub fn centroid(&self) -> Point {
        // A polygon always has vertices, so the mean exists.
        centroid(&self.vertices).unwrap_or(Point::new(0.0, 0.0))
    }

    /// Shoelace area; positive for clockwise order on a y-down canvas.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.vertices[i];
                let b = self.vertices[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice / 2.0
    }

    /// Index of the first vertex within `radius` of `p`.
    pub fn vertex_near(&self, p: Point, radius: f64) -> Option<usize> {
        self.vertices.iter().position(|v| v.distance(p) < radius)
    }

    /// Index of the edge closest to `p`, if it is nearer than `threshold`.
    pub fn nearest_edge(&self, p: Point, threshold: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, edge) in self.edges().enumerate() {
            let d = distance_point_to_segment(p, edge.start(), edge.end());
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.filter(|&(_, d)| d < threshold).map(|(i, _)| i)
    }

    /// Replace vertex `index` with `p`.
    pub fn set_vertex(&mut self, index: usize, p: Point) -> Result<(), GeometryError> {
        if !p.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        let len = self.vertices.len();
        let slot = self
            .vertices
            .get_mut(index)
            .ok_or(GeometryError::VertexOutOfRange { index, len })?;
        *slot = p;
        Ok(())
    }

    /// Insert `p` right after the start of the nearest edge; returns its index.
    pub fn insert_near(&mut self, p: Point, threshold: f64) -> Result<usize, GeometryError> {
        if !p.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        let edge = self.nearest_edge(p, threshold).ok_or(GeometryError::NoEdgeNearby {
            x: p.x,
            y: p.y,
            threshold,
        })?;
        self.vertices.insert(edge + 1, p);
        Ok(edge + 1)
    }

    /// Remove vertex `index`, refusing to drop below 3 vertices.
    pub fn remove_vertex(&mut self, index: usize) -> Result<Point, GeometryError> {
        let len = self.vertices.len();
        if index >= len {
            return Err(GeometryError::VertexOutOfRange { index, len });
        }
        if len <= 3 {
            return Err(GeometryError::TooFewVertices { count: len - 1 });
        }
        Ok(self.vertices.remove(index))
    }
}

impl Default for Polygon {
    fn default() -> Self {
        Self::default_square()
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = GeometryError;

    fn try_from(vertices: Vec<Point>) -> Result<Self, Self::Error> {
        Polygon::new(vertices)
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// Arithmetic mean of a point set; `None` when empty.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}

/// Distance from `p` to the segment `a`-`b`, clamping the projection.
pub fn distance_point_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq == 0.0 {
        return p.distance(a);
    }

    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + t * dx, a.y + t * dy))
}

// ============================================================================
// TESTS
// ============================================================================

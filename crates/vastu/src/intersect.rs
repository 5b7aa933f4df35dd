//! Segment intersection and point-in-polygon tests.
//!
//! Two formulations live here. [`line_segment_intersection`] solves for the
//! `ua`/`ub` parameters and is used for ray/edge crossings, where the
//! parameter along the ray matters. [`segment_intersection`] substitutes the
//! determinant directly and checks the result against both segments'
//! bounding boxes; the marma engine uses it.

use crate::geometry::Point;

/// Below this the two segments are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-10;

/// Slack on the inclusive `[0, 1]` / bounding-box containment tests, so a
/// ray through a polygon corner still meets both adjoining edges.
pub const CONTAINMENT_EPSILON: f64 = 1e-9;

// ============================================================================
// POINT IN POLYGON (Ray Casting Algorithm)
// ============================================================================

/// Test if a point is inside a polygon using even-odd ray casting.
#[inline]
pub fn point_in_polygon(px: f64, py: f64, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi) = (polygon[i].x, polygon[i].y);
        let (xj, yj) = (polygon[j].x, polygon[j].y);

        if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi) + xi) {
            inside = !inside;
        }

        j = i;
    }

    inside
}

// ============================================================================
// LINE-LINE INTERSECTION
// ============================================================================

/// Result of a segment/segment test carrying the parameter along the first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    None,
    Point { x: f64, y: f64, t: f64 },
}

#[inline]
fn within_unit(t: f64) -> bool {
    (-CONTAINMENT_EPSILON..=1.0 + CONTAINMENT_EPSILON).contains(&t)
}

/// Intersect segment (x1,y1)-(x2,y2) with segment (x3,y3)-(x4,y4).
///
/// `t` is the parameter along the first segment, 0 at its start.
#[inline]
#[allow(clippy::too_many_arguments)]
pub fn line_segment_intersection(
    x1: f64, y1: f64, x2: f64, y2: f64,
    x3: f64, y3: f64, x4: f64, y4: f64,
) -> Intersection {
    let denom = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);

    // Parallel or coincident lines
    if denom.abs() < PARALLEL_EPSILON {
        return Intersection::None;
    }

    let ua = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / denom;
    let ub = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / denom;

    if within_unit(ua) && within_unit(ub) {
        Intersection::Point {
            x: x1 + ua * (x2 - x1),
            y: y1 + ua * (y2 - y1),
            t: ua,
        }
    } else {
        Intersection::None
    }
}

/// All crossings of segment `start`-`end` with a closed polygon boundary,
/// sorted by the parameter along the segment.
pub fn line_polygon_intersections(start: Point, end: Point, polygon: &[Point]) -> Vec<(Point, f64)> {
    let n = polygon.len();
    if n < 3 {
        return Vec::new();
    }

    let mut intersections = Vec::with_capacity(n / 2);

    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];

        if let Intersection::Point { x, y, t } = line_segment_intersection(
            start.x, start.y, end.x, end.y,
            a.x, a.y, b.x, b.y,
        ) {
            intersections.push((Point::new(x, y), t));
        }
    }

    intersections.sort_by(|a, b| a.1.total_cmp(&b.1));
    intersections
}

// ============================================================================
// DETERMINANT FORM
// ============================================================================

#[inline]
fn within_span(a: f64, b: f64, v: f64) -> bool {
    a.min(b) - CONTAINMENT_EPSILON <= v && v <= a.max(b) + CONTAINMENT_EPSILON
}

/// Intersection of segments `a1`-`a2` and `b1`-`b2`, or `None` when they
/// are parallel or the crossing falls outside either segment.
///
/// The containment test is boundary-inclusive on both axes of both segments.
pub fn segment_intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    let (x1, y1, x2, y2) = (a1.x, a1.y, a2.x, a2.y);
    let (x3, y3, x4, y4) = (b1.x, b1.y, b2.x, b2.y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let cross_a = x1 * y2 - y1 * x2;
    let cross_b = x3 * y4 - y3 * x4;
    let px = (cross_a * (x3 - x4) - (x1 - x2) * cross_b) / denom;
    let py = (cross_a * (y3 - y4) - (y1 - y2) * cross_b) / denom;

    let on_a = within_span(x1, x2, px) && within_span(y1, y2, py);
    let on_b = within_span(x3, x4, px) && within_span(y3, y4, py);

    (on_a && on_b).then_some(Point::new(px, py))
}

// ============================================================================
// TESTS
// ============================================================================

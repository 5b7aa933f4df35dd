//! Ray/edge intersection and the resulting Direction Point Set.

use serde::Serialize;

use crate::direction::{DirectionLabel, LABEL_COUNT};
use crate::geometry::{Point, Polygon};
use crate::intersect::line_polygon_intersections;
use crate::rays::Ray;

/// A labelled ray/edge crossing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionPoint {
    pub label: DirectionLabel,
    pub ray_index: usize,
    pub point: Point,
}

/// At most one point per direction label, kept in discovery order.
///
/// Discovery order is ray-index order, and the position of a point in this
/// set is what the `I{n}`/`X{n}` tags refer to.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct DirectionPointSet {
    points: Vec<DirectionPoint>,
    #[serde(skip)]
    by_slot: [Option<usize>; LABEL_COUNT],
}

impl DirectionPointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or, if `label` is already present and `point` is strictly
    /// nearer to `centroid`, replace in place.
    pub fn offer(&mut self, label: DirectionLabel, ray_index: usize, point: Point, centroid: Point) {
        match self.by_slot[label.slot()] {
            Some(pos) => {
                let current = &mut self.points[pos];
                if point.distance(centroid) < current.point.distance(centroid) {
                    current.point = point;
                    current.ray_index = ray_index;
                }
            }
            None => {
                self.by_slot[label.slot()] = Some(self.points.len());
                self.points.push(DirectionPoint { label, ray_index, point });
            }
        }
    }

    #[inline]
    pub fn get(&self, label: DirectionLabel) -> Option<Point> {
        self.by_slot[label.slot()].map(|pos| self.points[pos].point)
    }

    #[inline]
    pub fn contains(&self, label: DirectionLabel) -> bool {
        self.by_slot[label.slot()].is_some()
    }

    /// Position of `label` in discovery order.
    pub fn position(&self, label: DirectionLabel) -> Option<usize> {
        self.by_slot[label.slot()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DirectionPoint> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[DirectionPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Intersect every ray with every polygon edge and keep, per label, the
/// crossing nearest the ray's origin.
///
/// Rays with no crossing leave their label absent.
pub fn intersect_rays(rays: &[Ray], polygon: &Polygon) -> DirectionPointSet {
    let mut set = DirectionPointSet::new();

    for ray in rays {
        if !ray.end.is_finite() || !ray.origin.is_finite() {
            continue;
        }
        for (point, _) in line_polygon_intersections(ray.origin, ray.end, polygon.vertices()) {
            set.offer(ray.label, ray.index, point, ray.origin);
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::{E1, E5, N1, S5};
    use crate::rays::{cast_rays, RayConfig};

    fn square_set() -> DirectionPointSet {
        let square = Polygon::default_square();
        let rays = cast_rays(square.centroid(), 0.0, &RayConfig::default());
        intersect_rays(&rays, &square)
    }

    #[test]
    fn default_square_yields_all_32_labels() {
        let set = square_set();
        assert_eq!(set.len(), 32, "corner rays must not be lost to rounding");
        assert!(set.get(E5).unwrap().approx_eq(Point::new(560.0, 340.0), 1e-9));
        assert!(set.get(S5).unwrap().approx_eq(Point::new(340.0, 560.0), 1e-9));
        assert!(set.get(E1).unwrap().approx_eq(Point::new(560.0, 120.0), 1e-9));
        assert!(set.get(N1).unwrap().approx_eq(Point::new(120.0, 120.0), 1e-9));
    }

    #[test]
    fn discovery_order_is_ray_order() {
        let set = square_set();
        let indices: Vec<usize> = set.iter().map(|p| p.ray_index).collect();
        assert_eq!(indices, (0..32).collect::<Vec<_>>());
        assert_eq!(set.as_slice()[0].label, E5);
        assert_eq!(set.position(E1), Some(28));
    }

    #[test]
    fn recomputation_is_idempotent() {
        assert_eq!(square_set(), square_set());
    }

    #[test]
    fn nearest_crossing_wins_on_concave_polygon() {
        // A notch cut down from the top edge; the E5 ray crosses its two
        // walls and then the east wall.
        let polygon = Polygon::new(vec![
            Point::new(100.0, 100.0),
            Point::new(350.0, 100.0),
            Point::new(350.0, 300.0),
            Point::new(450.0, 300.0),
            Point::new(450.0, 100.0),
            Point::new(540.0, 100.0),
            Point::new(540.0, 400.0),
            Point::new(100.0, 400.0),
        ])
        .unwrap();
        let centroid = Point::new(250.0, 250.0);
        let rays = cast_rays(centroid, 0.0, &RayConfig::default());
        let set = intersect_rays(&rays, &polygon);

        let east = set.get(E5).expect("east ray crosses the boundary");
        let all = line_polygon_intersections(rays[0].origin, rays[0].end, polygon.vertices());
        assert_eq!(all.len(), 3, "test polygon should give three crossings");
        assert!(east.approx_eq(Point::new(350.0, 250.0), 1e-9));
        for (p, _) in all {
            assert!(east.distance(centroid) <= p.distance(centroid));
        }
    }

    #[test]
    fn ray_missing_polygon_leaves_label_absent() {
        // Tiny triangle far to the east of the centroid: only a few rays reach it.
        let polygon = Polygon::new(vec![
            Point::new(600.0, 330.0),
            Point::new(620.0, 340.0),
            Point::new(600.0, 350.0),
        ])
        .unwrap();
        let rays = cast_rays(Point::new(340.0, 340.0), 0.0, &RayConfig::default());
        let set = intersect_rays(&rays, &polygon);
        assert!(set.contains(E5));
        assert!(!set.contains(N1));
        assert!(set.len() < 32);
    }

    #[test]
    fn offer_keeps_nearer_point() {
        let mut set = DirectionPointSet::new();
        let c = Point::new(0.0, 0.0);
        set.offer(E5, 0, Point::new(10.0, 0.0), c);
        set.offer(E5, 0, Point::new(5.0, 0.0), c);
        set.offer(E5, 0, Point::new(8.0, 0.0), c);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(E5), Some(Point::new(5.0, 0.0)));
    }
}

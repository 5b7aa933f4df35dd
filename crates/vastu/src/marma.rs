//! Marma points: crossings among named lines between direction points.

use serde::Serialize;
use tracing::trace;

use crate::catalog::{Catalogs, LinePair, MarmaWalk};
use crate::direction_points::DirectionPointSet;
use crate::geometry::Point;
use crate::intersect::segment_intersection;

/// Points closer than this on both axes count as the same point.
pub const SAME_POINT_TOLERANCE: f64 = 1e-8;

/// Crossing of two catalog lines, numbered from 1 within its set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarmaPoint {
    pub number: usize,
    pub point: Point,
    pub lines: [LinePair; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StationKind {
    Start,
    Crossing,
    End,
}

/// One numbered stop along a walked line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarmaStation {
    pub walk: &'static str,
    /// 1-based position of the walked line within its walk.
    pub line_no: usize,
    /// 1-based, restarting for every walked line.
    pub number: usize,
    pub line: LinePair,
    pub kind: StationKind,
    /// The target line crossed, for [`StationKind::Crossing`].
    pub crossed: Option<LinePair>,
    pub point: Point,
}

/// All marma outputs for one Direction Point Set.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MarmaSets {
    pub primary: Vec<MarmaPoint>,
    /// Mirrored crossings not already in `primary`.
    pub mirrored: Vec<MarmaPoint>,
    pub core: Vec<MarmaPoint>,
    pub stations: Vec<MarmaStation>,
}

/// Endpoints of a named line, if both labels are present.
pub fn resolve_line(pair: LinePair, directions: &DirectionPointSet) -> Option<(Point, Point)> {
    Some((directions.get(pair.0)?, directions.get(pair.1)?))
}

/// Crossings of every catalog line with every later one.
///
/// Lines with a missing endpoint are skipped. Crossings that coincide with
/// an endpoint of any catalog line, or with an earlier crossing, are dropped.
pub fn pairwise_intersections(catalog: &[LinePair], directions: &DirectionPointSet) -> Vec<MarmaPoint> {
    let segments: Vec<(LinePair, Point, Point)> = catalog
        .iter()
        .filter_map(|&pair| resolve_line(pair, directions).map(|(a, b)| (pair, a, b)))
        .collect();
    let endpoints: Vec<Point> = segments.iter().flat_map(|&(_, a, b)| [a, b]).collect();

    let mut found: Vec<MarmaPoint> = Vec::new();
    for (i, &(pair_a, a1, a2)) in segments.iter().enumerate() {
        for &(pair_b, b1, b2) in &segments[i + 1..] {
            let Some(p) = segment_intersection(a1, a2, b1, b2) else {
                continue;
            };
            let seen = |q: &Point| q.approx_eq(p, SAME_POINT_TOLERANCE);
            if endpoints.iter().any(seen) || found.iter().any(|m| seen(&m.point)) {
                continue;
            }
            found.push(MarmaPoint {
                number: found.len() + 1,
                point: p,
                lines: [pair_a, pair_b],
            });
        }
    }

    found
}

/// Drop points whose coordinates exactly match a `known` point; renumber.
pub fn exclude_known(points: Vec<MarmaPoint>, known: &[MarmaPoint]) -> Vec<MarmaPoint> {
    points
        .into_iter()
        .filter(|m| !known.iter().any(|k| k.point == m.point))
        .enumerate()
        .map(|(i, m)| MarmaPoint { number: i + 1, ..m })
        .collect()
}

/// Walk each line of `walk`: its start, its crossings with the targets in
/// target order, then its end, numbered from 1 per line.
pub fn walk_lines(walk: &MarmaWalk, directions: &DirectionPointSet) -> Vec<MarmaStation> {
    let mut stations = Vec::new();

    for (line_index, &line) in walk.lines.iter().enumerate() {
        let Some((start, end)) = resolve_line(line, directions) else {
            trace!(walk = walk.name, line = %format_pair(line), "skipping line with missing endpoint");
            continue;
        };

        let mut number = 0;
        let mut push = |kind, crossed, point| {
            number += 1;
            stations.push(MarmaStation {
                walk: walk.name,
                line_no: line_index + 1,
                number,
                line,
                kind,
                crossed,
                point,
            });
        };

        push(StationKind::Start, None, start);
        for &target in walk.targets {
            let Some((t1, t2)) = resolve_line(target, directions) else {
                continue;
            };
            if let Some(p) = segment_intersection(start, end, t1, t2) {
                let at_endpoint = p.approx_eq(start, SAME_POINT_TOLERANCE) || p.approx_eq(end, SAME_POINT_TOLERANCE);
                if !at_endpoint {
                    push(StationKind::Crossing, Some(target), p);
                }
            }
        }
        push(StationKind::End, None, end);
    }

    stations
}

/// Run every marma computation against one Direction Point Set.
pub fn compute_marma(directions: &DirectionPointSet, catalogs: &Catalogs) -> MarmaSets {
    let primary = pairwise_intersections(catalogs.primary_lines, directions);
    let mirrored = exclude_known(pairwise_intersections(catalogs.mirrored_lines, directions), &primary);
    let core = pairwise_intersections(catalogs.core_lines, directions);
    let stations = catalogs
        .walks
        .iter()
        .flat_map(|walk| walk_lines(walk, directions))
        .collect();

    MarmaSets { primary, mirrored, core, stations }
}

/// `"N8-W2"`.
pub fn format_pair(pair: LinePair) -> String {
    format!("{}-{}", pair.0, pair.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CORE_LINES, MARMA_WALKS};
    use crate::direction::{E1, N1, S1, W1};
    use crate::direction_points::intersect_rays;
    use crate::geometry::Polygon;
    use crate::rays::{cast_rays, RayConfig};

    fn square_directions() -> DirectionPointSet {
        let square = Polygon::default_square();
        intersect_rays(&cast_rays(square.centroid(), 0.0, &RayConfig::default()), &square)
    }

    #[test]
    fn core_lines_cross_nine_times_on_square() {
        let core = pairwise_intersections(&CORE_LINES, &square_directions());
        assert_eq!(core.len(), 9);
        let numbers: Vec<usize> = core.iter().map(|m| m.number).collect();
        assert_eq!(numbers, (1..=9).collect::<Vec<_>>());

        let center = core
            .iter()
            .find(|m| m.lines == [(E1, W1), (N1, S1)])
            .expect("the two long diagonals cross");
        assert!(center.point.approx_eq(Point::new(340.0, 340.0), 1e-9));
    }

    #[test]
    fn marma_points_lie_on_both_segments() {
        let directions = square_directions();
        let sets = compute_marma(&directions, &Catalogs::standard());
        for m in sets.primary.iter().chain(&sets.mirrored).chain(&sets.core) {
            for pair in m.lines {
                let (a, b) = resolve_line(pair, &directions).unwrap();
                assert!(m.point.x >= a.x.min(b.x) - 1e-9 && m.point.x <= a.x.max(b.x) + 1e-9);
                assert!(m.point.y >= a.y.min(b.y) - 1e-9 && m.point.y <= a.y.max(b.y) + 1e-9);
            }
        }
    }

    #[test]
    fn no_marma_point_sits_on_an_endpoint() {
        let directions = square_directions();
        let sets = compute_marma(&directions, &Catalogs::standard());
        let endpoints: Vec<Point> = directions.iter().map(|d| d.point).collect();
        for m in &sets.core {
            assert!(!endpoints.iter().any(|e| e.approx_eq(m.point, SAME_POINT_TOLERANCE)));
        }
    }

    #[test]
    fn mirrored_excludes_primary_points() {
        let sets = compute_marma(&square_directions(), &Catalogs::standard());
        assert!(!sets.primary.is_empty());
        assert!(!sets.mirrored.is_empty());
        for m in &sets.mirrored {
            assert!(!sets.primary.iter().any(|p| p.point == m.point));
        }
    }

    #[test]
    fn primary_has_no_duplicates() {
        let sets = compute_marma(&square_directions(), &Catalogs::standard());
        for (i, a) in sets.primary.iter().enumerate() {
            for b in &sets.primary[i + 1..] {
                assert!(!a.point.approx_eq(b.point, SAME_POINT_TOLERANCE));
            }
        }
    }

    #[test]
    fn walk_numbers_restart_per_line() {
        let stations = walk_lines(&MARMA_WALKS[0], &square_directions());
        for line_no in 1..=3 {
            let line: Vec<&MarmaStation> = stations.iter().filter(|s| s.line_no == line_no).collect();
            assert!(line.len() >= 2);
            assert_eq!(line[0].kind, StationKind::Start);
            assert_eq!(line.last().unwrap().kind, StationKind::End);
            for (i, s) in line.iter().enumerate() {
                assert_eq!(s.number, i + 1);
            }
        }
    }

    #[test]
    fn missing_labels_are_skipped_not_fatal() {
        let empty = DirectionPointSet::new();
        let sets = compute_marma(&empty, &Catalogs::standard());
        assert_eq!(sets, MarmaSets::default());
    }

    #[test]
    fn exclude_known_renumbers() {
        let p = |x, n| MarmaPoint { number: n, point: Point::new(x, 0.0), lines: [(E1, W1), (N1, S1)] };
        let kept = exclude_known(vec![p(1.0, 1), p(2.0, 2), p(3.0, 3)], &[p(2.0, 9)]);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[1].number, 2);
        assert_eq!(kept[1].point.x, 3.0);
    }

    #[test]
    fn pair_formatting() {
        assert_eq!(format_pair((E1, W1)), "E1-W1");
    }
}

//! Inner (`I{n}`), outer-inner (`X{n}`) and midpoint (`A{k}`) points.
//!
//! `n` is the position of the source point in the Direction Point Set, not
//! its compass label. With a complete set, `I0` belongs to E5 and `I28` to E1.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::direction_points::DirectionPointSet;
use crate::geometry::Point;

/// Positional tag of a derived point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub enum PointTag {
    Inner(usize),
    OuterInner(usize),
    /// 1-based.
    Midpoint(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid point tag {0:?}")]
pub struct ParseTagError(pub String);

/// A derived point with its tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaggedPoint {
    pub tag: PointTag,
    pub point: Point,
}

/// Every point derived from one Direction Point Set.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DerivedPoints {
    pub inner: Vec<TaggedPoint>,
    pub outer_inner: Vec<TaggedPoint>,
    pub midpoints: Vec<TaggedPoint>,
}

impl fmt::Display for PointTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointTag::Inner(n) => write!(f, "I{n}"),
            PointTag::OuterInner(n) => write!(f, "X{n}"),
            PointTag::Midpoint(k) => write!(f, "A{k}"),
        }
    }
}

impl FromStr for PointTag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTagError(s.to_string());
        let (prefix, digits) = s.split_at_checked(1).ok_or_else(err)?;
        let n: usize = digits.parse().map_err(|_| err())?;
        match prefix {
            "I" => Ok(PointTag::Inner(n)),
            "X" => Ok(PointTag::OuterInner(n)),
            "A" if n >= 1 => Ok(PointTag::Midpoint(n)),
            _ => Err(err()),
        }
    }
}

impl From<PointTag> for String {
    fn from(tag: PointTag) -> Self {
        tag.to_string()
    }
}

impl DerivedPoints {
    /// Build inner, outer-inner and midpoint families in one go.
    pub fn build(set: &DirectionPointSet, centroid: Point, midpoint_indices: &[usize]) -> Self {
        let inner = inner_points(set, centroid);
        let outer_inner = outer_inner_points(set, centroid);
        let midpoints = midpoints(&inner, &outer_inner, midpoint_indices);
        Self { inner, outer_inner, midpoints }
    }

    pub fn get(&self, tag: PointTag) -> Option<Point> {
        let found = match tag {
            PointTag::Inner(n) => self.inner.get(n),
            PointTag::OuterInner(n) => self.outer_inner.get(n),
            PointTag::Midpoint(k) => k.checked_sub(1).and_then(|i| self.midpoints.get(i)),
        };
        found.map(|t| t.point)
    }
}

/// `I{n} = P + (C − P) / 3` for each direction point in set order.
pub fn inner_points(set: &DirectionPointSet, centroid: Point) -> Vec<TaggedPoint> {
    set.iter()
        .enumerate()
        .map(|(n, dp)| {
            let p = dp.point;
            TaggedPoint {
                tag: PointTag::Inner(n),
                point: Point::new(
                    p.x + (centroid.x - p.x) / 3.0,
                    p.y + (centroid.y - p.y) / 3.0,
                ),
            }
        })
        .collect()
}

/// `X{n} = P + 2 (C − P) / 3` for each direction point in set order.
pub fn outer_inner_points(set: &DirectionPointSet, centroid: Point) -> Vec<TaggedPoint> {
    set.iter()
        .enumerate()
        .map(|(n, dp)| {
            let p = dp.point;
            TaggedPoint {
                tag: PointTag::OuterInner(n),
                point: Point::new(
                    p.x + 2.0 * (centroid.x - p.x) / 3.0,
                    p.y + 2.0 * (centroid.y - p.y) / 3.0,
                ),
            }
        })
        .collect()
}

/// Average the k-th allow-listed inner point with the k-th allow-listed
/// outer-inner point, labelling the results `A1`, `A2`, ...
///
/// Both families are filtered in their own order; when one comes up short,
/// the surplus of the other is dropped.
pub fn midpoints(inner: &[TaggedPoint], outer_inner: &[TaggedPoint], allowed: &[usize]) -> Vec<TaggedPoint> {
    let keep = |t: &&TaggedPoint| match t.tag {
        PointTag::Inner(n) | PointTag::OuterInner(n) => allowed.contains(&n),
        PointTag::Midpoint(_) => false,
    };

    inner
        .iter()
        .filter(keep)
        .zip(outer_inner.iter().filter(keep))
        .enumerate()
        .map(|(k, (i, x))| TaggedPoint {
            tag: PointTag::Midpoint(k + 1),
            point: i.point.midpoint(x.point),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MIDPOINT_INDICES;
    use crate::direction::{E1, E5};
    use crate::direction_points::intersect_rays;
    use crate::geometry::Polygon;
    use crate::rays::{cast_rays, RayConfig};

    const C: Point = Point::new(340.0, 340.0);

    fn square_points() -> (DirectionPointSet, DerivedPoints) {
        let square = Polygon::default_square();
        let set = intersect_rays(&cast_rays(C, 0.0, &RayConfig::default()), &square);
        let derived = DerivedPoints::build(&set, C, &MIDPOINT_INDICES);
        (set, derived)
    }

    #[test]
    fn tags_are_positional() {
        let (set, derived) = square_points();
        assert_eq!(derived.inner.len(), 32);
        assert_eq!(derived.outer_inner.len(), 32);
        let e5 = set.get(E5).unwrap();
        let i0 = derived.get(PointTag::Inner(0)).unwrap();
        assert!(i0.approx_eq(Point::new(e5.x + (C.x - e5.x) / 3.0, e5.y), 1e-12));

        let e1 = set.get(E1).unwrap();
        let x28 = derived.get(PointTag::OuterInner(28)).unwrap();
        assert!(x28.approx_eq(e1.lerp(C, 2.0 / 3.0), 1e-9));
    }

    #[test]
    fn inner_is_a_third_of_the_way() {
        let (set, derived) = square_points();
        for (dp, inner) in set.iter().zip(&derived.inner) {
            let whole = dp.point.distance(C);
            let part = dp.point.distance(inner.point);
            assert!((part - whole / 3.0).abs() < 1e-9, "{} off by {}", inner.tag, part - whole / 3.0);
            assert!(inner.point.distance(C) < whole, "inner must lie strictly between P and C");
        }
    }

    #[test]
    fn twenty_midpoints_from_allow_list() {
        let (_, derived) = square_points();
        assert_eq!(derived.midpoints.len(), 20);
        assert_eq!(derived.midpoints[0].tag, PointTag::Midpoint(1));
        // A3 comes from I4/X4, the S1 corner (560, 560).
        let a3 = derived.get(PointTag::Midpoint(3)).unwrap();
        assert!(a3.approx_eq(Point::new(450.0, 450.0), 1e-9));
        assert_eq!(derived.get(PointTag::Midpoint(0)), None);
        assert_eq!(derived.get(PointTag::Midpoint(21)), None);
    }

    #[test]
    fn short_sets_drop_missing_midpoints() {
        let inner = vec![
            TaggedPoint { tag: PointTag::Inner(2), point: Point::new(0.0, 0.0) },
            TaggedPoint { tag: PointTag::Inner(3), point: Point::new(2.0, 2.0) },
        ];
        let outer = vec![TaggedPoint { tag: PointTag::OuterInner(2), point: Point::new(4.0, 0.0) }];
        let result = midpoints(&inner, &outer, &[2, 3]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].point, Point::new(2.0, 0.0));
    }

    #[test]
    fn tag_parse_and_display() {
        assert_eq!("I12".parse::<PointTag>(), Ok(PointTag::Inner(12)));
        assert_eq!("X4".parse::<PointTag>(), Ok(PointTag::OuterInner(4)));
        assert_eq!("A20".parse::<PointTag>(), Ok(PointTag::Midpoint(20)));
        assert!("A0".parse::<PointTag>().is_err());
        assert!("Q1".parse::<PointTag>().is_err());
        assert!("I".parse::<PointTag>().is_err());
        assert_eq!(PointTag::OuterInner(28).to_string(), "X28");
    }
}

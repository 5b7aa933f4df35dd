//! Zone assembly from templates, and hover hit-testing.

use std::fmt;

use serde::Serialize;

use crate::derived::{DerivedPoints, PointTag};
use crate::direction::DirectionLabel;
use crate::direction_points::DirectionPointSet;
use crate::geometry::{centroid, Point};
use crate::intersect::point_in_polygon;

/// Reference to a labelled point used as a zone corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    Direction(DirectionLabel),
    Inner(usize),
    OuterInner(usize),
    Midpoint(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneFamily {
    /// The square around the centroid.
    Center,
    /// The four octagons around the center.
    Octagon,
    /// Quads between the octagons and the inner ring.
    InnerQuad,
    /// Quads between the polygon boundary and the inner ring.
    Ring,
}

/// Static corner list for one zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneTemplate {
    pub family: ZoneFamily,
    pub corners: &'static [Corner],
}

/// A resolved zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Zone {
    /// 1-based position in display order.
    pub id: usize,
    pub label: &'static str,
    pub family: ZoneFamily,
    pub corners: Vec<Point>,
}

impl Corner {
    pub fn resolve(self, directions: &DirectionPointSet, derived: &DerivedPoints) -> Option<Point> {
        match self {
            Corner::Direction(label) => directions.get(label),
            Corner::Inner(n) => derived.get(PointTag::Inner(n)),
            Corner::OuterInner(n) => derived.get(PointTag::OuterInner(n)),
            Corner::Midpoint(k) => derived.get(PointTag::Midpoint(k)),
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Corner::Direction(label) => write!(f, "{label}"),
            Corner::Inner(n) => write!(f, "{}", PointTag::Inner(n)),
            Corner::OuterInner(n) => write!(f, "{}", PointTag::OuterInner(n)),
            Corner::Midpoint(k) => write!(f, "{}", PointTag::Midpoint(k)),
        }
    }
}

impl ZoneTemplate {
    pub const fn new(family: ZoneFamily, corners: &'static [Corner]) -> Self {
        Self { family, corners }
    }
}

impl Zone {
    /// Even-odd containment test against the zone outline.
    pub fn contains(&self, p: Point) -> bool {
        point_in_polygon(p.x, p.y, &self.corners)
    }

    /// Where the zone's label is drawn.
    pub fn anchor(&self) -> Point {
        centroid(&self.corners).unwrap_or(Point::new(0.0, 0.0))
    }

    /// Tooltip text, e.g. `"1 Brahma"`.
    pub fn caption(&self) -> String {
        format!("{} {}", self.id, self.label)
    }
}

/// Resolve every template whose corners are all present.
///
/// A template with a missing corner is skipped; the ids and labels of the
/// others still follow their template position.
pub fn assemble_zones(
    templates: &[ZoneTemplate],
    names: &[&'static str],
    directions: &DirectionPointSet,
    derived: &DerivedPoints,
) -> Vec<Zone> {
    templates
        .iter()
        .enumerate()
        .filter_map(|(i, template)| {
            let corners = template
                .corners
                .iter()
                .map(|c| c.resolve(directions, derived))
                .collect::<Option<Vec<Point>>>()?;
            Some(Zone {
                id: i + 1,
                label: names.get(i).copied().unwrap_or_default(),
                family: template.family,
                corners,
            })
        })
        .collect()
}

/// The topmost (last drawn) zone containing `p`.
pub fn zone_at(zones: &[Zone], p: Point) -> Option<&Zone> {
    zones.iter().rev().find(|z| z.contains(p))
}

//! One-pass derivation of every layer from a board snapshot.

use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalogs;
use crate::derived::{DerivedPoints, PointTag};
use crate::direction_points::{intersect_rays, DirectionPointSet};
use crate::geometry::{Line, Point, Polygon};
use crate::marma::{compute_marma, MarmaSets};
use crate::rays::{cast_rays, Ray, RayConfig};
use crate::zones::{assemble_zones, Zone};

/// Consistent inputs for one derivation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub polygon: Polygon,
    pub centroid: Point,
    /// Ray offset in degrees.
    pub rotation: f64,
}

/// Everything derived from a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedState {
    pub centroid: Point,
    pub rotation: f64,
    pub rays: Vec<Ray>,
    pub directions: DirectionPointSet,
    pub points: DerivedPoints,
    pub marma: MarmaSets,
    pub spokes: Vec<Line>,
    pub midpoint_links: Vec<Line>,
    pub zones: Vec<Zone>,
}

impl Snapshot {
    /// Snapshot with the centroid at the polygon's vertex mean.
    pub fn centered(polygon: Polygon, rotation: f64) -> Self {
        let centroid = polygon.centroid();
        Self { polygon, centroid, rotation }
    }
}

/// Derive all layers from `snapshot`.
///
/// Each call recomputes from scratch; nothing is carried between calls.
pub fn derive(snapshot: &Snapshot, rays: &RayConfig, catalogs: &Catalogs) -> DerivedState {
    let centroid = snapshot.centroid;

    let rays = cast_rays(centroid, snapshot.rotation, rays);
    let directions = intersect_rays(&rays, &snapshot.polygon);
    let points = DerivedPoints::build(&directions, centroid, catalogs.midpoint_indices);
    let marma = compute_marma(&directions, catalogs);
    let spokes = build_spokes(&directions, &points, catalogs);
    let midpoint_links = build_midpoint_links(&points, catalogs.midpoint_links);
    let zones = assemble_zones(catalogs.zones, catalogs.devta_names, &directions, &points);

    debug!(
        vertices = snapshot.polygon.len(),
        rotation = snapshot.rotation,
        directions = directions.len(),
        midpoints = points.midpoints.len(),
        marma_primary = marma.primary.len(),
        marma_mirrored = marma.mirrored.len(),
        marma_core = marma.core.len(),
        zones = zones.len(),
        "derived board"
    );

    DerivedState {
        centroid,
        rotation: snapshot.rotation,
        rays,
        directions,
        points,
        marma,
        spokes,
        midpoint_links,
        zones,
    }
}

/// Lines from each direction point to its inner point, or to the midpoint
/// that replaces it, plus the extra outer-inner spokes on the corner labels.
pub fn build_spokes(directions: &DirectionPointSet, points: &DerivedPoints, catalogs: &Catalogs) -> Vec<Line> {
    let mut spokes = Vec::with_capacity(directions.len() + catalogs.spoke_extras.len());

    for (n, dp) in directions.iter().enumerate() {
        let midpoint = catalogs
            .spoke_midpoints
            .iter()
            .find(|(label, _)| *label == dp.label)
            .and_then(|&(_, k)| points.get(PointTag::Midpoint(k)));
        let Some(target) = midpoint.or_else(|| points.get(PointTag::Inner(n))) else {
            continue;
        };
        spokes.push(Line::from_points(dp.point, target));

        if let Some(&(_, x)) = catalogs.spoke_extras.iter().find(|(label, _)| *label == dp.label) {
            if let Some(extra) = points.get(PointTag::OuterInner(x)) {
                spokes.push(Line::from_points(extra, target));
            }
        }
    }

    spokes
}

/// Resolve `A{a}`-`A{b}` links; links with a missing end are skipped.
pub fn build_midpoint_links(points: &DerivedPoints, links: &[(usize, usize)]) -> Vec<Line> {
    links
        .iter()
        .filter_map(|&(a, b)| {
            let start = points.get(PointTag::Midpoint(a))?;
            let end = points.get(PointTag::Midpoint(b))?;
            Some(Line::from_points(start, end))
        })
        .collect()
}

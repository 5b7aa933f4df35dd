//! Import a board outline from an SVG floor plan.
//!
//! usvg resolves CSS and shapes into plain paths. Each path is mapped through
//! its absolute transform, curves are flattened with lyon_geom, and the first
//! closed subpath becomes a candidate outline.

use lyon_geom::{point, CubicBezierSegment, QuadraticBezierSegment};
use thiserror::Error;
use usvg::tiny_skia_path::PathSegment;

use crate::geometry::{Point, Polygon};

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("SVG parse error: {0}")]
    Parse(String),
    #[error("no closed outline with at least 3 vertices found in SVG")]
    NoPolygons,
}

/// Curve flattening tolerance in SVG user units.
const CURVE_TOLERANCE: f32 = 0.1;

/// Every outline in the document, in document order.
pub fn extract_outlines(svg_content: &str) -> Result<Vec<Polygon>, SvgError> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options).map_err(|e| SvgError::Parse(e.to_string()))?;

    let mut outlines = Vec::new();
    collect_group(tree.root(), &mut outlines);

    if outlines.is_empty() {
        Err(SvgError::NoPolygons)
    } else {
        Ok(outlines)
    }
}

/// The outline enclosing the largest area.
pub fn largest_outline(svg_content: &str) -> Result<Polygon, SvgError> {
    extract_outlines(svg_content)?
        .into_iter()
        .max_by(|a, b| a.signed_area().abs().total_cmp(&b.signed_area().abs()))
        .ok_or(SvgError::NoPolygons)
}

fn collect_group(group: &usvg::Group, outlines: &mut Vec<Polygon>) {
    for child in group.children() {
        match child {
            usvg::Node::Group(group) => collect_group(group, outlines),
            usvg::Node::Path(path) => {
                if let Some(polygon) = path_to_polygon(path) {
                    outlines.push(polygon);
                }
            }
            _ => {}
        }
    }
}

fn path_to_polygon(path: &usvg::Path) -> Option<Polygon> {
    let mut points = Vec::new();
    let mut last: Option<(f32, f32)> = None;

    // Path data is in the path's local space; outlines live in canvas space.
    let data = path.data().clone().transform(path.abs_transform())?;

    for segment in data.segments() {
        match segment {
            PathSegment::MoveTo(p) => {
                // Only the first subpath is used.
                if !points.is_empty() {
                    break;
                }
                points.push(Point::new(p.x as f64, p.y as f64));
                last = Some((p.x, p.y));
            }
            PathSegment::LineTo(p) => {
                points.push(Point::new(p.x as f64, p.y as f64));
                last = Some((p.x, p.y));
            }
            PathSegment::QuadTo(ctrl, p) => {
                match last {
                    Some((lx, ly)) => {
                        let curve = QuadraticBezierSegment {
                            from: point(lx, ly),
                            ctrl: point(ctrl.x, ctrl.y),
                            to: point(p.x, p.y),
                        };
                        curve.for_each_flattened(CURVE_TOLERANCE, &mut |seg| {
                            points.push(Point::new(seg.to.x as f64, seg.to.y as f64));
                        });
                    }
                    None => points.push(Point::new(p.x as f64, p.y as f64)),
                }
                last = Some((p.x, p.y));
            }
            PathSegment::CubicTo(ctrl1, ctrl2, p) => {
                match last {
                    Some((lx, ly)) => {
                        let curve = CubicBezierSegment {
                            from: point(lx, ly),
                            ctrl1: point(ctrl1.x, ctrl1.y),
                            ctrl2: point(ctrl2.x, ctrl2.y),
                            to: point(p.x, p.y),
                        };
                        curve.for_each_flattened(CURVE_TOLERANCE, &mut |seg| {
                            points.push(Point::new(seg.to.x as f64, seg.to.y as f64));
                        });
                    }
                    None => points.push(Point::new(p.x as f64, p.y as f64)),
                }
                last = Some((p.x, p.y));
            }
            PathSegment::Close => {}
        }
    }

    points.dedup_by(|a, b| a.approx_eq(*b, 1e-6));
    // A closing LineTo back to the start repeats the first vertex.
    if points.len() > 1 && points[0].approx_eq(points[points.len() - 1], 1e-6) {
        points.pop();
    }

    Polygon::new(points).ok()
}

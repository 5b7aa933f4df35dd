//! Ray casting from the centroid to a square clip frame.

use serde::{Deserialize, Serialize};

use crate::direction::{DirectionLabel, LABEL_COUNT};
use crate::geometry::Point;

/// Angle between neighbouring rays, in degrees.
pub const ANGLE_STEP_DEGREES: f64 = 360.0 / LABEL_COUNT as f64;

/// Where the square that stops the rays is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClipFrame {
    /// Square centered on the centroid.
    Centroid { half_extent: f64 },
    /// Square centered on a fixed canvas point.
    Canvas { center: Point, half_extent: f64 },
}

/// Parameters of the ray fan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RayConfig {
    pub canvas_size: f64,
    pub margin: f64,
    /// Added to every ray angle before the user rotation.
    pub angle_base: f64,
    pub frame: ClipFrame,
}

/// Axis-aligned clip boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// One ray of the fan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ray {
    pub index: usize,
    pub label: DirectionLabel,
    pub angle: f64,
    pub origin: Point,
    pub end: Point,
}

impl Default for RayConfig {
    fn default() -> Self {
        Self {
            canvas_size: 676.0,
            margin: 26.0,
            angle_base: 360.0,
            frame: ClipFrame::Centroid { half_extent: 338.0 },
        }
    }
}

impl Default for ClipFrame {
    fn default() -> Self {
        RayConfig::default().frame
    }
}

impl RayConfig {
    /// The long rays drawn on the board: 270° base, reaching a full canvas
    /// width past the centroid.
    pub fn display() -> Self {
        let base = Self::default();
        Self {
            angle_base: 270.0,
            frame: ClipFrame::Centroid { half_extent: base.canvas_size },
            ..base
        }
    }

    /// Clip boundaries for a fan cast from `centroid`.
    pub fn bounds(&self, centroid: Point) -> Bounds {
        let (center, half_extent) = match self.frame {
            ClipFrame::Centroid { half_extent } => (centroid, half_extent),
            ClipFrame::Canvas { center, half_extent } => (center, half_extent),
        };
        let reach = half_extent - self.margin;
        Bounds {
            left: center.x - reach,
            right: center.x + reach,
            top: center.y - reach,
            bottom: center.y + reach,
        }
    }
}

/// Angle of ray `index` in degrees, reduced to [0, 360).
pub fn ray_angle(index: usize, offset: f64, angle_base: f64) -> f64 {
    (index as f64 * ANGLE_STEP_DEGREES + angle_base + offset).rem_euclid(360.0)
}

/// Endpoint of the line from `origin` at `angle` degrees on the clip square.
///
/// Shallow rays (|slope| <= 1) stop on the left or right boundary, steep ones
/// on the top or bottom.
pub fn clip_to_bounds(origin: Point, angle: f64, bounds: Bounds) -> Point {
    let radians = angle.to_radians();
    let slope = radians.tan();

    if slope.abs() <= 1.0 {
        if radians.cos() > 0.0 {
            Point::new(bounds.right, origin.y + slope * (bounds.right - origin.x))
        } else {
            Point::new(bounds.left, origin.y - slope * (origin.x - bounds.left))
        }
    } else if radians.sin() > 0.0 {
        Point::new(origin.x + (bounds.bottom - origin.y) / slope, bounds.bottom)
    } else {
        Point::new(origin.x - (origin.y - bounds.top) / slope, bounds.top)
    }
}

/// Cast all 32 rays from `centroid`, rotated by `offset` degrees.
///
/// Each ray's label comes from the same index that produced its angle.
pub fn cast_rays(centroid: Point, offset: f64, config: &RayConfig) -> Vec<Ray> {
    let bounds = config.bounds(centroid);
    (0..LABEL_COUNT)
        .map(|index| {
            let angle = ray_angle(index, offset, config.angle_base);
            Ray {
                index,
                label: DirectionLabel::for_ray_index(index),
                angle,
                origin: centroid,
                end: clip_to_bounds(centroid, angle, bounds),
            }
        })
        .collect()
}

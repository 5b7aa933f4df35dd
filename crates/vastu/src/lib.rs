//! # vastu
//!
//! Geometry behind a vastu drawing board. Given a polygon and a centroid,
//! cast 32 direction rays and label where they cross the polygon. From those
//! points build the inner rings, the marma line crossings and the 45 labelled
//! zones.
//!
//! ```
//! use vastu::{Board, Catalogs, Point, RayConfig};
//!
//! let board = Board::default();
//! let state = board.derive(&RayConfig::default(), &Catalogs::standard());
//! assert_eq!(state.directions.len(), 32);
//!
//! let zone = vastu::zone_at(&state.zones, Point::new(340.0, 340.0)).unwrap();
//! assert_eq!(zone.label, "Brahma");
//! ```

pub mod board;
pub mod catalog;
pub mod derived;
pub mod direction;
pub mod direction_points;
pub mod error;
pub mod geometry;
pub mod intersect;
pub mod marma;
pub mod pipeline;
pub mod rays;
pub mod svg;
pub mod zones;

pub use board::{Board, CentroidMode};
pub use catalog::{Catalogs, LinePair};
pub use derived::{DerivedPoints, PointTag, TaggedPoint};
pub use direction::{DirectionLabel, Quarter};
pub use direction_points::{intersect_rays, DirectionPoint, DirectionPointSet};
pub use error::GeometryError;
pub use geometry::{centroid, distance_point_to_segment, Line, Point, Polygon};
pub use intersect::{point_in_polygon, segment_intersection};
pub use marma::{compute_marma, MarmaPoint, MarmaSets, MarmaStation, StationKind};
pub use pipeline::{derive, DerivedState, Snapshot};
pub use rays::{cast_rays, ClipFrame, Ray, RayConfig};
pub use svg::{extract_outlines, largest_outline, SvgError};
pub use zones::{assemble_zones, zone_at, Zone, ZoneFamily};

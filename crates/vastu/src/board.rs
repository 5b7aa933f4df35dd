//! Editable board state: polygon, centroid mode and rotation.
//!
//! Every edit either succeeds and leaves the board consistent or fails and
//! leaves it untouched. Derivation always runs against a cloned snapshot.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalogs;
use crate::error::GeometryError;
use crate::geometry::{Point, Polygon};
use crate::pipeline::{derive, DerivedState, Snapshot};
use crate::rays::RayConfig;

/// Vertices are kept inside this square while dragging.
pub const EDIT_MIN: f64 = 35.0;
pub const EDIT_MAX: f64 = 645.0;
/// Grid pitch used when snapping vertices.
pub const GRID_STEP: f64 = 10.0;
/// How close a click must be to grab a vertex.
pub const PICK_RADIUS: f64 = 10.0;
/// How close a click must be to an edge to insert a vertex on it.
pub const INSERT_THRESHOLD: f64 = 500.0;

/// How the centroid follows the polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CentroidMode {
    /// Recomputed on every polygon edit; cannot be dragged.
    #[default]
    Snap,
    /// Recomputed on polygon edits; can be dragged.
    Free,
    /// Neither recomputed nor draggable.
    Locked,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    polygon: Polygon,
    centroid: Point,
    mode: CentroidMode,
    rotation: f64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Polygon::default_square())
    }
}

impl Board {
    pub fn new(polygon: Polygon) -> Self {
        let centroid = polygon.centroid();
        Self { polygon, centroid, mode: CentroidMode::Snap, rotation: 0.0 }
    }

    /// Restore a saved board. A locked centroid keeps `centroid`; other
    /// modes use it only if given, else recompute.
    pub fn restore(polygon: Polygon, mode: CentroidMode, centroid: Option<Point>, rotation: f64) -> Self {
        let centroid = match (mode, centroid) {
            (CentroidMode::Snap, _) | (_, None) => polygon.centroid(),
            (_, Some(c)) => c,
        };
        let mut board = Self { polygon, centroid, mode, rotation: 0.0 };
        board.set_rotation(rotation);
        board
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn centroid(&self) -> Point {
        self.centroid
    }

    pub fn mode(&self) -> CentroidMode {
        self.mode
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    fn polygon_changed(&mut self) {
        if self.mode != CentroidMode::Locked {
            self.centroid = self.polygon.centroid();
        }
    }

    /// Move vertex `index` to `p`, clamped to the edit square and optionally
    /// snapped to the grid. Returns the position actually used.
    pub fn move_vertex(&mut self, index: usize, p: Point, snap: bool) -> Result<Point, GeometryError> {
        if !p.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        let fit = |v: f64| {
            let v = if snap { (v / GRID_STEP).round() * GRID_STEP } else { v };
            v.clamp(EDIT_MIN, EDIT_MAX)
        };
        let placed = Point::new(fit(p.x), fit(p.y));
        self.polygon.set_vertex(index, placed)?;
        self.polygon_changed();
        debug!(index, x = placed.x, y = placed.y, "moved vertex");
        Ok(placed)
    }

    /// Vertex under `p`, if any.
    pub fn pick_vertex(&self, p: Point) -> Option<usize> {
        self.polygon.vertex_near(p, PICK_RADIUS)
    }

    /// Insert a vertex at `p` on the nearest edge.
    pub fn insert_vertex(&mut self, p: Point) -> Result<usize, GeometryError> {
        let index = self.polygon.insert_near(p, INSERT_THRESHOLD)?;
        self.polygon_changed();
        debug!(index, vertices = self.polygon.len(), "inserted vertex");
        Ok(index)
    }

    pub fn remove_vertex(&mut self, index: usize) -> Result<Point, GeometryError> {
        let removed = self.polygon.remove_vertex(index)?;
        self.polygon_changed();
        debug!(index, vertices = self.polygon.len(), "removed vertex");
        Ok(removed)
    }

    /// Double-click: delete the vertex under `p` or insert one on the
    /// nearest edge. Returns the affected index.
    pub fn toggle_vertex(&mut self, p: Point) -> Result<usize, GeometryError> {
        match self.pick_vertex(p) {
            Some(index) => self.remove_vertex(index).map(|_| index),
            None => self.insert_vertex(p),
        }
    }

    /// Move the centroid; only honoured in [`CentroidMode::Free`].
    pub fn drag_centroid(&mut self, p: Point) -> bool {
        if self.mode != CentroidMode::Free || !p.is_finite() {
            return false;
        }
        self.centroid = p;
        true
    }

    /// Switch mode; entering [`CentroidMode::Snap`] recomputes the centroid.
    pub fn set_mode(&mut self, mode: CentroidMode) {
        self.mode = mode;
        if mode == CentroidMode::Snap {
            self.centroid = self.polygon.centroid();
        }
    }

    /// Set the ray offset, clamped to [0, 360]; non-finite input becomes 0.
    pub fn set_rotation(&mut self, degrees: f64) -> f64 {
        self.rotation = if degrees.is_finite() { degrees.clamp(0.0, 360.0) } else { 0.0 };
        self.rotation
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            polygon: self.polygon.clone(),
            centroid: self.centroid,
            rotation: self.rotation,
        }
    }

    pub fn derive(&self, rays: &RayConfig, catalogs: &Catalogs) -> DerivedState {
        derive(&self.snapshot(), rays, catalogs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_clamps_to_edit_square() {
        let mut board = Board::default();
        let placed = board.move_vertex(0, Point::new(-50.0, 900.0), false).unwrap();
        assert_eq!(placed, Point::new(EDIT_MIN, EDIT_MAX));
        assert_eq!(board.polygon().vertices()[0], placed);
    }

    #[test]
    fn move_snaps_to_grid() {
        let mut board = Board::default();
        let placed = board.move_vertex(1, Point::new(553.0, 126.0), true).unwrap();
        assert_eq!(placed, Point::new(550.0, 130.0));
    }

    #[test]
    fn snap_mode_tracks_polygon() {
        let mut board = Board::default();
        board.move_vertex(2, Point::new(600.0, 600.0), false).unwrap();
        assert_eq!(board.centroid(), board.polygon().centroid());
        assert!(!board.drag_centroid(Point::new(10.0, 10.0)), "snap mode is not draggable");
    }

    #[test]
    fn locked_centroid_stays_put() {
        let mut board = Board::default();
        board.set_mode(CentroidMode::Locked);
        let before = board.centroid();
        board.move_vertex(2, Point::new(600.0, 600.0), false).unwrap();
        assert_eq!(board.centroid(), before);
        assert!(!board.drag_centroid(Point::new(10.0, 10.0)));
    }

    #[test]
    fn free_centroid_drags_until_next_edit() {
        let mut board = Board::default();
        board.set_mode(CentroidMode::Free);
        assert!(board.drag_centroid(Point::new(300.0, 320.0)));
        assert_eq!(board.centroid(), Point::new(300.0, 320.0));

        board.insert_vertex(Point::new(340.0, 125.0)).unwrap();
        assert_eq!(board.centroid(), board.polygon().centroid());
    }

    #[test]
    fn back_to_snap_recomputes() {
        let mut board = Board::default();
        board.set_mode(CentroidMode::Free);
        board.drag_centroid(Point::new(1.0, 1.0));
        board.set_mode(CentroidMode::Snap);
        assert_eq!(board.centroid(), Point::new(340.0, 340.0));
    }

    #[test]
    fn toggle_deletes_then_refuses_below_three() {
        let mut board = Board::default();
        assert_eq!(board.toggle_vertex(Point::new(121.0, 121.0)), Ok(0));
        assert_eq!(board.polygon().len(), 3);
        let result = board.toggle_vertex(Point::new(560.0, 120.0));
        assert_eq!(result, Err(GeometryError::TooFewVertices { count: 2 }));
        assert_eq!(board.polygon().len(), 3);
    }

    #[test]
    fn toggle_inserts_away_from_vertices() {
        let mut board = Board::default();
        let index = board.toggle_vertex(Point::new(560.0, 300.0)).unwrap();
        assert_eq!(index, 2);
        assert_eq!(board.polygon().len(), 5);
    }

    #[test]
    fn rotation_is_clamped() {
        let mut board = Board::default();
        assert_eq!(board.set_rotation(400.0), 360.0);
        assert_eq!(board.set_rotation(-5.0), 0.0);
        assert_eq!(board.set_rotation(f64::NAN), 0.0);
        assert_eq!(board.set_rotation(22.5), 22.5);
    }

    #[test]
    fn restore_respects_mode() {
        let square = Polygon::default_square();
        let locked = Board::restore(square.clone(), CentroidMode::Locked, Some(Point::new(1.0, 2.0)), 10.0);
        assert_eq!(locked.centroid(), Point::new(1.0, 2.0));
        assert_eq!(locked.rotation(), 10.0);

        let snapped = Board::restore(square, CentroidMode::Snap, Some(Point::new(1.0, 2.0)), 0.0);
        assert_eq!(snapped.centroid(), Point::new(340.0, 340.0));
    }

    #[test]
    fn failed_edit_leaves_board_unchanged() {
        let mut board = Board::default();
        let before = board.clone();
        assert!(board.move_vertex(9, Point::new(1.0, 1.0), false).is_err());
        assert!(board.insert_vertex(Point::new(f64::NAN, 0.0)).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn derive_uses_snapshot() {
        let board = Board::default();
        let state = board.derive(&RayConfig::default(), &Catalogs::standard());
        assert_eq!(state.centroid, board.centroid());
        assert_eq!(state.zones.len(), 45);
    }
}

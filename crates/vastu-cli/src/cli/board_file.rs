//! Board files: YAML documents holding a board and how to draw it.
//!
//! Every section is optional; a missing section takes its default, so an
//! empty file describes the starting square.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use vastu::{Board, CentroidMode, Point, Polygon, RayConfig};

use super::style::Style;

/// A saved board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardFile {
    /// Outline vertices in canvas coordinates
    pub polygon: Polygon,

    pub centroid: CentroidSpec,

    /// Direction offset in degrees, 0..=360
    pub rotation: f64,

    /// Ray fan configuration
    pub rays: RayConfig,

    pub style: Style,

    /// Image or PDF drawn beneath the board, relative to the board file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<PathBuf>,
}

/// Centroid mode and, for free or locked boards, its position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CentroidSpec {
    pub mode: CentroidMode,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
}

impl BoardFile {
    /// Load a board file from YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read board file {}", path.display()))?;
        let file = Self::from_yaml(&content)
            .with_context(|| format!("invalid board file {}", path.display()))?;
        debug!(path = %path.display(), vertices = file.polygon.len(), "loaded board");
        Ok(file)
    }

    /// Load `path` if it exists, else start from the default board.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), "board file not found, starting from the default square");
            Ok(Self::default())
        }
    }

    /// Parse a board file from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_yaml()?)
            .with_context(|| format!("failed to write board file {}", path.display()))?;
        debug!(path = %path.display(), "saved board");
        Ok(())
    }

    /// A board file holding `polygon` with every other section defaulted.
    pub fn with_polygon(polygon: Polygon) -> Self {
        Self { polygon, ..Self::default() }
    }

    /// Editable board restored from this file.
    pub fn board(&self) -> Board {
        Board::restore(
            self.polygon.clone(),
            self.centroid.mode,
            self.centroid.position,
            self.rotation,
        )
    }

    /// Copy the board's state back into this file. Snap boards do not store
    /// a centroid since it is always recomputed.
    pub fn update_from(&mut self, board: &Board) {
        self.polygon = board.polygon().clone();
        self.rotation = board.rotation();
        self.centroid = CentroidSpec {
            mode: board.mode(),
            position: match board.mode() {
                CentroidMode::Snap => None,
                CentroidMode::Free | CentroidMode::Locked => Some(board.centroid()),
            },
        };
    }

    /// Background path resolved against the directory holding the board file.
    pub fn background_path(&self, board_path: Option<&Path>) -> Option<PathBuf> {
        let background = self.background.as_ref()?;
        let base = board_path.and_then(Path::parent);
        Some(match base {
            Some(dir) if background.is_relative() => dir.join(background),
            _ => background.clone(),
        })
    }
}

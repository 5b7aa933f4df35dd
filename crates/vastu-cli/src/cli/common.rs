//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use vastu::{Board, Catalogs, DerivedState, Point};

use super::board_file::BoardFile;

/// Board selection shared by the read-only commands.
#[derive(Debug, Args)]
pub struct BoardArgs {
    /// Board file (YAML); the default square when omitted
    pub board: Option<PathBuf>,

    /// Override the board's rotation in degrees
    #[arg(short, long, allow_negative_numbers = true)]
    pub rotation: Option<f64>,
}

/// A loaded board file with its restored board.
pub struct LoadedBoard {
    pub file: BoardFile,
    pub board: Board,
    pub path: Option<PathBuf>,
}

impl BoardArgs {
    pub fn load(&self) -> Result<LoadedBoard> {
        let file = match &self.board {
            Some(path) => BoardFile::load(path)?,
            None => BoardFile::default(),
        };
        let mut board = file.board();
        if let Some(rotation) = self.rotation {
            board.set_rotation(rotation);
        }
        Ok(LoadedBoard { file, board, path: self.board.clone() })
    }
}

impl LoadedBoard {
    /// Run the full derivation with the board file's ray settings.
    pub fn derive(&self) -> DerivedState {
        self.board.derive(&self.file.rays, &Catalogs::standard())
    }
}

/// Write `content` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

/// Parse `"x,y"` into a point.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|_| format!("invalid x coordinate '{}'", x.trim()))?;
    let y: f64 = y.trim().parse().map_err(|_| format!("invalid y coordinate '{}'", y.trim()))?;
    let p = Point::new(x, y);
    if !p.is_finite() {
        return Err(format!("coordinates must be finite, got '{s}'"));
    }
    Ok(p)
}

/// Media type of a file, judged by its extension.
pub fn media_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "pdf" => Some("application/pdf"),
        "svg" => Some("image/svg+xml"),
        "yaml" | "yml" => Some("application/yaml"),
        _ => None,
    }
}

/// Escape text for use in SVG attribute values and text nodes.
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

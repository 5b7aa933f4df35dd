//! `import`: start a board from a floor plan.
//!
//! SVG plans become the board outline. Raster images and PDFs are kept as the
//! board's background; anything else is refused.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::info;
use vastu::largest_outline;

use super::board_file::BoardFile;
use super::common::media_type;

/// Media types accepted as a board background.
pub const BACKGROUND_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/jpg", "application/pdf"];

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// SVG outline, or a PNG, JPEG or PDF background
    pub input: PathBuf,

    /// Board file to write
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Build a board file from `input`.
pub fn import_plan(input: &Path) -> Result<BoardFile> {
    match media_type(input) {
        Some("image/svg+xml") => {
            let content = fs::read_to_string(input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let polygon = largest_outline(&content)
                .with_context(|| format!("no usable outline in {}", input.display()))?;
            info!(vertices = polygon.len(), "imported outline");
            Ok(BoardFile::with_polygon(polygon))
        }
        Some(kind) if BACKGROUND_TYPES.contains(&kind) => {
            if !input.is_file() {
                bail!("{} does not exist", input.display());
            }
            info!(kind, "imported background");
            Ok(BoardFile { background: Some(input.to_path_buf()), ..BoardFile::default() })
        }
        kind => bail!(
            "unsupported file type {} for {}; upload an SVG outline or one of {}",
            kind.unwrap_or("(unknown)"),
            input.display(),
            BACKGROUND_TYPES.join(", ")
        ),
    }
}

/// How a board file at `board` should refer to `background`: relative to the
/// board's directory when possible, else absolute.
fn background_reference(background: &Path, board: &Path) -> PathBuf {
    match board.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        None => background.to_path_buf(),
        Some(dir) => match background.strip_prefix(dir) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => fs::canonicalize(background).unwrap_or_else(|_| background.to_path_buf()),
        },
    }
}

pub fn cmd_import(args: &ImportArgs) -> Result<()> {
    let mut file = import_plan(&args.input)?;
    if let Some(background) = file.background.take() {
        file.background = Some(background_reference(&background, &args.output));
    }
    file.save(&args.output)?;
    eprintln!("Wrote {}", args.output.display());
    Ok(())
}

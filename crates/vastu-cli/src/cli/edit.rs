//! `edit`: apply one board edit and save the board file.
//!
//! A rejected edit leaves the file untouched and exits non-zero.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Subcommand, ValueEnum};
use tracing::warn;
use vastu::{Board, CentroidMode, GeometryError, Point};

use super::board_file::BoardFile;
use super::common::parse_point;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Board file to edit; created from the default square if missing
    pub board: PathBuf,

    /// Write the edited board here instead of back to BOARD
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub op: EditOp,
}

#[derive(Debug, Subcommand)]
pub enum EditOp {
    /// Move a vertex, clamped to the edit square
    Move {
        index: usize,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        to: Point,
        /// Snap to the 10-unit grid
        #[arg(long)]
        snap: bool,
    },
    /// Insert a vertex on the edge nearest to a point
    Insert {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        at: Point,
    },
    /// Delete a vertex (a polygon keeps at least three)
    Delete { index: usize },
    /// Delete the vertex under a point, or insert one if there is none
    Toggle {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        at: Point,
    },
    /// Move the centroid (free mode only)
    Centroid {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        to: Point,
    },
    /// Change how the centroid follows the polygon
    Mode {
        #[arg(value_enum)]
        mode: ModeArg,
    },
    /// Set the direction offset in degrees, clamped to 0..=360
    Rotate {
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Snap,
    Free,
    Locked,
}

impl From<ModeArg> for CentroidMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Snap => CentroidMode::Snap,
            ModeArg::Free => CentroidMode::Free,
            ModeArg::Locked => CentroidMode::Locked,
        }
    }
}

/// Apply `op` to `board`, returning a one-line summary.
pub fn apply(board: &mut Board, op: &EditOp) -> Result<String> {
    let summary = match *op {
        EditOp::Move { index, to, snap } => {
            let placed = board.move_vertex(index, to, snap).map_err(rejected)?;
            format!("moved vertex {index} to ({}, {})", placed.x, placed.y)
        }
        EditOp::Insert { at } => {
            let index = board.insert_vertex(at).map_err(rejected)?;
            format!("inserted vertex {index}")
        }
        EditOp::Delete { index } => {
            let removed = board.remove_vertex(index).map_err(rejected)?;
            format!("deleted vertex {index} at ({}, {})", removed.x, removed.y)
        }
        EditOp::Toggle { at } => {
            let before = board.polygon().len();
            let index = board.toggle_vertex(at).map_err(rejected)?;
            if board.polygon().len() > before {
                format!("inserted vertex {index}")
            } else {
                format!("deleted vertex {index}")
            }
        }
        EditOp::Centroid { to } => {
            if !board.drag_centroid(to) {
                warn!(mode = ?board.mode(), "centroid drag rejected");
                bail!("the centroid can only be moved in free mode (board is {:?})", board.mode());
            }
            format!("moved centroid to ({}, {})", to.x, to.y)
        }
        EditOp::Mode { mode } => {
            board.set_mode(mode.into());
            format!("centroid mode {:?}", board.mode())
        }
        EditOp::Rotate { degrees } => {
            let applied = board.set_rotation(degrees);
            format!("rotation {applied}")
        }
    };
    Ok(summary)
}

fn rejected(err: GeometryError) -> anyhow::Error {
    warn!(%err, "edit rejected");
    err.into()
}

pub fn cmd_edit(args: &EditArgs) -> Result<()> {
    let mut file = BoardFile::load_or_default(&args.board)?;
    let mut board = file.board();

    let summary = apply(&mut board, &args.op)?;
    file.update_from(&board);

    let target = args.output.as_ref().unwrap_or(&args.board);
    file.save(target)?;
    eprintln!("{summary}; wrote {}", target.display());
    Ok(())
}

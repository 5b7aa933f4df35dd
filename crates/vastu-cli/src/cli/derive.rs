//! `derive`: print every derived layer as JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use super::common::{write_output, BoardArgs};

#[derive(Debug, Args)]
pub struct DeriveArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Output JSON file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,
}

pub fn cmd_derive(args: &DeriveArgs) -> Result<()> {
    let loaded = args.board.load()?;
    let state = loaded.derive();
    debug!(
        directions = state.directions.len(),
        marma = state.marma.primary.len(),
        zones = state.zones.len(),
        "derived board"
    );

    let json = if args.compact {
        serde_json::to_string(&state)?
    } else {
        serde_json::to_string_pretty(&state)?
    };
    write_output(args.output.as_deref(), &json)
}

//! `hover`: report the zone under a point.

use anyhow::Result;
use clap::Args;
use vastu::{zone_at, Point};

use super::common::{parse_point, BoardArgs};

#[derive(Debug, Args)]
pub struct HoverArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Point to test, as X,Y in canvas units
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub at: Point,

    /// Print the zone as JSON (`null` when none)
    #[arg(long)]
    pub json: bool,
}

pub fn cmd_hover(args: &HoverArgs) -> Result<()> {
    let loaded = args.board.load()?;
    let state = loaded.derive();
    let zone = zone_at(&state.zones, args.at);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&zone)?);
        return Ok(());
    }

    match zone {
        Some(zone) => println!("{}", zone.caption()),
        None => println!("none"),
    }
    Ok(())
}

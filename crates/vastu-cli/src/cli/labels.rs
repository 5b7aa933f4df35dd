//! `labels`: list the 32 rays with their labels, angles and crossings.

use std::fmt::Write as _;

use anyhow::Result;
use clap::Args;
use vastu::DerivedState;

use super::common::BoardArgs;

#[derive(Debug, Args)]
pub struct LabelsArgs {
    #[command(flatten)]
    pub board: BoardArgs,
}

/// One row per ray, in ray order.
pub fn labels_table(state: &DerivedState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>5}  {:<5}  {:>8}  {}", "ray", "label", "angle", "crossing");
    for ray in &state.rays {
        let crossing = match state.directions.get(ray.label) {
            Some(p) => format!("({:.2}, {:.2})", p.x, p.y),
            None => "-".to_string(),
        };
        let _ = writeln!(out, "{:>5}  {:<5}  {:>8.2}  {}", ray.index, ray.label.to_string(), ray.angle, crossing);
    }
    out
}

pub fn cmd_labels(args: &LabelsArgs) -> Result<()> {
    let loaded = args.board.load()?;
    let state = loaded.derive();
    print!("{}", labels_table(&state));
    Ok(())
}

//! vastu - derive, draw and edit vastu boards from the command line
//!
//! Usage:
//!   vastu derive [board.yaml]              Print the derived layers as JSON
//!   vastu render [board.yaml] -o out.svg   Draw the board as SVG
//!   vastu export [board.yaml] -o out.png   Rasterize the board
//!   vastu hover [board.yaml] --at X,Y      Name the zone under a point
//!   vastu labels [board.yaml]              List the 32 rays
//!   vastu edit board.yaml <op>             Edit and save a board
//!   vastu import plan.svg -o board.yaml    Start a board from a plan

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cli::derive::DeriveArgs;
use cli::edit::EditArgs;
use cli::export::ExportArgs;
use cli::hover::HoverArgs;
use cli::import::ImportArgs;
use cli::labels::LabelsArgs;
use cli::render::RenderArgs;

#[derive(Debug, Parser)]
#[command(name = "vastu", version, about = "Derive, draw and edit vastu boards")]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every derived layer as JSON
    Derive(DeriveArgs),
    /// Draw the board as an SVG document
    Render(RenderArgs),
    /// Rasterize the drawing to PNG or JPEG
    Export(ExportArgs),
    /// Name the zone under a point
    Hover(HoverArgs),
    /// List ray labels, angles and crossings
    Labels(LabelsArgs),
    /// Apply one edit to a board file
    Edit(EditArgs),
    /// Start a board from an SVG plan or a background image
    Import(ImportArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Derive(args) => cli::cmd_derive(args),
        Command::Render(args) => cli::cmd_render(args),
        Command::Export(args) => cli::cmd_export(args),
        Command::Hover(args) => cli::cmd_hover(args),
        Command::Labels(args) => cli::cmd_labels(args),
        Command::Edit(args) => cli::cmd_edit(args),
        Command::Import(args) => cli::cmd_import(args),
    }
}

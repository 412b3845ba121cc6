//! Circle Painter - command line front end.
//!
//! This tool allows you to:
//! - Print radius, area and circumference of every circle in a scene
//! - Render a scene to SVG
//! - Write the demo scene as an editable JSON file

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use circle_painter::app::App;
use circle_painter::utils::logger;

#[derive(Parser)]
#[command(name = "circle_painter")]
#[command(about = "Draw circles onto SVG and report their measurements")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the measurement report
    Report {
        /// Scene file (JSON); the demo scene when omitted
        #[arg(short, long)]
        scene: Option<PathBuf>,
    },
    /// Render the scene to an SVG file
    Render {
        /// Output SVG path
        #[arg(short, long)]
        output: PathBuf,

        /// Scene file (JSON); the demo scene when omitted
        #[arg(short, long)]
        scene: Option<PathBuf>,
    },
    /// Write the demo scene to a JSON file
    InitScene {
        /// Output JSON path
        #[arg(short, long)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match cli.command {
        Command::Report { scene } => {
            print!("{}", App::new(scene).report()?);
        }
        Command::Render { output, scene } => {
            App::new(scene).render_to_file(&output)?;
        }
        Command::InitScene { output, force } => {
            App::init_scene(&output, force)?;
        }
    }

    Ok(())
}

//! ray - renders test images to PNG
//!
//! Without a subcommand the sky backdrop is rendered.

use anyhow::Result;
use clap::{value_parser, ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "ray")]
#[command(author, version, about = "Render test images to PNG")]
#[command(long_about = "
Renders an image one pixel at a time and writes it as PNG.

Examples:
  ray                                   # Sky backdrop to data/img.png
  ray sky --width 640 --height 360      # Custom size
  ray gradient -o out/gradient.png      # UV gradient
  RUST_LOG=debug ray sky                # Full logging
")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    output: OutputArgs,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Red/green gradient over x and y
    #[command(visible_alias = "g")]
    Gradient,

    /// Sky backdrop seen from a pinhole camera
    #[command(visible_alias = "s")]
    Sky,
}

/// Image size and destination, shared by every command.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
struct OutputArgs {
    /// Image width in pixels
    #[arg(long, global = true, default_value_t = 1025, value_parser = value_parser!(u32).range(1..))]
    width: u32,

    /// Image height in pixels
    #[arg(long, global = true, default_value_t = 512, value_parser = value_parser!(u32).range(1..))]
    height: u32,

    /// Output PNG path (parent directories are created)
    #[arg(short, long, global = true, default_value = "data/img.png")]
    output: PathBuf,
}

/// Maps `-v` count to a filter; `RUST_LOG` overrides it.
fn log_filter(verbose: u8) -> EnvFilter {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Sky) {
        Commands::Gradient => commands::gradient::run(&cli.output, cli.verbose),
        Commands::Sky => commands::sky::run(&cli.output, cli.verbose),
    }
}

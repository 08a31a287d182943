//! trueno-canvas: interactive ASCII canvas
//!
//! Reads drawing commands from stdin and prints the canvas on `show`.
//!
//! Run: `trueno-canvas --width 80 --height 24`

use std::io::{stdin, stdout, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trueno_canvas::config::Config;
use trueno_canvas::session::Session;

/// trueno-canvas: draw rectangles, circles and crosses on a character grid
#[derive(Parser, Debug)]
#[command(name = "trueno-canvas")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Command-driven ASCII rasterizer", long_about = None)]
struct Cli {
    /// Canvas width in columns
    #[arg(long)]
    width: Option<usize>,

    /// Canvas height in rows
    #[arg(long)]
    height: Option<usize>,

    /// Background character
    #[arg(long)]
    background: Option<char>,

    /// Config file path (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Suppress the banner and prompt
    #[arg(short, long)]
    quiet: bool,

    /// Log informational events to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Log debug events to stderr
    #[arg(long)]
    debug: bool,
}

impl Cli {
    /// Merge CLI flags over the file configuration.
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => Config::default_path()
                .filter(|path| path.exists())
                .map(Config::load)
                .transpose()?
                .unwrap_or_default(),
        };

        if let Some(width) = self.width {
            config.canvas.width = width;
        }
        if let Some(height) = self.height {
            config.canvas.height = height;
        }
        if let Some(background) = self.background {
            config.canvas.background = background;
        }
        if self.quiet {
            config.session.banner = false;
            config.session.prompt.clear();
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = cli.resolve_config()?;
    tracing::debug!(?config, "configuration resolved");

    let canvas = config.canvas.build().context("invalid canvas settings")?;
    let mut session = Session::with_config(
        &config.session,
        canvas,
        stdin().lock(),
        BufWriter::new(stdout().lock()),
    );
    session.run()?;

    Ok(())
}

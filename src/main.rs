//! asciigen - render text as ASCII-art banners
//!
//! ```text
//!  *  ** **** ****** *
//! * ** * *** * ***
//! *** * * *** *** ***
//! * * ** *** ** ***
//! * ***  **** ****** *
//! ```

use anyhow::bail;
use asciigen_config::Config;
use asciigen_core::{list_colors, list_fonts, BannerConfig, BannerGenerator, MAX_PADDING};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// asciigen - Generate ASCII art from text
#[derive(Parser, Debug)]
#[command(name = "asciigen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to convert to ASCII art
    text: Option<String>,

    /// Font to use (default: simple)
    #[arg(short = 'f', long)]
    font: Option<String>,

    /// Foreground color
    #[arg(short = 'c', long)]
    color: Option<String>,

    /// Frame the banner with this character
    #[arg(short = 'b', long)]
    border: Option<char>,

    /// Space between border and text
    #[arg(long, value_parser = clap::value_parser!(u16).range(..=MAX_PADDING as i64))]
    padding: Option<u16>,

    /// List available fonts
    #[arg(long)]
    list_fonts: bool,

    /// List available colors
    #[arg(long)]
    list_colors: bool,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Args {
    /// Layer command line flags over the configured defaults
    fn banner_config(&self, config: &Config) -> BannerConfig {
        let mut banner = config.banner_config();
        if let Some(font) = &self.font {
            banner.font = font.clone();
        }
        if let Some(color) = &self.color {
            banner.color = Some(color.clone());
        }
        if let Some(border) = self.border {
            banner.border = Some(border);
        }
        if let Some(padding) = self.padding {
            banner.padding = padding.into();
        }
        banner
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the banner
    let log_level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                format!(
                    "asciigen={0},asciigen_core={0},asciigen_config={0}",
                    log_level
                )
            }),
        ))
        .init();

    tracing::info!("Starting asciigen v{}", env!("CARGO_PKG_VERSION"));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    if args.list_fonts {
        println!("Available fonts:");
        for font in list_fonts() {
            println!("  {font}");
        }
    }
    if args.list_colors {
        println!("Available colors:");
        for color in list_colors() {
            println!("  {color}");
        }
    }
    if args.list_fonts || args.list_colors {
        return Ok(());
    }

    let Some(text) = args.text.as_deref() else {
        Args::command().print_help()?;
        return Ok(());
    };

    let config = match &args.config {
        Some(path) if !path.exists() => bail!("Config file not found: {}", path.display()),
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    tracing::debug!(?config, "Configuration loaded");

    let generator = BannerGenerator::with_config(args.banner_config(&config));
    println!("{}", generator.render(text)?);
    Ok(())
}

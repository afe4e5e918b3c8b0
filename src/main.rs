//! Landing - renderer and dev server for a small marketing site with
//! per-page SEO metadata.

mod cli;
mod config;
mod core;
mod embed;
mod generator;
mod logger;
mod page;
mod render;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config),
        Commands::Serve { .. } => cli::serve::serve_site(&config),
        Commands::Render { args } => cli::render::run_render(args, &config),
        Commands::Query { args } => cli::query::run_query(args),
    }
}

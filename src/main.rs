//! crawlmap - sitemap.xml and robots.txt generator.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use crawlmap::cli::{self, Cli, Commands};
use crawlmap::config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Generate { args } => cli::generate::run_generate(args, &config).map(|_| ()),
        Commands::Routes { args } => cli::routes::run_routes(args, &config),
    }
}

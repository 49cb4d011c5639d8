//! Command-line interface definitions.

use crate::core::BuildMode;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// sitemap.xml and robots.txt generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: crawlmap.toml)
    #[arg(short = 'C', long, default_value = "crawlmap.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write sitemap.xml and robots.txt into the output directory
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Print the normalized route records as JSON
    #[command(visible_alias = "r")]
    Routes {
        #[command(flatten)]
        args: RoutesArgs,
    },
}

/// Shared input arguments for Generate and Routes commands
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// Page tree JSON file, `-` reads from stdin
    #[arg(short, long, default_value = "pages.json", value_hint = clap::ValueHint::FilePath)]
    pub pages: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Generate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Build mode, selects where the site URL comes from
    #[arg(short, long, value_enum, default_value_t = BuildMode::Generate)]
    pub mode: BuildMode,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Override site URL for deployment.
    ///
    /// Useful for CI/CD deployments where the production URL differs from
    /// the one in crawlmap.toml.
    ///
    /// Example:
    ///   crawlmap generate --site-url "https://example.github.io/docs"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Skip robots.txt
    #[arg(long)]
    pub no_robots: bool,
}

/// Routes command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RoutesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Build mode the routes are resolved under
    #[arg(short, long, value_enum, default_value_t = BuildMode::Generate)]
    pub mode: BuildMode,

    /// Pretty print JSON output
    #[arg(long)]
    pub pretty: bool,
}

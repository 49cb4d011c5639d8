//! Generate command implementation.

use crate::cli::GenerateArgs;
use crate::config::SiteConfig;
use crate::generator::{self, GenerateReport, GenerationOptions};
use crate::page::load_pages;
use crate::{debug, log};
use anyhow::Result;

/// Load the page tree and write sitemap.xml and robots.txt.
pub fn run_generate(args: &GenerateArgs, config: &SiteConfig) -> Result<GenerateReport> {
    let pages = load_pages(&args.input.pages)?;
    debug!("generate"; "mode {}, {} top-level pages", args.mode, pages.len());

    let options = GenerationOptions::new(config, args.mode);
    let report = generator::generate(&options, &pages)?;

    log!("generate"; "done, output in {}", options.output_dir.display());
    Ok(report)
}

//! Sitemap and robots.txt generation.
//!
//! Pipeline for one run:
//!
//! ```text
//! page tree ─► routes::normalize_routes ─► sitemap::render_sitemap ─► <output>/sitemap.xml
//! rules     ─────────────────────────────► robots::render_robots   ─► <output>/robots.txt
//! ```
//!
//! - **matcher**: glob exclusion patterns
//! - **routes**: page tree → ordered route records
//! - **sitemap**: route records → XML
//! - **robots**: rule blocks + sitemap references → text
//! - **options**: config + build mode → [`GenerationOptions`]
//!
//! Both documents are built in memory and written in one call each. The
//! sitemap is written first; if that fails, robots.txt is not attempted.

pub mod matcher;
mod options;
pub mod robots;
pub mod routes;
pub mod sitemap;

pub use options::GenerationOptions;
pub use robots::render_robots;
pub use routes::{RouteDefaults, RouteRecord, normalize_routes};
pub use sitemap::render_sitemap;

use crate::{debug, log, page::Page};
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Files written by [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Number of `<url>` entries in the sitemap.
    pub routes: usize,
    pub sitemap: PathBuf,
    /// `None` when robots.txt is disabled.
    pub robots: Option<PathBuf>,
}

/// Build the ordered route records without writing anything.
pub fn collect_routes(options: &GenerationOptions, pages: &[Page]) -> Vec<RouteRecord> {
    normalize_routes(pages, &options.defaults, &options.exclude, &options.routes)
}

/// Write the sitemap and, unless disabled, robots.txt.
///
/// Existing files are overwritten.
pub fn generate(options: &GenerationOptions, pages: &[Page]) -> Result<GenerateReport> {
    fs::create_dir_all(&options.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            options.output_dir.display()
        )
    })?;

    let routes = collect_routes(options, pages);
    debug!("sitemap"; "{} pages collected, {} routes kept", count_pages(pages), routes.len());

    let sitemap_path = options.sitemap_path();
    write_file(&sitemap_path, &render_sitemap(&routes))
        .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;
    log!("sitemap"; "{} ({} routes)", display_name(&sitemap_path), routes.len());

    let robots_path = match (&options.robots, options.robots_path()) {
        (Some(robots), Some(path)) => {
            let content = render_robots(
                &robots.rules,
                &robots.sitemaps,
                &options.sitemap_file,
                options.site_url.as_deref(),
            );
            write_file(&path, &content)
                .with_context(|| format!("Failed to write robots.txt to {}", path.display()))?;
            log!("robots"; "{}", display_name(&path));
            Some(path)
        }
        _ => {
            debug!("robots"; "disabled");
            None
        }
    };

    Ok(GenerateReport {
        routes: routes.len(),
        sitemap: sitemap_path,
        robots: robots_path,
    })
}

/// Write `content`, creating parent directories for nested file names.
fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

fn display_name(path: &Path) -> std::borrow::Cow<'_, str> {
    path.file_name().unwrap_or_default().to_string_lossy()
}

/// Pages visited by route collection (top level and direct children).
fn count_pages(pages: &[Page]) -> usize {
    pages.iter().map(|p| 1 + p.children.len()).sum()
}

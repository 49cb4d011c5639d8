//! Resolved inputs for one generation run.

use super::routes::RouteDefaults;
use crate::config::{RobotsConfig, RouteOverride, SiteConfig};
use crate::core::BuildMode;
use crate::log;
use std::path::PathBuf;

/// Everything the generators need, resolved once from config and build mode.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// Site URL used for `Sitemap:` references.
    pub site_url: Option<String>,
    /// Directory both files are written to.
    pub output_dir: PathBuf,
    /// Sitemap file name (relative to `output_dir`).
    pub sitemap_file: String,
    pub defaults: RouteDefaults,
    pub exclude: Vec<String>,
    pub routes: Vec<RouteOverride>,
    /// `None` when robots.txt is disabled.
    pub robots: Option<RobotsConfig>,
}

impl GenerationOptions {
    pub fn new(config: &SiteConfig, mode: BuildMode) -> Self {
        let site_url = config.site_url(mode);
        let robots = config.robots().cloned();

        if site_url.is_none()
            && robots
                .as_ref()
                .is_some_and(|r| !r.sitemaps.is_disabled())
        {
            log!("warning"; "`site.url` is not set, sitemap references in robots.txt will be relative");
        }

        Self {
            site_url,
            output_dir: config.output_dir(),
            sitemap_file: config.sitemap.file_name.clone(),
            defaults: RouteDefaults {
                lastmod: config.sitemap.lastmod.clone(),
                changefreq: config.sitemap.changefreq.clone(),
                priority: config.sitemap.priority.clone(),
            },
            exclude: config.sitemap.exclude.clone(),
            routes: config.sitemap.routes.clone(),
            robots,
        }
    }

    pub fn sitemap_path(&self) -> PathBuf {
        self.output_dir.join(&self.sitemap_file)
    }

    pub fn robots_path(&self) -> Option<PathBuf> {
        self.robots
            .as_ref()
            .map(|robots| self.output_dir.join(&robots.file_name))
    }
}

//! Route normalization: page tree → ordered sitemap records.
//!
//! 1. Collect page paths two levels deep (pages and their direct children),
//!    skipping dynamic paths (`:param`, `*`).
//! 2. Drop paths matching an exclusion pattern.
//! 3. Seed each record with the default metadata.
//! 4. Apply route overrides with the same `url`, in declaration order.
//! 5. Reverse, so the last collected page comes first.

use super::matcher::not_matching;
use crate::config::RouteOverride;
use crate::core::{ChangeFreq, Field, Priority};
use crate::page::{Page, is_dynamic_path};
use serde::Serialize;

/// One `<url>` entry of the sitemap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRecord {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<Field<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<Field<ChangeFreq>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Field<Priority>>,
}

impl RouteRecord {
    /// Record with no metadata.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
        }
    }

    /// Overwrite every field the override defines.
    pub fn apply(&mut self, route: &RouteOverride) {
        if let Some(lastmod) = &route.lastmod {
            self.lastmod = Some(lastmod.clone());
        }
        if let Some(changefreq) = &route.changefreq {
            self.changefreq = Some(changefreq.clone());
        }
        if let Some(priority) = &route.priority {
            self.priority = Some(priority.clone());
        }
    }
}

/// Default metadata every record starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteDefaults {
    pub lastmod: Option<Field<String>>,
    pub changefreq: Option<Field<ChangeFreq>>,
    pub priority: Option<Field<Priority>>,
}

impl RouteDefaults {
    fn record(&self, url: String) -> RouteRecord {
        RouteRecord {
            url,
            lastmod: self.lastmod.clone(),
            changefreq: self.changefreq.clone(),
            priority: self.priority.clone(),
        }
    }
}

/// Flatten the page tree into static paths, in discovery order.
///
/// Only top-level pages and their direct children are visited. Children of a
/// dynamic page are not visited.
pub fn collect_paths(pages: &[Page]) -> Vec<String> {
    let mut paths = Vec::with_capacity(pages.len());

    for page in pages.iter().filter(|p| !p.is_dynamic()) {
        paths.push(page.path.clone());
        paths.extend(
            page.children
                .iter()
                .filter(|child| !child.is_dynamic())
                .map(|child| child.path.clone()),
        );
    }

    paths
}

/// Build the ordered sitemap records for a page tree.
pub fn normalize_routes(
    pages: &[Page],
    defaults: &RouteDefaults,
    exclude: &[String],
    overrides: &[RouteOverride],
) -> Vec<RouteRecord> {
    let paths = not_matching(collect_paths(pages), exclude);

    let mut records: Vec<RouteRecord> = paths
        .into_iter()
        .map(|path| {
            debug_assert!(!is_dynamic_path(&path));
            let mut record = defaults.record(path.clone());
            for route in overrides.iter().filter(|route| route.url == path) {
                record.apply(route);
            }
            record
        })
        .collect();

    records.reverse();
    records
}

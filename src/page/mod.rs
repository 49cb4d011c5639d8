//! Page tree supplied by the host's page discovery.
//!
//! The tree is read from JSON, either a bare array or an object with a
//! `pages` key:
//!
//! ```json
//! [
//!   { "path": "/" },
//!   { "path": "/about", "children": [{ "path": "/about/team" }] }
//! ]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    io::{self, Read},
    path::Path,
};

/// A discovered page and its nested pages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page {
    pub path: String,
    #[serde(default)]
    pub children: Vec<Page>,
}

impl Page {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Page>) -> Self {
        self.children = children;
        self
    }

    /// Whether the path is a dynamic route (`/blog/:slug`, `/docs/*`).
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        is_dynamic_path(&self.path)
    }
}

/// Path contains a parameter (`:`) or wildcard (`*`) marker.
#[inline]
pub fn is_dynamic_path(path: &str) -> bool {
    path.contains([':', '*'])
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PageTreeRepr {
    List(Vec<Page>),
    Wrapped { pages: Vec<Page> },
}

/// Parse a page tree from JSON.
pub fn parse_pages(json: &str) -> Result<Vec<Page>> {
    let repr: PageTreeRepr = serde_json::from_str(json).context("Invalid page tree JSON")?;
    Ok(match repr {
        PageTreeRepr::List(pages) | PageTreeRepr::Wrapped { pages } => pages,
    })
}

/// Load a page tree from a file, or from stdin when `path` is `-`.
pub fn load_pages(path: &Path) -> Result<Vec<Page>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buf)
            .context("Failed to read page tree from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read page tree from {}", path.display()))?
    };

    parse_pages(&content)
        .with_context(|| format!("Failed to parse page tree from {}", path.display()))
}

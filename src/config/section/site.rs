//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://example.com"   # Production URL, used by `generate` mode
//! base = "/"                    # Base path, used by `build` mode
//! output = "public"             # Output directory (relative to site root)
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Production site URL (e.g., "https://example.com").
    pub url: Option<String>,

    /// Base path the site is served under.
    pub base: String,

    /// Output directory for generated files.
    pub output: PathBuf,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            url: None,
            base: "/".into(),
            output: "public".into(),
        }
    }
}

impl SiteSectionConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const OUTPUT: FieldPath = FieldPath::new("site.output");

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid URL with scheme (e.g., `https://example.com`)
    /// - `output` must not be empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.url
            && url::Url::parse(url).is_err()
        {
            diag.error_with_hint(
                Self::URL,
                format!("`{url}` is not a valid absolute URL"),
                "include the scheme, e.g. `https://example.com`",
            );
        }

        if self.output.as_os_str().is_empty() {
            diag.error(Self::OUTPUT, "output directory must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_defaults() {
        let site = SiteSectionConfig::default();
        assert_eq!(site.url, None);
        assert_eq!(site.base, "/");
        assert_eq!(site.output, PathBuf::from("public"));
    }

    #[test]
    fn test_validate_url() {
        let mut diag = ConfigDiagnostics::new();
        let site = SiteSectionConfig {
            url: Some("https://example.com/blog".into()),
            ..Default::default()
        };
        site.validate(&mut diag);
        assert!(diag.is_empty());

        let mut diag = ConfigDiagnostics::new();
        let site = SiteSectionConfig {
            url: Some("example.com".into()),
            ..Default::default()
        };
        site.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, SiteSectionConfig::URL);
    }

    #[test]
    fn test_validate_empty_output() {
        let mut diag = ConfigDiagnostics::new();
        let site = SiteSectionConfig {
            output: PathBuf::new(),
            ..Default::default()
        };
        site.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, SiteSectionConfig::OUTPUT);
    }
}

//! `[sitemap]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [sitemap]
//! file_name = "sitemap.xml"   # Output file name (relative to output dir)
//! lastmod = "2024-01-01"      # Default <lastmod>, `false` to disable
//! changefreq = "daily"        # Default <changefreq>, `false` to disable
//! priority = "0.7"            # Default <priority>, `false` to disable
//! exclude = ["/admin/**"]     # Glob patterns of routes to leave out
//!
//! [[sitemap.routes]]          # Per-route overrides, matched by exact url
//! url = "/"
//! priority = 1.0
//! changefreq = false
//! ```
//!
//! Dynamic routes (`/blog/:slug`) are always left out.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::{ChangeFreq, Field, Priority};
use serde::{Deserialize, Deserializer, de};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Output file name.
    pub file_name: String,
    /// Default last modification date (`YYYY-MM-DD` or W3C datetime).
    #[serde(deserialize_with = "lastmod_field")]
    pub lastmod: Option<Field<String>>,
    /// Default change frequency.
    pub changefreq: Option<Field<ChangeFreq>>,
    /// Default priority, `0.0` to `1.0`.
    pub priority: Option<Field<Priority>>,
    /// Exclusion glob patterns.
    pub exclude: Vec<String>,
    /// Per-route overrides.
    pub routes: Vec<RouteOverride>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            file_name: "sitemap.xml".into(),
            lastmod: None,
            changefreq: Some(Field::Value(ChangeFreq::Daily)),
            priority: Some(Field::Value(Priority::new("0.7"))),
            exclude: Vec::new(),
            routes: Vec::new(),
        }
    }
}

/// Metadata for a single route, overriding the section defaults.
///
/// Fields left out keep the default; `false` disables the element for
/// this route only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouteOverride {
    pub url: String,
    #[serde(deserialize_with = "lastmod_field")]
    pub lastmod: Option<Field<String>>,
    pub changefreq: Option<Field<ChangeFreq>>,
    pub priority: Option<Field<Priority>>,
}

impl RouteOverride {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// `lastmod` as a string, a TOML date/datetime, or `false`.
///
/// Dates are kept as written (`2024-01-01`, `2024-01-01T10:00:00Z`).
fn lastmod_field<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Field<String>>, D::Error> {
    match toml::Value::deserialize(deserializer)? {
        toml::Value::Boolean(false) => Ok(Some(Field::Disabled)),
        toml::Value::String(text) => Ok(Some(Field::Value(text))),
        toml::Value::Datetime(date) => Ok(Some(Field::Value(date.to_string()))),
        other => Err(de::Error::custom(format!(
            "`lastmod` expects a date like `2024-01-01` or `false`, found {}",
            other.type_str()
        ))),
    }
}

impl SitemapConfig {
    pub const FILE_NAME: FieldPath = FieldPath::new("sitemap.file_name");
    pub const PRIORITY: FieldPath = FieldPath::new("sitemap.priority");
    pub const EXCLUDE: FieldPath = FieldPath::new("sitemap.exclude");
    pub const ROUTES: FieldPath = FieldPath::new("sitemap.routes");

    /// Validate sitemap configuration.
    ///
    /// # Checks
    /// - `file_name` must not be empty
    /// - default and per-route priorities must be within `[0.0, 1.0]`
    /// - every route override needs a `url`
    /// - exclusion patterns must not be empty strings (warning)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.file_name.trim().is_empty() {
            diag.error(Self::FILE_NAME, "sitemap file name must not be empty");
        }

        if let Some(Field::Value(priority)) = &self.priority
            && !priority.is_valid()
        {
            diag.error_with_hint(
                Self::PRIORITY,
                format!("`{priority}` is not a number between 0.0 and 1.0"),
                "use `false` to leave <priority> out",
            );
        }

        for (i, route) in self.routes.iter().enumerate() {
            if route.url.is_empty() {
                diag.error(Self::ROUTES, format!("route #{} has no `url`", i + 1));
            }
            if let Some(Field::Value(priority)) = &route.priority
                && !priority.is_valid()
            {
                diag.error(
                    Self::ROUTES,
                    format!(
                        "route `{}`: priority `{priority}` is not a number between 0.0 and 1.0",
                        route.url
                    ),
                );
            }
        }

        if self.exclude.iter().any(|p| p.trim().is_empty()) {
            diag.warn(Self::EXCLUDE, "empty exclusion pattern matches nothing");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sitemap_defaults() {
        let config = SitemapConfig::default();
        assert_eq!(config.file_name, "sitemap.xml");
        assert_eq!(config.lastmod, None);
        assert_eq!(config.changefreq, Some(Field::Value(ChangeFreq::Daily)));
        assert_eq!(config.priority, Some(Field::Value(Priority::new("0.7"))));
        assert!(config.exclude.is_empty());
        assert!(config.routes.is_empty());
    }

    #[test]
    fn test_sitemap_parse_disabled_fields() {
        let config: SitemapConfig =
            toml::from_str("changefreq = false\npriority = false\nlastmod = false").unwrap();
        assert_eq!(config.changefreq, Some(Field::Disabled));
        assert_eq!(config.priority, Some(Field::Disabled));
        assert_eq!(config.lastmod, Some(Field::Disabled));
    }

    #[test]
    fn test_sitemap_parse_routes() {
        let config: SitemapConfig = toml::from_str(
            r#"
exclude = ["/about/*"]

[[routes]]
url = "/"
lastmod = "2022-09-03"
priority = 1.0

[[routes]]
url = "/about"
changefreq = "weekly"
priority = false
"#,
        )
        .unwrap();

        assert_eq!(config.exclude, vec!["/about/*"]);
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[0].url, "/");
        assert_eq!(
            config.routes[0].lastmod,
            Some(Field::Value("2022-09-03".into()))
        );
        assert_eq!(config.routes[0].priority, Some(Field::Value(Priority::new("1"))));
        assert_eq!(config.routes[0].changefreq, None);
        assert_eq!(
            config.routes[1].changefreq,
            Some(Field::Value(ChangeFreq::Weekly))
        );
        assert_eq!(config.routes[1].priority, Some(Field::Disabled));
    }

    #[test]
    fn test_lastmod_unquoted_date() {
        let config: SitemapConfig = toml::from_str(
            r#"
lastmod = 2024-01-01

[[routes]]
url = "/"
lastmod = 2024-05-01T10:00:00Z
"#,
        )
        .unwrap();

        assert_eq!(config.lastmod, Some(Field::Value("2024-01-01".into())));
        assert_eq!(
            config.routes[0].lastmod,
            Some(Field::Value("2024-05-01T10:00:00Z".into()))
        );
    }

    #[test]
    fn test_lastmod_invalid_type() {
        let err = toml::from_str::<SitemapConfig>("lastmod = 20240101").unwrap_err();
        assert!(err.to_string().contains("`lastmod` expects a date"));
        assert!(toml::from_str::<SitemapConfig>("lastmod = true").is_err());
    }

    #[test]
    fn test_sitemap_unknown_changefreq_rejected() {
        assert!(toml::from_str::<SitemapConfig>("changefreq = \"sometimes\"").is_err());
    }

    #[test]
    fn test_validate_priority_range() {
        let config: SitemapConfig = toml::from_str("priority = \"1.5\"").unwrap();
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, SitemapConfig::PRIORITY);
    }

    #[test]
    fn test_validate_route_overrides() {
        let config: SitemapConfig = toml::from_str(
            r#"
[[routes]]
priority = "0.5"

[[routes]]
url = "/blog"
priority = "2"
"#,
        )
        .unwrap();
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 2);
        assert!(diag.errors()[0].message.contains("route #1"));
        assert!(diag.errors()[1].message.contains("/blog"));
    }

    #[test]
    fn test_validate_defaults_ok() {
        let mut diag = ConfigDiagnostics::new();
        SitemapConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_validate_empty_pattern_warns() {
        let config = SitemapConfig {
            exclude: vec![String::new()],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }
}

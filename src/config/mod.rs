//! Site configuration management for `crawlmap.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── robots     # [robots]
//! │   ├── serve      # [serve]
//! │   ├── site       # [site]
//! │   └── sitemap    # [sitemap]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config file lookup, path normalization
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! A missing config file is not an error: every section has defaults, so a
//! bare `crawlmap generate` writes a sitemap and a permissive robots.txt.

pub mod section;
pub mod types;
mod util;

pub use section::{
    Directive, RobotsConfig, RouteOverride, RuleBlock, ServeConfig, SiteSectionConfig,
    SitemapConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{find_config_file, normalize_path};

use crate::{
    cli::{Cli, Commands, GenerateArgs},
    core::{BuildMode, Field},
    debug, log,
};
use anyhow::{Context, Result};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing crawlmap.toml
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site URL, base path, output directory
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Development server address
    #[serde(default)]
    pub serve: ServeConfig,

    /// Sitemap defaults, exclusions and route overrides
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// robots.txt settings, `false` disables the file
    #[serde(default = "default_robots", deserialize_with = "robots_or_false")]
    pub robots: Field<RobotsConfig>,

    /// `--site-url` from the command line (internal use only)
    #[serde(skip)]
    pub site_url_override: Option<String>,
}

fn default_robots() -> Field<RobotsConfig> {
    Field::Value(RobotsConfig::default())
}

/// `robots = false` or a `[robots]` table.
///
/// The table is handed to `RobotsConfig` through the same map access, so
/// unknown keys inside it are still reported by `serde_ignored`.
fn robots_or_false<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Field<RobotsConfig>, D::Error> {
    struct RobotsVisitor;

    impl<'de> Visitor<'de> for RobotsVisitor {
        type Value = Field<RobotsConfig>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("`false` or a [robots] table")
        }

        fn visit_bool<E: de::Error>(self, enabled: bool) -> Result<Self::Value, E> {
            Ok(if enabled { default_robots() } else { Field::Disabled })
        }

        fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
            RobotsConfig::deserialize(de::value::MapAccessDeserializer::new(map)).map(Field::Value)
        }
    }

    deserializer.deserialize_any(RobotsVisitor)
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteSectionConfig::default(),
            serve: ServeConfig::default(),
            sitemap: SitemapConfig::default(),
            robots: default_robots(),
            site_url_override: None,
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root is
    /// the config file's parent directory, or cwd when no file is found.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                let mut config = Self::default();
                config.root = cwd.clone();
                config.config_path = cwd.join(&cli.config);
                config
            }
        };

        config.apply_command_options(cli);
        config.normalize_paths();
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Absolute output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.site.output)
    }

    /// robots.txt settings, `None` when disabled.
    pub fn robots(&self) -> Option<&RobotsConfig> {
        self.robots.value()
    }

    /// Resolve the site URL for a build mode.
    ///
    /// - `development`: dev server address from `[serve]`
    /// - `build`: `[site].base`
    /// - `generate`: `[site].url`, if configured
    ///
    /// A `--site-url` given on the command line wins in every mode.
    pub fn site_url(&self, mode: BuildMode) -> Option<String> {
        if let Some(url) = &self.site_url_override {
            return Some(url.clone());
        }
        match mode {
            BuildMode::Development => Some(self.serve.url()),
            BuildMode::Build => Some(self.site.base.clone()),
            BuildMode::Generate => self.site.url.clone(),
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Generate { args } => self.apply_generate_args(args),
            Commands::Routes { args } => crate::logger::set_verbose(args.input.verbose),
        }
    }

    /// Apply generate arguments from CLI.
    fn apply_generate_args(&mut self, args: &GenerateArgs) {
        crate::logger::set_verbose(args.input.verbose);

        Self::update_option(&mut self.site.output, args.output.as_ref());

        // Override site URL if provided via CLI
        if let Some(ref url) = args.site_url {
            self.site.url = Some(url.clone());
            self.site_url_override = Some(url.clone());
        }

        if args.no_robots {
            self.robots = Field::Disabled;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize root and output directory to absolute paths.
    fn normalize_paths(&mut self) {
        let root = normalize_path(&self.root);
        self.site.output = normalize_path(&root.join(&self.site.output));
        self.set_root(&root);
        // Note: sitemap.file_name and robots.file_name stay relative.
        // They are resolved against output_dir() at write time.
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.sitemap.validate(&mut diag);
        if let Some(robots) = self.robots() {
            robots.validate(&mut diag);
        }

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ChangeFreq, Priority};

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        assert!(SiteConfig::from_str("[site\nurl = \"https://example.com\"").is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.base, "/");
        assert_eq!(config.serve.port, 3000);
        assert_eq!(config.sitemap.file_name, "sitemap.xml");
        assert_eq!(config.robots().unwrap().file_name, "robots.txt");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.sitemap.changefreq, Some(Field::Value(ChangeFreq::Daily)));
        assert_eq!(
            config.sitemap.priority,
            Some(Field::Value(Priority::new("0.7")))
        );
        assert!(config.robots().is_some());
    }

    #[test]
    fn test_full_config() {
        let config = test_parse_config(
            r#"
[site]
url = "https://example.com"
output = "dist"

[serve]
port = 8080

[sitemap]
changefreq = "weekly"
exclude = ["/admin/**"]

[[sitemap.routes]]
url = "/"
priority = "1.0"

[robots]
sitemaps = ["sitemap.xml", "sitemap-news.xml"]

[[robots.rules]]
User-agent = "*"
Disallow = "/admin"
"#,
        );

        assert_eq!(config.site.url.as_deref(), Some("https://example.com"));
        assert_eq!(config.site.output, PathBuf::from("dist"));
        assert_eq!(config.serve.port, 8080);
        assert_eq!(config.sitemap.exclude, vec!["/admin/**"]);
        assert_eq!(config.sitemap.routes.len(), 1);

        let robots = config.robots().unwrap();
        assert_eq!(robots.rules.len(), 1);
        assert_eq!(
            robots.sitemaps,
            Field::Value(vec!["sitemap.xml".into(), "sitemap-news.xml".into()])
        );
    }

    #[test]
    fn test_robots_false() {
        let config = test_parse_config("robots = false");
        assert!(config.robots().is_none());
    }

    #[test]
    fn test_robots_true_keeps_defaults() {
        let config = test_parse_config("robots = true");
        assert_eq!(config.robots().unwrap().file_name, "robots.txt");
    }

    #[test]
    fn test_robots_error_message_kept() {
        let err = SiteConfig::from_str("[[robots.rules]]\nNoindex = \"/\"").unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Noindex"), "unexpected message: {message}");
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nurl = \"https://example.com\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.url.as_deref(), Some("https://example.com"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_site_url_by_mode() {
        let config = test_parse_config(
            r#"
[site]
url = "https://example.com"
base = "/docs/"

[serve]
port = 4000
"#,
        );

        assert_eq!(
            config.site_url(BuildMode::Development).as_deref(),
            Some("http://127.0.0.1:4000")
        );
        assert_eq!(config.site_url(BuildMode::Build).as_deref(), Some("/docs/"));
        assert_eq!(
            config.site_url(BuildMode::Generate).as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_unknown_robots_field_detected() {
        let content = "[robots]\nfilename = \"x.txt\"\n\n[[robots.rules]]\nUser-agent = \"*\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(ignored, vec!["robots.filename"]);
        let robots = config.robots().unwrap();
        assert_eq!(robots.file_name, "robots.txt");
        assert_eq!(robots.rules.len(), 1);
    }

    #[test]
    fn test_robots_rejects_other_values() {
        assert!(SiteConfig::from_str("robots = \"yes\"").is_err());
    }

    #[test]
    fn test_cli_site_url_applies_in_every_mode() {
        use clap::Parser;

        let cli = Cli::try_parse_from(["crawlmap", "generate", "-U", "https://cdn.example.com"])
            .unwrap();
        let mut config = test_parse_config("[site]\nurl = \"https://example.com\"\nbase = \"/docs/\"");
        config.apply_command_options(&cli);

        for mode in [BuildMode::Development, BuildMode::Build, BuildMode::Generate] {
            assert_eq!(
                config.site_url(mode).as_deref(),
                Some("https://cdn.example.com"),
                "mode {mode}"
            );
        }
        assert_eq!(config.site.url.as_deref(), Some("https://cdn.example.com"));
    }

    #[test]
    fn test_site_url_generate_unset() {
        let config = SiteConfig::default();
        assert_eq!(config.site_url(BuildMode::Generate), None);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = test_parse_config(
            r#"
[site]
url = "not a url"

[sitemap]
priority = "7"

[robots]
file_name = ""
"#,
        );

        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err}");
        };
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_validate_skips_disabled_robots() {
        let config = test_parse_config("robots = false");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_dir_joins_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/srv/site"));
        assert_eq!(config.output_dir(), PathBuf::from("/srv/site/public"));
    }
}

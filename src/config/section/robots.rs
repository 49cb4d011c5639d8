//! `[robots]` section configuration.
//!
//! Set `robots = false` at the top level to skip `robots.txt` entirely.
//!
//! # Example
//!
//! ```toml
//! [robots]
//! file_name = "robots.txt"    # Output file name (relative to output dir)
//! sitemaps = ["sitemap.xml"]  # Sitemap references, `false` to disable
//!
//! [[robots.rules]]            # One table per block of rules
//! User-agent = "*"
//! Disallow = ["/admin", "/private"]
//! Crawl-delay = 10
//! ```
//!
//! Without rules a permissive `User-agent: *` / `Disallow:` block is written.
//! Without sitemap references the sitemap file name is referenced.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::Field;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    /// Output file name.
    pub file_name: String,
    /// Blocks of rules, rendered in order.
    pub rules: Vec<RuleBlock>,
    /// Sitemap references, relative to the site URL.
    pub sitemaps: Field<Vec<String>>,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            file_name: "robots.txt".into(),
            rules: Vec::new(),
            sitemaps: Field::Value(Vec::new()),
        }
    }
}

impl RobotsConfig {
    pub const FILE_NAME: FieldPath = FieldPath::new("robots.file_name");
    pub const RULES: FieldPath = FieldPath::new("robots.rules");

    /// Validate robots configuration.
    ///
    /// # Checks
    /// - `file_name` must not be empty
    /// - empty rule blocks render nothing (warning)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.file_name.trim().is_empty() {
            diag.error(Self::FILE_NAME, "robots file name must not be empty");
        }

        if self.rules.iter().any(RuleBlock::is_empty) {
            diag.warn(Self::RULES, "empty rule block renders no directives");
        }
    }
}

// ============================================================================
// Rule blocks
// ============================================================================

/// A robots.txt directive name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
pub enum Directive {
    #[serde(rename = "User-agent", alias = "User-Agent", alias = "user-agent")]
    UserAgent,
    #[serde(rename = "Crawl-delay", alias = "Crawl-Delay", alias = "crawl-delay")]
    CrawlDelay,
    #[serde(rename = "Allow", alias = "allow")]
    Allow,
    #[serde(rename = "Disallow", alias = "disallow")]
    Disallow,
    #[serde(rename = "Host", alias = "host")]
    Host,
}

impl Directive {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserAgent => "User-agent",
            Self::CrawlDelay => "Crawl-delay",
            Self::Allow => "Allow",
            Self::Disallow => "Disallow",
            Self::Host => "Host",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One robots.txt stanza: directives in declaration order.
///
/// Each directive holds one or more values; a list renders one line per
/// element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleBlock {
    entries: Vec<(Directive, Vec<String>)>,
}

impl RuleBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single-valued directive.
    pub fn with(mut self, directive: Directive, value: impl Into<String>) -> Self {
        self.entries.push((directive, vec![value.into()]));
        self
    }

    /// Append a list-valued directive.
    pub fn with_all<I, S>(mut self, directive: Directive, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .push((directive, values.into_iter().map(Into::into).collect()));
        self
    }

    /// The permissive fallback block: `User-agent: *` / `Disallow:`.
    pub fn allow_all() -> Self {
        Self::new()
            .with(Directive::UserAgent, "*")
            .with(Directive::Disallow, "")
    }

    pub fn entries(&self) -> &[(Directive, Vec<String>)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A scalar directive value; numbers render in their natural form.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(s) => s,
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum DirectiveValue {
    One(Scalar),
    Many(Vec<Scalar>),
}

impl From<DirectiveValue> for Vec<String> {
    fn from(value: DirectiveValue) -> Self {
        match value {
            DirectiveValue::One(v) => vec![v.into()],
            DirectiveValue::Many(vs) => vs.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'de> Deserialize<'de> for RuleBlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BlockVisitor;

        impl<'de> Visitor<'de> for BlockVisitor {
            type Value = RuleBlock;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of robots directives")
            }

            // Map order is the document order, which is the render order.
            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RuleBlock, A::Error> {
                let mut block = RuleBlock::new();
                while let Some(directive) = map.next_key::<Directive>()? {
                    let value: DirectiveValue = map.next_value().map_err(|_| {
                        de::Error::custom(format!(
                            "`{directive}` expects a string, a number, or a list of them"
                        ))
                    })?;
                    block.entries.push((directive, value.into()));
                }
                Ok(block)
            }
        }

        deserializer.deserialize_map(BlockVisitor)
    }
}

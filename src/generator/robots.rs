//! Robots.txt generation.
//!
//! ```text
//! User-agent: *
//! Disallow: /admin
//!
//! User-agent: Googlebot
//! Allow: /
//!
//! Sitemap: https://example.com/sitemap.xml
//! ```
//!
//! Blocks are separated by a blank line, list values repeat their
//! directive, and `Sitemap:` lines follow the last block.

use crate::config::RuleBlock;
use crate::core::Field;
use std::borrow::Cow;
use std::fmt::Write;

/// Render the robots.txt document.
///
/// - no rule blocks: a permissive `User-agent: *` / `Disallow:` block
/// - `sitemaps` disabled: no `Sitemap:` lines
/// - `sitemaps` empty: one reference to `default_sitemap`
pub fn render_robots(
    rules: &[RuleBlock],
    sitemaps: &Field<Vec<String>>,
    default_sitemap: &str,
    site_url: Option<&str>,
) -> String {
    let fallback;
    let rules = if rules.is_empty() {
        fallback = [RuleBlock::allow_all()];
        &fallback[..]
    } else {
        rules
    };

    let mut content = String::new();

    for block in rules {
        for (directive, values) in block.entries() {
            for value in values {
                writeln!(content, "{directive}: {value}").ok();
            }
        }
        content.push('\n');
    }

    if let Some(references) = sitemaps.value() {
        let references: Vec<&str> = if references.is_empty() {
            vec![default_sitemap]
        } else {
            references.iter().map(String::as_str).collect()
        };

        for reference in references {
            writeln!(content, "Sitemap: {}", sitemap_url(site_url, reference)).ok();
        }
    }

    content.trim().to_string()
}

/// Join a sitemap reference onto the site URL.
///
/// Absolute references are kept as they are.
fn sitemap_url<'a>(site_url: Option<&str>, reference: &'a str) -> Cow<'a, str> {
    if url::Url::parse(reference).is_ok() {
        return Cow::Borrowed(reference);
    }

    let base = site_url.unwrap_or_default().trim_end_matches('/');
    Cow::Owned(format!("{}/{}", base, reference.trim_start_matches('/')))
}

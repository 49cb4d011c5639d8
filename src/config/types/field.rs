//! Config field path used in diagnostics.

/// Dotted path of a config field, e.g. `sitemap.priority`.
///
/// # Example
///
/// ```ignore
/// diag.error(SitemapConfig::PRIORITY, "must be between 0.0 and 1.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

//! Sitemap generation.
//!
//! Renders route records as a sitemap.xml document for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//! <url>
//! <loc>/about</loc>
//! <lastmod>2025-01-01</lastmod>
//! <changefreq>daily</changefreq>
//! <priority>0.7</priority>
//! </url>
//! </urlset>
//! ```
//!
//! One element per line, records in the given order.

use super::routes::RouteRecord;
use crate::core::emitted;
use std::borrow::Cow;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Render the sitemap document.
///
/// `<loc>` is always written; `<lastmod>`, `<changefreq>` and `<priority>`
/// only when set, not disabled, and not empty.
pub fn render_sitemap(routes: &[RouteRecord]) -> String {
    let mut xml = String::with_capacity(128 + routes.len() * 128);

    xml.push_str(XML_DECLARATION);
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for route in routes {
        xml.push_str("<url>\n");
        push_element(&mut xml, "loc", &route.url);
        if let Some(lastmod) = emitted(route.lastmod.as_ref()) {
            push_element(&mut xml, "lastmod", lastmod);
        }
        if let Some(changefreq) = emitted(route.changefreq.as_ref()) {
            push_element(&mut xml, "changefreq", changefreq);
        }
        if let Some(priority) = emitted(route.priority.as_ref()) {
            push_element(&mut xml, "priority", priority);
        }
        xml.push_str("</url>\n");
    }

    xml.push_str("</urlset>");
    xml
}

fn push_element(xml: &mut String, tag: &str, text: &str) {
    xml.push('<');
    xml.push_str(tag);
    xml.push('>');
    xml.push_str(&escape_xml(text));
    xml.push_str("</");
    xml.push_str(tag);
    xml.push_str(">\n");
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

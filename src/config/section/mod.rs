//! Configuration section definitions.
//!
//! Each module corresponds to a section in `crawlmap.toml`:
//!
//! | Module    | TOML Section   | Purpose                              |
//! |-----------|----------------|--------------------------------------|
//! | `robots`  | `[robots]`     | robots.txt rules and sitemap refs    |
//! | `serve`   | `[serve]`      | Development server address           |
//! | `site`    | `[site]`       | Site URL, base path, output dir      |
//! | `sitemap` | `[sitemap]`    | Defaults, exclusions, route overrides|

mod robots;
mod serve;
mod site;
mod sitemap;

pub use robots::{Directive, RobotsConfig, RuleBlock};
pub use serve::ServeConfig;
pub use site::SiteSectionConfig;
pub use sitemap::{RouteOverride, SitemapConfig};

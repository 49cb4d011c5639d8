//! crawlmap - sitemap.xml and robots.txt generation for static site builds.
//!
//! The generator takes a page tree (route paths with optional children),
//! filters out dynamic and excluded routes, applies per-route metadata and
//! writes two files into the output directory:
//!
//! - `sitemap.xml` listing every static route
//! - `robots.txt` with crawler rules and `Sitemap:` references
//!
//! See [`generator::generate`] for the entry point.

pub mod cli;
pub mod config;
pub mod core;
pub mod generator;
pub mod logger;
pub mod page;

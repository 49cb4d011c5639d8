//! Routes command implementation.
//!
//! Prints the route records the sitemap would contain, as JSON on stdout.

use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::RoutesArgs;
use crate::config::SiteConfig;
use crate::generator::{GenerationOptions, RouteRecord, collect_routes};
use crate::page::load_pages;

/// Resolve routes without writing any file.
pub fn run_routes(args: &RoutesArgs, config: &SiteConfig) -> Result<()> {
    let pages = load_pages(&args.input.pages)?;
    let options = GenerationOptions::new(config, args.mode);
    let routes = collect_routes(&options, &pages);

    let json = to_json(&routes, args.pretty)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("Failed to write routes to stdout")?;
    Ok(())
}

fn to_json(routes: &[RouteRecord], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(routes)?
    } else {
        serde_json::to_string(routes)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ChangeFreq, Field};

    #[test]
    fn test_to_json_skips_unset_fields() {
        let routes = vec![
            RouteRecord {
                changefreq: Some(Field::Value(ChangeFreq::Daily)),
                ..RouteRecord::new("/about")
            },
            RouteRecord {
                priority: Some(Field::Disabled),
                ..RouteRecord::new("/")
            },
        ];

        assert_eq!(
            to_json(&routes, false).unwrap(),
            r#"[{"url":"/about","changefreq":"daily"},{"url":"/","priority":false}]"#
        );
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&[RouteRecord::new("/")], true).unwrap();
        assert_eq!(json, "[\n  {\n    \"url\": \"/\"\n  }\n]");
    }
}

//! Glob matching for route exclusion.
//!
//! Patterns follow shell-glob rules with `/` as the segment separator:
//!
//! | Pattern        | Matches                                  |
//! |----------------|------------------------------------------|
//! | `/about`       | exactly `/about`                         |
//! | `/about/*`     | `/about/team`, not `/about/team/lead`    |
//! | `/about/**`    | `/about`, `/about/team`, `/about/a/b`    |
//! | `/post-[0-9]`  | `/post-1`, `/post-7`                     |
//! | `/[!a]*`       | `/blog`, not `/about`                    |
//! | `/{blog,news}` | `/blog`, `/news`                         |
//! | `!/about`      | everything except `/about`               |
//!
//! Patterns apply in order. A path matched by a negated (`!`) pattern is
//! dropped from the set; a later positive pattern matching it adds it back.
//! With only negated patterns, every path they do not match is in the set.
//! Invalid patterns match nothing.

use crate::debug;
use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use std::collections::HashSet;

#[derive(Debug, Clone)]
struct Pattern {
    negated: bool,
    globs: GlobSet,
}

/// Compiled, ordered set of exclusion patterns.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|pattern| {
                let pattern = pattern.as_ref().trim();
                let (negated, body) = match pattern.strip_prefix('!') {
                    Some(body) => (true, body),
                    None => (false, pattern),
                };
                if body.is_empty() {
                    return None;
                }

                let mut builder = GlobSetBuilder::new();
                let globs = compile(body);
                if globs.is_empty() {
                    return None;
                }
                for glob in globs {
                    builder.add(glob);
                }
                build_set(builder).map(|globs| Pattern { negated, globs })
            })
            .collect();

        Self { patterns }
    }

    /// No usable patterns: nothing matches.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether `path` is matched by the set.
    pub fn is_match(&self, path: &str) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        let mut kept = self.patterns.iter().all(|p| p.negated);
        let mut omitted = false;

        for pattern in &self.patterns {
            if !pattern.globs.is_match(path) {
                continue;
            }
            if pattern.negated {
                omitted = true;
            } else {
                omitted = false;
                kept = true;
            }
        }

        kept && !omitted
    }
}

/// Compile one pattern body, adding the bare parent for a trailing `/**`.
fn compile(body: &str) -> Vec<Glob> {
    let mut sources = vec![body];
    if let Some(parent) = body.strip_suffix("/**")
        && !parent.is_empty()
    {
        sources.push(parent);
    }

    sources
        .into_iter()
        .filter_map(|source| {
            GlobBuilder::new(source)
                .literal_separator(true)
                .backslash_escape(true)
                .build()
                .map_err(|e| debug!("exclude"; "ignoring pattern `{}`: {}", source, e))
                .ok()
        })
        .collect()
}

fn build_set(builder: GlobSetBuilder) -> Option<GlobSet> {
    builder
        .build()
        .map_err(|e| debug!("exclude"; "ignoring pattern: {}", e))
        .ok()
}

/// Keep the candidates matching none of `patterns`.
///
/// Order is preserved and duplicates are dropped (first occurrence wins).
/// An empty pattern list filters nothing.
pub fn not_matching<S: AsRef<str>>(candidates: Vec<String>, patterns: &[S]) -> Vec<String> {
    let set = PatternSet::new(patterns);
    let mut seen = HashSet::with_capacity(candidates.len());

    candidates
        .into_iter()
        .filter(|path| {
            if set.is_match(path) {
                debug!("exclude"; "{}", path);
                return false;
            }
            seen.insert(path.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn keep(candidates: &[&str], patterns: &[&str]) -> Vec<String> {
        not_matching(paths(candidates), patterns)
    }

    #[test]
    fn test_empty_patterns_identity() {
        let input = ["/", "/about", "/about/team"];
        assert_eq!(keep(&input, &[]), paths(&input));
    }

    #[test]
    fn test_literal_pattern() {
        assert_eq!(keep(&["/", "/about", "/blog"], &["/about"]), paths(&["/", "/blog"]));
    }

    #[test]
    fn test_single_star_is_one_segment() {
        assert_eq!(
            keep(&["/about", "/about/team", "/about/team/lead"], &["/about/*"]),
            paths(&["/about", "/about/team/lead"])
        );
    }

    #[test]
    fn test_double_star_spans_segments() {
        assert_eq!(
            keep(&["/", "/about", "/about/team", "/about/team/lead", "/aboutus"], &["/about/**"]),
            paths(&["/", "/aboutus"])
        );
    }

    #[test]
    fn test_leading_double_star() {
        assert_eq!(
            keep(&["/a/drafts", "/drafts", "/a/b/drafts", "/a/final"], &["**/drafts"]),
            paths(&["/a/final"])
        );
    }

    #[test]
    fn test_bracket_classes() {
        assert_eq!(
            keep(&["/post-1", "/post-a", "/post-9"], &["/post-[0-9]"]),
            paths(&["/post-a"])
        );
        assert_eq!(
            keep(&["/about", "/blog"], &["/[!a]*"]),
            paths(&["/about"])
        );
    }

    #[test]
    fn test_alternation() {
        assert_eq!(
            keep(&["/blog", "/news", "/about"], &["/{blog,news}"]),
            paths(&["/about"])
        );
    }

    #[test]
    fn test_negated_pattern_only() {
        assert_eq!(
            keep(&["/", "/about", "/blog"], &["!/about"]),
            paths(&["/about"])
        );
    }

    #[test]
    fn test_negated_pattern_with_positive() {
        assert_eq!(
            keep(&["/docs/a", "/docs/keep", "/blog"], &["/docs/*", "!/docs/keep"]),
            paths(&["/docs/keep", "/blog"])
        );
    }

    #[test]
    fn test_later_positive_pattern_overrides_negation() {
        assert_eq!(
            keep(&["/docs/a", "/docs/keep", "/blog"], &["!/docs/keep", "/docs/*"]),
            paths(&["/blog"])
        );
    }

    #[test]
    fn test_invalid_pattern_matches_nothing() {
        let input = ["/", "/about"];
        assert_eq!(keep(&input, &["/[unclosed"]), paths(&input));
        assert!(PatternSet::new(&["/[unclosed"]).is_empty());
    }

    #[test]
    fn test_duplicates_removed() {
        assert_eq!(
            keep(&["/a", "/b", "/a", "/c", "/b"], &[]),
            paths(&["/a", "/b", "/c"])
        );
    }

    #[test]
    fn test_empty_and_bang_only_patterns_ignored() {
        let input = ["/", "/about"];
        assert_eq!(keep(&input, &["", "!", "  "]), paths(&input));
    }
}

//! Sitemap `<priority>` values.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Page priority, kept as written so output matches configuration verbatim.
///
/// Accepts a string (`"0.7"`) or a number (`0.7`, `1`) when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Priority(String);

impl Priority {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check the value is a number within `[0.0, 1.0]`.
    ///
    /// The empty string is accepted: it means "omit this element".
    pub fn is_valid(&self) -> bool {
        let text = self.0.trim();
        text.is_empty()
            || text
                .parse::<f64>()
                .is_ok_and(|v| (0.0..=1.0).contains(&v))
    }
}

impl AsRef<str> for Priority {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(f64),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(text) => Self(text),
            Repr::Number(n) => Self(n.to_string()),
        })
    }
}

//! Optional metadata field with an explicit "disabled" state.
//!
//! A sitemap field has three states:
//!
//! | State              | Rust                        | TOML / JSON    |
//! |--------------------|-----------------------------|----------------|
//! | not set            | `None`                      | key omitted    |
//! | disabled           | `Some(Field::Disabled)`     | `false`        |
//! | value              | `Some(Field::Value(v))`     | `"..."`        |
//!
//! Only `Field::Value` with non-empty text is ever emitted.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A value that may be explicitly disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Value(T),
    Disabled,
}

impl<T> Field<T> {
    /// Get the value unless disabled.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Disabled => None,
        }
    }

    #[inline]
    pub const fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

impl<T: AsRef<str>> Field<T> {
    /// Text to emit, if any.
    ///
    /// Disabled fields and empty values both yield `None`.
    pub fn emitted(&self) -> Option<&str> {
        let text: &str = self.value()?.as_ref();
        (!text.is_empty()).then_some(text)
    }
}

/// Emitted text of an optional field.
#[inline]
pub fn emitted<T: AsRef<str>>(field: Option<&Field<T>>) -> Option<&str> {
    field.and_then(Field::emitted)
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum FieldRepr<T> {
    Flag(bool),
    Value(T),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match FieldRepr::deserialize(deserializer)? {
            FieldRepr::Flag(false) => Ok(Self::Disabled),
            FieldRepr::Flag(true) => Err(de::Error::custom(
                "`true` is not a valid value, use `false` to disable the field",
            )),
            FieldRepr::Value(v) => Ok(Self::Value(v)),
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => v.serialize(serializer),
            Self::Disabled => serializer.serialize_bool(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Deserialize)]
    struct Holder {
        field: Option<Field<String>>,
    }

    fn parse(toml: &str) -> Option<Field<String>> {
        toml::from_str::<Holder>(toml).unwrap().field
    }

    #[test]
    fn test_field_missing() {
        assert_eq!(parse(""), None);
    }

    #[test]
    fn test_field_false_is_disabled() {
        assert_eq!(parse("field = false"), Some(Field::Disabled));
    }

    #[test]
    fn test_field_value() {
        assert_eq!(
            parse("field = \"2024-01-01\""),
            Some(Field::Value("2024-01-01".to_string()))
        );
    }

    #[test]
    fn test_field_true_rejected() {
        assert!(toml::from_str::<Holder>("field = true").is_err());
    }

    #[test]
    fn test_emitted_skips_empty_and_disabled() {
        let empty: Field<String> = Field::Value(String::new());
        let disabled: Field<String> = Field::Disabled;
        let value: Field<String> = Field::Value("daily".into());

        assert_eq!(empty.emitted(), None);
        assert_eq!(disabled.emitted(), None);
        assert_eq!(value.emitted(), Some("daily"));
        assert_eq!(emitted::<String>(None), None);
    }

    #[test]
    fn test_field_serialize() {
        let disabled: Field<String> = Field::Disabled;
        assert_eq!(serde_json::to_string(&disabled).unwrap(), "false");
        let value: Field<String> = Field::Value("0.5".into());
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"0.5\"");
    }
}

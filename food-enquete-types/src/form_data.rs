use std::collections::HashMap;

use crate::{FormError, FormValue};

/// The field-value bundle of one form submission.
///
/// Keys are the declared field names. A field that was left out of the
/// submission is simply absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    values: HashMap<String, FormValue>,
}

impl FormData {
    /// Create an empty submission.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Build a submission from raw name/text pairs, as delivered by an
    /// url-encoded form. Later pairs overwrite earlier ones.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut data = Self::new();
        for (name, value) in pairs {
            data.insert(name, FormValue::Text(value.into()));
        }
        data
    }

    /// Insert a value for the given field.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FormValue>) {
        self.values.insert(field.into(), value.into());
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FormValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Get the value submitted for the given field.
    pub fn get(&self, field: &str) -> Option<&FormValue> {
        self.values.get(field)
    }

    /// Check if a value was submitted for the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Get the number of submitted fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get an iterator over all field-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get a text value for the given field.
    pub fn text(&self, field: &str) -> Result<&str, FormError> {
        match self.get(field) {
            Some(FormValue::Text(s)) => Ok(s),
            Some(other) => Err(FormError::TypeMismatch {
                field: field.to_string(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(FormError::Missing(field.to_string())),
        }
    }

    /// Get an integer value for the given field, coercing text.
    pub fn int(&self, field: &str) -> Result<i64, FormError> {
        let value = self
            .get(field)
            .ok_or_else(|| FormError::Missing(field.to_string()))?;
        value.to_int().ok_or_else(|| FormError::TypeMismatch {
            field: field.to_string(),
            expected: "Int",
            actual: value.type_name(),
        })
    }

    /// Get a text value, or the empty string when absent or not text.
    pub fn text_or_default(&self, field: &str) -> String {
        self.text(field).map(str::to_string).unwrap_or_default()
    }

    /// Get an integer value, or `None` when absent or not coercible.
    pub fn int_opt(&self, field: &str) -> Option<i64> {
        self.int(field).ok()
    }
}

impl<'a> IntoIterator for &'a FormData {
    type Item = (&'a String, &'a FormValue);
    type IntoIter = std::collections::hash_map::Iter<'a, String, FormValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn insert_and_get() {
        let data = FormData::new().with("name", "Alice").with("age", 30);

        assert_eq!(data.text("name").unwrap(), "Alice");
        assert_eq!(data.int("age").unwrap(), 30);
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn from_pairs_keeps_text() {
        let data = FormData::from_pairs([("age", "25"), ("comment", "")]);

        assert_eq!(data.get("age"), Some(&FormValue::Text("25".into())));
        assert_eq!(data.int("age").unwrap(), 25);
        assert_eq!(data.text("comment").unwrap(), "");
    }

    #[test]
    fn missing_field_error() {
        let data = FormData::new();

        let err = data.text("name").unwrap_err();
        assert!(err.is_missing());
        assert_eq!(err, FormError::Missing("name".into()));
    }

    #[test]
    fn type_mismatch_error() {
        let data = FormData::new().with("name", 12).with("age", "old");

        assert!(matches!(
            data.text("name"),
            Err(FormError::TypeMismatch { expected: "Text", .. })
        ));
        assert!(matches!(
            data.int("age"),
            Err(FormError::TypeMismatch { expected: "Int", actual: "Text", .. })
        ));
    }

    #[test]
    fn lenient_accessors_fall_back() {
        let data = FormData::new().with("name", 12).with("age", "old");

        assert_eq!(data.text_or_default("name"), "");
        assert_eq!(data.text_or_default("email"), "");
        assert_eq!(data.int_opt("age"), None);
        assert_eq!(data.int_opt("score"), None);
    }
}

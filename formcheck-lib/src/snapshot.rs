//! In-memory form snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::validation::{FormState, OptionSet, OptionSource};
use crate::value::FieldValue;

/// Point-in-time copy of a form's field values and option lists.
///
/// Deserializes from:
///
/// ```json
/// {
///   "fields": { "person_name": "Jane Doe", "tags": ["a", "b"] },
///   "options": { "genders": ["F", "M"] },
///   "aliases": { "#gender-list": "genders" }
/// }
/// ```
///
/// An alias lets several references name the same option list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    fields: BTreeMap<String, FieldValue>,
    #[serde(default)]
    options: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    aliases: BTreeMap<String, String>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set_field(field, value);
        self
    }

    pub fn with_options<I, S>(mut self, list: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options
            .insert(list.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Makes `alias` resolve to the list named `list`.
    pub fn with_alias(mut self, alias: impl Into<String>, list: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), list.into());
        self
    }

    /// Sets or replaces a field value, as typing into the field would.
    pub fn set_field(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FormState for Snapshot {
    fn value(&self, field: &str) -> Option<FieldValue> {
        self.fields.get(field).cloned()
    }
}

impl OptionSource for Snapshot {
    fn options(&self, list: &str) -> Option<OptionSet<'_>> {
        let canonical = self.aliases.get(list).map(String::as_str).unwrap_or(list);
        self.options
            .get_key_value(canonical)
            .map(|(id, values)| OptionSet {
                id: id.as_str(),
                values: values.as_slice(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_resolves_to_same_list() {
        let snapshot = Snapshot::new()
            .with_options("people", ["Jane Doe"])
            .with_alias("#people-list", "people");

        let direct = snapshot.options("people").unwrap();
        let aliased = snapshot.options("#people-list").unwrap();
        assert_eq!(direct.id, aliased.id);
        assert!(aliased.contains("Jane Doe"));
    }

    #[test]
    fn test_unknown_field_and_list() {
        let snapshot = Snapshot::new().with_field("a", "");
        assert_eq!(snapshot.value("a"), Some(FieldValue::from("")));
        assert_eq!(snapshot.value("b"), None);
        assert!(snapshot.options("missing").is_none());
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{
            "fields": { "person_name": "Jane Doe", "tags": ["a", "b"] },
            "options": { "genders": ["F", "M"] }
        }"#;
        let snapshot = Snapshot::from_json(json).unwrap();
        assert_eq!(snapshot.value("tags"), Some(FieldValue::from(vec!["a", "b"])));
        assert_eq!(snapshot.options("genders").unwrap().values.len(), 2);
    }
}

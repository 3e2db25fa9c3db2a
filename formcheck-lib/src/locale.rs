//! Message localization.
//!
//! Messages are English templates with positional `%s` placeholders. A
//! [`Localizer`] maps a template to its translation before the arguments are
//! substituted with [`interpolate`].

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Maps a message template to a possibly translated template.
pub trait Localizer {
    fn translate(&self, template: &str) -> String;
}

/// Pass-through localizer: every template is its own translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Localizer for Identity {
    fn translate(&self, template: &str) -> String {
        template.to_string()
    }
}

/// Translation table keyed by the English template.
///
/// Templates without an entry fall back to the English text.
///
/// # Example
///
/// ```
/// use formcheck_lib::locale::{Catalog, Localizer};
///
/// let catalog = Catalog::new().with("This field is required", "Ce champ est obligatoire");
/// assert_eq!(catalog.translate("This field is required"), "Ce champ est obligatoire");
/// assert_eq!(catalog.translate("Expected a number"), "Expected a number");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a translation.
    pub fn with(mut self, template: impl Into<String>, translation: impl Into<String>) -> Self {
        self.insert(template, translation);
        self
    }

    /// Adds or replaces a translation.
    pub fn insert(&mut self, template: impl Into<String>, translation: impl Into<String>) {
        self.entries.insert(template.into(), translation.into());
    }

    /// Parses a catalog from a JSON object of template to translation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Localizer for Catalog {
    fn translate(&self, template: &str) -> String {
        self.entries
            .get(template)
            .cloned()
            .unwrap_or_else(|| template.to_string())
    }
}

/// Substitutes each `%s` in `template` with the next argument.
///
/// Placeholders without an argument are kept verbatim; surplus arguments are
/// ignored.
pub fn interpolate(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;

    while let Some(pos) = rest.find("%s") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("%s"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_positional() {
        assert_eq!(
            interpolate("Expected %s, got a value of %s", &["number", "list"]),
            "Expected number, got a value of list"
        );
    }

    #[test]
    fn test_interpolate_missing_args() {
        assert_eq!(interpolate("%s and %s", &["a"]), "a and %s");
    }

    #[test]
    fn test_interpolate_surplus_args() {
        assert_eq!(interpolate("no placeholders", &["a"]), "no placeholders");
    }

    #[test]
    fn test_catalog_from_json() {
        let catalog =
            Catalog::from_json(r#"{"Expected a number": "Nombre attendu"}"#).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.translate("Expected a number"), "Nombre attendu");
    }

    #[test]
    fn test_catalog_rejects_non_object() {
        assert!(matches!(
            Catalog::from_json("[1, 2]"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_identity() {
        assert_eq!(Identity.translate("This field is required"), "This field is required");
    }
}

//! Field rule descriptors.

use serde::{Deserialize, Serialize};

use super::ErrorTarget;

/// Declared data type of a field, with the options that only make sense for
/// that type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text.
    #[default]
    String,
    /// A numeric literal, optionally bounded below.
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
    },
    /// A calendar date.
    Date,
    /// A person's full name: at least a first and a last name.
    Name,
}

impl FieldKind {
    /// Type name used in type mismatch messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number { .. } => "number",
            Self::Date => "date",
            Self::Name => "name",
        }
    }
}

/// One validation requirement for one field.
///
/// Rules are cheap to build and are meant to be constructed right before each
/// validation pass.
///
/// # Example
///
/// ```
/// use formcheck_lib::validation::{FieldKind, FieldRule};
///
/// let age = FieldRule::number_at_least("age", 18.0).required();
/// assert_eq!(age.kind, FieldKind::Number { min: Some(18.0) });
///
/// let json = r#"{"field": "gender", "type": "string", "required": true, "one_of": "genders"}"#;
/// let gender: FieldRule = serde_json::from_str(json).unwrap();
/// assert_eq!(gender, FieldRule::string("gender").required().one_of("genders"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Identifier used to read the value from the form.
    pub field: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    /// List the value must come from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<String>,
    /// List the value must not already be in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub none_of: Option<String>,
    /// Element to render messages into, instead of the field's container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_target: Option<String>,
}

impl FieldRule {
    /// Creates an optional rule of the given kind.
    pub fn new(field: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            field: field.into(),
            kind,
            required: false,
            one_of: None,
            none_of: None,
            error_target: None,
        }
    }

    pub fn string(field: impl Into<String>) -> Self {
        Self::new(field, FieldKind::String)
    }

    pub fn number(field: impl Into<String>) -> Self {
        Self::new(field, FieldKind::Number { min: None })
    }

    /// Number rule that rejects values below `min`.
    pub fn number_at_least(field: impl Into<String>, min: f64) -> Self {
        Self::new(field, FieldKind::Number { min: Some(min) })
    }

    pub fn date(field: impl Into<String>) -> Self {
        Self::new(field, FieldKind::Date)
    }

    pub fn name(field: impl Into<String>) -> Self {
        Self::new(field, FieldKind::Name)
    }

    /// Marks the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Requires the value to be a member of `list`.
    pub fn one_of(mut self, list: impl Into<String>) -> Self {
        self.one_of = Some(list.into());
        self
    }

    /// Requires the value not to be a member of `list`.
    pub fn none_of(mut self, list: impl Into<String>) -> Self {
        self.none_of = Some(list.into());
        self
    }

    /// Renders messages into `element` instead of the field's container.
    pub fn errors_at(mut self, element: impl Into<String>) -> Self {
        self.error_target = Some(element.into());
        self
    }

    /// Where this field's messages go.
    pub fn target(&self) -> ErrorTarget {
        match &self.error_target {
            Some(element) => ErrorTarget::element(element.clone()),
            None => ErrorTarget::container_of(self.field.clone()),
        }
    }
}

//! Field values and the coercions applied to them during validation.

mod date;
mod name;
mod number;

pub use date::parse_date;
pub use name::{PersonName, split_name};
pub use number::{format_number, is_numeric, parse_number};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current value of a form field, as read from the form state.
///
/// Single-valued inputs (text, date, select) produce [`FieldValue::Text`];
/// multi-selects produce [`FieldValue::List`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Value of a single-valued input.
    Text(String),
    /// Selected values of a multi-select.
    List(Vec<String>),
}

impl FieldValue {
    /// Returns true for the empty string and the empty selection.
    ///
    /// Whitespace is a value: `" "` is not empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.is_empty(),
        }
    }

    /// Runtime type name used in type mismatch messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::List(_) => "list",
        }
    }

    /// Returns the text if this is a single value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(_) => None,
        }
    }

    /// Every selected value; a single value yields one item.
    pub fn items(&self) -> Vec<&str> {
        match self {
            Self::Text(text) => vec![text.as_str()],
            Self::List(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Typed value produced by a successful coercion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Parsed {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Name(PersonName),
}

impl Parsed {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&PersonName> {
        match self {
            Self::Name(name) => Some(name),
            _ => None,
        }
    }
}

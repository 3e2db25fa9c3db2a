use serde::{Deserialize, Serialize};

/// Where a field's validation messages are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorTarget {
    /// The container wrapping the field with this id (default).
    Container(String),
    /// An explicitly named element, shared or not with other fields.
    Element(String),
}

impl ErrorTarget {
    /// Default target of a field: its own container.
    pub fn container_of(field: impl Into<String>) -> Self {
        Self::Container(field.into())
    }

    pub fn element(id: impl Into<String>) -> Self {
        Self::Element(id.into())
    }

    /// The identifier of the field or element.
    pub fn id(&self) -> &str {
        match self {
            Self::Container(id) | Self::Element(id) => id,
        }
    }
}

impl std::fmt::Display for ErrorTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Container(field) => write!(f, "container of '{}'", field),
            Self::Element(id) => write!(f, "'{}'", id),
        }
    }
}

//! Rule configuration errors

/// A rule that cannot be evaluated against the current form.
///
/// These are developer mistakes, not user input problems: they are never
/// folded into a field's validation messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The rule names a field the form does not have.
    #[error("Field '{field}' does not exist in the form")]
    UnknownField { field: String },

    /// The rule references an option list that does not exist.
    #[error("List '{list}' referenced by field '{field}' does not exist")]
    UnknownList { field: String, list: String },

    /// The allowed and disallowed lists of a rule are the same list.
    #[error("Field '{field}' uses the same list for allowed and disallowed values ('{allowed}', '{disallowed}')")]
    SameList {
        field: String,
        allowed: String,
        disallowed: String,
    },
}

impl ConfigError {
    /// Creates a new unknown field error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Creates a new unknown list error.
    pub fn unknown_list(field: impl Into<String>, list: impl Into<String>) -> Self {
        Self::UnknownList {
            field: field.into(),
            list: list.into(),
        }
    }

    /// Creates a new same list error.
    pub fn same_list(
        field: impl Into<String>,
        allowed: impl Into<String>,
        disallowed: impl Into<String>,
    ) -> Self {
        Self::SameList {
            field: field.into(),
            allowed: allowed.into(),
            disallowed: disallowed.into(),
        }
    }

    /// The field whose rule is misconfigured.
    pub fn field(&self) -> &str {
        match self {
            Self::UnknownField { field }
            | Self::UnknownList { field, .. }
            | Self::SameList { field, .. } => field,
        }
    }
}

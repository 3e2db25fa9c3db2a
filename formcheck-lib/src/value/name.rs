//! Person name splitting

use serde::Serialize;

/// A full name split into first, middle and last parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonName {
    pub first: Option<String>,
    /// All tokens between the first and last one, joined by single spaces.
    pub middle: Option<String>,
    pub last: Option<String>,
}

impl PersonName {
    /// True when both a first and a last name are present.
    pub fn is_complete(&self) -> bool {
        self.first.is_some() && self.last.is_some()
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<&str> = [&self.first, &self.middle, &self.last]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Splits a name on whitespace into `[first, middle..., last]`.
///
/// A single token only fills `first`.
pub fn split_name(name: &str) -> PersonName {
    let tokens: Vec<&str> = name.split_whitespace().collect();

    match tokens.as_slice() {
        [] => PersonName::default(),
        [only] => PersonName {
            first: Some(only.to_string()),
            ..Default::default()
        },
        [first, middle @ .., last] => PersonName {
            first: Some(first.to_string()),
            middle: (!middle.is_empty()).then(|| middle.join(" ")),
            last: Some(last.to_string()),
        },
    }
}

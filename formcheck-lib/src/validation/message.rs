use crate::locale::{Localizer, interpolate};

/// Validation messages, keyed by their English template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    Required,
    ExpectedNumber,
    /// Arg: the minimum.
    BelowMinimum,
    InvalidDate,
    TooFewNames,
    /// Args: declared type, actual type.
    TypeMismatch,
    /// Arg: the list reference.
    NotInList,
    /// Arg: the list reference.
    AlreadyInList,
}

impl Message {
    /// English template with `%s` placeholders.
    pub fn template(self) -> &'static str {
        match self {
            Self::Required => "This field is required",
            Self::ExpectedNumber => "Expected a number",
            Self::BelowMinimum => "The value of this field must be greater than %s",
            Self::InvalidDate => "This is not a valid date",
            Self::TooFewNames => "At least two names are required",
            Self::TypeMismatch => "Expected %s, got a value of %s",
            Self::NotInList => "This value does not exist on the list %s",
            Self::AlreadyInList => "This value already exists in the list %s",
        }
    }

    /// Translates the template and substitutes `args`.
    pub fn render(self, locale: &dyn Localizer, args: &[&str]) -> String {
        interpolate(&locale.translate(self.template()), args)
    }
}

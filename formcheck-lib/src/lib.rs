//! Declarative validation of admin form fields.
//!
//! Rules describe what each field must hold; a validation pass reads the form
//! through [`validation::FormState`], reports every failing check per field,
//! and renders the messages next to the fields through
//! [`validation::MessageSink`].

pub mod error;
pub mod locale;
pub mod sink;
pub mod snapshot;
pub mod validation;
pub mod value;

pub use error::{CatalogError, ConfigError};
pub use validation::{FieldKind, FieldRule, ValidationContext, ValidationReport, ValidationResult, Validator};

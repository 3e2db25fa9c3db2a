//! Declarative form field validation.
//!
//! A validation pass reads each field through a [`FormState`], checks it
//! against its [`FieldRule`], and renders the outcome through a
//! [`MessageSink`]. Checking and rendering are separate steps:
//! [`Inputs::check_fields`] is pure, [`render_report`] consumes its output,
//! and [`ValidationContext::validate_fields`] does both.
//!
//! Rule misconfigurations (unknown field or list, same list allowed and
//! disallowed) surface as [`ConfigError`](crate::error::ConfigError) and
//! through [`MessageSink::alert`], never as field messages.

mod check;
mod context;
mod message;
mod render;
mod result;
mod rule;
mod target;
mod validator;

pub use context::{FormState, Inputs, MessageSink, OptionSet, OptionSource, ValidationContext};
pub use message::Message;
pub use render::{render_report, render_result};
pub use result::{ValidationReport, ValidationResult};
pub use rule::{FieldKind, FieldRule};
pub use target::ErrorTarget;
pub use validator::{FieldBuilder, Validator};

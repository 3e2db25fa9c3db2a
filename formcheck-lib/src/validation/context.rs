//! Collaborators a validation pass reads from and renders into.

use crate::error::ConfigError;
use crate::locale::{Identity, Localizer};
use crate::value::FieldValue;

use super::ErrorTarget;

/// Read access to the current values of a form.
pub trait FormState {
    /// Current value of `field`, or `None` if the form has no such field.
    ///
    /// An existing but blank field returns an empty [`FieldValue`].
    fn value(&self, field: &str) -> Option<FieldValue>;
}

/// A resolved option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSet<'a> {
    /// Canonical identity of the list. Two references naming the same list
    /// resolve to the same id.
    pub id: &'a str,
    /// The selectable values.
    pub values: &'a [String],
}

impl OptionSet<'_> {
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

/// Resolves list references (datalists, selects) to their current options.
pub trait OptionSource {
    /// Options of `list`, or `None` if no such list exists.
    fn options(&self, list: &str) -> Option<OptionSet<'_>>;
}

/// Displays validation outcomes next to fields.
pub trait MessageSink {
    /// Replaces whatever was rendered at `target` with `messages`.
    ///
    /// A non-empty slice puts the target in the error state; an empty slice
    /// clears it.
    fn render(&mut self, target: &ErrorTarget, messages: &[String]);

    /// Reports a misconfigured rule to the developer.
    fn alert(&mut self, error: &ConfigError);
}

/// Read-only inputs of a validation pass.
#[derive(Clone, Copy)]
pub struct Inputs<'a> {
    pub(crate) form: &'a dyn FormState,
    pub(crate) options: &'a dyn OptionSource,
    pub(crate) locale: &'a dyn Localizer,
}

impl<'a> Inputs<'a> {
    /// Reads values from `form` and option lists from `options`, with
    /// untranslated messages.
    pub fn new(form: &'a dyn FormState, options: &'a dyn OptionSource) -> Self {
        Self {
            form,
            options,
            locale: &Identity,
        }
    }

    /// Translates messages with `locale`.
    pub fn with_locale(mut self, locale: &'a dyn Localizer) -> Self {
        self.locale = locale;
        self
    }
}

/// Everything a validation pass needs, owned by the invoking controller for
/// the duration of the pass.
pub struct ValidationContext<'a> {
    pub(crate) inputs: Inputs<'a>,
    pub(crate) sink: &'a mut dyn MessageSink,
}

impl<'a> ValidationContext<'a> {
    pub fn new(inputs: Inputs<'a>, sink: &'a mut dyn MessageSink) -> Self {
        Self { inputs, sink }
    }

    pub fn inputs(&self) -> Inputs<'a> {
        self.inputs
    }
}

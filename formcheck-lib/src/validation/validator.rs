//! Validation passes and the fluent rule builder.

use log::error;

use crate::error::ConfigError;

use super::context::ValidationContext;
use super::render::render_result;
use super::{ErrorTarget, FieldKind, FieldRule, ValidationReport, ValidationResult};

impl ValidationContext<'_> {
    /// Validates one field and renders the outcome at its target.
    ///
    /// A misconfigured rule is alerted through the sink and returned as `Err`;
    /// nothing is rendered at the field in that case.
    pub fn validate_field(&mut self, rule: &FieldRule) -> Result<ValidationResult, ConfigError> {
        match self.inputs.check_field(rule) {
            Ok(result) => {
                render_result(self.sink, &result);
                Ok(result)
            }
            Err(err) => {
                error!("{}", err);
                self.sink.alert(&err);
                Err(err)
            }
        }
    }

    /// Validates and renders every field, in order, without short-circuiting.
    pub fn validate_fields<'r>(
        &mut self,
        rules: impl IntoIterator<Item = &'r FieldRule>,
    ) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in rules {
            report.push(self.validate_field(rule));
        }
        report
    }

    /// Clears the messages and error state of `field`'s container, as when
    /// the user edits the field.
    pub fn clear_field(&mut self, field: &str) {
        self.sink.render(&ErrorTarget::container_of(field), &[]);
    }
}

/// Builder for validating multiple form fields.
///
/// # Example
///
/// ```
/// use formcheck_lib::sink::RecordingSink;
/// use formcheck_lib::snapshot::Snapshot;
/// use formcheck_lib::validation::{Inputs, ValidationContext, Validator};
///
/// let form = Snapshot::new()
///     .with_field("person_name", "Jane Doe")
///     .with_field("person_gender", "F")
///     .with_options("genders", ["F", "M"]);
/// let mut sink = RecordingSink::new();
/// let mut cx = ValidationContext::new(Inputs::new(&form, &form), &mut sink);
///
/// let report = Validator::new()
///     .field("person_name")
///         .name()
///         .required()
///     .field("person_gender")
///         .required()
///         .one_of("genders")
///     .validate(&mut cx);
///
/// assert!(report.all_passed());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: Vec<FieldRule>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a field to validate. Fields are text fields unless a type is set.
    pub fn field(self, field: impl Into<String>) -> FieldBuilder {
        FieldBuilder {
            validator: self,
            rule: FieldRule::string(field),
        }
    }

    /// Add a prebuilt rule.
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Validate and render all fields.
    pub fn validate(self, cx: &mut ValidationContext<'_>) -> ValidationReport {
        cx.validate_fields(&self.rules)
    }
}

/// Builder for the rule of a single field.
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    validator: Validator,
    rule: FieldRule,
}

impl FieldBuilder {
    /// Expect a number.
    pub fn number(mut self) -> Self {
        self.rule.kind = FieldKind::Number { min: None };
        self
    }

    /// Expect a number no lower than `min`.
    pub fn number_at_least(mut self, min: f64) -> Self {
        self.rule.kind = FieldKind::Number { min: Some(min) };
        self
    }

    /// Expect a calendar date.
    pub fn date(mut self) -> Self {
        self.rule.kind = FieldKind::Date;
        self
    }

    /// Expect a first and last name.
    pub fn name(mut self) -> Self {
        self.rule.kind = FieldKind::Name;
        self
    }

    pub fn required(mut self) -> Self {
        self.rule = self.rule.required();
        self
    }

    pub fn one_of(mut self, list: impl Into<String>) -> Self {
        self.rule = self.rule.one_of(list);
        self
    }

    pub fn none_of(mut self, list: impl Into<String>) -> Self {
        self.rule = self.rule.none_of(list);
        self
    }

    pub fn errors_at(mut self, element: impl Into<String>) -> Self {
        self.rule = self.rule.errors_at(element);
        self
    }

    /// Continue to the next field.
    pub fn field(self, field: impl Into<String>) -> FieldBuilder {
        self.finalize().field(field)
    }

    /// Finalize and validate all fields.
    pub fn validate(self, cx: &mut ValidationContext<'_>) -> ValidationReport {
        self.finalize().validate(cx)
    }

    /// Finalize this field and return the validator.
    pub fn finalize(self) -> Validator {
        self.validator.rule(self.rule)
    }
}

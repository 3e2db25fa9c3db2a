//! Pure rule evaluation: reads the form, produces results, renders nothing.

use log::{debug, error};

use crate::error::ConfigError;
use crate::value::{FieldValue, Parsed, format_number, parse_date, parse_number, split_name};

use super::context::{Inputs, OptionSet};
use super::{FieldKind, FieldRule, Message, ValidationReport, ValidationResult};

impl<'a> Inputs<'a> {
    /// Evaluates one rule against the current form snapshot.
    ///
    /// Returns `Err` when the rule itself cannot be evaluated (unknown field,
    /// unknown list, or identical allowed/disallowed lists). That is never
    /// reported as a validation message.
    pub fn check_field(&self, rule: &FieldRule) -> Result<ValidationResult, ConfigError> {
        let value = self
            .form
            .value(&rule.field)
            .ok_or_else(|| ConfigError::unknown_field(&rule.field))?;
        let allowed = self.resolve(rule, rule.one_of.as_deref())?;
        let disallowed = self.resolve(rule, rule.none_of.as_deref())?;

        if let (Some(allowed), Some(disallowed)) = (&allowed, &disallowed) {
            if allowed.id == disallowed.id {
                return Err(ConfigError::same_list(
                    &rule.field,
                    rule.one_of.as_deref().unwrap_or_default(),
                    rule.none_of.as_deref().unwrap_or_default(),
                ));
            }
        }

        let mut result = ValidationResult::new(&rule.field, rule.target());

        if value.is_empty() {
            if rule.required {
                result.fail(self.message(Message::Required, &[]));
            }
            debug!("field '{}' is empty (required: {})", rule.field, rule.required);
            return Ok(result);
        }

        let parsed = self.check_type(rule, &value, &mut result);
        result.parsed = parsed;

        let items = value.items();

        if let (Some(list), Some(set)) = (rule.one_of.as_deref(), allowed) {
            if !items.iter().all(|item| set.contains(item)) {
                result.fail(self.message(Message::NotInList, &[list]));
            }
        }

        if let (Some(list), Some(set)) = (rule.none_of.as_deref(), disallowed) {
            if items.iter().any(|item| set.contains(item)) {
                result.fail(self.message(Message::AlreadyInList, &[list]));
            }
        }

        if result.passed {
            debug!("field '{}' passed", rule.field);
        } else {
            debug!("field '{}' failed: {:?}", rule.field, result.messages);
        }
        Ok(result)
    }

    /// Evaluates every rule in order, without stopping at the first failure.
    pub fn check_fields<'r>(&self, rules: impl IntoIterator<Item = &'r FieldRule>) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in rules {
            let outcome = self.check_field(rule);
            if let Err(err) = &outcome {
                error!("{}", err);
            }
            report.push(outcome);
        }
        report
    }

    /// Type-specific checks. Returns the coerced value on success.
    fn check_type(
        &self,
        rule: &FieldRule,
        value: &FieldValue,
        result: &mut ValidationResult,
    ) -> Option<Parsed> {
        let Some(text) = value.as_text() else {
            result.fail(self.message(
                Message::TypeMismatch,
                &[rule.kind.type_name(), value.type_name()],
            ));
            return None;
        };

        match &rule.kind {
            FieldKind::Number { min } => {
                let Some(number) = parse_number(text) else {
                    result.fail(self.message(Message::ExpectedNumber, &[]));
                    return None;
                };
                match min {
                    Some(min) if number < *min => {
                        let min = format_number(*min);
                        result.fail(self.message(Message::BelowMinimum, &[min.as_str()]));
                    }
                    _ => {}
                }
                Some(Parsed::Number(number))
            }
            FieldKind::Date => match parse_date(text) {
                Some(date) => Some(Parsed::Date(date)),
                None => {
                    result.fail(self.message(Message::InvalidDate, &[]));
                    None
                }
            },
            FieldKind::Name => {
                let name = split_name(text);
                if !name.is_complete() {
                    result.fail(self.message(Message::TooFewNames, &[]));
                }
                Some(Parsed::Name(name))
            }
            FieldKind::String => Some(Parsed::Text(text.to_string())),
        }
    }

    fn resolve(&self, rule: &FieldRule, list: Option<&str>) -> Result<Option<OptionSet<'a>>, ConfigError> {
        match list.filter(|list| !list.is_empty()) {
            Some(list) => self
                .options
                .options(list)
                .map(Some)
                .ok_or_else(|| ConfigError::unknown_list(&rule.field, list)),
            None => Ok(None),
        }
    }

    fn message(&self, message: Message, args: &[&str]) -> String {
        message.render(self.locale, args)
    }
}

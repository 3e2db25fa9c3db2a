use serde::Serialize;

use crate::error::ConfigError;
use crate::value::Parsed;

use super::ErrorTarget;

/// Outcome of validating a single field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Field id (from the rule).
    pub field: String,
    /// Where the messages are rendered.
    pub target: ErrorTarget,
    pub passed: bool,
    /// Every failed check, in check order.
    pub messages: Vec<String>,
    /// Coerced value, when the type check succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<Parsed>,
}

impl ValidationResult {
    pub(crate) fn new(field: impl Into<String>, target: ErrorTarget) -> Self {
        Self {
            field: field.into(),
            target,
            passed: true,
            messages: Vec::new(),
            parsed: None,
        }
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.passed = false;
        self.messages.push(message);
    }

    /// Check if the field passed validation.
    pub fn is_valid(&self) -> bool {
        self.passed
    }

    /// Get the first message (if any).
    pub fn first_message(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }
}

/// Result of validating a batch of fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    results: Vec<ValidationResult>,
    config_errors: Vec<ConfigError>,
}

impl ValidationReport {
    pub(crate) fn push(&mut self, outcome: Result<ValidationResult, ConfigError>) {
        match outcome {
            Ok(result) => self.results.push(result),
            Err(error) => self.config_errors.push(error),
        }
    }

    /// True iff every field passed and no rule was misconfigured.
    pub fn all_passed(&self) -> bool {
        self.config_errors.is_empty() && self.results.iter().all(|r| r.passed)
    }

    /// Per-field results, in rule order. Misconfigured rules have none.
    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    /// Rules that could not be evaluated.
    pub fn config_errors(&self) -> &[ConfigError] {
        &self.config_errors
    }

    /// Result for `field`, if it was validated.
    pub fn get(&self, field: &str) -> Option<&ValidationResult> {
        self.results.iter().find(|r| r.field == field)
    }

    /// Results of fields that failed validation.
    pub fn failed(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    /// Id of the first invalid field (for focusing).
    pub fn first_invalid_field(&self) -> Option<&str> {
        self.failed().next().map(|r| r.field.as_str())
    }
}

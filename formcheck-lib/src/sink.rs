//! In-memory message sink.

use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::validation::{ErrorTarget, MessageSink};

/// Rendered state of one target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetState {
    /// Messages currently shown, one element each.
    pub messages: Vec<String>,
    pub has_error: bool,
}

/// Keeps what would be on screen: messages and error state per target, plus
/// every alert raised.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    targets: BTreeMap<ErrorTarget, TargetState>,
    alerts: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// State of `target`, if anything was ever rendered there.
    pub fn target(&self, target: &ErrorTarget) -> Option<&TargetState> {
        self.targets.get(target)
    }

    /// Messages shown in `field`'s container.
    pub fn messages_for(&self, field: &str) -> &[String] {
        self.targets
            .get(&ErrorTarget::container_of(field))
            .map(|state| state.messages.as_slice())
            .unwrap_or_default()
    }

    /// Whether `field`'s container is in the error state.
    pub fn has_error(&self, field: &str) -> bool {
        self.targets
            .get(&ErrorTarget::container_of(field))
            .is_some_and(|state| state.has_error)
    }

    pub fn targets(&self) -> impl Iterator<Item = (&ErrorTarget, &TargetState)> {
        self.targets.iter()
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl MessageSink for RecordingSink {
    fn render(&mut self, target: &ErrorTarget, messages: &[String]) {
        let state = self.targets.entry(target.clone()).or_default();
        state.messages = messages.to_vec();
        state.has_error = !messages.is_empty();
    }

    fn alert(&mut self, error: &ConfigError) {
        self.alerts.push(error.to_string());
    }
}

//! Rendering of validation outcomes into a [`MessageSink`].

use log::warn;

use super::context::MessageSink;
use super::{ValidationReport, ValidationResult};

/// Clears the result's target, then renders its messages if it failed.
pub fn render_result(sink: &mut dyn MessageSink, result: &ValidationResult) {
    if result.passed {
        sink.render(&result.target, &[]);
    } else {
        sink.render(&result.target, &result.messages);
    }
}

/// Renders every field result and alerts every configuration error.
pub fn render_report(sink: &mut dyn MessageSink, report: &ValidationReport) {
    for result in report.results() {
        render_result(sink, result);
    }
    for error in report.config_errors() {
        warn!("alerting misconfigured rule for field '{}'", error.field());
        sink.alert(error);
    }
}

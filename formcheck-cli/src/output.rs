//! Report printing.

use formcheck_lib::{ValidationReport, ValidationResult};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    all_passed: bool,
    results: &'a [ValidationResult],
    config_errors: Vec<String>,
}

/// One line per field, failing fields followed by their messages.
pub(crate) fn render_text(report: &ValidationReport) -> String {
    let mut lines = Vec::new();

    for result in report.results() {
        if result.passed {
            lines.push(format!("ok    {}", result.field));
        } else {
            lines.push(format!("FAIL  {} ({})", result.field, result.target));
            lines.extend(result.messages.iter().map(|m| format!("      - {}", m)));
        }
    }
    for error in report.config_errors() {
        lines.push(format!("ERROR {}", error));
    }

    let passed = report.results().iter().filter(|r| r.passed).count();
    let total = report.results().len() + report.config_errors().len();
    lines.push(format!("{}/{} fields passed", passed, total));

    lines.join("\n")
}

pub(crate) fn render_json(report: &ValidationReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        all_passed: report.all_passed(),
        results: report.results(),
        config_errors: report.config_errors().iter().map(ToString::to_string).collect(),
    })
}

//! Tests for single-field validation.

use formcheck_lib::error::ConfigError;
use formcheck_lib::sink::RecordingSink;
use formcheck_lib::snapshot::Snapshot;
use formcheck_lib::validation::{ErrorTarget, FieldRule, Inputs, ValidationContext, ValidationResult};
use formcheck_lib::value::Parsed;

fn validate(form: &Snapshot, rule: &FieldRule) -> (Result<ValidationResult, ConfigError>, RecordingSink) {
    let mut sink = RecordingSink::new();
    let outcome = ValidationContext::new(Inputs::new(form, form), &mut sink).validate_field(rule);
    (outcome, sink)
}

fn messages(form: &Snapshot, rule: &FieldRule) -> Vec<String> {
    validate(form, rule).0.unwrap().messages
}

#[test]
fn test_required_empty_stops_further_checks() {
    let form = Snapshot::new()
        .with_field("qty", "")
        .with_options("quantities", ["10"]);
    let rule = FieldRule::number_at_least("qty", 5.0).required().one_of("quantities");

    let (outcome, sink) = validate(&form, &rule);
    let result = outcome.unwrap();

    assert!(!result.passed);
    assert_eq!(result.messages, vec!["This field is required"]);
    assert_eq!(sink.messages_for("qty"), ["This field is required"]);
    assert!(sink.has_error("qty"));
}

#[test]
fn test_optional_empty_passes() {
    let form = Snapshot::new().with_field("born", "");
    let (outcome, sink) = validate(&form, &FieldRule::date("born"));
    let result = outcome.unwrap();

    assert!(result.passed);
    assert!(result.messages.is_empty());
    assert!(!sink.has_error("born"));
}

#[test]
fn test_whitespace_is_not_empty() {
    let form = Snapshot::new().with_field("person_name", " ");
    assert_eq!(
        messages(&form, &FieldRule::name("person_name").required()),
        vec!["At least two names are required"]
    );
}

#[test]
fn test_number_not_a_number() {
    let form = Snapshot::new().with_field("qty", "abc");
    assert_eq!(messages(&form, &FieldRule::number("qty")), vec!["Expected a number"]);
}

#[test]
fn test_number_below_minimum() {
    let form = Snapshot::new().with_field("qty", "3");
    assert_eq!(
        messages(&form, &FieldRule::number_at_least("qty", 5.0)),
        vec!["The value of this field must be greater than 5"]
    );
}

#[test]
fn test_number_at_or_above_minimum() {
    let form = Snapshot::new().with_field("qty", "10").with_field("exact", "5");

    let result = validate(&form, &FieldRule::number_at_least("qty", 5.0)).0.unwrap();
    assert!(result.passed);
    assert_eq!(result.parsed, Some(Parsed::Number(10.0)));

    assert!(messages(&form, &FieldRule::number_at_least("exact", 5.0)).is_empty());
}

#[test]
fn test_zero_is_a_value() {
    let form = Snapshot::new().with_field("qty", "0");
    let result = validate(&form, &FieldRule::number("qty").required()).0.unwrap();
    assert!(result.passed);
    assert_eq!(result.parsed, Some(Parsed::Number(0.0)));
}

#[test]
fn test_number_with_trailing_text_rejected() {
    let form = Snapshot::new().with_field("qty", "12abc");
    assert_eq!(messages(&form, &FieldRule::number("qty")), vec!["Expected a number"]);
}

#[test]
fn test_name_needs_two_tokens() {
    let form = Snapshot::new().with_field("person_name", "Jane");
    assert_eq!(
        messages(&form, &FieldRule::name("person_name")),
        vec!["At least two names are required"]
    );
}

#[test]
fn test_name_first_and_last() {
    let form = Snapshot::new().with_field("person_name", "Jane Doe");
    let result = validate(&form, &FieldRule::name("person_name")).0.unwrap();
    assert!(result.passed);
}

#[test]
fn test_name_middle_captured() {
    let form = Snapshot::new().with_field("person_name", "Jane Q Doe");
    let result = validate(&form, &FieldRule::name("person_name")).0.unwrap();
    assert!(result.passed);

    let name = result.parsed.as_ref().and_then(Parsed::as_name).unwrap();
    assert_eq!(name.first.as_deref(), Some("Jane"));
    assert_eq!(name.middle.as_deref(), Some("Q"));
    assert_eq!(name.last.as_deref(), Some("Doe"));
}

#[test]
fn test_date_invalid() {
    let form = Snapshot::new().with_field("born", "not-a-date");
    assert_eq!(messages(&form, &FieldRule::date("born")), vec!["This is not a valid date"]);
}

#[test]
fn test_date_valid() {
    let form = Snapshot::new().with_field("born", "2024-01-15");
    let result = validate(&form, &FieldRule::date("born")).0.unwrap();
    assert!(result.passed);
    assert_eq!(
        result.parsed.as_ref().and_then(Parsed::as_date).map(|d| d.to_string()),
        Some("2024-01-15".to_string())
    );
}

#[test]
fn test_allowed_list() {
    let form = Snapshot::new()
        .with_field("good", "A")
        .with_field("bad", "C")
        .with_options("letters", ["A", "B"]);

    assert!(messages(&form, &FieldRule::string("good").one_of("letters")).is_empty());
    assert_eq!(
        messages(&form, &FieldRule::string("bad").one_of("letters")),
        vec!["This value does not exist on the list letters"]
    );
}

#[test]
fn test_allowed_list_is_exact_match() {
    let form = Snapshot::new()
        .with_field("letter", "a")
        .with_options("letters", ["A", "B"]);
    assert_eq!(
        messages(&form, &FieldRule::string("letter").one_of("letters")),
        vec!["This value does not exist on the list letters"]
    );
}

#[test]
fn test_disallowed_list() {
    let form = Snapshot::new()
        .with_field("phone", "555-0100")
        .with_options("phones", ["555-0100", "555-0199"]);
    assert_eq!(
        messages(&form, &FieldRule::string("phone").none_of("phones")),
        vec!["This value already exists in the list phones"]
    );
}

#[test]
fn test_all_failures_reported_in_order() {
    let form = Snapshot::new()
        .with_field("qty", "3")
        .with_options("quantities", ["10", "20"]);
    assert_eq!(
        messages(&form, &FieldRule::number_at_least("qty", 5.0).one_of("quantities")),
        vec![
            "The value of this field must be greater than 5",
            "This value does not exist on the list quantities",
        ]
    );
}

#[test]
fn test_list_value_type_mismatch() {
    let form = Snapshot::new().with_field("gender", vec!["F", "M"]);
    assert_eq!(
        messages(&form, &FieldRule::string("gender")),
        vec!["Expected string, got a value of list"]
    );
}

#[test]
fn test_list_value_members_checked() {
    let form = Snapshot::new()
        .with_field("tags", vec!["A", "Z"])
        .with_options("letters", ["A", "B"]);
    let result = validate(&form, &FieldRule::string("tags").one_of("letters")).0.unwrap();
    assert_eq!(
        result.messages,
        vec![
            "Expected string, got a value of list",
            "This value does not exist on the list letters",
        ]
    );
}

#[test]
fn test_unknown_field_is_config_error() {
    let form = Snapshot::new();
    let (outcome, sink) = validate(&form, &FieldRule::string("missing").required());

    assert_eq!(outcome, Err(ConfigError::unknown_field("missing")));
    assert_eq!(sink.alerts().len(), 1);
    assert!(sink.target(&ErrorTarget::container_of("missing")).is_none());
}

#[test]
fn test_unknown_list_is_config_error() {
    let form = Snapshot::new().with_field("gender", "F");
    let (outcome, sink) = validate(&form, &FieldRule::string("gender").one_of("genders"));

    assert_eq!(outcome, Err(ConfigError::unknown_list("gender", "genders")));
    assert_eq!(sink.alerts().len(), 1);
}

#[test]
fn test_same_list_is_config_error() {
    let form = Snapshot::new()
        .with_field("phone", "1")
        .with_options("phones", ["2"])
        .with_alias("#phone-list", "phones");
    let rule = FieldRule::string("phone").one_of("phones").none_of("#phone-list");

    let (outcome, sink) = validate(&form, &rule);
    assert!(matches!(outcome, Err(ConfigError::SameList { .. })));
    assert!(sink.messages_for("phone").is_empty());
}

#[test]
fn test_idempotent() {
    let form = Snapshot::new().with_field("qty", "abc");
    let rule = FieldRule::number("qty");
    let mut sink = RecordingSink::new();
    let mut cx = ValidationContext::new(Inputs::new(&form, &form), &mut sink);

    let first = cx.validate_field(&rule).unwrap();
    let second = cx.validate_field(&rule).unwrap();

    assert_eq!(first, second);
    assert_eq!(sink.messages_for("qty"), ["Expected a number"]);
}

#[test]
fn test_fixing_value_clears_error() {
    let mut form = Snapshot::new().with_field("qty", "abc");
    let rule = FieldRule::number("qty");
    let mut sink = RecordingSink::new();

    ValidationContext::new(Inputs::new(&form, &form), &mut sink)
        .validate_field(&rule)
        .unwrap();
    assert!(sink.has_error("qty"));

    form.set_field("qty", "7");
    ValidationContext::new(Inputs::new(&form, &form), &mut sink)
        .validate_field(&rule)
        .unwrap();
    assert!(!sink.has_error("qty"));
    assert!(sink.messages_for("qty").is_empty());
}

#[test]
fn test_custom_error_target() {
    let form = Snapshot::new().with_field("person_name", "Jane");
    let rule = FieldRule::name("person_name").errors_at("name-errors");
    let (outcome, sink) = validate(&form, &rule);

    assert_eq!(outcome.unwrap().target, ErrorTarget::element("name-errors"));
    let state = sink.target(&ErrorTarget::element("name-errors")).unwrap();
    assert_eq!(state.messages, vec!["At least two names are required"]);
    assert!(state.has_error);
    assert!(sink.target(&ErrorTarget::container_of("person_name")).is_none());
}

#[test]
fn test_clear_field() {
    let form = Snapshot::new().with_field("qty", "abc");
    let mut sink = RecordingSink::new();
    let mut cx = ValidationContext::new(Inputs::new(&form, &form), &mut sink);

    cx.validate_field(&FieldRule::number("qty")).unwrap();
    cx.clear_field("qty");

    assert!(!sink.has_error("qty"));
    assert!(sink.messages_for("qty").is_empty());
}

use std::cell::RefCell;
use std::rc::Rc;

use selectdom::{
    create_select, ConfigError, FieldKind, Form, FormField, SelectConfig, SelectOption,
    SelectValue,
};

fn options(entries: &[(&str, &str, bool)]) -> Vec<SelectOption> {
    entries
        .iter()
        .map(|(value, label, disabled)| SelectOption::new(*value, *label).disabled(*disabled))
        .collect()
}

fn changes() -> (Rc<RefCell<Vec<SelectValue>>>, impl FnMut(&SelectValue)) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    (log, move |value: &SelectValue| {
        sink.borrow_mut().push(value.clone())
    })
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_missing_field_fails_fast() {
    let mut form = Form::new();
    let err = form
        .attach_select("year", options(&[("1", "first year", false)]), SelectConfig::new())
        .unwrap_err();
    assert!(matches!(err, ConfigError::MissingField(name) if name == "year"));
}

#[test]
fn test_wrong_field_kind_fails_fast() {
    let mut form = Form::new();
    form.add_field(FormField::new("hours", FieldKind::Checkbox));
    let err = form
        .attach_select("hours", options(&[("1", "one", false)]), SelectConfig::new())
        .unwrap_err();
    assert!(matches!(err, ConfigError::WrongFieldKind { .. }));
}

#[test]
fn test_single_auto_selects_first_enabled_without_notifying() {
    let (log, on_change) = changes();
    let widget = create_select(
        FormField::text("year"),
        options(&[("a", "Alpha", true), ("b", "Beta", false)]),
        SelectConfig::new().on_change(on_change),
    )
    .unwrap();

    assert_eq!(widget.value(), SelectValue::Single(Some("b".to_string())));
    // Initialization is not a user action
    assert!(log.borrow().is_empty());
    assert_eq!(widget.field().value(), "b");
}

#[test]
fn test_multi_initial_values_synced_silently() {
    let widget = create_select(
        FormField::text("departments"),
        options(&[("6", "EECS", false), ("18", "Mathematics", false)]),
        SelectConfig::new().multiple(true).values(["18", "6"]),
    )
    .unwrap();

    assert_eq!(widget.field().value(), "[18,6]");
}

// ============================================================================
// Value API
// ============================================================================

#[test]
fn test_spec_scenario_single_navigation() {
    // Registry [a "Alpha", b "Beta" disabled, c "Gamma"], no initial value
    let (log, on_change) = changes();
    let mut widget = create_select(
        FormField::text("pick"),
        options(&[
            ("a", "Alpha", false),
            ("b", "Beta", true),
            ("c", "Gamma", false),
        ]),
        SelectConfig::new().on_change(on_change),
    )
    .unwrap();

    assert_eq!(widget.value(), SelectValue::Single(Some("a".to_string())));
    assert!(log.borrow().is_empty());

    // next() skips disabled b
    assert!(widget.next());
    assert_eq!(widget.value(), SelectValue::Single(Some("c".to_string())));
    assert_eq!(log.borrow().len(), 1);

    // No wrap-around at the last option
    assert!(!widget.next());
    assert_eq!(widget.value(), SelectValue::Single(Some("c".to_string())));
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn test_navigation_skips_disabled_both_ways() {
    let mut widget = create_select(
        FormField::text("pick"),
        options(&[
            ("a", "A", true),
            ("b", "B", false),
            ("c", "C", true),
            ("d", "D", false),
        ]),
        SelectConfig::new(),
    )
    .unwrap();

    assert_eq!(widget.value(), SelectValue::Single(Some("b".to_string())));
    assert!(widget.next());
    assert_eq!(widget.value(), SelectValue::Single(Some("d".to_string())));
    assert!(widget.prev());
    assert_eq!(widget.value(), SelectValue::Single(Some("b".to_string())));
    // a is disabled, so b is already first
    assert!(!widget.prev());
}

#[test]
fn test_set_value_notifies_at_most_once() {
    let (log, on_change) = changes();
    let mut widget = create_select(
        FormField::text("pick"),
        options(&[("a", "A", false), ("b", "B", false)]),
        SelectConfig::new().on_change(on_change),
    )
    .unwrap();

    let value = SelectValue::Single(Some("b".to_string()));
    assert!(widget.set_value(&value));
    assert!(!widget.set_value(&value));
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn test_multi_round_trip_preserves_order() {
    let mut widget = create_select(
        FormField::text("pick"),
        options(&[("a", "A", false), ("b", "B", false), ("c", "C", false)]),
        SelectConfig::new().multiple(true),
    )
    .unwrap();

    let value = SelectValue::Multi(vec!["a".into(), "b".into(), "c".into()]);
    assert!(widget.set_value(&value));
    assert_eq!(widget.value(), value);
    assert_eq!(widget.field().value(), "[a,b,c]");
}

#[test]
fn test_spec_scenario_multi_limit() {
    let (log, on_change) = changes();
    let limits = Rc::new(RefCell::new(Vec::new()));
    let limit_sink = limits.clone();

    let mut widget = create_select(
        FormField::text("pick"),
        options(&[("a", "A", false), ("b", "B", false), ("c", "C", false)]),
        SelectConfig::new()
            .multiple(true)
            .limit(2)
            .on_change(on_change)
            .on_limit(move |limit| limit_sink.borrow_mut().push(limit)),
    )
    .unwrap();

    assert!(widget.set_value(&SelectValue::Multi(vec!["a".into()])));
    assert!(widget.set_value(&SelectValue::Multi(vec!["a".into(), "b".into()])));

    // Third value exceeds the limit: selection unchanged, onLimit(2) once
    assert!(!widget.set_value(&SelectValue::Multi(vec![
        "a".into(),
        "b".into(),
        "c".into()
    ])));
    assert_eq!(
        widget.value(),
        SelectValue::Multi(vec!["a".to_string(), "b".to_string()])
    );
    assert_eq!(*limits.borrow(), vec![2]);
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn test_reset_always_notifies() {
    let (log, on_change) = changes();
    let mut widget = create_select(
        FormField::text("pick"),
        options(&[("a", "A", false)]),
        SelectConfig::new().multiple(true).on_change(on_change),
    )
    .unwrap();

    widget.reset();
    widget.reset();
    assert_eq!(widget.value(), SelectValue::Multi(vec![]));
    assert_eq!(widget.field().value(), "[]");
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn test_trim_updates_field_without_notifying() {
    let (log, on_change) = changes();
    let mut widget = create_select(
        FormField::text("pick"),
        options(&[("a", "A", false), ("b", "B", false), ("c", "C", false)]),
        SelectConfig::new()
            .multiple(true)
            .values(["a", "b", "c"])
            .on_change(on_change),
    )
    .unwrap();

    assert!(widget.trim(1));
    assert_eq!(widget.value(), SelectValue::Multi(vec!["a".to_string()]));
    assert_eq!(widget.field().value(), "[a]");
    assert!(log.borrow().is_empty());

    assert!(!widget.trim(1));
}

// ============================================================================
// Backing field contract
// ============================================================================

#[test]
fn test_field_change_subscribers_observe_updates() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();

    let mut field = FormField::text("pick");
    field.subscribe(move |value| sink.borrow_mut().push(value.to_string()));

    let mut widget = create_select(
        field,
        options(&[("a", "A", false), ("b", "B", false)]),
        SelectConfig::new(),
    )
    .unwrap();

    // Construction synced "a" silently
    assert!(seen.borrow().is_empty());

    widget.set_value(&SelectValue::Single(Some("b".to_string())));
    widget.reset();
    assert_eq!(*seen.borrow(), vec!["b".to_string(), String::new()]);
}

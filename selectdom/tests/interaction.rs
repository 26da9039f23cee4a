//! Interaction controller tests: clicks and keys routed through the
//! rendered region layout, the way a real event loop drives the widget.

use std::cell::RefCell;
use std::rc::Rc;

use selectdom::{
    create_select, Buffer, Event, FormField, Key, Modifiers, MouseButton, Rect, SelectConfig,
    SelectOption, SelectValue, SelectWidget,
};

fn options(entries: &[(&str, &str, bool)]) -> Vec<SelectOption> {
    entries
        .iter()
        .map(|(value, label, disabled)| SelectOption::new(*value, *label).disabled(*disabled))
        .collect()
}

fn render(widget: &mut SelectWidget, buf: &mut Buffer) {
    buf.clear();
    let height = widget.desired_height();
    widget.render(buf, Rect::new(0, 0, 30, height));
}

fn click_region(widget: &mut SelectWidget, region: &str) -> bool {
    let rect = *widget
        .layout()
        .get(region)
        .unwrap_or_else(|| panic!("no region `{region}` in layout"));
    widget.handle_event(&Event::Click {
        x: rect.x + rect.width / 2,
        y: rect.y,
        button: MouseButton::Left,
    })
}

fn press(widget: &mut SelectWidget, key: Key) -> bool {
    widget.handle_event(&Event::Key {
        key,
        modifiers: Modifiers::new(),
    })
}

fn single_widget() -> SelectWidget {
    create_select(
        FormField::text("pick"),
        options(&[
            ("a", "Alpha", false),
            ("b", "Beta", true),
            ("c", "Gamma", false),
        ]),
        SelectConfig::new(),
    )
    .unwrap()
}

// ============================================================================
// Open / close
// ============================================================================

#[test]
fn test_container_click_toggles_open() {
    let mut widget = single_widget();
    let mut buf = Buffer::new(40, 20);

    render(&mut widget, &mut buf);
    assert!(click_region(&mut widget, "select"));
    assert!(widget.is_open());

    render(&mut widget, &mut buf);
    assert!(click_region(&mut widget, "select"));
    assert!(!widget.is_open());
}

#[test]
fn test_outside_click_closes() {
    let mut widget = single_widget();
    let mut buf = Buffer::new(40, 20);

    // Outside click while closed is not consumed
    render(&mut widget, &mut buf);
    assert!(!widget.handle_event(&Event::Click {
        x: 35,
        y: 15,
        button: MouseButton::Left
    }));

    widget.open();
    render(&mut widget, &mut buf);
    assert!(widget.handle_event(&Event::Click {
        x: 35,
        y: 15,
        button: MouseButton::Left
    }));
    assert!(!widget.is_open());
}

#[test]
fn test_escape_and_pageup_close() {
    let mut widget = single_widget();

    widget.open();
    assert!(press(&mut widget, Key::Escape));
    assert!(!widget.is_open());

    // Escape with a closed dropdown is not consumed
    assert!(!press(&mut widget, Key::Escape));

    widget.open();
    assert!(press(&mut widget, Key::PageUp));
    assert!(!widget.is_open());
}

#[test]
fn test_pagedown_opens() {
    let mut widget = single_widget();
    assert!(press(&mut widget, Key::PageDown));
    assert!(widget.is_open());
}

#[test]
fn test_focus_lost_closes_plain_variant_only() {
    let mut plain = single_widget();
    plain.open();
    assert!(plain.handle_event(&Event::FocusLost));
    assert!(!plain.is_open());

    let mut auto = create_select(
        FormField::text("pick"),
        options(&[("a", "Alpha", false)]),
        SelectConfig::new().autocomplete(true),
    )
    .unwrap();
    auto.open();
    assert!(!auto.handle_event(&Event::FocusLost));
    assert!(auto.is_open());
}

// ============================================================================
// Option activation
// ============================================================================

#[test]
fn test_option_click_selects_and_closes_single() {
    let mut widget = single_widget();
    let mut buf = Buffer::new(40, 20);

    widget.open();
    render(&mut widget, &mut buf);
    assert!(click_region(&mut widget, "option:c"));
    assert_eq!(widget.value(), SelectValue::Single(Some("c".to_string())));
    assert!(!widget.is_open());
}

#[test]
fn test_already_selected_option_click_is_noop_but_closes() {
    let changed = Rc::new(RefCell::new(0));
    let counter = changed.clone();
    let mut widget = create_select(
        FormField::text("pick"),
        options(&[("a", "Alpha", false), ("b", "Beta", false)]),
        SelectConfig::new().on_change(move |_| *counter.borrow_mut() += 1),
    )
    .unwrap();
    let mut buf = Buffer::new(40, 20);

    widget.open();
    render(&mut widget, &mut buf);
    assert!(click_region(&mut widget, "option:a"));
    assert_eq!(*changed.borrow(), 0);
    assert!(!widget.is_open());
}

#[test]
fn test_disabled_option_click_keeps_dropdown_open() {
    let mut widget = single_widget();
    let mut buf = Buffer::new(40, 20);

    widget.open();
    render(&mut widget, &mut buf);
    assert!(click_region(&mut widget, "option:b"));
    assert_eq!(widget.value(), SelectValue::Single(Some("a".to_string())));
    assert!(widget.is_open());
}

#[test]
fn test_multi_stays_open_until_limit_reached() {
    let limits = Rc::new(RefCell::new(Vec::new()));
    let sink = limits.clone();
    let mut widget = create_select(
        FormField::text("pick"),
        options(&[("a", "A", false), ("b", "B", false), ("c", "C", false)]),
        SelectConfig::new()
            .multiple(true)
            .limit(2)
            .on_limit(move |limit| sink.borrow_mut().push(limit)),
    )
    .unwrap();
    let mut buf = Buffer::new(40, 20);

    widget.open();
    render(&mut widget, &mut buf);
    assert!(click_region(&mut widget, "option:a"));
    assert!(widget.is_open());

    // Second selection reaches the limit and closes the dropdown
    render(&mut widget, &mut buf);
    assert!(click_region(&mut widget, "option:b"));
    assert!(!widget.is_open());
    assert_eq!(
        widget.value(),
        SelectValue::Multi(vec!["a".to_string(), "b".to_string()])
    );
    assert!(limits.borrow().is_empty());

    // A further attempt is rejected wholesale and reports the limit
    widget.open();
    render(&mut widget, &mut buf);
    assert!(click_region(&mut widget, "option:c"));
    assert_eq!(
        widget.value(),
        SelectValue::Multi(vec!["a".to_string(), "b".to_string()])
    );
    assert_eq!(*limits.borrow(), vec![2]);
}

#[test]
fn test_multi_option_click_toggles_off() {
    let mut widget = create_select(
        FormField::text("pick"),
        options(&[("a", "A", false), ("b", "B", false)]),
        SelectConfig::new().multiple(true).values(["a"]),
    )
    .unwrap();
    let mut buf = Buffer::new(40, 20);

    widget.open();
    render(&mut widget, &mut buf);
    assert!(click_region(&mut widget, "option:a"));
    assert_eq!(widget.value(), SelectValue::Multi(vec![]));
    assert!(widget.is_open());
}

// ============================================================================
// Tag removal
// ============================================================================

#[test]
fn test_tag_icon_removes_without_toggling_dropdown() {
    let mut widget = create_select(
        FormField::text("pick"),
        options(&[("a", "A", false), ("b", "B", false)]),
        SelectConfig::new().multiple(true).values(["a", "b"]),
    )
    .unwrap();
    let mut buf = Buffer::new(40, 20);

    // Closed: removal must not open the dropdown
    render(&mut widget, &mut buf);
    assert!(click_region(&mut widget, "tag:a"));
    assert_eq!(widget.value(), SelectValue::Multi(vec!["b".to_string()]));
    assert!(!widget.is_open());

    // Open: removal must not close it either
    widget.open();
    render(&mut widget, &mut buf);
    assert!(click_region(&mut widget, "tag:b"));
    assert_eq!(widget.value(), SelectValue::Multi(vec![]));
    assert!(widget.is_open());
}

// ============================================================================
// Keyboard navigation
// ============================================================================

#[test]
fn test_arrow_keys_navigate_and_fall_back_to_open() {
    let mut widget = single_widget();

    // a -> c (skipping disabled b)
    assert!(press(&mut widget, Key::Down));
    assert_eq!(widget.value(), SelectValue::Single(Some("c".to_string())));
    assert!(!widget.is_open());

    // At the last option: no wrap, the dropdown opens instead
    assert!(press(&mut widget, Key::Down));
    assert_eq!(widget.value(), SelectValue::Single(Some("c".to_string())));
    assert!(widget.is_open());

    widget.close();
    assert!(press(&mut widget, Key::Up));
    assert_eq!(widget.value(), SelectValue::Single(Some("a".to_string())));

    // At the first option Up is a plain no-op
    assert!(!press(&mut widget, Key::Up));
    assert!(!widget.is_open());
}

// ============================================================================
// Autocomplete
// ============================================================================

#[test]
fn test_typing_filters_rendered_options() {
    let mut widget = create_select(
        FormField::text("pick"),
        options(&[
            ("1", "Civil Engineering", false),
            ("6", "EECS", false),
            ("18", "Mathematics", false),
        ]),
        SelectConfig::new().autocomplete(true),
    )
    .unwrap();
    let mut buf = Buffer::new(40, 20);

    widget.open();
    for c in "math".chars() {
        assert!(press(&mut widget, Key::Char(c)));
    }
    assert_eq!(widget.filter_text(), "math");
    assert!(widget.registry().is_hidden("1"));
    assert!(widget.registry().is_hidden("6"));
    assert!(!widget.registry().is_hidden("18"));

    // Hidden options disappear from the layout, visible ones stay clickable
    render(&mut widget, &mut buf);
    assert!(widget.layout().get("option:6").is_none());
    assert!(click_region(&mut widget, "option:18"));
    assert_eq!(widget.value(), SelectValue::Single(Some("18".to_string())));
}

#[test]
fn test_reopening_clears_previous_filter() {
    let mut widget = create_select(
        FormField::text("pick"),
        options(&[("a", "Alpha", false), ("b", "Beta", false)]),
        SelectConfig::new().autocomplete(true),
    )
    .unwrap();

    widget.open();
    assert!(press(&mut widget, Key::Char('z')));
    assert!(widget.registry().is_hidden("a"));

    assert!(press(&mut widget, Key::Escape));
    widget.open();
    assert_eq!(widget.filter_text(), "");
    assert!(!widget.registry().is_hidden("a"));
}

#[test]
fn test_filter_box_click_keeps_dropdown_open() {
    let mut widget = create_select(
        FormField::text("pick"),
        options(&[("a", "Alpha", false)]),
        SelectConfig::new().autocomplete(true),
    )
    .unwrap();
    let mut buf = Buffer::new(40, 20);

    widget.open();
    render(&mut widget, &mut buf);
    assert!(click_region(&mut widget, "filter"));
    assert!(widget.is_open());
}

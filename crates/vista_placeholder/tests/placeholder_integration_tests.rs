//! Integration tests for placeholder containers and registries.

use vista_placeholder::{
    CaptureMode, Key, PlaceholderContainer, PlaceholderError, PlaceholderRegistry,
};

#[test]
fn test_list_rendering() {
    let mut container = PlaceholderContainer::new();
    container.set_prefix("<ul><li>");
    container.set_separator("</li><li>");
    container.set_postfix("</li></ul>");
    container.append("foo");
    container.append("bar");
    container.append("baz");

    assert_eq!(
        container.render(),
        "<ul><li>foo</li><li>bar</li><li>baz</li></ul>"
    );
}

#[test]
fn test_empty_container_renders_nothing() {
    let mut container = PlaceholderContainer::new();
    container.set_prefix("<ul><li>");
    container.set_postfix("</li></ul>");

    assert_eq!(container.render(), "");
}

#[test]
fn test_append_key_continues_from_max() {
    let mut container = PlaceholderContainer::new();
    container.append("foo");
    assert!(container.contains_key(0u64));

    container.append("bar");
    assert_eq!(container.get(1u64).unwrap().to_string(), "bar");
}

#[test]
fn test_implicit_keys_survive_named_entries() {
    let mut container = PlaceholderContainer::new();
    container.append("zero");
    container.insert("title", "My Page");
    container.append("one");
    container.insert(5u64, "five");
    container.append("six");

    assert_eq!(container.get(6u64).unwrap().to_string(), "six");
    assert_eq!(container.len(), 5);
}

#[test]
fn test_nested_capture_rejected() {
    let mut container = PlaceholderContainer::new();
    container.capture_start(CaptureMode::Set, None).unwrap();

    assert_eq!(
        container.capture_start(CaptureMode::Set, None),
        Err(PlaceholderError::CaptureAlreadyActive)
    );
}

#[test]
fn test_capture_into_named_slot_then_render() {
    let mut registry = PlaceholderRegistry::new();

    let scripts = registry.container("head_script");
    scripts.set_separator("\n");
    scripts.append("var a = 1;");

    scripts
        .capture_start(CaptureMode::Append, None)
        .unwrap();
    scripts.capture_write("var b = 2;").unwrap();
    scripts.capture_end().unwrap();

    assert_eq!(
        registry.get("head_script").unwrap().render(),
        "var a = 1;\nvar b = 2;"
    );
}

#[test]
fn test_capture_prepend_keyed() {
    let mut container = PlaceholderContainer::new();
    container.insert("crumbs", "Home");

    container
        .capture_start(CaptureMode::Prepend, Some(Key::from("crumbs")))
        .unwrap();
    container.capture_write("Root > ").unwrap();
    container.capture_end().unwrap();

    assert_eq!(container.get("crumbs").unwrap().to_string(), "Root > Home");
}

#[test]
fn test_indent_with_multiline_separator() {
    let mut container = PlaceholderContainer::new();
    container.set_separator("\n");
    container.set_indent(2usize);
    container.append("<meta a>");
    container.append("<meta b>");

    assert_eq!(container.render(), "  <meta a>\n  <meta b>");
}

#[test]
fn test_registry_isolates_slots() {
    let mut registry = PlaceholderRegistry::new();
    registry.container("title").set("Home");
    registry.container("scripts").append("var x;");

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get("title").unwrap().render(), "Home");
    assert_eq!(registry.get("scripts").unwrap().render(), "var x;");

    registry.delete("scripts");
    assert!(registry.get("scripts").is_none());
    assert!(registry.contains("title"));
}

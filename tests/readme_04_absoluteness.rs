//! README example: 4. Structured and Textual Absoluteness

use drivejoin::{is_absolute_text, DrivePath};

#[test]
fn absolute_needs_drive_and_root() {
    assert!(DrivePath::parse("C:\\foo").is_absolute());
    assert!(!DrivePath::parse("C:foo").is_absolute());
    assert!(!DrivePath::parse("\\foo").is_absolute());
    assert!(DrivePath::parse("C:foo").is_relative());
}

#[test]
fn lexical_test_on_clean_text_agrees_with_parsing() {
    // neither demo pair exercises this boundary, so pin it here
    let cases = ["C:\\foo", "C:\\", "c:/bar", "C:foo", "\\foo", "foo", ""];

    for text in cases {
        assert_eq!(
            is_absolute_text(text),
            DrivePath::parse(text).is_absolute(),
            "agreement on {text:?}"
        );
    }
}

#[test]
fn lexical_test_rejects_malformed_drive_segments() {
    assert!(!is_absolute_text("C:\\C:foo"));
    assert!(!is_absolute_text("C:\\D:foo"));
}

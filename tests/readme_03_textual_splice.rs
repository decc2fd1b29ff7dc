//! README example: 3. Naive Textual Splicing

use drivejoin::splice;

#[test]
fn splice_is_pure_text() {
    // no drive awareness: the drive designator of the right fragment
    // survives into the middle of the result
    assert_eq!(splice("C:\\", "C:foo"), "C:\\C:foo");
    assert_eq!(splice("C:\\", "D:foo"), "C:\\D:foo");
}

#[test]
fn separator_inserted_only_when_missing() {
    assert_eq!(splice("C:\\x", "y"), "C:\\x\\y");
    assert_eq!(splice("C:\\x\\", "y"), "C:\\x\\y");
    assert_eq!(splice("C:\\x", "\\y"), "C:\\x\\y");
}

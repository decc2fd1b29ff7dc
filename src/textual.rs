use crate::constants::{ALT_SEPARATOR, SEPARATOR};

/// Joins `left` and `right` as plain text, inserting a separator only
/// when `left` does not already end in one and `right` does not start
/// with one. No drive awareness: `C:\` spliced with `C:foo` is the
/// literal `C:\C:foo`.
pub fn splice(left: &str, right: &str) -> String {
    if left.is_empty() {
        return right.to_string();
    }
    if right.is_empty() {
        return left.to_string();
    }

    if left.ends_with([SEPARATOR, ALT_SEPARATOR]) || right.starts_with([SEPARATOR, ALT_SEPARATOR])
    {
        format!("{left}{right}")
    } else {
        format!("{left}{SEPARATOR}{right}")
    }
}

/// Lexical absoluteness test on unparsed text.
///
/// True only for a drive-letter-colon prefix followed immediately by a
/// separator. A colon is only legal in the drive designator, so any
/// later colon marks a malformed component and the text is not a
/// well-formed anchored path: `is_absolute_text("C:\\C:foo")` is false.
pub fn is_absolute_text(text: &str) -> bool {
    let bytes = text.as_bytes();

    if bytes.len() < 3 {
        return false;
    }

    bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes[2] as char == SEPARATOR || bytes[2] as char == ALT_SEPARATOR)
        && !text[2..].contains(':')
}

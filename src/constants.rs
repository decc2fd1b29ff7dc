/// Primary separator for drive-letter paths.
pub const SEPARATOR: char = '\\';

/// Alternate separator accepted on input.
pub const ALT_SEPARATOR: char = '/';

/// Base fragment used by the built-in demo (the root of drive C).
pub const DEMO_LEFT: &str = "C:\\";

/// Drive-relative fragments the demo joins against [`DEMO_LEFT`].
pub const DEMO_RIGHTS: [&str; 2] = ["C:foo", "D:foo"];

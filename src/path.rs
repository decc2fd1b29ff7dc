use std::fmt;

use tracing::debug;

use crate::constants::{ALT_SEPARATOR, SEPARATOR};

// the structured form of a drive-letter path: an optional drive,
// an optional root marker, and the remaining components, see textual.rs
// for the splice-based counterpart
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrivePath {
    drive: Option<char>,
    rooted: bool,
    segments: Vec<String>,
}

impl fmt::Display for DrivePath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(drive) = self.drive {
            write!(f, "{drive}:")?;
        }
        if self.rooted {
            write!(f, "{SEPARATOR}")?;
        }
        write!(f, "{}", self.segments.join(&SEPARATOR.to_string()))
    }
}

impl DrivePath {
    /// Parses `text` into a [`DrivePath`]. Total: every string parses.
    ///
    /// A leading `<ascii-letter>:` becomes the drive, a separator in the
    /// next position becomes the root marker, and the rest is split on
    /// `\` and `/`. Empty and `.` components are dropped; `..` is kept
    /// as an ordinary segment.
    pub fn parse(text: &str) -> DrivePath {
        let bytes = text.as_bytes();

        let (drive, rest) = if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
        {
            (Some(bytes[0] as char), &text[2..])
        } else {
            (None, text)
        };

        let rooted = rest.starts_with(SEPARATOR) || rest.starts_with(ALT_SEPARATOR);

        let segments = rest
            .split([SEPARATOR, ALT_SEPARATOR])
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .map(str::to_string)
            .collect();

        DrivePath {
            drive,
            rooted,
            segments,
        }
    }

    /// Combines `other` onto `self` under drive-aware rules.
    ///
    /// A fragment carrying a different drive cannot be anchored under
    /// `self` and replaces it outright. A same-drive fragment without a
    /// root appends under `self`; with a root it replaces `self` as well.
    /// A rooted fragment without a drive keeps `self`'s drive but takes
    /// over the root and everything below it.
    pub fn join(&self, other: &DrivePath) -> DrivePath {
        if let Some(drive) = other.drive {
            if !self.has_drive(drive) {
                debug!(base = %self, fragment = %other, "drive mismatch, base discarded");
                return other.clone();
            }
            if other.rooted {
                debug!(base = %self, fragment = %other, "rooted fragment, base replaced");
                return other.clone();
            }
        } else if other.rooted {
            debug!(base = %self, fragment = %other, "root replaced, drive kept");
            return DrivePath {
                drive: self.drive,
                rooted: true,
                segments: other.segments.clone(),
            };
        }

        let mut joined = self.clone();
        joined.segments.extend_from_slice(&other.segments);
        joined
    }

    /// A path is absolute only with both a drive and a root marker.
    /// `D:foo` (drive-relative) and `\foo` (rooted, no drive) are not.
    pub fn is_absolute(&self) -> bool {
        self.drive.is_some() && self.rooted
    }

    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    pub fn drive(&self) -> Option<char> {
        self.drive
    }

    pub fn is_rooted(&self) -> bool {
        self.rooted
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    // drive letters name volumes, which Windows resolves case-insensitively
    fn has_drive(&self, other: char) -> bool {
        self.drive
            .is_some_and(|drive| drive.eq_ignore_ascii_case(&other))
    }
}

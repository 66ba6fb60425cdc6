use std::fmt;

/// A Mac based operating system, versioned by the official major.minor
/// numbering. Versions reported in legacy 10.x form are corrected on parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacOs {
    /// Official major version, or [`Self::UNKNOWN_MAJOR`].
    pub major: i32,
    /// Official minor version. Defaults to 0 when undetermined.
    pub minor: i32,
}

impl MacOs {
    /// Sentinel major version meaning detection could not read one.
    pub const UNKNOWN_MAJOR: i32 = -1;

    /// Parses a platform version string like `"10.15.7"` into official
    /// major.minor numbering.
    ///
    /// Only the first two dot-separated components are read; an unparsable or
    /// missing major yields [`Self::UNKNOWN_MAJOR`], an unparsable or missing
    /// minor yields 0. Platforms kept reporting post-Catalina releases with
    /// legacy 10.x numbers ("10.16" for Big Sur), so 10.x with x > 15 is
    /// corrected to (10 + x - 15).0.
    pub fn from_version(version: &str) -> Self {
        let mut components = version.split('.');
        let major: i32 = components
            .next()
            .and_then(|c| c.parse().ok())
            .unwrap_or(Self::UNKNOWN_MAJOR);
        let minor: i32 = components.next().and_then(|c| c.parse().ok()).unwrap_or(0);

        if major == 10 && minor > 15 {
            return Self { major: 10 + (minor - 15), minor: 0 };
        }

        Self { major, minor }
    }

    /// Whether this release is at or past the given major.minor.
    ///
    /// An unknown major never satisfies any bound.
    pub fn is_at_least(self, major: i32, minor: i32) -> bool {
        self.major != Self::UNKNOWN_MAJOR && (self.major, self.minor) >= (major, minor)
    }
}

impl fmt::Display for MacOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.major == Self::UNKNOWN_MAJOR {
            write!(f, "macOS (unknown version)")
        } else {
            write!(f, "macOS {}.{}", self.major, self.minor)
        }
    }
}

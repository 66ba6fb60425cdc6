use std::fmt;

use super::{Distro, Os, OtherId, WindowsRelease};

/// The top-level operating system category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Windows,
    Mac,
    Linux,
    Other,
}

impl Family {
    /// A fixed, canonical [`Os`] value standing in for this whole family,
    /// for tests and generic family-level dispatch.
    ///
    /// The representatives are the most recent well-known releases: Windows
    /// 11 (non-server), macOS 12.0, Ubuntu, and the unrecognized other-OS.
    /// They are stable across versions of this crate.
    pub fn representative(self) -> Os {
        match self {
            Self::Windows => Os::windows(WindowsRelease::Win11, false),
            Self::Mac => Os::mac(12, 0),
            Self::Linux => Os::linux(Distro::Ubuntu),
            Self::Other => Os::other(OtherId::Unknown),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Windows => "Windows",
            Self::Mac => "macOS",
            Self::Linux => "Linux",
            Self::Other => "other",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn representatives_belong_to_their_family() {
        for family in [Family::Windows, Family::Mac, Family::Linux, Family::Other] {
            assert_eq!(family.representative().family(), family);
        }
    }
}

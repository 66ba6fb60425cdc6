//! The catalog of operating systems this crate recognizes.
//!
//! [`Os`] is a closed sum type with one variant per family. Values are
//! immutable after construction: they are either built once by detection,
//! declared as constants, or assembled ad hoc by callers for comparisons.

mod family;
mod linux;
mod mac;
mod other;
mod windows;

use std::fmt;

pub use family::Family;
pub use linux::{Distro, LinuxOs};
pub use mac::MacOs;
pub use other::{OtherId, OtherOs};
pub use windows::{WindowsOs, WindowsRelease};

/// A specific operating system, as precise as detection could make it.
///
/// Equality compares the discriminating fields of the variant only: Windows
/// release + server flag, macOS major.minor, Linux distribution (the attached
/// os-release map is provenance, not identity), other-OS identity. The raw
/// platform strings a value was detected from never participate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Os {
    Windows(WindowsOs),
    Mac(MacOs),
    Linux(LinuxOs),
    Other(OtherOs),
}

impl Os {
    /// A Windows release, optionally a server edition.
    pub fn windows(release: WindowsRelease, server: bool) -> Self {
        Self::Windows(WindowsOs { release, server })
    }

    /// A macOS release by official major.minor version.
    pub fn mac(major: i32, minor: i32) -> Self {
        Self::Mac(MacOs { major, minor })
    }

    /// A Linux distribution with no os-release data attached.
    pub fn linux(distro: Distro) -> Self {
        Self::Linux(LinuxOs::new(distro))
    }

    /// An operating system outside the Windows/Mac/Linux families.
    pub fn other(id: OtherId) -> Self {
        Self::Other(OtherOs { id })
    }

    /// The family this OS belongs to. Fixed per variant.
    pub fn family(&self) -> Family {
        match self {
            Self::Windows(_) => Family::Windows,
            Self::Mac(_) => Family::Mac,
            Self::Linux(_) => Family::Linux,
            Self::Other(_) => Family::Other,
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows(windows) => windows.fmt(f),
            Self::Mac(mac) => mac.fmt(f),
            Self::Linux(linux) => linux.fmt(f),
            Self::Other(other) => other.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_is_fixed_per_variant() {
        assert_eq!(Os::windows(WindowsRelease::Win10, false).family(), Family::Windows);
        assert_eq!(Os::mac(11, 0).family(), Family::Mac);
        assert_eq!(Os::linux(Distro::Debian).family(), Family::Linux);
        assert_eq!(Os::other(OtherId::Solaris).family(), Family::Other);
    }

    #[test]
    fn display_names_are_descriptive() {
        assert_eq!(Os::windows(WindowsRelease::Win81, true).to_string(), "Windows 8.1 Server");
        assert_eq!(Os::mac(12, 3).to_string(), "macOS 12.3");
        assert_eq!(Os::linux(Distro::Arch).to_string(), "Linux (Arch)");
        assert_eq!(Os::other(OtherId::Solaris).to_string(), "Solaris");
    }
}

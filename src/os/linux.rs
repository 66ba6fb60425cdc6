use std::collections::BTreeMap;
use std::fmt;

/// A Linux based operating system.
#[derive(Debug, Clone)]
pub struct LinuxOs {
    /// The exact or next-best distribution.
    pub distro: Distro,
    /// The key/value pairs detection read from the os-release file, if any.
    /// Auxiliary data: not part of equality.
    pub os_release: BTreeMap<String, String>,
}

impl LinuxOs {
    /// A distribution with no os-release data attached.
    pub fn new(distro: Distro) -> Self {
        Self { distro, os_release: BTreeMap::new() }
    }

    /// A distribution together with the os-release map it was resolved from.
    pub fn with_os_release(distro: Distro, os_release: BTreeMap<String, String>) -> Self {
        Self { distro, os_release }
    }
}

// Identity is the distribution alone; two detections of the same distro are
// equal even when their os-release files differed.
impl PartialEq for LinuxOs {
    fn eq(&self, other: &Self) -> bool {
        self.distro == other.distro
    }
}

impl Eq for LinuxOs {}

impl fmt::Display for LinuxOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Linux ({})", self.distro)
    }
}

/// The Linux distributions this crate can tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distro {
    Debian,
    Ubuntu,
    Gentoo,
    LinuxMint,
    Rhel,
    CentOs,
    Fedora,
    Arch,
    Suse,
    /// A Linux that is none of the above, or could not be identified.
    Unknown,
}

impl Distro {
    /// Maps an os-release `ID` (or `ID_LIKE` token) to a distribution,
    /// case-insensitively. Unrecognized IDs are `Unknown`.
    ///
    /// `suse` and `opensuse` both map to [`Distro::Suse`], which also covers
    /// their child distributions.
    pub fn from_id(id: &str) -> Self {
        match id.to_lowercase().as_str() {
            "debian" => Self::Debian,
            "ubuntu" => Self::Ubuntu,
            "centos" => Self::CentOs,
            "fedora" => Self::Fedora,
            "arch" => Self::Arch,
            "gentoo" => Self::Gentoo,
            "suse" | "opensuse" => Self::Suse,
            "linuxmint" => Self::LinuxMint,
            "rhel" => Self::Rhel,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Distro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Debian => "Debian",
            Self::Ubuntu => "Ubuntu",
            Self::Gentoo => "Gentoo",
            Self::LinuxMint => "Linux Mint",
            Self::Rhel => "RHEL",
            Self::CentOs => "CentOS",
            Self::Fedora => "Fedora",
            Self::Arch => "Arch",
            Self::Suse => "SUSE",
            Self::Unknown => "unknown distribution",
        })
    }
}

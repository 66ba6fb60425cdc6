use std::fmt;

/// A Windows based operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowsOs {
    pub release: WindowsRelease,
    /// Whether this looks like a server edition. Detection is a substring
    /// check on the reported name and is knowingly approximate.
    pub server: bool,
}

impl fmt::Display for WindowsOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.release, self.server) {
            (WindowsRelease::Unknown, false) => write!(f, "Windows (unknown release)"),
            (WindowsRelease::Unknown, true) => write!(f, "Windows Server (unknown release)"),
            (release, false) => write!(f, "Windows {release}"),
            (release, true) => write!(f, "Windows {release} Server"),
        }
    }
}

/// The Windows releases this crate can tell apart, oldest first.
///
/// The derived ordering follows release chronology; `Unknown` sorts last but
/// is excluded from every ordering comparison the crate performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WindowsRelease {
    Win95,
    Win98,
    WinXp,
    WinVista,
    Win7,
    Win8,
    Win81,
    Win10,
    Win11,
    Unknown,
}

impl WindowsRelease {
    /// Reads the release out of a normalized (lowercased, trimmed) OS name
    /// like `"windows 10"`: the token after the last space decides. A name
    /// without a space, or with an unrecognized trailing token, is `Unknown`.
    pub fn from_name(name: &str) -> Self {
        let Some((_, token)) = name.rsplit_once(' ') else {
            return Self::Unknown;
        };

        match token {
            "95" => Self::Win95,
            "98" => Self::Win98,
            "xp" => Self::WinXp,
            "vista" => Self::WinVista,
            "7" => Self::Win7,
            "8" => Self::Win8,
            "8.1" => Self::Win81,
            "10" => Self::Win10,
            "11" => Self::Win11,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for WindowsRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win95 => "95",
            Self::Win98 => "98",
            Self::WinXp => "XP",
            Self::WinVista => "Vista",
            Self::Win7 => "7",
            Self::Win8 => "8",
            Self::Win81 => "8.1",
            Self::Win10 => "10",
            Self::Win11 => "11",
            Self::Unknown => "unknown",
        })
    }
}

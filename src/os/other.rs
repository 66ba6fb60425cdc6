use std::fmt;

/// Any operating system that is not Windows, Mac or Linux based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtherOs {
    pub id: OtherId,
}

impl fmt::Display for OtherOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.id.fmt(f)
    }
}

/// The identities this crate recognizes outside the three main families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OtherId {
    Solaris,
    /// An operating system that cannot be classified.
    Unknown,
}

impl OtherId {
    /// Reads the identity out of a normalized (lowercased, trimmed) OS name.
    pub fn from_name(name: &str) -> Self {
        if name.contains("sunos") {
            Self::Solaris
        } else {
            Self::Unknown
        }
    }
}

impl fmt::Display for OtherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Solaris => "Solaris",
            Self::Unknown => "unrecognized operating system",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solaris_by_substring() {
        assert_eq!(OtherId::from_name("sunos"), OtherId::Solaris);
        assert_eq!(OtherId::from_name("sunos 5.11"), OtherId::Solaris);
        assert_eq!(OtherId::from_name("freebsd"), OtherId::Unknown);
    }
}

//! Selection and enforcement helpers on [`Os`]: pick one of several values by
//! family, test membership against catalog values, or require a minimum
//! release.
//!
//! The `pick` methods come in three shapes: the full four-way pick is total;
//! the narrower picks fail with [`UnsupportedOsError`] when the resolved
//! family has no alternative; the `_any` variants route every non-matching
//! family to a caller-supplied default and never fail.

use crate::error::{Result, UnsupportedOsError};
use crate::os::{Family, MacOs, Os, WindowsRelease};

impl Os {
    /// Picks the value matching this OS's family. Total: one of the four
    /// arguments is always returned.
    pub fn pick<T>(&self, windows: T, mac: T, linux: T, other: T) -> T {
        match self.family() {
            Family::Windows => windows,
            Family::Mac => mac,
            Family::Linux => linux,
            Family::Other => other,
        }
    }

    pub fn pick_win_mac_linux<T>(&self, windows: T, mac: T, linux: T) -> Result<T> {
        match self.family() {
            Family::Windows => Ok(windows),
            Family::Mac => Ok(mac),
            Family::Linux => Ok(linux),
            Family::Other => Err(UnsupportedOsError::new(self)),
        }
    }

    pub fn pick_win_mac<T>(&self, windows: T, mac: T) -> Result<T> {
        match self.family() {
            Family::Windows => Ok(windows),
            Family::Mac => Ok(mac),
            _ => Err(UnsupportedOsError::new(self)),
        }
    }

    pub fn pick_win_linux<T>(&self, windows: T, linux: T) -> Result<T> {
        match self.family() {
            Family::Windows => Ok(windows),
            Family::Linux => Ok(linux),
            _ => Err(UnsupportedOsError::new(self)),
        }
    }

    pub fn pick_mac_linux<T>(&self, mac: T, linux: T) -> Result<T> {
        match self.family() {
            Family::Mac => Ok(mac),
            Family::Linux => Ok(linux),
            _ => Err(UnsupportedOsError::new(self)),
        }
    }

    pub fn pick_windows<T>(&self, windows: T) -> Result<T> {
        match self.family() {
            Family::Windows => Ok(windows),
            _ => Err(UnsupportedOsError::new(self)),
        }
    }

    pub fn pick_mac<T>(&self, mac: T) -> Result<T> {
        match self.family() {
            Family::Mac => Ok(mac),
            _ => Err(UnsupportedOsError::new(self)),
        }
    }

    pub fn pick_linux<T>(&self, linux: T) -> Result<T> {
        match self.family() {
            Family::Linux => Ok(linux),
            _ => Err(UnsupportedOsError::new(self)),
        }
    }

    pub fn pick_win_mac_any<T>(&self, windows: T, mac: T, any_other: T) -> T {
        match self.family() {
            Family::Windows => windows,
            Family::Mac => mac,
            _ => any_other,
        }
    }

    pub fn pick_win_linux_any<T>(&self, windows: T, linux: T, any_other: T) -> T {
        match self.family() {
            Family::Windows => windows,
            Family::Linux => linux,
            _ => any_other,
        }
    }

    pub fn pick_mac_linux_any<T>(&self, mac: T, linux: T, any_other: T) -> T {
        match self.family() {
            Family::Mac => mac,
            Family::Linux => linux,
            _ => any_other,
        }
    }

    pub fn pick_windows_any<T>(&self, windows: T, any_other: T) -> T {
        match self.family() {
            Family::Windows => windows,
            _ => any_other,
        }
    }

    pub fn pick_mac_any<T>(&self, mac: T, any_other: T) -> T {
        match self.family() {
            Family::Mac => mac,
            _ => any_other,
        }
    }

    pub fn pick_linux_any<T>(&self, linux: T, any_other: T) -> T {
        match self.family() {
            Family::Linux => linux,
            _ => any_other,
        }
    }

    /// Whether this OS equals one of the candidates (catalog equality: the
    /// discriminating fields of the variant, nothing else).
    pub fn is(&self, candidates: &[Os]) -> bool {
        candidates.contains(self)
    }

    /// Whether this OS belongs to one of the given families.
    pub fn is_family(&self, families: &[Family]) -> bool {
        families.contains(&self.family())
    }

    /// Fails unless this OS equals one of the candidates.
    pub fn enforce(&self, candidates: &[Os]) -> Result<()> {
        if self.is(candidates) {
            Ok(())
        } else {
            Err(UnsupportedOsError::new(self))
        }
    }

    /// Fails if this OS equals one of the candidates.
    pub fn enforce_not(&self, candidates: &[Os]) -> Result<()> {
        if self.is(candidates) {
            Err(UnsupportedOsError::new(self))
        } else {
            Ok(())
        }
    }

    /// Fails unless this OS belongs to one of the given families.
    pub fn enforce_family(&self, families: &[Family]) -> Result<()> {
        if self.is_family(families) {
            Ok(())
        } else {
            Err(UnsupportedOsError::new(self))
        }
    }

    /// Fails if this OS belongs to one of the given families.
    pub fn enforce_not_family(&self, families: &[Family]) -> Result<()> {
        if self.is_family(families) {
            Err(UnsupportedOsError::new(self))
        } else {
            Ok(())
        }
    }

    /// Whether this OS is the same as or newer than `other`, where such an
    /// ordering exists.
    ///
    /// Windows compares by release ordinal (the server flag does not order),
    /// Mac by major.minor. Everything without a defined order fails instead
    /// of answering misleadingly: comparisons across families, between Linux
    /// distributions (no natural order exists), between other-family values,
    /// or involving an unknown release or major version.
    pub fn is_at_least(&self, other: &Os) -> Result<bool> {
        match (self, other) {
            (Os::Windows(this), Os::Windows(baseline)) => {
                if this.release == WindowsRelease::Unknown
                    || baseline.release == WindowsRelease::Unknown
                {
                    return Err(UnsupportedOsError::new(self));
                }
                Ok(this.release >= baseline.release)
            }
            (Os::Mac(this), Os::Mac(baseline)) => {
                if this.major == MacOs::UNKNOWN_MAJOR || baseline.major == MacOs::UNKNOWN_MAJOR {
                    return Err(UnsupportedOsError::new(self));
                }
                Ok((this.major, this.minor) >= (baseline.major, baseline.minor))
            }
            _ => Err(UnsupportedOsError::new(self)),
        }
    }
}

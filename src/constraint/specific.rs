//! Family-scoped sub-builders. Each one wraps the general builder, appends
//! predicates that only values of its family can satisfy, and hands the
//! general builder back through `general()`.

use super::OsConstraint;
use crate::os::{Distro, LinuxOs, MacOs, Os, WindowsOs, WindowsRelease};

/// Windows-specific conditions for an [`OsConstraint`] chain.
pub struct WinConstraint<T> {
    target: OsConstraint<T>,
}

impl<T> WinConstraint<T> {
    pub(crate) fn new(target: OsConstraint<T>) -> Self {
        Self { target }
    }

    fn add(mut self, condition: impl Fn(&WindowsOs) -> bool + 'static) -> Self {
        self.target = self.target.add_condition(move |os| match os {
            Os::Windows(windows) => condition(windows),
            _ => false,
        });
        self
    }

    /// Requires at least the given release. Unknown releases never qualify.
    pub fn release_min(self, min: WindowsRelease) -> Self {
        self.add(move |windows| windows.release != WindowsRelease::Unknown && windows.release >= min)
    }

    /// Requires at most the given release. Unknown releases never qualify.
    pub fn release_max(self, max: WindowsRelease) -> Self {
        self.add(move |windows| windows.release != WindowsRelease::Unknown && windows.release <= max)
    }

    /// Requires a release within the inclusive range.
    pub fn release_range(self, min: WindowsRelease, max: WindowsRelease) -> Self {
        self.release_min(min).release_max(max)
    }

    /// Requires a server edition.
    pub fn server(self) -> Self {
        self.add(|windows| windows.server)
    }

    /// Returns to the general builder.
    pub fn general(self) -> OsConstraint<T> {
        self.target
    }
}

/// Mac-specific conditions for an [`OsConstraint`] chain.
pub struct MacConstraint<T> {
    target: OsConstraint<T>,
}

impl<T> MacConstraint<T> {
    pub(crate) fn new(target: OsConstraint<T>) -> Self {
        Self { target }
    }

    fn add(mut self, condition: impl Fn(&MacOs) -> bool + 'static) -> Self {
        self.target = self.target.add_condition(move |os| match os {
            Os::Mac(mac) => condition(mac),
            _ => false,
        });
        self
    }

    /// Requires at least the given major.minor version.
    pub fn v_min(self, major: i32, minor: i32) -> Self {
        self.add(move |mac| mac.is_at_least(major, minor))
    }

    /// Requires at most the given major.minor version. Unknown majors never
    /// qualify.
    pub fn v_max(self, major: i32, minor: i32) -> Self {
        self.add(move |mac| {
            mac.major != MacOs::UNKNOWN_MAJOR && (mac.major, mac.minor) <= (major, minor)
        })
    }

    /// Requires a version within the inclusive range.
    pub fn v_range(self, min_major: i32, min_minor: i32, max_major: i32, max_minor: i32) -> Self {
        self.v_min(min_major, min_minor).v_max(max_major, max_minor)
    }

    /// Returns to the general builder.
    pub fn general(self) -> OsConstraint<T> {
        self.target
    }
}

/// Linux-specific conditions for an [`OsConstraint`] chain.
pub struct LinuxConstraint<T> {
    target: OsConstraint<T>,
}

impl<T> LinuxConstraint<T> {
    pub(crate) fn new(target: OsConstraint<T>) -> Self {
        Self { target }
    }

    fn add(mut self, condition: impl Fn(&LinuxOs) -> bool + 'static) -> Self {
        self.target = self.target.add_condition(move |os| match os {
            Os::Linux(linux) => condition(linux),
            _ => false,
        });
        self
    }

    /// Requires one of the given distributions.
    pub fn distro(self, distros: &[Distro]) -> Self {
        let distros = distros.to_vec();
        self.add(move |linux| distros.contains(&linux.distro))
    }

    /// Returns to the general builder.
    pub fn general(self) -> OsConstraint<T> {
        self.target
    }
}

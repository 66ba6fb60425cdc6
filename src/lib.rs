//! Operating system identification from platform-reported strings and files.
//!
//! The crate answers three questions about the operating system a process is
//! running on and gives callers ergonomic ways to act on the answer:
//! - Which family? ([`Family`]: Windows, Mac, Linux or other)
//! - Which release exactly? ([`Os`]: Windows release, macOS major.minor,
//!   Linux distribution)
//! - Is that good enough? (the pick/enforce methods on [`Os`] and the
//!   [`OsConstraint`] rule builder)
//!
//! Detection is string and file based only: the platform's reported OS name
//! and version, plus `/etc/os-release` on Linux. It is resolved once per
//! process via [`current()`] and never re-polled. [`determine`] stays public
//! so tests and tools can classify values that are not the live host.

pub mod constraint;
pub mod current;
pub mod detect;
pub mod error;
pub mod os;
mod select;

pub use constraint::{LinuxConstraint, MacConstraint, OsConstraint, WinConstraint};
pub use current::current;
pub use detect::{OS_RELEASE_PATH, determine};
pub use error::{Result, UnsupportedOsError};
pub use os::{Distro, Family, LinuxOs, MacOs, Os, OtherId, OtherOs, WindowsOs, WindowsRelease};

use thiserror::Error;

use crate::os::Os;

/// The operating system did not satisfy a selection, membership or ordering
/// requirement.
///
/// This is the only error this crate surfaces. It is an expected-possible
/// outcome of `pick_*`/`enforce*`/constraint evaluation, not a bug signal:
/// catch it for a graceful fallback or let it end the operation that needed a
/// specific OS. Detection itself never fails; bad input degrades to the
/// `Unknown` catalog values instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported operating system: {os}")]
pub struct UnsupportedOsError {
    /// The operating system that failed the requirement.
    pub os: Os,
}

impl UnsupportedOsError {
    pub(crate) fn new(os: &Os) -> Self {
        Self { os: os.clone() }
    }
}

pub type Result<T> = std::result::Result<T, UnsupportedOsError>;

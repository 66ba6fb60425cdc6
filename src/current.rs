//! The operating system of the running process, resolved once and cached.

use std::path::Path;
use std::sync::OnceLock;

use tracing::info;

use crate::detect::{OS_RELEASE_PATH, determine};
use crate::os::Os;

static CURRENT: OnceLock<Os> = OnceLock::new();

/// The operating system this process is running on.
///
/// Resolved at most once per process (first access wins, racing accesses all
/// observe the same value) from the platform's reported name and version and
/// the conventional os-release path, then held immutably. To classify inputs
/// that are not the live host, call [`determine`](crate::determine) directly.
pub fn current() -> &'static Os {
    CURRENT.get_or_init(|| {
        let os =
            determine(std::env::consts::OS, &platform_version(), Some(Path::new(OS_RELEASE_PATH)));
        info!("detected operating system: {os}");
        os
    })
}

// The standard version accessor only matters for Mac values; everywhere else
// the version string does not discriminate anything.
#[cfg(target_os = "macos")]
fn platform_version() -> String {
    use std::process::Command;

    Command::new("sw_vers")
        .arg("-productVersion")
        .output()
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_default()
}

#[cfg(not(target_os = "macos"))]
fn platform_version() -> String {
    String::new()
}

//! Maps platform-reported strings (and the Linux os-release file) to an
//! [`Os`] value. Pure and deterministic: identical inputs, including file
//! contents, always classify identically, and nothing here ever fails —
//! unreadable or malformed input degrades to the `Unknown` catalog values at
//! the most specific level possible.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::os::{Distro, LinuxOs, MacOs, Os, OtherId, OtherOs, WindowsOs, WindowsRelease};

/// Where standard Linux distributions describe themselves.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Determines the exact operating system from a reported name, a reported
/// version and (consulted only for Linux) an os-release file.
///
/// `name` and `version` take whatever the hosting platform's standard
/// accessors report, e.g. `"Windows 10"`, `"Mac OS X"` / `"10.15.7"`,
/// `"Linux"`. The name is matched case-insensitively, ignoring surrounding
/// whitespace. The four family checks run in fixed order: Windows, Mac,
/// Linux, then everything else.
pub fn determine(name: &str, version: &str, os_release: Option<&Path>) -> Os {
    let name = name.trim().to_lowercase();

    if name.starts_with("win") {
        return Os::Windows(WindowsOs {
            release: WindowsRelease::from_name(&name),
            server: name.contains("server"),
        });
    }

    if name.starts_with("mac") {
        return Os::Mac(MacOs::from_version(version));
    }

    if name.contains("nix") || name.contains("nux") || name.contains("aix") {
        return Os::Linux(determine_linux(os_release));
    }

    Os::Other(OtherOs { id: OtherId::from_name(&name) })
}

/// Refines a Linux detection through the os-release file. A missing or
/// unreadable file is terminal: no retry, distribution stays unknown.
fn determine_linux(os_release: Option<&Path>) -> LinuxOs {
    let Some(path) = os_release else {
        return LinuxOs::new(Distro::Unknown);
    };

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            debug!("could not read {}: {err}", path.display());
            return LinuxOs::new(Distro::Unknown);
        }
    };

    let fields = parse_os_release(&content);
    let distro = resolve_distro(&fields);
    debug!("resolved Linux distribution: {distro}");

    LinuxOs::with_os_release(distro, fields)
}

/// Parses os-release content into its key/value pairs.
///
/// Lines without `=` are skipped, so a partially broken file still yields its
/// intact pairs. Some distros quote values and some don't; one surrounding
/// pair of double quotes is stripped for consistency.
pub(crate) fn parse_os_release(content: &str) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();

    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let value = value.strip_prefix('"').unwrap_or(value);
        let value = value.strip_suffix('"').unwrap_or(value);
        fields.insert(key.to_string(), value.to_string());
    }

    fields
}

/// `ID` names the distribution itself; when it is absent or unrecognized,
/// the space-separated parent distributions in `ID_LIKE` are tried in order
/// and the first recognized one wins.
fn resolve_distro(fields: &BTreeMap<String, String>) -> Distro {
    let distro = fields.get("ID").map_or(Distro::Unknown, |id| Distro::from_id(id));
    if distro != Distro::Unknown {
        return distro;
    }

    fields
        .get("ID_LIKE")
        .and_then(|id_like| {
            id_like
                .split(' ')
                .map(Distro::from_id)
                .find(|candidate| *candidate != Distro::Unknown)
        })
        .unwrap_or(Distro::Unknown)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn windows_tokens_map_to_releases() {
        for (token, release) in [
            ("95", WindowsRelease::Win95),
            ("98", WindowsRelease::Win98),
            ("XP", WindowsRelease::WinXp),
            ("Vista", WindowsRelease::WinVista),
            ("7", WindowsRelease::Win7),
            ("8", WindowsRelease::Win8),
            ("8.1", WindowsRelease::Win81),
            ("10", WindowsRelease::Win10),
            ("11", WindowsRelease::Win11),
        ] {
            assert_eq!(
                determine(&format!("Windows {token}"), "", None),
                Os::windows(release, false),
                "token: {token:?}"
            );
        }

        assert_eq!(determine("Windows NT (unknown)", "", None), Os::windows(WindowsRelease::Unknown, false));
    }

    #[test]
    fn windows_server_is_a_substring_heuristic() {
        assert_eq!(
            determine("Windows Server 2019", "", None),
            Os::windows(WindowsRelease::Unknown, true)
        );
        assert_eq!(determine("  WINDOWS 10  ", "", None), Os::windows(WindowsRelease::Win10, false));
    }

    #[test]
    fn mac_uses_the_version_string() {
        assert_eq!(determine("Mac OS X", "10.15.7", None), Os::mac(10, 15));
        assert_eq!(determine("mac os x", "10.16", None), Os::mac(11, 0));
        assert_eq!(determine("macOS", "13.1", None), Os::mac(13, 1));
        assert_eq!(determine("Mac OS X", "", None), Os::mac(MacOs::UNKNOWN_MAJOR, 0));
    }

    #[test]
    fn linux_without_release_file_is_unknown_distro() {
        assert_eq!(determine("Linux", "5.15", None), Os::linux(Distro::Unknown));
        assert_eq!(
            determine("Linux", "5.15", Some(Path::new("/definitely/not/a/real/path"))),
            Os::linux(Distro::Unknown)
        );
    }

    #[test]
    fn family_check_order_and_other_fallback() {
        assert_eq!(determine("SunOS", "5.11", None), Os::other(OtherId::Solaris));
        assert_eq!(determine("FreeBSD", "13.0", None), Os::other(OtherId::Unknown));
        // "aix" lands in the Linux family, matching the name heuristics.
        assert_eq!(determine("AIX", "7.2", None), Os::linux(Distro::Unknown));
    }

    #[test]
    fn os_release_parsing_strips_one_quote_pair() {
        let fields = parse_os_release("ID=ubuntu\nNAME=\"Ubuntu\"\nbroken line\nEMPTY=\n");
        assert_eq!(fields.get("ID").map(String::as_str), Some("ubuntu"));
        assert_eq!(fields.get("NAME").map(String::as_str), Some("Ubuntu"));
        assert_eq!(fields.get("EMPTY").map(String::as_str), Some(""));
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn id_like_tokens_are_tried_in_order() {
        let fields = parse_os_release("ID=unknownthing\nID_LIKE=rhel fedora\n");
        assert_eq!(resolve_distro(&fields), Distro::Rhel);

        let fields = parse_os_release("ID_LIKE=nothing debian\n");
        assert_eq!(resolve_distro(&fields), Distro::Debian);

        let fields = parse_os_release("ID_LIKE=nothing matches\n");
        assert_eq!(resolve_distro(&fields), Distro::Unknown);
    }

    #[test]
    fn id_wins_over_id_like() {
        let fields = parse_os_release("ID=linuxmint\nID_LIKE=ubuntu debian\n");
        assert_eq!(resolve_distro(&fields), Distro::LinuxMint);
    }
}

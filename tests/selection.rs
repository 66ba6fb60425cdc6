//! The pick/is/enforce surface across all four family representatives.

use osdetect::{Distro, Family, Os, UnsupportedOsError, WindowsRelease};

const FAMILIES: [Family; 4] = [Family::Windows, Family::Mac, Family::Linux, Family::Other];

#[test]
fn four_way_pick_is_total() {
    for family in FAMILIES {
        let picked = family.representative().pick(
            Family::Windows,
            Family::Mac,
            Family::Linux,
            Family::Other,
        );
        assert_eq!(picked, family);
    }
}

#[test]
fn narrower_picks_fail_for_absent_families() {
    let windows = Family::Windows.representative();
    let mac = Family::Mac.representative();
    let linux = Family::Linux.representative();
    let other = Family::Other.representative();

    assert_eq!(windows.pick_win_mac_linux('w', 'm', 'l'), Ok('w'));
    assert_eq!(mac.pick_win_mac_linux('w', 'm', 'l'), Ok('m'));
    assert_eq!(linux.pick_win_mac_linux('w', 'm', 'l'), Ok('l'));
    assert!(other.pick_win_mac_linux('w', 'm', 'l').is_err());

    assert_eq!(windows.pick_win_mac('w', 'm'), Ok('w'));
    assert!(linux.pick_win_mac('w', 'm').is_err());
    assert_eq!(linux.pick_win_linux('w', 'l'), Ok('l'));
    assert!(mac.pick_win_linux('w', 'l').is_err());
    assert_eq!(mac.pick_mac_linux('m', 'l'), Ok('m'));
    assert!(windows.pick_mac_linux('m', 'l').is_err());

    assert_eq!(windows.pick_windows('w'), Ok('w'));
    assert!(mac.pick_windows('w').is_err());
    assert_eq!(mac.pick_mac('m'), Ok('m'));
    assert!(other.pick_mac('m').is_err());
    assert_eq!(linux.pick_linux('l'), Ok('l'));
    assert!(other.pick_linux('l').is_err());
}

#[test]
fn failed_picks_carry_the_offending_os() {
    let other = Family::Other.representative();
    let err = other.pick_windows('w').expect_err("other has no windows alternative");
    assert_eq!(err.os, other);
    assert!(err.to_string().contains("unsupported operating system"));
}

#[test]
fn any_variants_never_fail() {
    for family in FAMILIES {
        let os = family.representative();
        let _ = os.pick_win_mac_any(1, 2, 0);
        let _ = os.pick_win_linux_any(1, 2, 0);
        let _ = os.pick_mac_linux_any(1, 2, 0);
        assert_eq!(os.pick_windows_any('w', '-') == 'w', family == Family::Windows);
        assert_eq!(os.pick_mac_any('m', '-') == 'm', family == Family::Mac);
        assert_eq!(os.pick_linux_any('l', '-') == 'l', family == Family::Linux);
    }
}

#[test]
fn membership_uses_catalog_equality() {
    let ubuntu = Os::linux(Distro::Ubuntu);
    let candidates = [Os::linux(Distro::Ubuntu), Os::linux(Distro::Debian)];

    assert!(ubuntu.is(&candidates));
    assert!(!Os::linux(Distro::Arch).is(&candidates));
    assert!(!Os::mac(12, 0).is(&candidates));

    assert!(ubuntu.is_family(&[Family::Linux, Family::Mac]));
    assert!(!ubuntu.is_family(&[Family::Windows]));
}

#[test]
fn enforce_and_enforce_not_are_complements() {
    let candidates = [
        Os::windows(WindowsRelease::Win10, false),
        Os::linux(Distro::Fedora),
    ];

    for family in FAMILIES {
        let os = family.representative();
        let enforced = os.enforce(&candidates).is_ok();
        let rejected = os.enforce_not(&candidates).is_ok();
        assert_ne!(enforced, rejected, "exactly one must hold for {os}");
    }

    let win10 = Os::windows(WindowsRelease::Win10, false);
    assert!(win10.enforce(&candidates).is_ok());
    assert_eq!(
        win10.enforce_not(&candidates),
        Err(UnsupportedOsError { os: win10.clone() })
    );
}

#[test]
fn family_enforcement() {
    let mac = Family::Mac.representative();
    assert!(mac.enforce_family(&[Family::Mac, Family::Linux]).is_ok());
    assert!(mac.enforce_family(&[Family::Windows]).is_err());
    assert!(mac.enforce_not_family(&[Family::Windows]).is_ok());
    assert!(mac.enforce_not_family(&[Family::Mac]).is_err());
}

#[test]
fn server_flag_discriminates_windows_equality() {
    let desktop = Os::windows(WindowsRelease::Win10, false);
    let server = Os::windows(WindowsRelease::Win10, true);
    assert_ne!(desktop, server);
    assert!(!desktop.is(&[server]));
}

// Host-side tests for pure platform helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod platform {
    include!("../src/platform.rs");
}

use petal_core::PlatformProfile;
use platform::*;

const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
const IPAD_UA: &str = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1";
const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36";
const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0";

#[test]
fn detects_ios_devices() {
    assert_eq!(HostOs::detect(IPHONE_UA), HostOs::Ios);
    assert_eq!(HostOs::detect(IPAD_UA), HostOs::Ios);
    assert_eq!(HostOs::detect("Mozilla/5.0 (iPod touch; CPU iPhone OS 12_0)"), HostOs::Ios);
}

#[test]
fn detects_android() {
    assert_eq!(HostOs::detect(ANDROID_UA), HostOs::Android);
}

#[test]
fn everything_else_is_other() {
    assert_eq!(HostOs::detect(DESKTOP_UA), HostOs::Other);
    assert_eq!(HostOs::detect(""), HostOs::Other);
    // case-sensitive, as browsers send it
    assert_eq!(HostOs::detect("android"), HostOs::Other);
}

#[test]
fn only_android_inverts_x() {
    assert_eq!(HostOs::Android.profile(), PlatformProfile::InvertedXAxis);
    assert_eq!(HostOs::Ios.profile(), PlatformProfile::Default);
    assert_eq!(HostOs::Other.profile(), PlatformProfile::Default);
}

#[test]
fn debug_line_format() {
    assert_eq!(debug_line(HostOs::Ios, 90.0, 0.123), "OS:iOS angle:90 tiltX:0.12");
    assert_eq!(debug_line(HostOs::Android, -90.0, -1.0), "OS:Android angle:270 tiltX:-1.00");
    assert_eq!(debug_line(HostOs::Other, 45.0, 0.0), "OS:Other angle:45 tiltX:0.00");
}

/// Fixed width of the serial-number field in a vendor device record,
/// `SDRPLAY_MAX_SER_NO_LEN` in the vendor header.
pub const SER_NO_LEN: usize = 64;

/// API version this binding targets. The device record layout used in
/// `ffi` matches service versions 3.08 and later; the service itself
/// rejects clients it cannot talk to.
pub const EXPECTED_API_VERSION: f32 = 3.15;

pub struct HardwareSignature {
    pub hw_ver: u8,
    pub name: &'static str,
}

/// Hardware-version bytes reported by the API service, per the vendor
/// header's `SDRPLAY_RSP*_ID` defines.
pub const KNOWN_HARDWARE: &'static [HardwareSignature; 7] = &[
    HardwareSignature {
        hw_ver: 1,
        name: "RSP1",
    },
    HardwareSignature {
        hw_ver: 2,
        name: "RSP2",
    },
    HardwareSignature {
        hw_ver: 3,
        name: "RSPduo",
    },
    HardwareSignature {
        hw_ver: 4,
        name: "RSPdx",
    },
    HardwareSignature {
        hw_ver: 6,
        name: "RSP1B",
    },
    HardwareSignature {
        hw_ver: 7,
        name: "RSPdx-R2",
    },
    HardwareSignature {
        hw_ver: 255,
        name: "RSP1A",
    },
];

/// Names tried, in order, when loading the vendor library at runtime.
#[cfg(all(unix, not(target_os = "macos")))]
pub const LIBRARY_CANDIDATES: &'static [&'static str] =
    &["libsdrplay_api.so.2", "libsdrplay_api.so"];

#[cfg(target_os = "macos")]
pub const LIBRARY_CANDIDATES: &'static [&'static str] = &[
    "libsdrplay_api.dylib",
    "/usr/local/lib/libsdrplay_api.dylib",
];

#[cfg(windows)]
pub const LIBRARY_CANDIDATES: &'static [&'static str] = &[
    "sdrplay_api.dll",
    "C:\\Program Files\\SDRplay\\API\\x64\\sdrplay_api.dll",
];

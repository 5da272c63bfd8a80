//! Raw types of the vendor API, ABI-matching `sdrplay_api.h` (3.08+).

use std::os::raw::{c_char, c_int, c_uint, c_void};
use std::ptr;

use super::constants::{KNOWN_HARDWARE, SER_NO_LEN};

/// One attached device as reported by the API service
/// (`sdrplay_api_DeviceT`). Populated by `sdrplay_api_GetDevices`; the
/// `tuner` and `rsp_duo_mode` fields are C enums kept as raw ints since
/// nothing here interprets them.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DeviceDescriptor {
    pub ser_no: [c_char; SER_NO_LEN],
    pub hw_ver: u8,
    pub tuner: c_int,
    pub rsp_duo_mode: c_int,
    pub valid: u8,
    pub rsp_duo_sample_freq: f64,
    pub dev: *mut c_void,
}

impl DeviceDescriptor {
    /// A zeroed record, suitable for building the destination buffer
    /// passed to the enumeration call.
    pub const fn empty() -> DeviceDescriptor {
        DeviceDescriptor {
            ser_no: [0; SER_NO_LEN],
            hw_ver: 0,
            tuner: 0,
            rsp_duo_mode: 0,
            valid: 0,
            rsp_duo_sample_freq: 0.0,
            dev: ptr::null_mut(),
        }
    }

    /// Serial number as filled in by the service. The field is a
    /// fixed-width C string; a record using the full width comes back
    /// without a terminator, so read up to the first NUL or the end.
    pub fn serial_number(&self) -> String {
        let bytes: Vec<u8> = self
            .ser_no
            .iter()
            .take_while(|&&c| c != 0)
            .map(|&c| c as u8)
            .collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Model name for the reported hardware version, if it is one this
    /// crate knows about.
    pub fn hardware_name(&self) -> Option<&'static str> {
        KNOWN_HARDWARE
            .iter()
            .find(|hw| hw.hw_ver == self.hw_ver)
            .map(|hw| hw.name)
    }
}

// Entry points resolved from the vendor library. All of them return a
// raw `sdrplay_api_ErrT` status.
pub type OpenFn = unsafe extern "C" fn() -> c_int;
pub type CloseFn = unsafe extern "C" fn() -> c_int;
pub type ApiVersionFn = unsafe extern "C" fn(*mut f32) -> c_int;
pub type LockDeviceApiFn = unsafe extern "C" fn() -> c_int;
pub type UnlockDeviceApiFn = unsafe extern "C" fn() -> c_int;
pub type GetDevicesFn =
    unsafe extern "C" fn(*mut DeviceDescriptor, *mut c_uint, c_uint) -> c_int;

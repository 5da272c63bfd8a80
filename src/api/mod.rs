//! Safe layer over the SDRplay API service.
//!
//! [`Api`] wraps the dynamically loaded vendor entry points and turns
//! their raw status codes into [`Result`]s. It knows nothing about
//! ordering rules; [`crate::session::Session`] enforces those.
pub mod constants;
pub use constants::*;
pub mod ffi;
pub mod api_handle;
#[cfg(test)]
pub(crate) mod mock_api_handle;

#[cfg(not(test))]
use api_handle::ApiHandle;
#[cfg(test)]
use mock_api_handle::MockApiHandle as ApiHandle;

use crate::error::{Result, SdrplayError};
use ffi::DeviceDescriptor;
use log::debug;
use std::fmt;
use std::os::raw::{c_int, c_uint};


/// Status code returned by every vendor entry point
/// (`sdrplay_api_ErrT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    Success,
    Fail,
    InvalidParam,
    OutOfRange,
    GainUpdateError,
    RfUpdateError,
    FsUpdateError,
    HwError,
    AliasingError,
    AlreadyInitialised,
    NotInitialised,
    NotEnabled,
    HwVerError,
    OutOfMemError,
    ServiceNotResponding,
    StartPending,
    StopPending,
    InvalidServiceVersion,
    FailedReinit,
    /// Code outside the range the header defines.
    Unknown(i32),
}

impl ApiStatus {
    pub fn from_raw(raw: c_int) -> ApiStatus {
        match raw {
            0 => ApiStatus::Success,
            1 => ApiStatus::Fail,
            2 => ApiStatus::InvalidParam,
            3 => ApiStatus::OutOfRange,
            4 => ApiStatus::GainUpdateError,
            5 => ApiStatus::RfUpdateError,
            6 => ApiStatus::FsUpdateError,
            7 => ApiStatus::HwError,
            8 => ApiStatus::AliasingError,
            9 => ApiStatus::AlreadyInitialised,
            10 => ApiStatus::NotInitialised,
            11 => ApiStatus::NotEnabled,
            12 => ApiStatus::HwVerError,
            13 => ApiStatus::OutOfMemError,
            14 => ApiStatus::ServiceNotResponding,
            15 => ApiStatus::StartPending,
            16 => ApiStatus::StopPending,
            17 => ApiStatus::InvalidServiceVersion,
            18 => ApiStatus::FailedReinit,
            other => ApiStatus::Unknown(other),
        }
    }

    pub fn as_raw(self) -> c_int {
        match self {
            ApiStatus::Success => 0,
            ApiStatus::Fail => 1,
            ApiStatus::InvalidParam => 2,
            ApiStatus::OutOfRange => 3,
            ApiStatus::GainUpdateError => 4,
            ApiStatus::RfUpdateError => 5,
            ApiStatus::FsUpdateError => 6,
            ApiStatus::HwError => 7,
            ApiStatus::AliasingError => 8,
            ApiStatus::AlreadyInitialised => 9,
            ApiStatus::NotInitialised => 10,
            ApiStatus::NotEnabled => 11,
            ApiStatus::HwVerError => 12,
            ApiStatus::OutOfMemError => 13,
            ApiStatus::ServiceNotResponding => 14,
            ApiStatus::StartPending => 15,
            ApiStatus::StopPending => 16,
            ApiStatus::InvalidServiceVersion => 17,
            ApiStatus::FailedReinit => 18,
            ApiStatus::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiStatus::Success => write!(f, "success"),
            ApiStatus::Fail => write!(f, "fail"),
            ApiStatus::InvalidParam => write!(f, "invalid parameter"),
            ApiStatus::OutOfRange => write!(f, "out of range"),
            ApiStatus::GainUpdateError => write!(f, "gain update error"),
            ApiStatus::RfUpdateError => write!(f, "rf update error"),
            ApiStatus::FsUpdateError => write!(f, "sample rate update error"),
            ApiStatus::HwError => write!(f, "hardware error"),
            ApiStatus::AliasingError => write!(f, "aliasing error"),
            ApiStatus::AlreadyInitialised => write!(f, "already initialised"),
            ApiStatus::NotInitialised => write!(f, "not initialised"),
            ApiStatus::NotEnabled => write!(f, "not enabled"),
            ApiStatus::HwVerError => write!(f, "hardware version error"),
            ApiStatus::OutOfMemError => write!(f, "out of memory"),
            ApiStatus::ServiceNotResponding => write!(f, "service not responding"),
            ApiStatus::StartPending => write!(f, "start pending"),
            ApiStatus::StopPending => write!(f, "stop pending"),
            ApiStatus::InvalidServiceVersion => write!(f, "invalid service version"),
            ApiStatus::FailedReinit => write!(f, "failed reinit"),
            ApiStatus::Unknown(raw) => write!(f, "unknown status code {}", raw),
        }
    }
}

#[derive(Debug)]
pub struct Api {
    handle: ApiHandle,
}

impl Api {
    /// Load the vendor library and resolve its entry points. Nothing is
    /// opened yet.
    pub fn load() -> Result<Api> {
        Ok(Api {
            handle: ApiHandle::load()?,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_handle(handle: ApiHandle) -> Api {
        Api { handle }
    }

    pub fn open(&self) -> Result<()> {
        match ApiStatus::from_raw(self.handle.open()) {
            ApiStatus::Success => Ok(()),
            status => Err(SdrplayError::ApiUnavailable(status.to_string())),
        }
    }

    pub fn api_version(&self) -> Result<f32> {
        let mut version: f32 = 0.0;
        match ApiStatus::from_raw(self.handle.api_version(&mut version)) {
            ApiStatus::Success => Ok(version),
            status => Err(SdrplayError::ApiUnavailable(status.to_string())),
        }
    }

    pub fn lock_device_api(&self) -> Result<()> {
        match ApiStatus::from_raw(self.handle.lock_device_api()) {
            ApiStatus::Success => Ok(()),
            status => Err(SdrplayError::LockFailed(status)),
        }
    }

    pub fn unlock_device_api(&self) -> ApiStatus {
        ApiStatus::from_raw(self.handle.unlock_device_api())
    }

    pub fn close(&self) -> ApiStatus {
        ApiStatus::from_raw(self.handle.close())
    }

    /// Enumerate attached devices into `devices` and return how many the
    /// service reported. The maximum passed to the service is the length
    /// of `devices`, so the service can never be asked to fill more
    /// records than the buffer holds.
    pub fn get_devices(&self, devices: &mut [DeviceDescriptor]) -> Result<usize> {
        let mut count: c_uint = 0;
        let max = devices.len() as c_uint;
        let status = ApiStatus::from_raw(self.handle.get_devices(devices, &mut count, max));
        if status != ApiStatus::Success {
            return Err(SdrplayError::EnumerationFailed(status));
        }
        let found = count as usize;
        for dev in &devices[..found.min(devices.len())] {
            debug!(
                "found {} serial {}",
                dev.hardware_name().unwrap_or("unrecognized hardware"),
                dev.serial_number()
            );
        }
        Ok(found)
    }
}

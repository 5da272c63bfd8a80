use std::{fmt, result};

use crate::api::ApiStatus;

/// A result of a function that may return a `SdrplayError`.
pub type Result<T> = result::Result<T, SdrplayError>;

/// Failures surfaced while talking to the SDRplay device API.
///
/// The vendor reports every problem as a status code; these variants keep
/// the call site that produced the status, so a diagnostic names the step
/// that failed rather than just the code.
#[derive(Debug, PartialEq)]
pub enum SdrplayError {
    /// The vendor library could not be loaded, or the API session could
    /// not be established (service not installed or not running).
    ApiUnavailable(String),
    /// `sdrplay_api_LockDeviceApi` returned a failure status.
    LockFailed(ApiStatus),
    /// `sdrplay_api_GetDevices` returned a failure status.
    EnumerationFailed(ApiStatus),
}

impl fmt::Display for SdrplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SdrplayError::ApiUnavailable(reason) => {
                write!(f, "SDRplay API unavailable: {}", reason)
            }
            SdrplayError::LockFailed(status) => {
                write!(f, "failed to lock the SDRplay device API: {}", status)
            }
            SdrplayError::EnumerationFailed(status) => {
                write!(f, "SDRplay device enumeration failed: {}", status)
            }
        }
    }
}

impl From<libloading::Error> for SdrplayError {
    fn from(e: libloading::Error) -> Self {
        SdrplayError::ApiUnavailable(e.to_string())
    }
}

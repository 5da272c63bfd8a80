//! RAII wrapper enforcing the service's open/lock ordering.
use log::{error, info, warn};

use crate::api::ffi::DeviceDescriptor;
use crate::api::{Api, ApiStatus, EXPECTED_API_VERSION};
use crate::error::Result;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// An open, locked connection to the SDRplay API service.
///
/// Construction performs `Open` then `LockDeviceApi`; dropping performs
/// `UnlockDeviceApi` then `Close`. Whatever construction acquired is
/// released exactly once, including when it fails partway through.
#[derive(Debug)]
pub struct Session {
    api: Api,
    locked: bool,
}

impl Session {
    /// Open and lock a session against the installed vendor library.
    pub fn open() -> Result<Session> {
        Session::with_api(Api::load()?)
    }

    pub(crate) fn with_api(api: Api) -> Result<Session> {
        api.open()?;
        // From here on the drop glue releases whatever has been acquired.
        let mut session = Session { api, locked: false };
        let version = session.api.api_version()?;
        info!("SDRplay API version {:.2}", version);
        if (version - EXPECTED_API_VERSION).abs() > 0.005 {
            warn!(
                "installed API version {:.2} differs from the expected {:.2}",
                version, EXPECTED_API_VERSION
            );
        }
        session.api.lock_device_api()?;
        session.locked = true;
        Ok(session)
    }

    /// Enumerate attached devices into `devices` and return the count the
    /// service reported.
    pub fn get_devices(&self, devices: &mut [DeviceDescriptor]) -> Result<usize> {
        self.api.get_devices(devices)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.locked {
            let status = self.api.unlock_device_api();
            if status != ApiStatus::Success {
                error!("failed to unlock the device API: {}", status);
            }
        }
        let status = self.api.close();
        if status != ApiStatus::Success {
            error!("failed to close the API session: {}", status);
        }
    }
}

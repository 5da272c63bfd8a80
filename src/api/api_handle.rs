use libloading::Library;
use log::debug;
use std::os::raw::{c_int, c_uint};

use crate::error::Result;
use crate::error::SdrplayError;

use super::constants::LIBRARY_CANDIDATES;
use super::ffi::{
    ApiVersionFn, CloseFn, DeviceDescriptor, GetDevicesFn, LockDeviceApiFn, OpenFn,
    UnlockDeviceApiFn,
};

/// Runtime binding to the vendor library. The service API is loaded with
/// `dlopen` rather than linked, so the crate builds and its tests run on
/// machines without the proprietary SDK installed.
#[derive(Debug)]
pub struct ApiHandle {
    open_fn: OpenFn,
    close_fn: CloseFn,
    api_version_fn: ApiVersionFn,
    lock_fn: LockDeviceApiFn,
    unlock_fn: UnlockDeviceApiFn,
    get_devices_fn: GetDevicesFn,
    // Keeps the library mapped; the resolved pointers above are only
    // valid while this is alive.
    _lib: Library,
}

impl ApiHandle {
    pub fn load() -> Result<Self> {
        let lib = ApiHandle::load_library()?;
        unsafe {
            let open_fn = *lib.get::<OpenFn>(b"sdrplay_api_Open\0")?;
            let close_fn = *lib.get::<CloseFn>(b"sdrplay_api_Close\0")?;
            let api_version_fn = *lib.get::<ApiVersionFn>(b"sdrplay_api_ApiVersion\0")?;
            let lock_fn = *lib.get::<LockDeviceApiFn>(b"sdrplay_api_LockDeviceApi\0")?;
            let unlock_fn = *lib.get::<UnlockDeviceApiFn>(b"sdrplay_api_UnlockDeviceApi\0")?;
            let get_devices_fn = *lib.get::<GetDevicesFn>(b"sdrplay_api_GetDevices\0")?;
            Ok(ApiHandle {
                open_fn,
                close_fn,
                api_version_fn,
                lock_fn,
                unlock_fn,
                get_devices_fn,
                _lib: lib,
            })
        }
    }

    fn load_library() -> Result<Library> {
        let mut last: Option<SdrplayError> = None;
        for name in LIBRARY_CANDIDATES {
            match unsafe { Library::new(name) } {
                Ok(lib) => {
                    debug!("Loaded vendor library {}", name);
                    return Ok(lib);
                }
                Err(e) => {
                    debug!("Could not load {}: {}", name, e);
                    last = Some(e.into());
                }
            }
        }
        Err(last.unwrap_or_else(|| {
            SdrplayError::ApiUnavailable("vendor library not found".to_string())
        }))
    }

    pub fn open(&self) -> c_int {
        unsafe { (self.open_fn)() }
    }

    pub fn close(&self) -> c_int {
        unsafe { (self.close_fn)() }
    }

    pub fn api_version(&self, version: &mut f32) -> c_int {
        unsafe { (self.api_version_fn)(version) }
    }

    pub fn lock_device_api(&self) -> c_int {
        unsafe { (self.lock_fn)() }
    }

    pub fn unlock_device_api(&self) -> c_int {
        unsafe { (self.unlock_fn)() }
    }

    pub fn get_devices(
        &self,
        devices: &mut [DeviceDescriptor],
        num_devs: &mut c_uint,
        max_devs: c_uint,
    ) -> c_int {
        unsafe { (self.get_devices_fn)(devices.as_mut_ptr(), num_devs, max_devs) }
    }
}

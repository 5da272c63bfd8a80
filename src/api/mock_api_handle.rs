//! Mock version of the vendor API handle
use crate::error::Result;
use mockall::mock;

use std::os::raw::{c_int, c_uint};

use super::ffi::DeviceDescriptor;

mock! {
    #[derive(Debug)]
    pub ApiHandle {
        pub fn load() -> Result<Self>;
        pub fn open(&self) -> c_int;
        pub fn close(&self) -> c_int;
        pub fn api_version(&self, version: &mut f32) -> c_int;
        pub fn lock_device_api(&self) -> c_int;
        pub fn unlock_device_api(&self) -> c_int;
        pub fn get_devices(
            &self,
            devices: &mut [DeviceDescriptor],
            num_devs: &mut c_uint,
            max_devs: c_uint,
        ) -> c_int;
    }
}

//! # sdrplay Library
//! Library for enumerating SDRplay devices through the official API service.

mod api;
pub mod error;
mod session;

pub use api::ffi::DeviceDescriptor;
pub use api::ApiStatus;
pub use session::Session;

use error::Result;

/// Capacity of the enumeration buffer. The service is never asked for
/// more device records than this.
pub const MAX_DEVICES: usize = 5;

/// Count the SDRplay devices currently attached.
///
/// Opens a locked session against the API service, queries the device
/// list and returns the number of devices the service reported. The
/// session is released again before this returns, on failure paths too.
pub fn find_devices() -> Result<usize> {
    let session = Session::open()?;
    let mut devices = [DeviceDescriptor::empty(); MAX_DEVICES];
    session.get_devices(&mut devices)
}

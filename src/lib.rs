//! Format capability resolution for Adreno a6xx-class GPUs.
//!
//! Answers the Vulkan format queries (format properties, image format
//! properties, external memory and sparse properties) from a static format
//! table and an ordered list of hardware rules.
//!
//! ```ignore
//! use a6xx_caps::{DeviceInfo, PhysicalDevice};
//! use ash::vk;
//!
//! let gpu = PhysicalDevice::new(DeviceInfo::a650());
//! let props = gpu.get_format_properties(vk::Format::R8G8B8A8_UNORM, &[]);
//! ```

pub mod conversions;
pub mod device;
pub mod error;
pub mod format;
pub mod physical_device;
pub mod resolve;
pub mod structs;

pub use device::DeviceInfo;
pub use error::{FormatError, Result};
pub use physical_device::*;
pub use resolve::{
    resolve_external_buffer, resolve_external_image, resolve_features, resolve_limits,
};
pub use structs::*;

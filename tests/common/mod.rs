#![allow(dead_code)]

use a6xx_caps::format::known_formats;
use a6xx_caps::{DeviceInfo, PhysicalDevice};
use ash::vk;

/// Formats that classify but have no table row, plus some the hardware
/// knows nothing about.
pub const UNSUPPORTED_FORMATS: &[vk::Format] = &[
    vk::Format::UNDEFINED,
    vk::Format::R4G4_UNORM_PACK8,
    vk::Format::D16_UNORM_S8_UINT,
    vk::Format::R64_UINT,
    vk::Format::R64G64B64A64_SFLOAT,
    vk::Format::G16_B16_R16_3PLANE_420_UNORM,
];

pub const YUV_FORMATS: &[vk::Format] = &[
    vk::Format::G8B8G8R8_422_UNORM,
    vk::Format::B8G8R8G8_422_UNORM,
    vk::Format::G8_B8R8_2PLANE_420_UNORM,
    vk::Format::G8_B8_R8_3PLANE_420_UNORM,
];

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every format with a table row followed by the unsupported ones.
pub fn all_formats() -> Vec<vk::Format> {
    known_formats().chain(UNSUPPORTED_FORMATS.iter().copied()).collect()
}

pub fn devices() -> Vec<PhysicalDevice> {
    init_logging();
    [
        DeviceInfo::a618(),
        DeviceInfo::a630(),
        DeviceInfo::a650(),
        DeviceInfo::a660(),
        DeviceInfo::a630().with_8bpp_ubwc(false),
    ]
    .into_iter()
    .map(PhysicalDevice::new)
    .collect()
}

pub fn a630() -> PhysicalDevice {
    init_logging();
    PhysicalDevice::new(DeviceInfo::a630())
}

pub fn a650() -> PhysicalDevice {
    init_logging();
    PhysicalDevice::new(DeviceInfo::a650())
}

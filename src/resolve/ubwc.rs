use crate::device::DeviceInfo;
use crate::format::classify;
use ash::vk;

/// Whether an image with these parameters can use UBWC compression.
///
/// `use_z24uint_s8uint` says the driver samples D24S8 stencil through
/// Z24_UINT_S8_UINT, which keeps the stencil aspect UBWC-compatible.
pub fn ubwc_possible(
    device: &DeviceInfo,
    format: vk::Format,
    image_type: vk::ImageType,
    usage: vk::ImageUsageFlags,
    stencil_usage: vk::ImageUsageFlags,
    samples: vk::SampleCountFlags,
    use_z24uint_s8uint: bool,
) -> bool {
    let desc = match classify(format) {
        Some(desc) => desc,
        None => return false,
    };

    // separate stencil has no UBWC enable bit
    if desc.is_compressed()
        || format == vk::Format::E5B9G9R9_UFLOAT_PACK32
        || format == vk::Format::S8_UINT
    {
        return false;
    }

    // snorm and unorm disagree on the special all-zero/all-one values
    if desc.is_snorm() {
        return false;
    }

    if !device.has_8bpp_ubwc
        && matches!(
            format,
            vk::Format::R8_UNORM
                | vk::Format::R8_SNORM
                | vk::Format::R8_UINT
                | vk::Format::R8_SINT
                | vk::Format::R8_SRGB
        )
    {
        return false;
    }

    if image_type == vk::ImageType::TYPE_3D {
        log::debug!("{}: disabling UBWC for 3D {:?}", device, format);
        return false;
    }

    if (usage | stencil_usage).contains(vk::ImageUsageFlags::STORAGE) {
        return false;
    }

    if !use_z24uint_s8uint
        && format == vk::Format::D24_UNORM_S8_UINT
        && stencil_usage
            .intersects(vk::ImageUsageFlags::SAMPLED | vk::ImageUsageFlags::INPUT_ATTACHMENT)
    {
        return false;
    }

    if !device.has_z24uint_s8uint
        && matches!(
            format,
            vk::Format::D24_UNORM_S8_UINT | vk::Format::X8_D24_UNORM_PACK32
        )
        && samples.as_raw() > vk::SampleCountFlags::TYPE_1.as_raw()
    {
        return false;
    }

    true
}

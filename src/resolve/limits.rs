use super::features::resolve_features;
use super::ubwc::ubwc_possible;
use crate::device::DeviceInfo;
use crate::error::{FormatError, Result};
use crate::format::{is_depth_or_stencil, tiling_possible};
use crate::structs::*;
use ash::vk;

type F = vk::FormatFeatureFlags2;

/// Reported as-is until a real per-format size bound is worked out.
pub const MAX_RESOURCE_SIZE: u64 = u32::MAX as u64;

/// Successful image format resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedImageFormat {
    pub limits: ImageFormatLimits,
    /// Features of the tiling (or modifier) the query selected.
    pub features: vk::FormatFeatureFlags2,
}

const USAGE_TO_FEATURE: &[(vk::ImageUsageFlags, vk::FormatFeatureFlags2)] = &[
    (vk::ImageUsageFlags::SAMPLED, F::SAMPLED_IMAGE),
    (vk::ImageUsageFlags::STORAGE, F::STORAGE_IMAGE),
    (vk::ImageUsageFlags::COLOR_ATTACHMENT, F::COLOR_ATTACHMENT),
    (vk::ImageUsageFlags::DEPTH_STENCIL_ATTACHMENT, F::DEPTH_STENCIL_ATTACHMENT),
];

struct TypeLimits {
    max_extent: Extent3D,
    max_mip_levels: u32,
    max_array_layers: u32,
}

fn type_limits(image_type: vk::ImageType) -> TypeLimits {
    match image_type {
        vk::ImageType::TYPE_1D => TypeLimits {
            max_extent: Extent3D::new(16384, 1, 1),
            max_mip_levels: 15,
            max_array_layers: 2048,
        },
        vk::ImageType::TYPE_2D => TypeLimits {
            max_extent: Extent3D::new(16384, 16384, 1),
            max_mip_levels: 15,
            max_array_layers: 2048,
        },
        vk::ImageType::TYPE_3D => TypeLimits {
            max_extent: Extent3D::new(2048, 2048, 2048),
            max_mip_levels: 12,
            max_array_layers: 1,
        },
        other => unreachable!("bad image type {:?}", other),
    }
}

/// Features for an explicit DRM format modifier.
fn modifier_features(
    device: &DeviceInfo,
    info: &ImageFormatInfo,
    features: &FormatFeatures,
) -> Result<vk::FormatFeatureFlags2> {
    let modifier = info
        .drm_format_modifier
        .expect("DRM modifier tiling queried without a modifier");

    let unsupported = FormatError::ModifierNotSupported {
        format: info.format,
        modifier,
    };

    match modifier {
        DRM_FORMAT_MOD_QCOM_COMPRESSED => {
            // an explicit modifier can't fall back to uncompressed
            if features.optimal.is_empty() || !tiling_possible(info.format) {
                log::debug!("{:?} cannot be tiled", info.format);
                return Err(unsupported);
            }
            if info.flags.contains(vk::ImageCreateFlags::MUTABLE_FORMAT) {
                log::debug!("{:?} is mutable, no UBWC", info.format);
                return Err(unsupported);
            }
            if !ubwc_possible(
                device,
                info.format,
                info.image_type,
                info.usage,
                info.effective_stencil_usage(),
                vk::SampleCountFlags::TYPE_1,
                false,
            ) {
                log::debug!("{:?} usage {:?} is not UBWC compatible", info.format, info.usage);
                return Err(unsupported);
            }
            Ok(features.optimal)
        }
        DRM_FORMAT_MOD_LINEAR => Ok(features.linear),
        _ => {
            log::debug!("{:?}: unknown DRM modifier 0x{:x}", info.format, modifier);
            Err(unsupported)
        }
    }
}

fn sample_counts(
    info: &ImageFormatInfo,
    features: vk::FormatFeatureFlags2,
) -> vk::SampleCountFlags {
    let mut counts = vk::SampleCountFlags::TYPE_1;
    if info.tiling == vk::ImageTiling::OPTIMAL
        && info.image_type == vk::ImageType::TYPE_2D
        && features.intersects(F::COLOR_ATTACHMENT | F::DEPTH_STENCIL_ATTACHMENT)
        && !info.flags.contains(vk::ImageCreateFlags::CUBE_COMPATIBLE)
        && !info.usage.contains(vk::ImageUsageFlags::STORAGE)
    {
        // no 8x: some paths don't handle it
        counts |= vk::SampleCountFlags::TYPE_2 | vk::SampleCountFlags::TYPE_4;
    }
    counts
}

/// Validates an image creation request and computes its limits.
///
/// # Panics
///
/// On an image type or tiling outside the Vulkan enumerations, and on DRM
/// modifier tiling without a modifier.
pub fn resolve_limits(
    device: &DeviceInfo,
    info: &ImageFormatInfo,
) -> Result<ResolvedImageFormat> {
    let all = resolve_features(device, info.format);

    let features = if info.tiling == vk::ImageTiling::DRM_FORMAT_MODIFIER_EXT {
        modifier_features(device, info, &all)?
    } else {
        match all.for_tiling(info.tiling) {
            Some(features) => features,
            None => unreachable!("bad image tiling {:?}", info.tiling),
        }
    };

    if features.is_empty() {
        log::debug!("{:?} has no {:?} features", info.format, info.tiling);
        return Err(FormatError::FormatNotSupported {
            format: info.format,
            tiling: info.tiling,
        });
    }

    if info.image_type != vk::ImageType::TYPE_2D && is_depth_or_stencil(info.format) {
        log::debug!("{:?} is depth/stencil, only 2D is allowed", info.format);
        return Err(FormatError::ImageTypeNotSupported {
            format: info.format,
            image_type: info.image_type,
        });
    }

    let limits = type_limits(info.image_type);
    let sample_counts = sample_counts(info, features);

    // with extended usage the view format decides, not this one
    if !info.flags.contains(vk::ImageCreateFlags::EXTENDED_USAGE) {
        for (usage, feature) in USAGE_TO_FEATURE {
            if info.usage.contains(*usage) && !features.contains(*feature) {
                log::debug!("{:?} {:?} lacks {:?}", info.format, info.tiling, feature);
                return Err(FormatError::UsageNotSupported {
                    format: info.format,
                    usage: *usage,
                });
            }
        }
    }

    Ok(ResolvedImageFormat {
        limits: ImageFormatLimits {
            max_extent: limits.max_extent,
            max_mip_levels: limits.max_mip_levels,
            max_array_layers: limits.max_array_layers,
            sample_counts,
            max_resource_size: MAX_RESOURCE_SIZE,
        },
        features,
    })
}

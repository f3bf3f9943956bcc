use crate::structs::*;
use ash::vk;

fn legacy(features: vk::FormatFeatureFlags2) -> vk::FormatFeatureFlags {
    // the first 31 bits have the same meaning in both
    vk::FormatFeatureFlags::from_raw((features.as_raw() & 0x7fff_ffff) as u32)
}

impl From<FormatFeatures> for vk::FormatProperties {
    fn from(features: FormatFeatures) -> Self {
        vk::FormatProperties {
            linear_tiling_features: legacy(features.linear),
            optimal_tiling_features: legacy(features.optimal),
            buffer_features: legacy(features.buffer),
        }
    }
}

impl From<FormatFeatures> for vk::FormatProperties3 {
    fn from(features: FormatFeatures) -> Self {
        vk::FormatProperties3 {
            linear_tiling_features: features.linear,
            optimal_tiling_features: features.optimal,
            buffer_features: features.buffer,
            ..Default::default()
        }
    }
}

impl From<Extent3D> for vk::Extent3D {
    fn from(extent: Extent3D) -> Self {
        vk::Extent3D {
            width: extent.width,
            height: extent.height,
            depth: extent.depth,
        }
    }
}

impl From<ImageFormatLimits> for vk::ImageFormatProperties {
    fn from(limits: ImageFormatLimits) -> Self {
        vk::ImageFormatProperties {
            max_extent: limits.max_extent.into(),
            max_mip_levels: limits.max_mip_levels,
            max_array_layers: limits.max_array_layers,
            sample_counts: limits.sample_counts,
            max_resource_size: limits.max_resource_size,
        }
    }
}

impl From<ExternalMemoryCapability> for vk::ExternalMemoryProperties {
    fn from(cap: ExternalMemoryCapability) -> Self {
        vk::ExternalMemoryProperties {
            external_memory_features: cap.features,
            export_from_imported_handle_types: cap.export_from_imported_handle_types,
            compatible_handle_types: cap.compatible_handle_types,
        }
    }
}

impl From<DrmModifierProperties> for vk::DrmFormatModifierPropertiesEXT {
    fn from(props: DrmModifierProperties) -> Self {
        vk::DrmFormatModifierPropertiesEXT {
            drm_format_modifier: props.drm_format_modifier,
            drm_format_modifier_plane_count: props.plane_count,
            drm_format_modifier_tiling_features: legacy(props.tiling_features),
        }
    }
}

impl From<DrmModifierProperties> for vk::DrmFormatModifierProperties2EXT {
    fn from(props: DrmModifierProperties) -> Self {
        vk::DrmFormatModifierProperties2EXT {
            drm_format_modifier: props.drm_format_modifier,
            drm_format_modifier_plane_count: props.plane_count,
            drm_format_modifier_tiling_features: props.tiling_features,
        }
    }
}

impl From<FilterCubicSupport> for vk::FilterCubicImageViewImageFormatPropertiesEXT {
    fn from(cubic: FilterCubicSupport) -> Self {
        vk::FilterCubicImageViewImageFormatPropertiesEXT {
            filter_cubic: cubic.filter_cubic.into(),
            filter_cubic_minmax: cubic.filter_cubic_minmax.into(),
            ..Default::default()
        }
    }
}

use ash::vk;

#[cfg(feature = "a6xx-serde")]
use serde::{Deserialize, Serialize};

/// Linear (non-tiled, non-compressed) layout.
pub const DRM_FORMAT_MOD_LINEAR: u64 = 0;
/// Qualcomm UBWC compressed tiling.
pub const DRM_FORMAT_MOD_QCOM_COMPRESSED: u64 = 0x0500_0000_0000_0001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "a6xx-serde", derive(Serialize, Deserialize))]
pub struct Extent3D {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl Extent3D {
    pub const fn new(width: u32, height: u32, depth: u32) -> Self {
        Self { width, height, depth }
    }
}

/// Feature sets of one format, per tiling and for texel buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FormatFeatures {
    pub linear: vk::FormatFeatureFlags2,
    pub optimal: vk::FormatFeatureFlags2,
    pub buffer: vk::FormatFeatureFlags2,
}

impl FormatFeatures {
    pub const NONE: FormatFeatures = FormatFeatures {
        linear: vk::FormatFeatureFlags2::empty(),
        optimal: vk::FormatFeatureFlags2::empty(),
        buffer: vk::FormatFeatureFlags2::empty(),
    };

    pub fn is_empty(&self) -> bool {
        self.linear.is_empty() && self.optimal.is_empty() && self.buffer.is_empty()
    }

    /// Features for images of the given query-level tiling.
    ///
    /// DRM modifier tiling has no answer without the modifier itself.
    pub fn for_tiling(&self, tiling: vk::ImageTiling) -> Option<vk::FormatFeatureFlags2> {
        match tiling {
            vk::ImageTiling::LINEAR => Some(self.linear),
            vk::ImageTiling::OPTIMAL => Some(self.optimal),
            _ => None,
        }
    }
}

/// Input of an image format query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageFormatInfo {
    pub format: vk::Format,
    pub image_type: vk::ImageType,
    pub tiling: vk::ImageTiling,
    pub usage: vk::ImageUsageFlags,
    pub flags: vk::ImageCreateFlags,
    /// Separate stencil usage; `usage` applies when absent.
    pub stencil_usage: Option<vk::ImageUsageFlags>,
    /// Required when `tiling` is `DRM_FORMAT_MODIFIER_EXT`.
    pub drm_format_modifier: Option<u64>,
    pub external_handle_type: Option<vk::ExternalMemoryHandleTypeFlags>,
    /// Required when cubic filter support is requested.
    pub view_type: Option<vk::ImageViewType>,
}

impl Default for ImageFormatInfo {
    fn default() -> Self {
        Self {
            format: vk::Format::UNDEFINED,
            image_type: vk::ImageType::TYPE_2D,
            tiling: vk::ImageTiling::OPTIMAL,
            usage: vk::ImageUsageFlags::empty(),
            flags: vk::ImageCreateFlags::empty(),
            stencil_usage: None,
            drm_format_modifier: None,
            external_handle_type: None,
            view_type: None,
        }
    }
}

impl ImageFormatInfo {
    pub fn new(
        format: vk::Format,
        image_type: vk::ImageType,
        tiling: vk::ImageTiling,
        usage: vk::ImageUsageFlags,
    ) -> Self {
        Self {
            format,
            image_type,
            tiling,
            usage,
            ..Default::default()
        }
    }

    pub fn flags(mut self, flags: vk::ImageCreateFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn stencil_usage(mut self, usage: vk::ImageUsageFlags) -> Self {
        self.stencil_usage = Some(usage);
        self
    }

    pub fn drm_format_modifier(mut self, modifier: u64) -> Self {
        self.drm_format_modifier = Some(modifier);
        self
    }

    pub fn external_handle_type(mut self, handle_type: vk::ExternalMemoryHandleTypeFlags) -> Self {
        self.external_handle_type = Some(handle_type);
        self
    }

    pub fn view_type(mut self, view_type: vk::ImageViewType) -> Self {
        self.view_type = Some(view_type);
        self
    }

    pub fn effective_stencil_usage(&self) -> vk::ImageUsageFlags {
        self.stencil_usage.unwrap_or(self.usage)
    }

    /// The external handle kind, with an empty mask treated as absent.
    pub fn requested_handle_type(&self) -> Option<vk::ExternalMemoryHandleTypeFlags> {
        self.external_handle_type.filter(|handle| !handle.is_empty())
    }
}

/// Creation limits for an image; all zero when unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ImageFormatLimits {
    pub max_extent: Extent3D,
    pub max_mip_levels: u32,
    pub max_array_layers: u32,
    pub sample_counts: vk::SampleCountFlags,
    pub max_resource_size: u64,
}

impl ImageFormatLimits {
    pub const UNSUPPORTED: ImageFormatLimits = ImageFormatLimits {
        max_extent: Extent3D::new(0, 0, 0),
        max_mip_levels: 0,
        max_array_layers: 0,
        sample_counts: vk::SampleCountFlags::empty(),
        max_resource_size: 0,
    };

    pub fn is_unsupported(&self) -> bool {
        *self == Self::UNSUPPORTED
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExternalMemoryCapability {
    pub features: vk::ExternalMemoryFeatureFlags,
    pub export_from_imported_handle_types: vk::ExternalMemoryHandleTypeFlags,
    pub compatible_handle_types: vk::ExternalMemoryHandleTypeFlags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "a6xx-serde", derive(Serialize, Deserialize))]
pub struct FilterCubicSupport {
    pub filter_cubic: bool,
    pub filter_cubic_minmax: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "a6xx-serde", derive(Serialize, Deserialize))]
pub struct YcbcrConversionSupport {
    pub combined_image_sampler_descriptor_count: u32,
}

/// One supported DRM format modifier of a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrmModifierProperties {
    pub drm_format_modifier: u64,
    pub plane_count: u32,
    pub tiling_features: vk::FormatFeatureFlags2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparseImageFormatInfo {
    pub format: vk::Format,
    pub image_type: vk::ImageType,
    pub samples: vk::SampleCountFlags,
    pub usage: vk::ImageUsageFlags,
    pub tiling: vk::ImageTiling,
}

/// Optional outputs of a format properties query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "a6xx-serde", derive(Serialize, Deserialize))]
pub enum FormatOutput {
    Properties3,
    DrmFormatModifierList,
}

/// Optional outputs of an image format query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "a6xx-serde", derive(Serialize, Deserialize))]
pub enum ImageFormatOutput {
    ExternalMemory,
    FilterCubic,
    SamplerYcbcrConversion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_handle_mask_is_absent() {
        let info = ImageFormatInfo::new(
            vk::Format::R8G8B8A8_UNORM,
            vk::ImageType::TYPE_2D,
            vk::ImageTiling::OPTIMAL,
            vk::ImageUsageFlags::SAMPLED,
        )
        .external_handle_type(vk::ExternalMemoryHandleTypeFlags::empty());
        assert_eq!(info.requested_handle_type(), None);

        let info = info.external_handle_type(vk::ExternalMemoryHandleTypeFlags::DMA_BUF_EXT);
        assert_eq!(
            info.requested_handle_type(),
            Some(vk::ExternalMemoryHandleTypeFlags::DMA_BUF_EXT)
        );
    }

    #[test]
    fn stencil_usage_defaults_to_usage() {
        let info = ImageFormatInfo::new(
            vk::Format::D24_UNORM_S8_UINT,
            vk::ImageType::TYPE_2D,
            vk::ImageTiling::OPTIMAL,
            vk::ImageUsageFlags::DEPTH_STENCIL_ATTACHMENT,
        );
        assert_eq!(info.effective_stencil_usage(), vk::ImageUsageFlags::DEPTH_STENCIL_ATTACHMENT);
        let info = info.stencil_usage(vk::ImageUsageFlags::SAMPLED);
        assert_eq!(info.effective_stencil_usage(), vk::ImageUsageFlags::SAMPLED);
    }

    #[test]
    fn tiling_selects_feature_set() {
        let features = FormatFeatures {
            linear: vk::FormatFeatureFlags2::SAMPLED_IMAGE,
            optimal: vk::FormatFeatureFlags2::COLOR_ATTACHMENT,
            buffer: vk::FormatFeatureFlags2::empty(),
        };
        assert_eq!(
            features.for_tiling(vk::ImageTiling::OPTIMAL),
            Some(vk::FormatFeatureFlags2::COLOR_ATTACHMENT)
        );
        assert_eq!(features.for_tiling(vk::ImageTiling::DRM_FORMAT_MODIFIER_EXT), None);
        assert!(FormatFeatures::NONE.is_empty());
        assert!(ImageFormatLimits::default().is_unsupported());
    }
}

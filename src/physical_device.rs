use crate::device::DeviceInfo;
use crate::error::Result;
use crate::format::{plane_count, tiling_possible};
use crate::resolve::*;
use crate::structs::*;
use ash::vk;

/// Answers of a format properties query.
#[derive(Debug, Clone)]
pub struct FormatPropertiesResponse {
    /// Always filled; the 32-bit view of the features.
    pub properties: vk::FormatProperties,
    pub properties3: Option<FormatFeatures>,
    pub drm_format_modifiers: Option<Vec<DrmModifierProperties>>,
}

/// Output of an image format query.
///
/// Only the optional slots that were requested are filled in; the others
/// stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageFormatResponse {
    pub properties: ImageFormatLimits,
    pub external_memory: Option<ExternalMemoryCapability>,
    pub filter_cubic: Option<FilterCubicSupport>,
    pub ycbcr_conversion: Option<YcbcrConversionSupport>,
}

impl ImageFormatResponse {
    pub fn requesting(outputs: &[ImageFormatOutput]) -> Self {
        let mut response = Self::default();
        for output in outputs {
            match output {
                ImageFormatOutput::ExternalMemory => {
                    response.external_memory = Some(Default::default())
                }
                ImageFormatOutput::FilterCubic => response.filter_cubic = Some(Default::default()),
                ImageFormatOutput::SamplerYcbcrConversion => {
                    response.ycbcr_conversion = Some(Default::default())
                }
            }
        }
        response
    }

    pub fn is_requested(&self, output: ImageFormatOutput) -> bool {
        match output {
            ImageFormatOutput::ExternalMemory => self.external_memory.is_some(),
            ImageFormatOutput::FilterCubic => self.filter_cubic.is_some(),
            ImageFormatOutput::SamplerYcbcrConversion => self.ycbcr_conversion.is_some(),
        }
    }
}

/// What the output writers get to look at.
pub struct ImageQueryContext<'a> {
    pub info: &'a ImageFormatInfo,
    pub resolved: ResolvedImageFormat,
    /// Set when the query names a handle kind, which is then already known
    /// to be supported.
    pub external: Option<ExternalMemoryCapability>,
}

type ImageOutputWriter = fn(&ImageQueryContext, &mut ImageFormatResponse);

/// Writers of the requested slots, run in this order after a successful
/// base query.
const IMAGE_OUTPUT_WRITERS: &[(ImageFormatOutput, ImageOutputWriter)] = &[
    (ImageFormatOutput::ExternalMemory, write_external_memory),
    (ImageFormatOutput::FilterCubic, write_filter_cubic),
    (ImageFormatOutput::SamplerYcbcrConversion, write_ycbcr_conversion),
];

fn write_external_memory(ctx: &ImageQueryContext, out: &mut ImageFormatResponse) {
    out.external_memory = Some(ctx.external.unwrap_or_default());
}

fn write_filter_cubic(ctx: &ImageQueryContext, out: &mut ImageFormatResponse) {
    let view_type = ctx
        .info
        .view_type
        .expect("cubic filter support queried without an image view type");

    // only 2D views are known to work
    let supported =
        matches!(view_type, vk::ImageViewType::TYPE_2D | vk::ImageViewType::TYPE_2D_ARRAY)
            && ctx
                .resolved
                .features
                .contains(vk::FormatFeatureFlags2::SAMPLED_IMAGE_FILTER_CUBIC);
    out.filter_cubic = Some(FilterCubicSupport {
        filter_cubic: supported,
        filter_cubic_minmax: supported,
    });
}

fn write_ycbcr_conversion(_ctx: &ImageQueryContext, out: &mut ImageFormatResponse) {
    out.ycbcr_conversion = Some(YcbcrConversionSupport {
        combined_image_sampler_descriptor_count: 1,
    });
}

/// Capability queries for one a6xx GPU.
#[derive(Debug, Clone, Default)]
pub struct PhysicalDevice {
    info: DeviceInfo,
}

impl PhysicalDevice {
    pub fn new(info: DeviceInfo) -> Self {
        log::debug!("format capabilities for {}", info);
        Self { info }
    }

    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    pub fn format_features(&self, format: vk::Format) -> FormatFeatures {
        resolve_features(&self.info, format)
    }

    fn drm_format_modifiers(
        &self,
        format: vk::Format,
        features: &FormatFeatures,
    ) -> Vec<DrmModifierProperties> {
        let plane_count = plane_count(format);
        let mut modifiers = Vec::new();

        if !features.linear.is_empty() {
            modifiers.push(DrmModifierProperties {
                drm_format_modifier: DRM_FORMAT_MOD_LINEAR,
                plane_count,
                tiling_features: features.linear,
            });
        }

        // only the format matters to ubwc_possible here
        if !features.optimal.is_empty()
            && tiling_possible(format)
            && ubwc_possible(
                &self.info,
                format,
                vk::ImageType::TYPE_2D,
                vk::ImageUsageFlags::empty(),
                vk::ImageUsageFlags::empty(),
                vk::SampleCountFlags::TYPE_1,
                false,
            )
        {
            modifiers.push(DrmModifierProperties {
                drm_format_modifier: DRM_FORMAT_MOD_QCOM_COMPRESSED,
                plane_count,
                tiling_features: features.optimal,
            });
        }
        modifiers
    }

    pub fn get_format_properties(
        &self,
        format: vk::Format,
        requested: &[FormatOutput],
    ) -> FormatPropertiesResponse {
        let features = self.format_features(format);
        FormatPropertiesResponse {
            properties: features.into(),
            properties3: requested.contains(&FormatOutput::Properties3).then_some(features),
            drm_format_modifiers: requested
                .contains(&FormatOutput::DrmFormatModifierList)
                .then(|| self.drm_format_modifiers(format, &features)),
        }
    }

    /// Fills `out` for `info`.
    ///
    /// On `Err`, `out.properties` is all zero. Optional slots that were
    /// requested are filled only on success.
    pub fn get_image_format_properties(
        &self,
        info: &ImageFormatInfo,
        out: &mut ImageFormatResponse,
    ) -> Result<()> {
        let result = self.image_format_properties(info, out);
        if result.is_err() {
            out.properties = ImageFormatLimits::UNSUPPORTED;
        }
        result
    }

    fn image_format_properties(
        &self,
        info: &ImageFormatInfo,
        out: &mut ImageFormatResponse,
    ) -> Result<()> {
        let resolved = resolve_limits(&self.info, info)?;
        out.properties = resolved.limits;

        // an unsupported handle fails the query whether or not its slot was requested
        let external = match info.requested_handle_type() {
            Some(handle_type) => Some(resolve_external_image(handle_type, info.image_type)?),
            None => None,
        };

        let ctx = ImageQueryContext {
            info,
            resolved,
            external,
        };
        for (output, writer) in IMAGE_OUTPUT_WRITERS {
            if out.is_requested(*output) {
                log::trace!("writing {:?} for {:?}", output, info.format);
                writer(&ctx, &mut *out);
            }
        }
        Ok(())
    }

    pub fn get_external_buffer_properties(
        &self,
        handle_type: vk::ExternalMemoryHandleTypeFlags,
    ) -> ExternalMemoryCapability {
        resolve_external_buffer(handle_type)
    }

    /// Sparse residency is not supported.
    pub fn get_sparse_image_format_properties(
        &self,
        _info: &SparseImageFormatInfo,
    ) -> Vec<vk::SparseImageFormatProperties> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requesting_opens_only_named_slots() {
        let out = ImageFormatResponse::requesting(&[ImageFormatOutput::FilterCubic]);
        assert!(out.filter_cubic.is_some());
        assert!(out.external_memory.is_none());
        assert!(out.ycbcr_conversion.is_none());
        assert!(out.is_requested(ImageFormatOutput::FilterCubic));
        assert!(!out.is_requested(ImageFormatOutput::ExternalMemory));
    }

    #[test]
    fn writers_skip_unrequested_slots() {
        let device = PhysicalDevice::default();
        // no view type: the cubic writer would panic if it ran
        let info = ImageFormatInfo::new(
            vk::Format::G8_B8_R8_3PLANE_420_UNORM,
            vk::ImageType::TYPE_2D,
            vk::ImageTiling::OPTIMAL,
            vk::ImageUsageFlags::SAMPLED,
        );
        let mut out = ImageFormatResponse::requesting(&[ImageFormatOutput::SamplerYcbcrConversion]);
        assert!(device.get_image_format_properties(&info, &mut out).is_ok());
        assert_eq!(
            out.ycbcr_conversion,
            Some(YcbcrConversionSupport {
                combined_image_sampler_descriptor_count: 1
            })
        );
        assert!(out.filter_cubic.is_none());
        assert!(out.external_memory.is_none());
    }

    #[test]
    fn unrequested_external_handle_still_validated() {
        let device = PhysicalDevice::default();
        let info = ImageFormatInfo::new(
            vk::Format::R8G8B8A8_UNORM,
            vk::ImageType::TYPE_3D,
            vk::ImageTiling::OPTIMAL,
            vk::ImageUsageFlags::SAMPLED,
        )
        .external_handle_type(vk::ExternalMemoryHandleTypeFlags::DMA_BUF_EXT);
        let mut out = ImageFormatResponse::default();
        assert!(device.get_image_format_properties(&info, &mut out).is_err());
        assert!(out.properties.is_unsupported());
    }

    #[test]
    fn format_properties_fill_only_requested_outputs() {
        let device = PhysicalDevice::default();
        let r = device.get_format_properties(vk::Format::R8G8B8A8_UNORM, &[]);
        assert!(r.properties3.is_none());
        assert!(r.drm_format_modifiers.is_none());
        assert!(r
            .properties
            .optimal_tiling_features
            .contains(vk::FormatFeatureFlags::COLOR_ATTACHMENT));
    }
}

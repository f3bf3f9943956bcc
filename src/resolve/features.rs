//! Format feature resolution.
//!
//! The feature triple is built by an ordered list of rules. Each rule reads
//! the facts gathered once per format and may only grant bits or mask bits
//! granted by earlier rules.

use crate::device::DeviceInfo;
use crate::format::*;
use crate::structs::FormatFeatures;
use ash::vk;

type F = vk::FormatFeatureFlags2;

/// What the rules know about one format.
#[derive(Debug, Clone, Copy)]
pub struct FormatFacts {
    pub format: vk::Format,
    pub desc: FormatDescriptor,
    pub vertex: bool,
    pub color: bool,
    pub texture: bool,
    pub depth_format: Option<DepthFormat>,
    pub ext_filter_cubic: bool,
}

impl FormatFacts {
    /// `None` when no pipeline stage can use the format.
    pub fn gather(device: &DeviceInfo, format: vk::Format) -> Option<Self> {
        let desc = classify(format)?;
        let facts = FormatFacts {
            format,
            desc,
            vertex: vertex_supported(format),
            color: color_supported(format),
            texture: texture_supported(format),
            depth_format: depth_format(format),
            ext_filter_cubic: device.ext_filter_cubic,
        };
        (facts.vertex || facts.color || facts.texture).then_some(facts)
    }
}

type Rule = fn(&FormatFacts, &mut FormatFeatures);

const FEATURE_RULES: &[(&str, Rule)] = &[
    ("pot_transfer", pot_transfer),
    ("vertex_buffer", vertex_buffer),
    ("uniform_texel_buffer", uniform_texel_buffer),
    ("sampled_image", sampled_image),
    ("color_attachment", color_attachment),
    ("depth_attachment", depth_attachment),
    ("untileable", untileable),
    ("yuv_no_buffer", yuv_no_buffer),
    ("packed_16bit", packed_16bit),
    ("depth_comparison", depth_comparison),
    ("depth_stencil_no_buffer", depth_stencil_no_buffer),
    ("d32s8_no_linear", d32s8_no_linear),
];

fn pot_transfer(facts: &FormatFacts, out: &mut FormatFeatures) {
    if facts.desc.is_power_of_two_block() {
        out.buffer |= F::TRANSFER_SRC | F::TRANSFER_DST;
    }
}

fn vertex_buffer(facts: &FormatFacts, out: &mut FormatFeatures) {
    if facts.vertex {
        out.buffer |= F::VERTEX_BUFFER;
    }
}

fn uniform_texel_buffer(facts: &FormatFacts, out: &mut FormatFeatures) {
    if facts.texture {
        out.buffer |= F::UNIFORM_TEXEL_BUFFER;
    }
}

fn sampled_image(facts: &FormatFacts, out: &mut FormatFeatures) {
    if !facts.texture || !facts.desc.is_power_of_two_block() {
        return;
    }

    out.optimal |= F::TRANSFER_SRC
        | F::TRANSFER_DST
        | F::SAMPLED_IMAGE
        | F::SAMPLED_IMAGE_FILTER_MINMAX
        | F::COSITED_CHROMA_SAMPLES
        | F::MIDPOINT_CHROMA_SAMPLES;

    if !facts.desc.is_subsampled_or_planar() {
        out.optimal |= F::BLIT_SRC;
    }

    if facts.desc.layout != LayoutKind::Subsampled {
        out.optimal |= F::SAMPLED_IMAGE_YCBCR_CONVERSION_LINEAR_FILTER;
    }

    if !facts.desc.is_pure_integer() {
        out.optimal |= F::SAMPLED_IMAGE_FILTER_LINEAR;
        if facts.ext_filter_cubic {
            out.optimal |= F::SAMPLED_IMAGE_FILTER_CUBIC;
        }
    }
}

fn color_attachment(facts: &FormatFacts, out: &mut FormatFeatures) {
    if !facts.color {
        return;
    }

    out.optimal |= F::COLOR_ATTACHMENT
        | F::BLIT_DST
        | F::STORAGE_IMAGE
        | F::STORAGE_READ_WITHOUT_FORMAT
        | F::STORAGE_WRITE_WITHOUT_FORMAT;
    out.buffer |= F::STORAGE_TEXEL_BUFFER
        | F::STORAGE_READ_WITHOUT_FORMAT
        | F::STORAGE_WRITE_WITHOUT_FORMAT;

    if matches!(facts.format, vk::Format::R32_UINT | vk::Format::R32_SINT) {
        out.optimal |= F::STORAGE_IMAGE_ATOMIC;
        out.buffer |= F::STORAGE_TEXEL_BUFFER_ATOMIC;
    }

    if !facts.desc.is_pure_integer() {
        out.optimal |= F::COLOR_ATTACHMENT_BLEND;
    }
}

fn depth_attachment(facts: &FormatFacts, out: &mut FormatFeatures) {
    // linear surfaces can't be depth rendered
    out.linear = out.optimal;
    if facts.depth_format.is_some() {
        out.optimal |= F::DEPTH_STENCIL_ATTACHMENT;
    }
}

fn untileable(facts: &FormatFacts, out: &mut FormatFeatures) {
    // the 3-plane format is never tiled but has to expose optimal features
    // for sampler Y'CbCr conversion
    if !tiling_possible(facts.format) && facts.format != vk::Format::G8_B8_R8_3PLANE_420_UNORM {
        out.optimal = F::empty();
    }
}

fn yuv_no_buffer(facts: &FormatFacts, out: &mut FormatFeatures) {
    if matches!(
        facts.format,
        vk::Format::G8B8G8R8_422_UNORM
            | vk::Format::B8G8R8G8_422_UNORM
            | vk::Format::G8_B8R8_2PLANE_420_UNORM
            | vk::Format::G8_B8_R8_3PLANE_420_UNORM
    ) {
        out.buffer = F::empty();
    }
}

fn packed_16bit(facts: &FormatFacts, out: &mut FormatFeatures) {
    if facts.desc.channels > 2 && facts.desc.block_bits == 16 {
        out.buffer &= F::UNIFORM_TEXEL_BUFFER;
        let storage = F::STORAGE_IMAGE | F::STORAGE_IMAGE_ATOMIC;
        out.linear &= !storage;
        out.optimal &= !storage;
    }
}

fn depth_comparison(facts: &FormatFacts, out: &mut FormatFeatures) {
    if facts.desc.has_depth() && out.optimal.contains(F::SAMPLED_IMAGE) {
        out.optimal |= F::SAMPLED_IMAGE_DEPTH_COMPARISON;
        out.linear |= F::SAMPLED_IMAGE_DEPTH_COMPARISON;
    }
}

fn depth_stencil_no_buffer(facts: &FormatFacts, out: &mut FormatFeatures) {
    if facts.desc.is_depth_or_stencil() {
        out.buffer = F::empty();
    }
}

fn d32s8_no_linear(facts: &FormatFacts, out: &mut FormatFeatures) {
    // stored as two separate planes
    if facts.format == vk::Format::D32_SFLOAT_S8_UINT {
        out.linear = F::empty();
    }
}

/// Computes the linear, optimal and buffer features of `format`.
///
/// Formats no pipeline stage accepts get three empty sets.
pub fn resolve_features(device: &DeviceInfo, format: vk::Format) -> FormatFeatures {
    let facts = match FormatFacts::gather(device, format) {
        Some(facts) => facts,
        None => return FormatFeatures::NONE,
    };

    let mut out = FormatFeatures::default();
    for (name, rule) in FEATURE_RULES {
        rule(&facts, &mut out);
        log::trace!(
            "{:?} after {}: linear={:?} optimal={:?} buffer={:?}",
            format,
            name,
            out.linear,
            out.optimal,
            out.buffer
        );
    }
    out
}

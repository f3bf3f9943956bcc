mod common;

use a6xx_caps::format::{classify, is_depth_or_stencil, plane_count, tiling_possible};
use a6xx_caps::*;
use ash::vk;
use common::*;

type F = vk::FormatFeatureFlags2;

#[test]
fn resolution_is_repeatable() {
    for gpu in devices() {
        for format in all_formats() {
            assert_eq!(gpu.format_features(format), gpu.format_features(format), "{:?}", format);
        }
    }
}

#[test]
fn buffer_features_never_include_attachments() {
    for gpu in devices() {
        for format in all_formats() {
            let buffer = gpu.format_features(format).buffer;
            assert!(
                !buffer.intersects(F::COLOR_ATTACHMENT | F::DEPTH_STENCIL_ATTACHMENT),
                "{:?}: {:?}",
                format,
                buffer
            );
        }
    }
}

#[test]
fn depth_stencil_formats_have_no_buffer_features() {
    let gpu = a630();
    for format in all_formats().into_iter().filter(|f| is_depth_or_stencil(*f)) {
        assert!(gpu.format_features(format).buffer.is_empty(), "{:?}", format);
    }
}

#[test]
fn yuv_formats_have_no_buffer_features() {
    for gpu in devices() {
        for format in YUV_FORMATS {
            assert!(gpu.format_features(*format).buffer.is_empty(), "{:?}", format);
        }
    }
}

#[test]
fn packed_16bit_formats_cannot_be_storage_images() {
    let gpu = a650();
    let mut checked = 0;
    for format in all_formats() {
        let desc = match classify(format) {
            Some(desc) => desc,
            None => continue,
        };
        if desc.channels > 2 && desc.block_bits == 16 {
            let f = gpu.format_features(format);
            assert!(!f.optimal.contains(F::STORAGE_IMAGE), "{:?}", format);
            assert!(!f.linear.contains(F::STORAGE_IMAGE), "{:?}", format);
            checked += 1;
        }
    }
    assert!(checked >= 9);
}

#[test]
fn non_power_of_two_formats_are_buffer_only() {
    let gpu = a630();
    for format in all_formats() {
        let desc = match classify(format) {
            Some(desc) => desc,
            None => continue,
        };
        if desc.is_power_of_two_block() {
            continue;
        }
        let f = gpu.format_features(format);
        assert!(f.linear.is_empty() && f.optimal.is_empty(), "{:?}", format);
        assert!(!f.buffer.intersects(F::TRANSFER_SRC | F::TRANSFER_DST), "{:?}", format);
    }
}

#[test]
fn unsupported_formats_resolve_empty() {
    for gpu in devices() {
        for format in UNSUPPORTED_FORMATS {
            assert_eq!(gpu.format_features(*format), FormatFeatures::NONE, "{:?}", format);
        }
    }
}

#[test]
fn optimal_covers_linear_for_tileable_formats() {
    let gpu = a650();
    for format in all_formats().into_iter().filter(|f| tiling_possible(*f)) {
        let f = gpu.format_features(format);
        assert!(f.optimal.contains(f.linear), "{:?}: {:?} vs {:?}", format, f.optimal, f.linear);
    }
}

#[test]
fn linear_depth_stencil_is_never_renderable() {
    for gpu in devices() {
        for format in all_formats() {
            assert!(!gpu
                .format_features(format)
                .linear
                .contains(F::DEPTH_STENCIL_ATTACHMENT));
        }
    }
    let props = a630().get_format_properties(vk::Format::D24_UNORM_S8_UINT, &[]);
    assert!(props
        .properties
        .optimal_tiling_features
        .contains(vk::FormatFeatureFlags::DEPTH_STENCIL_ATTACHMENT));
    assert!(!props
        .properties
        .linear_tiling_features
        .contains(vk::FormatFeatureFlags::DEPTH_STENCIL_ATTACHMENT));
}

#[test]
fn packed_yuv_buffer_features_are_empty() {
    let props =
        a630().get_format_properties(vk::Format::G8B8G8R8_422_UNORM, &[FormatOutput::Properties3]);
    assert!(props.properties.buffer_features.is_empty());
    assert!(props.properties3.unwrap().buffer.is_empty());
}

#[test]
fn properties3_matches_legacy_view() {
    let gpu = a650();
    for format in all_formats() {
        let props = gpu.get_format_properties(format, &[FormatOutput::Properties3]);
        let full = props.properties3.unwrap();
        assert_eq!(full, gpu.format_features(format));
        assert_eq!(
            props.properties.optimal_tiling_features.as_raw() as u64,
            full.optimal.as_raw() & 0x7fff_ffff
        );
    }
}

fn modifiers(gpu: &PhysicalDevice, format: vk::Format) -> Vec<(u64, u32)> {
    gpu.get_format_properties(format, &[FormatOutput::DrmFormatModifierList])
        .drm_format_modifiers
        .unwrap()
        .iter()
        .map(|m| (m.drm_format_modifier, m.plane_count))
        .collect()
}

#[test]
fn modifier_list_order_and_gating() {
    let gpu = a630();
    assert_eq!(
        modifiers(&gpu, vk::Format::R8G8B8A8_UNORM),
        vec![(DRM_FORMAT_MOD_LINEAR, 1), (DRM_FORMAT_MOD_QCOM_COMPRESSED, 1)]
    );
    assert_eq!(modifiers(&gpu, vk::Format::R8G8B8A8_SNORM), vec![(DRM_FORMAT_MOD_LINEAR, 1)]);
    assert_eq!(modifiers(&gpu, vk::Format::BC1_RGB_UNORM_BLOCK), vec![(DRM_FORMAT_MOD_LINEAR, 1)]);
    assert_eq!(
        modifiers(&gpu, vk::Format::G8_B8R8_2PLANE_420_UNORM),
        vec![(DRM_FORMAT_MOD_LINEAR, 2)]
    );
    assert_eq!(
        modifiers(&gpu, vk::Format::G8_B8_R8_3PLANE_420_UNORM),
        vec![(DRM_FORMAT_MOD_LINEAR, 3)]
    );
    assert_eq!(
        modifiers(&gpu, vk::Format::D32_SFLOAT_S8_UINT),
        vec![(DRM_FORMAT_MOD_QCOM_COMPRESSED, plane_count(vk::Format::D32_SFLOAT_S8_UINT))]
    );
    assert!(modifiers(&gpu, vk::Format::UNDEFINED).is_empty());
    assert!(modifiers(&gpu, vk::Format::R8G8B8_UNORM).is_empty());
}

#[test]
fn modifier_features_match_tiling_features() {
    let gpu = a630();
    let format = vk::Format::B8G8R8A8_SRGB;
    let features = gpu.format_features(format);
    let list = gpu
        .get_format_properties(format, &[FormatOutput::DrmFormatModifierList])
        .drm_format_modifiers
        .unwrap();
    assert_eq!(list[0].tiling_features, features.linear);
    assert_eq!(list[1].tiling_features, features.optimal);
}

#[test]
fn r8_compression_depends_on_8bpp_ubwc() {
    let with = a630();
    let without = PhysicalDevice::new(DeviceInfo::a630().with_8bpp_ubwc(false));
    assert_eq!(modifiers(&with, vk::Format::R8_UNORM).len(), 2);
    assert_eq!(modifiers(&without, vk::Format::R8_UNORM), vec![(DRM_FORMAT_MOD_LINEAR, 1)]);
}

//! Static vk::Format → a6xx encoding table.
//!
//! One row per format the hardware can do anything with. The support column
//! says which of the vertex fetch, texture and render units accept it; every
//! color-renderable row is also texturable.

use super::native::*;
use ash::vk;
use lazy_static::lazy_static;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
pub struct FormatRow {
    pub format: vk::Format,
    pub fmt: Fmt6,
    pub swap: ColorSwap,
    pub support: FormatSupport,
}

const V: FormatSupport = FormatSupport::VERTEX;
const T: FormatSupport = FormatSupport::TEXTURE;
const VT: FormatSupport = FormatSupport::VERTEX.union(FormatSupport::TEXTURE);
const TC: FormatSupport = FormatSupport::TEXTURE.union(FormatSupport::COLOR);
const VTC: FormatSupport = VT.union(FormatSupport::COLOR);

macro_rules! row {
    ($vk:ident, $fmt:ident, $swap:ident, $support:ident) => {
        FormatRow {
            format: vk::Format::$vk,
            fmt: $fmt,
            swap: ColorSwap::$swap,
            support: $support,
        }
    };
}

static FORMAT_TABLE: &[FormatRow] = &[
    /* 8-bit */
    row!(R8_UNORM, FMT6_8_UNORM, Wzyx, VTC),
    row!(R8_SNORM, FMT6_8_SNORM, Wzyx, VTC),
    row!(R8_USCALED, FMT6_8_UINT, Wzyx, V),
    row!(R8_SSCALED, FMT6_8_SINT, Wzyx, V),
    row!(R8_UINT, FMT6_8_UINT, Wzyx, VTC),
    row!(R8_SINT, FMT6_8_SINT, Wzyx, VTC),
    row!(R8_SRGB, FMT6_8_UNORM, Wzyx, TC),
    /* 16-bit */
    row!(R4G4B4A4_UNORM_PACK16, FMT6_4_4_4_4_UNORM, Xyzw, TC),
    row!(B4G4R4A4_UNORM_PACK16, FMT6_4_4_4_4_UNORM, Zyxw, TC),
    row!(A4R4G4B4_UNORM_PACK16, FMT6_4_4_4_4_UNORM, Wxyz, TC),
    row!(A4B4G4R4_UNORM_PACK16, FMT6_4_4_4_4_UNORM, Wzyx, TC),
    row!(R5G6B5_UNORM_PACK16, FMT6_5_6_5_UNORM, Wxyz, TC),
    row!(B5G6R5_UNORM_PACK16, FMT6_5_6_5_UNORM, Wzyx, TC),
    row!(R5G5B5A1_UNORM_PACK16, FMT6_5_5_5_1_UNORM, Xyzw, TC),
    row!(B5G5R5A1_UNORM_PACK16, FMT6_5_5_5_1_UNORM, Zyxw, TC),
    row!(A1R5G5B5_UNORM_PACK16, FMT6_1_5_5_5_UNORM, Wxyz, TC),
    row!(R8G8_UNORM, FMT6_8_8_UNORM, Wzyx, VTC),
    row!(R8G8_SNORM, FMT6_8_8_SNORM, Wzyx, VTC),
    row!(R8G8_USCALED, FMT6_8_8_UINT, Wzyx, V),
    row!(R8G8_SSCALED, FMT6_8_8_SINT, Wzyx, V),
    row!(R8G8_UINT, FMT6_8_8_UINT, Wzyx, VTC),
    row!(R8G8_SINT, FMT6_8_8_SINT, Wzyx, VTC),
    row!(R8G8_SRGB, FMT6_8_8_UNORM, Wzyx, TC),
    row!(R16_UNORM, FMT6_16_UNORM, Wzyx, VTC),
    row!(R16_SNORM, FMT6_16_SNORM, Wzyx, VTC),
    row!(R16_USCALED, FMT6_16_UINT, Wzyx, V),
    row!(R16_SSCALED, FMT6_16_SINT, Wzyx, V),
    row!(R16_UINT, FMT6_16_UINT, Wzyx, VTC),
    row!(R16_SINT, FMT6_16_SINT, Wzyx, VTC),
    row!(R16_SFLOAT, FMT6_16_FLOAT, Wzyx, VTC),
    /* 24-bit */
    row!(R8G8B8_UNORM, FMT6_8_8_8_UNORM, Wzyx, VT),
    row!(R8G8B8_SNORM, FMT6_8_8_8_SNORM, Wzyx, VT),
    row!(R8G8B8_USCALED, FMT6_8_8_8_UINT, Wzyx, V),
    row!(R8G8B8_SSCALED, FMT6_8_8_8_SINT, Wzyx, V),
    row!(R8G8B8_UINT, FMT6_8_8_8_UINT, Wzyx, VT),
    row!(R8G8B8_SINT, FMT6_8_8_8_SINT, Wzyx, VT),
    row!(R8G8B8_SRGB, FMT6_8_8_8_UNORM, Wzyx, T),
    /* 32-bit */
    row!(R8G8B8A8_UNORM, FMT6_8_8_8_8_UNORM, Wzyx, VTC),
    row!(R8G8B8A8_SNORM, FMT6_8_8_8_8_SNORM, Wzyx, VTC),
    row!(R8G8B8A8_USCALED, FMT6_8_8_8_8_UINT, Wzyx, V),
    row!(R8G8B8A8_SSCALED, FMT6_8_8_8_8_SINT, Wzyx, V),
    row!(R8G8B8A8_UINT, FMT6_8_8_8_8_UINT, Wzyx, VTC),
    row!(R8G8B8A8_SINT, FMT6_8_8_8_8_SINT, Wzyx, VTC),
    row!(R8G8B8A8_SRGB, FMT6_8_8_8_8_UNORM, Wzyx, TC),
    row!(B8G8R8A8_UNORM, FMT6_8_8_8_8_UNORM, Wxyz, VTC),
    row!(B8G8R8A8_SNORM, FMT6_8_8_8_8_SNORM, Wxyz, TC),
    row!(B8G8R8A8_UINT, FMT6_8_8_8_8_UINT, Wxyz, TC),
    row!(B8G8R8A8_SINT, FMT6_8_8_8_8_SINT, Wxyz, TC),
    row!(B8G8R8A8_SRGB, FMT6_8_8_8_8_UNORM, Wxyz, TC),
    row!(A8B8G8R8_UNORM_PACK32, FMT6_8_8_8_8_UNORM, Wzyx, VTC),
    row!(A8B8G8R8_SNORM_PACK32, FMT6_8_8_8_8_SNORM, Wzyx, VTC),
    row!(A8B8G8R8_USCALED_PACK32, FMT6_8_8_8_8_UINT, Wzyx, V),
    row!(A8B8G8R8_SSCALED_PACK32, FMT6_8_8_8_8_SINT, Wzyx, V),
    row!(A8B8G8R8_UINT_PACK32, FMT6_8_8_8_8_UINT, Wzyx, VTC),
    row!(A8B8G8R8_SINT_PACK32, FMT6_8_8_8_8_SINT, Wzyx, VTC),
    row!(A8B8G8R8_SRGB_PACK32, FMT6_8_8_8_8_UNORM, Wzyx, TC),
    row!(A2R10G10B10_UNORM_PACK32, FMT6_10_10_10_2_UNORM, Wxyz, VTC),
    row!(A2R10G10B10_SNORM_PACK32, FMT6_10_10_10_2_SNORM, Wxyz, V),
    row!(A2R10G10B10_UINT_PACK32, FMT6_10_10_10_2_UINT, Wxyz, TC),
    row!(A2B10G10R10_UNORM_PACK32, FMT6_10_10_10_2_UNORM, Wzyx, VTC),
    row!(A2B10G10R10_SNORM_PACK32, FMT6_10_10_10_2_SNORM, Wzyx, V),
    row!(A2B10G10R10_USCALED_PACK32, FMT6_10_10_10_2_UINT, Wzyx, V),
    row!(A2B10G10R10_SSCALED_PACK32, FMT6_10_10_10_2_SINT, Wzyx, V),
    row!(A2B10G10R10_UINT_PACK32, FMT6_10_10_10_2_UINT, Wzyx, VTC),
    row!(A2B10G10R10_SINT_PACK32, FMT6_10_10_10_2_SINT, Wzyx, V),
    row!(R16G16_UNORM, FMT6_16_16_UNORM, Wzyx, VTC),
    row!(R16G16_SNORM, FMT6_16_16_SNORM, Wzyx, VTC),
    row!(R16G16_USCALED, FMT6_16_16_UINT, Wzyx, V),
    row!(R16G16_SSCALED, FMT6_16_16_SINT, Wzyx, V),
    row!(R16G16_UINT, FMT6_16_16_UINT, Wzyx, VTC),
    row!(R16G16_SINT, FMT6_16_16_SINT, Wzyx, VTC),
    row!(R16G16_SFLOAT, FMT6_16_16_FLOAT, Wzyx, VTC),
    row!(R32_UINT, FMT6_32_UINT, Wzyx, VTC),
    row!(R32_SINT, FMT6_32_SINT, Wzyx, VTC),
    row!(R32_SFLOAT, FMT6_32_FLOAT, Wzyx, VTC),
    row!(B10G11R11_UFLOAT_PACK32, FMT6_11_11_10_FLOAT, Wzyx, VTC),
    row!(E5B9G9R9_UFLOAT_PACK32, FMT6_9_9_9_E5_FLOAT, Wzyx, T),
    /* 48-bit */
    row!(R16G16B16_UNORM, FMT6_16_16_16_UNORM, Wzyx, VT),
    row!(R16G16B16_SNORM, FMT6_16_16_16_SNORM, Wzyx, VT),
    row!(R16G16B16_USCALED, FMT6_16_16_16_UINT, Wzyx, V),
    row!(R16G16B16_SSCALED, FMT6_16_16_16_SINT, Wzyx, V),
    row!(R16G16B16_UINT, FMT6_16_16_16_UINT, Wzyx, VT),
    row!(R16G16B16_SINT, FMT6_16_16_16_SINT, Wzyx, VT),
    row!(R16G16B16_SFLOAT, FMT6_16_16_16_FLOAT, Wzyx, VT),
    /* 64-bit */
    row!(R16G16B16A16_UNORM, FMT6_16_16_16_16_UNORM, Wzyx, VTC),
    row!(R16G16B16A16_SNORM, FMT6_16_16_16_16_SNORM, Wzyx, VTC),
    row!(R16G16B16A16_USCALED, FMT6_16_16_16_16_UINT, Wzyx, V),
    row!(R16G16B16A16_SSCALED, FMT6_16_16_16_16_SINT, Wzyx, V),
    row!(R16G16B16A16_UINT, FMT6_16_16_16_16_UINT, Wzyx, VTC),
    row!(R16G16B16A16_SINT, FMT6_16_16_16_16_SINT, Wzyx, VTC),
    row!(R16G16B16A16_SFLOAT, FMT6_16_16_16_16_FLOAT, Wzyx, VTC),
    row!(R32G32_UINT, FMT6_32_32_UINT, Wzyx, VTC),
    row!(R32G32_SINT, FMT6_32_32_SINT, Wzyx, VTC),
    row!(R32G32_SFLOAT, FMT6_32_32_FLOAT, Wzyx, VTC),
    /* 96-bit */
    row!(R32G32B32_UINT, FMT6_32_32_32_UINT, Wzyx, VT),
    row!(R32G32B32_SINT, FMT6_32_32_32_SINT, Wzyx, VT),
    row!(R32G32B32_SFLOAT, FMT6_32_32_32_FLOAT, Wzyx, VT),
    /* 128-bit */
    row!(R32G32B32A32_UINT, FMT6_32_32_32_32_UINT, Wzyx, VTC),
    row!(R32G32B32A32_SINT, FMT6_32_32_32_32_SINT, Wzyx, VTC),
    row!(R32G32B32A32_SFLOAT, FMT6_32_32_32_32_FLOAT, Wzyx, VTC),
    /* depth/stencil */
    row!(D16_UNORM, FMT6_16_UNORM, Wzyx, TC),
    row!(X8_D24_UNORM_PACK32, FMT6_X8Z24_UNORM, Wzyx, TC),
    row!(D32_SFLOAT, FMT6_32_FLOAT, Wzyx, TC),
    row!(S8_UINT, FMT6_8_UINT, Wzyx, TC),
    row!(D24_UNORM_S8_UINT, FMT6_Z24_UNORM_S8_UINT, Wzyx, TC),
    row!(D32_SFLOAT_S8_UINT, FMT6_32_FLOAT, Wzyx, TC),
    /* ETC2 / EAC */
    row!(ETC2_R8G8B8_UNORM_BLOCK, FMT6_ETC2_RGB8, Wzyx, T),
    row!(ETC2_R8G8B8_SRGB_BLOCK, FMT6_ETC2_RGB8, Wzyx, T),
    row!(ETC2_R8G8B8A1_UNORM_BLOCK, FMT6_ETC2_RGB8A1, Wzyx, T),
    row!(ETC2_R8G8B8A1_SRGB_BLOCK, FMT6_ETC2_RGB8A1, Wzyx, T),
    row!(ETC2_R8G8B8A8_UNORM_BLOCK, FMT6_ETC2_RGBA8, Wzyx, T),
    row!(ETC2_R8G8B8A8_SRGB_BLOCK, FMT6_ETC2_RGBA8, Wzyx, T),
    row!(EAC_R11_UNORM_BLOCK, FMT6_ETC2_R11_UNORM, Wzyx, T),
    row!(EAC_R11_SNORM_BLOCK, FMT6_ETC2_R11_SNORM, Wzyx, T),
    row!(EAC_R11G11_UNORM_BLOCK, FMT6_ETC2_RG11_UNORM, Wzyx, T),
    row!(EAC_R11G11_SNORM_BLOCK, FMT6_ETC2_RG11_SNORM, Wzyx, T),
    /* BC */
    row!(BC1_RGB_UNORM_BLOCK, FMT6_DXT1, Wzyx, T),
    row!(BC1_RGB_SRGB_BLOCK, FMT6_DXT1, Wzyx, T),
    row!(BC1_RGBA_UNORM_BLOCK, FMT6_DXT1, Wzyx, T),
    row!(BC1_RGBA_SRGB_BLOCK, FMT6_DXT1, Wzyx, T),
    row!(BC2_UNORM_BLOCK, FMT6_DXT3, Wzyx, T),
    row!(BC2_SRGB_BLOCK, FMT6_DXT3, Wzyx, T),
    row!(BC3_UNORM_BLOCK, FMT6_DXT5, Wzyx, T),
    row!(BC3_SRGB_BLOCK, FMT6_DXT5, Wzyx, T),
    row!(BC4_UNORM_BLOCK, FMT6_RGTC1_UNORM, Wzyx, T),
    row!(BC4_SNORM_BLOCK, FMT6_RGTC1_SNORM, Wzyx, T),
    row!(BC5_UNORM_BLOCK, FMT6_RGTC2_UNORM, Wzyx, T),
    row!(BC5_SNORM_BLOCK, FMT6_RGTC2_SNORM, Wzyx, T),
    row!(BC6H_UFLOAT_BLOCK, FMT6_BPTC_UFLOAT, Wzyx, T),
    row!(BC6H_SFLOAT_BLOCK, FMT6_BPTC_FLOAT, Wzyx, T),
    row!(BC7_UNORM_BLOCK, FMT6_BPTC, Wzyx, T),
    row!(BC7_SRGB_BLOCK, FMT6_BPTC, Wzyx, T),
    /* ASTC LDR */
    row!(ASTC_4X4_UNORM_BLOCK, FMT6_ASTC_4X4, Wzyx, T),
    row!(ASTC_4X4_SRGB_BLOCK, FMT6_ASTC_4X4, Wzyx, T),
    row!(ASTC_5X4_UNORM_BLOCK, FMT6_ASTC_5X4, Wzyx, T),
    row!(ASTC_5X4_SRGB_BLOCK, FMT6_ASTC_5X4, Wzyx, T),
    row!(ASTC_5X5_UNORM_BLOCK, FMT6_ASTC_5X5, Wzyx, T),
    row!(ASTC_5X5_SRGB_BLOCK, FMT6_ASTC_5X5, Wzyx, T),
    row!(ASTC_6X5_UNORM_BLOCK, FMT6_ASTC_6X5, Wzyx, T),
    row!(ASTC_6X5_SRGB_BLOCK, FMT6_ASTC_6X5, Wzyx, T),
    row!(ASTC_6X6_UNORM_BLOCK, FMT6_ASTC_6X6, Wzyx, T),
    row!(ASTC_6X6_SRGB_BLOCK, FMT6_ASTC_6X6, Wzyx, T),
    row!(ASTC_8X5_UNORM_BLOCK, FMT6_ASTC_8X5, Wzyx, T),
    row!(ASTC_8X5_SRGB_BLOCK, FMT6_ASTC_8X5, Wzyx, T),
    row!(ASTC_8X6_UNORM_BLOCK, FMT6_ASTC_8X6, Wzyx, T),
    row!(ASTC_8X6_SRGB_BLOCK, FMT6_ASTC_8X6, Wzyx, T),
    row!(ASTC_8X8_UNORM_BLOCK, FMT6_ASTC_8X8, Wzyx, T),
    row!(ASTC_8X8_SRGB_BLOCK, FMT6_ASTC_8X8, Wzyx, T),
    row!(ASTC_10X5_UNORM_BLOCK, FMT6_ASTC_10X5, Wzyx, T),
    row!(ASTC_10X5_SRGB_BLOCK, FMT6_ASTC_10X5, Wzyx, T),
    row!(ASTC_10X6_UNORM_BLOCK, FMT6_ASTC_10X6, Wzyx, T),
    row!(ASTC_10X6_SRGB_BLOCK, FMT6_ASTC_10X6, Wzyx, T),
    row!(ASTC_10X8_UNORM_BLOCK, FMT6_ASTC_10X8, Wzyx, T),
    row!(ASTC_10X8_SRGB_BLOCK, FMT6_ASTC_10X8, Wzyx, T),
    row!(ASTC_10X10_UNORM_BLOCK, FMT6_ASTC_10X10, Wzyx, T),
    row!(ASTC_10X10_SRGB_BLOCK, FMT6_ASTC_10X10, Wzyx, T),
    row!(ASTC_12X10_UNORM_BLOCK, FMT6_ASTC_12X10, Wzyx, T),
    row!(ASTC_12X10_SRGB_BLOCK, FMT6_ASTC_12X10, Wzyx, T),
    row!(ASTC_12X12_UNORM_BLOCK, FMT6_ASTC_12X12, Wzyx, T),
    row!(ASTC_12X12_SRGB_BLOCK, FMT6_ASTC_12X12, Wzyx, T),
    /* YUV, sampled as their RGB-layout equivalents */
    row!(G8B8G8R8_422_UNORM, FMT6_R8G8R8B8_422_UNORM, Wzyx, T),
    row!(B8G8R8G8_422_UNORM, FMT6_G8R8B8R8_422_UNORM, Wzyx, T),
    row!(G8_B8R8_2PLANE_420_UNORM, FMT6_R8_G8B8_2PLANE_420_UNORM, Wzyx, T),
    row!(G8_B8_R8_3PLANE_420_UNORM, FMT6_R8_G8_B8_3PLANE_420_UNORM, Wzyx, T),
];

lazy_static! {
    static ref FORMAT_INDEX: HashMap<vk::Format, &'static FormatRow> =
        FORMAT_TABLE.iter().map(|row| (row.format, row)).collect();
}

pub fn row(format: vk::Format) -> Option<&'static FormatRow> {
    FORMAT_INDEX.get(&format).copied()
}

/// Every format with a table row, in table order.
pub fn known_formats() -> impl Iterator<Item = vk::Format> {
    FORMAT_TABLE.iter().map(|row| row.format)
}

/// The render and texture units cannot address the packed Z24S8 layout, so
/// those surfaces are handled as plain 8:8:8:8 color.
fn alias_packed_depth_stencil(mut enc: NativeFormatEncoding) -> NativeFormatEncoding {
    if enc.fmt == FMT6_X8Z24_UNORM || enc.fmt == FMT6_Z24_UNORM_S8_UINT {
        enc.fmt = FMT6_8_8_8_8_UNORM;
    }
    enc
}

fn encode(
    format: vk::Format,
    stage: PipelineStage,
    tile_mode: TileMode,
) -> Option<NativeFormatEncoding> {
    let row = row(format)?;
    if !row.support.contains(stage.into()) {
        return None;
    }

    let swap = match stage {
        PipelineStage::Vertex => row.swap,
        // tiled surfaces store components in canonical order
        PipelineStage::Color | PipelineStage::Texture if tile_mode.is_tiled() => ColorSwap::Wzyx,
        PipelineStage::Color | PipelineStage::Texture => row.swap,
    };

    let enc = NativeFormatEncoding { fmt: row.fmt, swap };
    Some(match stage {
        PipelineStage::Vertex => enc,
        PipelineStage::Color | PipelineStage::Texture => alias_packed_depth_stencil(enc),
    })
}

/// Looks up the encoding of `format` for one pipeline stage.
///
/// `tile_mode` is ignored for vertex fetch. `None` means the stage cannot
/// use the format at all.
pub fn lookup(
    stage: PipelineStage,
    format: vk::Format,
    tile_mode: TileMode,
) -> Option<NativeFormatEncoding> {
    encode(format, stage, tile_mode)
}

pub fn vertex_format(format: vk::Format) -> Option<NativeFormatEncoding> {
    encode(format, PipelineStage::Vertex, TileMode::Linear)
}

pub fn color_format(format: vk::Format, tile_mode: TileMode) -> Option<NativeFormatEncoding> {
    encode(format, PipelineStage::Color, tile_mode)
}

pub fn texture_format(format: vk::Format, tile_mode: TileMode) -> Option<NativeFormatEncoding> {
    encode(format, PipelineStage::Texture, tile_mode)
}

pub fn vertex_supported(format: vk::Format) -> bool {
    vertex_format(format).is_some()
}

pub fn color_supported(format: vk::Format) -> bool {
    color_format(format, TileMode::Linear).is_some()
}

pub fn texture_supported(format: vk::Format) -> bool {
    texture_format(format, TileMode::Linear).is_some()
}

/// Depth buffer encoding, if the format can be bound as a depth/stencil
/// attachment. S8_UINT is rendered through the 32-bit path.
pub fn depth_format(format: vk::Format) -> Option<DepthFormat> {
    match format {
        vk::Format::D16_UNORM => Some(DepthFormat::D16),
        vk::Format::X8_D24_UNORM_PACK32 | vk::Format::D24_UNORM_S8_UINT => Some(DepthFormat::D24_8),
        vk::Format::D32_SFLOAT | vk::Format::D32_SFLOAT_S8_UINT | vk::Format::S8_UINT => {
            Some(DepthFormat::D32)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_no_duplicate_rows() {
        assert_eq!(FORMAT_INDEX.len(), FORMAT_TABLE.len());
    }

    #[test]
    fn color_rows_are_texturable() {
        for row in FORMAT_TABLE {
            if row.support.contains(FormatSupport::COLOR) {
                assert!(
                    row.support.contains(FormatSupport::TEXTURE),
                    "{:?} renderable but not texturable",
                    row.format
                );
            }
        }
    }

    #[test]
    fn packed_depth_stencil_aliases_to_rgba8() {
        for format in [vk::Format::D24_UNORM_S8_UINT, vk::Format::X8_D24_UNORM_PACK32] {
            for tile_mode in [TileMode::Linear, TileMode::Tiled, TileMode::Ubwc] {
                let color = color_format(format, tile_mode).unwrap();
                let tex = texture_format(format, tile_mode).unwrap();
                assert_eq!(color.fmt, FMT6_8_8_8_8_UNORM);
                assert_eq!(tex.fmt, FMT6_8_8_8_8_UNORM);
            }
        }
    }

    #[test]
    fn tiled_lookups_force_canonical_swap() {
        let linear = color_format(vk::Format::B8G8R8A8_UNORM, TileMode::Linear).unwrap();
        let tiled = color_format(vk::Format::B8G8R8A8_UNORM, TileMode::Tiled).unwrap();
        assert_eq!(linear.swap, ColorSwap::Wxyz);
        assert_eq!(tiled.swap, ColorSwap::Wzyx);
        assert_eq!(linear.fmt, tiled.fmt);

        let vtx = vertex_format(vk::Format::B8G8R8A8_UNORM).unwrap();
        assert_eq!(vtx.swap, ColorSwap::Wxyz);
    }

    #[test]
    fn missing_stage_is_none() {
        assert!(vertex_format(vk::Format::BC1_RGB_UNORM_BLOCK).is_none());
        assert!(color_format(vk::Format::R8G8B8_UNORM, TileMode::Linear).is_none());
        assert!(texture_format(vk::Format::R8_USCALED, TileMode::Linear).is_none());
        let d16s8 = vk::Format::D16_UNORM_S8_UINT;
        assert!(lookup(PipelineStage::Texture, d16s8, TileMode::Tiled).is_none());
        assert!(lookup(PipelineStage::Vertex, vk::Format::UNDEFINED, TileMode::Linear).is_none());
    }

    #[test]
    fn depth_formats() {
        assert_eq!(depth_format(vk::Format::D16_UNORM), Some(DepthFormat::D16));
        assert_eq!(depth_format(vk::Format::S8_UINT), Some(DepthFormat::D32));
        assert_eq!(depth_format(vk::Format::D16_UNORM_S8_UINT), None);
        assert_eq!(depth_format(vk::Format::R32_SFLOAT), None);
    }
}

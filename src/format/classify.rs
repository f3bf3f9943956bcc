use ash::vk;

#[cfg(feature = "a6xx-serde")]
use serde::{Deserialize, Serialize};

/// Memory layout of one block of the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "a6xx-serde", derive(Serialize, Deserialize))]
pub enum LayoutKind {
    Plain,
    /// 4:2:2 packed, one block per two horizontal texels.
    Subsampled,
    /// 4:2:0, luma plane plus interleaved chroma plane.
    Planar2,
    /// 4:2:0, one plane per component.
    Planar3,
    BlockCompressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "a6xx-serde", derive(Serialize, Deserialize))]
pub enum NumericKind {
    Unorm,
    Snorm,
    Uscaled,
    Sscaled,
    Uint,
    Sint,
    Float,
}

/// Classification facts about a format, as the hardware sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "a6xx-serde", derive(Serialize, Deserialize))]
pub struct FormatDescriptor {
    pub channels: u8,
    /// Per-channel widths in memory order; zero for absent channels and for
    /// block-compressed formats.
    pub channel_bits: [u8; 4],
    pub block_bits: u16,
    pub block_width: u8,
    pub block_height: u8,
    pub layout: LayoutKind,
    pub numeric: NumericKind,
    pub srgb: bool,
    pub depth_bits: u8,
    pub stencil_bits: u8,
}

const fn plain(channel_bits: [u8; 4], numeric: NumericKind) -> FormatDescriptor {
    let mut channels = 0;
    let mut block_bits = 0u16;
    let mut i = 0;
    while i < 4 {
        if channel_bits[i] != 0 {
            channels += 1;
            block_bits += channel_bits[i] as u16;
        }
        i += 1;
    }
    FormatDescriptor {
        channels,
        channel_bits,
        block_bits,
        block_width: 1,
        block_height: 1,
        layout: LayoutKind::Plain,
        numeric,
        srgb: false,
        depth_bits: 0,
        stencil_bits: 0,
    }
}

const fn srgb(channel_bits: [u8; 4]) -> FormatDescriptor {
    let mut desc = plain(channel_bits, NumericKind::Unorm);
    desc.srgb = true;
    desc
}

const fn compressed(
    block_width: u8,
    block_height: u8,
    block_bits: u16,
    channels: u8,
    numeric: NumericKind,
    srgb: bool,
) -> FormatDescriptor {
    FormatDescriptor {
        channels,
        channel_bits: [0; 4],
        block_bits,
        block_width,
        block_height,
        layout: LayoutKind::BlockCompressed,
        numeric,
        srgb,
        depth_bits: 0,
        stencil_bits: 0,
    }
}

/// `padding_bits` is counted as an extra (X) channel.
const fn depth_stencil(
    depth_bits: u8,
    stencil_bits: u8,
    padding_bits: u8,
    numeric: NumericKind,
) -> FormatDescriptor {
    let mut desc = plain([depth_bits, stencil_bits, padding_bits, 0], numeric);
    desc.depth_bits = depth_bits;
    desc.stencil_bits = stencil_bits;
    desc
}

const fn yuv(layout: LayoutKind, block_width: u8, block_bits: u16) -> FormatDescriptor {
    FormatDescriptor {
        channels: 3,
        channel_bits: [8, 8, 8, 0],
        block_bits,
        block_width,
        block_height: 1,
        layout,
        numeric: NumericKind::Unorm,
        srgb: false,
        depth_bits: 0,
        stencil_bits: 0,
    }
}

macro_rules! astc {
    ($format:expr, $($unorm:ident, $srgb:ident => $w:literal x $h:literal),+ $(,)?) => {
        match $format {
            $(
                vk::Format::$unorm => Some(compressed($w, $h, 128, 4, NumericKind::Unorm, false)),
                vk::Format::$srgb => Some(compressed($w, $h, 128, 4, NumericKind::Unorm, true)),
            )+
            _ => None,
        }
    };
}

/// Describes `format`; `None` means there is no native equivalent.
///
/// The YUV formats are described by their RGB-layout equivalents since the
/// hardware does no colorspace conversion.
pub fn classify(format: vk::Format) -> Option<FormatDescriptor> {
    use NumericKind::*;

    let desc = match format {
        vk::Format::R4G4_UNORM_PACK8 => plain([4, 4, 0, 0], Unorm),

        vk::Format::R8_UNORM => plain([8, 0, 0, 0], Unorm),
        vk::Format::R8_SNORM => plain([8, 0, 0, 0], Snorm),
        vk::Format::R8_USCALED => plain([8, 0, 0, 0], Uscaled),
        vk::Format::R8_SSCALED => plain([8, 0, 0, 0], Sscaled),
        vk::Format::R8_UINT => plain([8, 0, 0, 0], Uint),
        vk::Format::R8_SINT => plain([8, 0, 0, 0], Sint),
        vk::Format::R8_SRGB => srgb([8, 0, 0, 0]),

        vk::Format::R4G4B4A4_UNORM_PACK16
        | vk::Format::B4G4R4A4_UNORM_PACK16
        | vk::Format::A4R4G4B4_UNORM_PACK16
        | vk::Format::A4B4G4R4_UNORM_PACK16 => plain([4, 4, 4, 4], Unorm),
        vk::Format::R5G6B5_UNORM_PACK16 | vk::Format::B5G6R5_UNORM_PACK16 => {
            plain([5, 6, 5, 0], Unorm)
        }
        vk::Format::R5G5B5A1_UNORM_PACK16 | vk::Format::B5G5R5A1_UNORM_PACK16 => {
            plain([5, 5, 5, 1], Unorm)
        }
        vk::Format::A1R5G5B5_UNORM_PACK16 => plain([1, 5, 5, 5], Unorm),

        vk::Format::R8G8_UNORM => plain([8, 8, 0, 0], Unorm),
        vk::Format::R8G8_SNORM => plain([8, 8, 0, 0], Snorm),
        vk::Format::R8G8_USCALED => plain([8, 8, 0, 0], Uscaled),
        vk::Format::R8G8_SSCALED => plain([8, 8, 0, 0], Sscaled),
        vk::Format::R8G8_UINT => plain([8, 8, 0, 0], Uint),
        vk::Format::R8G8_SINT => plain([8, 8, 0, 0], Sint),
        vk::Format::R8G8_SRGB => srgb([8, 8, 0, 0]),

        vk::Format::R16_UNORM => plain([16, 0, 0, 0], Unorm),
        vk::Format::R16_SNORM => plain([16, 0, 0, 0], Snorm),
        vk::Format::R16_USCALED => plain([16, 0, 0, 0], Uscaled),
        vk::Format::R16_SSCALED => plain([16, 0, 0, 0], Sscaled),
        vk::Format::R16_UINT => plain([16, 0, 0, 0], Uint),
        vk::Format::R16_SINT => plain([16, 0, 0, 0], Sint),
        vk::Format::R16_SFLOAT => plain([16, 0, 0, 0], Float),

        vk::Format::R8G8B8_UNORM | vk::Format::B8G8R8_UNORM => plain([8, 8, 8, 0], Unorm),
        vk::Format::R8G8B8_SNORM | vk::Format::B8G8R8_SNORM => plain([8, 8, 8, 0], Snorm),
        vk::Format::R8G8B8_USCALED | vk::Format::B8G8R8_USCALED => plain([8, 8, 8, 0], Uscaled),
        vk::Format::R8G8B8_SSCALED | vk::Format::B8G8R8_SSCALED => plain([8, 8, 8, 0], Sscaled),
        vk::Format::R8G8B8_UINT | vk::Format::B8G8R8_UINT => plain([8, 8, 8, 0], Uint),
        vk::Format::R8G8B8_SINT | vk::Format::B8G8R8_SINT => plain([8, 8, 8, 0], Sint),
        vk::Format::R8G8B8_SRGB | vk::Format::B8G8R8_SRGB => srgb([8, 8, 8, 0]),

        vk::Format::R8G8B8A8_UNORM
        | vk::Format::B8G8R8A8_UNORM
        | vk::Format::A8B8G8R8_UNORM_PACK32 => {
            plain([8, 8, 8, 8], Unorm)
        }
        vk::Format::R8G8B8A8_SNORM
        | vk::Format::B8G8R8A8_SNORM
        | vk::Format::A8B8G8R8_SNORM_PACK32 => {
            plain([8, 8, 8, 8], Snorm)
        }
        vk::Format::R8G8B8A8_USCALED
        | vk::Format::B8G8R8A8_USCALED
        | vk::Format::A8B8G8R8_USCALED_PACK32 => {
            plain([8, 8, 8, 8], Uscaled)
        }
        vk::Format::R8G8B8A8_SSCALED
        | vk::Format::B8G8R8A8_SSCALED
        | vk::Format::A8B8G8R8_SSCALED_PACK32 => {
            plain([8, 8, 8, 8], Sscaled)
        }
        vk::Format::R8G8B8A8_UINT
        | vk::Format::B8G8R8A8_UINT
        | vk::Format::A8B8G8R8_UINT_PACK32 => {
            plain([8, 8, 8, 8], Uint)
        }
        vk::Format::R8G8B8A8_SINT
        | vk::Format::B8G8R8A8_SINT
        | vk::Format::A8B8G8R8_SINT_PACK32 => {
            plain([8, 8, 8, 8], Sint)
        }
        vk::Format::R8G8B8A8_SRGB
        | vk::Format::B8G8R8A8_SRGB
        | vk::Format::A8B8G8R8_SRGB_PACK32 => {
            srgb([8, 8, 8, 8])
        }

        vk::Format::A2R10G10B10_UNORM_PACK32 | vk::Format::A2B10G10R10_UNORM_PACK32 => {
            plain([10, 10, 10, 2], Unorm)
        }
        vk::Format::A2R10G10B10_SNORM_PACK32 | vk::Format::A2B10G10R10_SNORM_PACK32 => {
            plain([10, 10, 10, 2], Snorm)
        }
        vk::Format::A2R10G10B10_USCALED_PACK32 | vk::Format::A2B10G10R10_USCALED_PACK32 => {
            plain([10, 10, 10, 2], Uscaled)
        }
        vk::Format::A2R10G10B10_SSCALED_PACK32 | vk::Format::A2B10G10R10_SSCALED_PACK32 => {
            plain([10, 10, 10, 2], Sscaled)
        }
        vk::Format::A2R10G10B10_UINT_PACK32 | vk::Format::A2B10G10R10_UINT_PACK32 => {
            plain([10, 10, 10, 2], Uint)
        }
        vk::Format::A2R10G10B10_SINT_PACK32 | vk::Format::A2B10G10R10_SINT_PACK32 => {
            plain([10, 10, 10, 2], Sint)
        }

        vk::Format::R16G16_UNORM => plain([16, 16, 0, 0], Unorm),
        vk::Format::R16G16_SNORM => plain([16, 16, 0, 0], Snorm),
        vk::Format::R16G16_USCALED => plain([16, 16, 0, 0], Uscaled),
        vk::Format::R16G16_SSCALED => plain([16, 16, 0, 0], Sscaled),
        vk::Format::R16G16_UINT => plain([16, 16, 0, 0], Uint),
        vk::Format::R16G16_SINT => plain([16, 16, 0, 0], Sint),
        vk::Format::R16G16_SFLOAT => plain([16, 16, 0, 0], Float),

        vk::Format::R32_UINT => plain([32, 0, 0, 0], Uint),
        vk::Format::R32_SINT => plain([32, 0, 0, 0], Sint),
        vk::Format::R32_SFLOAT => plain([32, 0, 0, 0], Float),
        vk::Format::B10G11R11_UFLOAT_PACK32 => plain([11, 11, 10, 0], Float),
        // shared exponent in the top five bits
        vk::Format::E5B9G9R9_UFLOAT_PACK32 => plain([9, 9, 9, 5], Float),

        vk::Format::R16G16B16_UNORM => plain([16, 16, 16, 0], Unorm),
        vk::Format::R16G16B16_SNORM => plain([16, 16, 16, 0], Snorm),
        vk::Format::R16G16B16_USCALED => plain([16, 16, 16, 0], Uscaled),
        vk::Format::R16G16B16_SSCALED => plain([16, 16, 16, 0], Sscaled),
        vk::Format::R16G16B16_UINT => plain([16, 16, 16, 0], Uint),
        vk::Format::R16G16B16_SINT => plain([16, 16, 16, 0], Sint),
        vk::Format::R16G16B16_SFLOAT => plain([16, 16, 16, 0], Float),

        vk::Format::R16G16B16A16_UNORM => plain([16, 16, 16, 16], Unorm),
        vk::Format::R16G16B16A16_SNORM => plain([16, 16, 16, 16], Snorm),
        vk::Format::R16G16B16A16_USCALED => plain([16, 16, 16, 16], Uscaled),
        vk::Format::R16G16B16A16_SSCALED => plain([16, 16, 16, 16], Sscaled),
        vk::Format::R16G16B16A16_UINT => plain([16, 16, 16, 16], Uint),
        vk::Format::R16G16B16A16_SINT => plain([16, 16, 16, 16], Sint),
        vk::Format::R16G16B16A16_SFLOAT => plain([16, 16, 16, 16], Float),

        vk::Format::R32G32_UINT => plain([32, 32, 0, 0], Uint),
        vk::Format::R32G32_SINT => plain([32, 32, 0, 0], Sint),
        vk::Format::R32G32_SFLOAT => plain([32, 32, 0, 0], Float),
        vk::Format::R32G32B32_UINT => plain([32, 32, 32, 0], Uint),
        vk::Format::R32G32B32_SINT => plain([32, 32, 32, 0], Sint),
        vk::Format::R32G32B32_SFLOAT => plain([32, 32, 32, 0], Float),
        vk::Format::R32G32B32A32_UINT => plain([32, 32, 32, 32], Uint),
        vk::Format::R32G32B32A32_SINT => plain([32, 32, 32, 32], Sint),
        vk::Format::R32G32B32A32_SFLOAT => plain([32, 32, 32, 32], Float),

        vk::Format::D16_UNORM => depth_stencil(16, 0, 0, Unorm),
        vk::Format::X8_D24_UNORM_PACK32 => depth_stencil(24, 0, 8, Unorm),
        vk::Format::D32_SFLOAT => depth_stencil(32, 0, 0, Float),
        vk::Format::S8_UINT => depth_stencil(0, 8, 0, Uint),
        vk::Format::D16_UNORM_S8_UINT => depth_stencil(16, 8, 0, Unorm),
        vk::Format::D24_UNORM_S8_UINT => depth_stencil(24, 8, 0, Unorm),
        vk::Format::D32_SFLOAT_S8_UINT => depth_stencil(32, 8, 24, Float),

        vk::Format::ETC2_R8G8B8_UNORM_BLOCK => compressed(4, 4, 64, 3, Unorm, false),
        vk::Format::ETC2_R8G8B8_SRGB_BLOCK => compressed(4, 4, 64, 3, Unorm, true),
        vk::Format::ETC2_R8G8B8A1_UNORM_BLOCK => compressed(4, 4, 64, 4, Unorm, false),
        vk::Format::ETC2_R8G8B8A1_SRGB_BLOCK => compressed(4, 4, 64, 4, Unorm, true),
        vk::Format::ETC2_R8G8B8A8_UNORM_BLOCK => compressed(4, 4, 128, 4, Unorm, false),
        vk::Format::ETC2_R8G8B8A8_SRGB_BLOCK => compressed(4, 4, 128, 4, Unorm, true),
        vk::Format::EAC_R11_UNORM_BLOCK => compressed(4, 4, 64, 1, Unorm, false),
        vk::Format::EAC_R11_SNORM_BLOCK => compressed(4, 4, 64, 1, Snorm, false),
        vk::Format::EAC_R11G11_UNORM_BLOCK => compressed(4, 4, 128, 2, Unorm, false),
        vk::Format::EAC_R11G11_SNORM_BLOCK => compressed(4, 4, 128, 2, Snorm, false),

        vk::Format::BC1_RGB_UNORM_BLOCK => compressed(4, 4, 64, 3, Unorm, false),
        vk::Format::BC1_RGB_SRGB_BLOCK => compressed(4, 4, 64, 3, Unorm, true),
        vk::Format::BC1_RGBA_UNORM_BLOCK => compressed(4, 4, 64, 4, Unorm, false),
        vk::Format::BC1_RGBA_SRGB_BLOCK => compressed(4, 4, 64, 4, Unorm, true),
        vk::Format::BC2_UNORM_BLOCK => compressed(4, 4, 128, 4, Unorm, false),
        vk::Format::BC2_SRGB_BLOCK => compressed(4, 4, 128, 4, Unorm, true),
        vk::Format::BC3_UNORM_BLOCK => compressed(4, 4, 128, 4, Unorm, false),
        vk::Format::BC3_SRGB_BLOCK => compressed(4, 4, 128, 4, Unorm, true),
        vk::Format::BC4_UNORM_BLOCK => compressed(4, 4, 64, 1, Unorm, false),
        vk::Format::BC4_SNORM_BLOCK => compressed(4, 4, 64, 1, Snorm, false),
        vk::Format::BC5_UNORM_BLOCK => compressed(4, 4, 128, 2, Unorm, false),
        vk::Format::BC5_SNORM_BLOCK => compressed(4, 4, 128, 2, Snorm, false),
        vk::Format::BC6H_UFLOAT_BLOCK | vk::Format::BC6H_SFLOAT_BLOCK => {
            compressed(4, 4, 128, 3, Float, false)
        }
        vk::Format::BC7_UNORM_BLOCK => compressed(4, 4, 128, 4, Unorm, false),
        vk::Format::BC7_SRGB_BLOCK => compressed(4, 4, 128, 4, Unorm, true),

        vk::Format::G8B8G8R8_422_UNORM | vk::Format::B8G8R8G8_422_UNORM => {
            yuv(LayoutKind::Subsampled, 2, 32)
        }
        vk::Format::G8_B8R8_2PLANE_420_UNORM => yuv(LayoutKind::Planar2, 1, 8),
        vk::Format::G8_B8_R8_3PLANE_420_UNORM => yuv(LayoutKind::Planar3, 1, 8),

        other => return astc!(other,
            ASTC_4X4_UNORM_BLOCK, ASTC_4X4_SRGB_BLOCK => 4 x 4,
            ASTC_5X4_UNORM_BLOCK, ASTC_5X4_SRGB_BLOCK => 5 x 4,
            ASTC_5X5_UNORM_BLOCK, ASTC_5X5_SRGB_BLOCK => 5 x 5,
            ASTC_6X5_UNORM_BLOCK, ASTC_6X5_SRGB_BLOCK => 6 x 5,
            ASTC_6X6_UNORM_BLOCK, ASTC_6X6_SRGB_BLOCK => 6 x 6,
            ASTC_8X5_UNORM_BLOCK, ASTC_8X5_SRGB_BLOCK => 8 x 5,
            ASTC_8X6_UNORM_BLOCK, ASTC_8X6_SRGB_BLOCK => 8 x 6,
            ASTC_8X8_UNORM_BLOCK, ASTC_8X8_SRGB_BLOCK => 8 x 8,
            ASTC_10X5_UNORM_BLOCK, ASTC_10X5_SRGB_BLOCK => 10 x 5,
            ASTC_10X6_UNORM_BLOCK, ASTC_10X6_SRGB_BLOCK => 10 x 6,
            ASTC_10X8_UNORM_BLOCK, ASTC_10X8_SRGB_BLOCK => 10 x 8,
            ASTC_10X10_UNORM_BLOCK, ASTC_10X10_SRGB_BLOCK => 10 x 10,
            ASTC_12X10_UNORM_BLOCK, ASTC_12X10_SRGB_BLOCK => 12 x 10,
            ASTC_12X12_UNORM_BLOCK, ASTC_12X12_SRGB_BLOCK => 12 x 12,
        ),
    };
    Some(desc)
}

impl FormatDescriptor {
    pub fn is_power_of_two_block(&self) -> bool {
        // zero counts as a power of two
        (self.block_bits & self.block_bits.wrapping_sub(1)) == 0
    }

    pub fn is_pure_integer(&self) -> bool {
        matches!(self.numeric, NumericKind::Uint | NumericKind::Sint)
    }

    pub fn is_snorm(&self) -> bool {
        matches!(self.numeric, NumericKind::Snorm)
    }

    pub fn has_depth(&self) -> bool {
        self.depth_bits != 0
    }

    pub fn has_stencil(&self) -> bool {
        self.stencil_bits != 0
    }

    pub fn is_depth_or_stencil(&self) -> bool {
        self.has_depth() || self.has_stencil()
    }

    pub fn is_compressed(&self) -> bool {
        self.layout == LayoutKind::BlockCompressed
    }

    pub fn is_subsampled_or_planar(&self) -> bool {
        matches!(
            self.layout,
            LayoutKind::Subsampled | LayoutKind::Planar2 | LayoutKind::Planar3
        )
    }
}

pub fn is_power_of_two_block(format: vk::Format) -> bool {
    classify(format).map_or(false, |d| d.is_power_of_two_block())
}

pub fn is_pure_integer(format: vk::Format) -> bool {
    classify(format).map_or(false, |d| d.is_pure_integer())
}

pub fn is_depth(format: vk::Format) -> bool {
    classify(format).map_or(false, |d| d.has_depth())
}

pub fn is_stencil(format: vk::Format) -> bool {
    classify(format).map_or(false, |d| d.has_stencil())
}

pub fn is_depth_or_stencil(format: vk::Format) -> bool {
    classify(format).map_or(false, |d| d.is_depth_or_stencil())
}

pub fn layout_kind(format: vk::Format) -> Option<LayoutKind> {
    classify(format).map(|d| d.layout)
}

/// Number of memory planes an image of `format` uses.
pub fn plane_count(format: vk::Format) -> u32 {
    match format {
        vk::Format::G8_B8R8_2PLANE_420_UNORM | vk::Format::D32_SFLOAT_S8_UINT => 2,
        vk::Format::G8_B8_R8_3PLANE_420_UNORM => 3,
        _ => 1,
    }
}

/// Whether the hardware can store `format` in a tiled layout.
pub fn tiling_possible(format: vk::Format) -> bool {
    !matches!(
        format,
        vk::Format::G8B8G8R8_422_UNORM
            | vk::Format::B8G8R8G8_422_UNORM
            | vk::Format::G8_B8R8_2PLANE_420_UNORM
            | vk::Format::G8_B8_R8_3PLANE_420_UNORM
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_sizes() {
        assert_eq!(classify(vk::Format::R8G8B8A8_UNORM).unwrap().block_bits, 32);
        assert_eq!(classify(vk::Format::R5G6B5_UNORM_PACK16).unwrap().block_bits, 16);
        assert_eq!(classify(vk::Format::R16G16B16_SFLOAT).unwrap().block_bits, 48);
        assert_eq!(classify(vk::Format::D32_SFLOAT_S8_UINT).unwrap().block_bits, 64);
        let astc = classify(vk::Format::ASTC_10X8_SRGB_BLOCK).unwrap();
        assert_eq!(astc.block_bits, 128);
        assert_eq!((astc.block_width, astc.block_height), (10, 8));
        assert!(astc.srgb && astc.is_compressed());
    }

    #[test]
    fn power_of_two_detection() {
        assert!(is_power_of_two_block(vk::Format::R32G32B32A32_SFLOAT));
        assert!(is_power_of_two_block(vk::Format::A1R5G5B5_UNORM_PACK16));
        assert!(!is_power_of_two_block(vk::Format::R8G8B8_UNORM));
        assert!(!is_power_of_two_block(vk::Format::R32G32B32_UINT));
        assert!(!is_power_of_two_block(vk::Format::UNDEFINED));
    }

    #[test]
    fn depth_stencil_facts() {
        assert!(is_depth(vk::Format::X8_D24_UNORM_PACK32));
        assert!(!is_stencil(vk::Format::X8_D24_UNORM_PACK32));
        assert!(is_stencil(vk::Format::S8_UINT));
        assert!(!is_depth(vk::Format::S8_UINT));
        assert!(is_depth_or_stencil(vk::Format::D24_UNORM_S8_UINT));
        assert!(!is_depth_or_stencil(vk::Format::R32_SFLOAT));
    }

    #[test]
    fn pure_integer_excludes_scaled_and_packed_depth() {
        assert!(is_pure_integer(vk::Format::R32_UINT));
        assert!(is_pure_integer(vk::Format::S8_UINT));
        assert!(!is_pure_integer(vk::Format::R8_USCALED));
        assert!(!is_pure_integer(vk::Format::D24_UNORM_S8_UINT));
    }

    #[test]
    fn yuv_layouts() {
        assert_eq!(layout_kind(vk::Format::G8B8G8R8_422_UNORM), Some(LayoutKind::Subsampled));
        assert_eq!(layout_kind(vk::Format::B8G8R8G8_422_UNORM), Some(LayoutKind::Subsampled));
        assert_eq!(layout_kind(vk::Format::G8_B8R8_2PLANE_420_UNORM), Some(LayoutKind::Planar2));
        assert_eq!(layout_kind(vk::Format::G8_B8_R8_3PLANE_420_UNORM), Some(LayoutKind::Planar3));
        assert_eq!(plane_count(vk::Format::G8_B8_R8_3PLANE_420_UNORM), 3);
        assert!(!tiling_possible(vk::Format::G8_B8R8_2PLANE_420_UNORM));
        assert!(tiling_possible(vk::Format::R8G8B8A8_UNORM));
    }

    #[test]
    fn shared_exponent_is_a_plain_layout() {
        let desc = classify(vk::Format::E5B9G9R9_UFLOAT_PACK32).unwrap();
        assert_eq!(desc.layout, LayoutKind::Plain);
        assert_eq!(desc.block_bits, 32);
        assert!(!desc.is_compressed());
        assert!(desc.is_power_of_two_block());
    }

    #[test]
    fn unknown_formats_have_no_descriptor() {
        assert!(classify(vk::Format::UNDEFINED).is_none());
        assert!(classify(vk::Format::R64_SFLOAT).is_none());
        assert!(classify(vk::Format::from_raw(0x7fff_0000)).is_none());
    }
}

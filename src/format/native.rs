use bitflags::bitflags;

#[cfg(feature = "a6xx-serde")]
use serde::{Deserialize, Serialize};

/// a6xx numeric format code as programmed into RB_MRT/SP_TEX/VFD registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "a6xx-serde", derive(Serialize, Deserialize))]
pub struct Fmt6(pub u8);

pub const FMT6_8_UNORM: Fmt6 = Fmt6(0x03);
pub const FMT6_8_SNORM: Fmt6 = Fmt6(0x04);
pub const FMT6_8_UINT: Fmt6 = Fmt6(0x05);
pub const FMT6_8_SINT: Fmt6 = Fmt6(0x06);
pub const FMT6_4_4_4_4_UNORM: Fmt6 = Fmt6(0x08);
pub const FMT6_5_5_5_1_UNORM: Fmt6 = Fmt6(0x0a);
pub const FMT6_1_5_5_5_UNORM: Fmt6 = Fmt6(0x0c);
pub const FMT6_5_6_5_UNORM: Fmt6 = Fmt6(0x0e);
pub const FMT6_8_8_UNORM: Fmt6 = Fmt6(0x0f);
pub const FMT6_8_8_SNORM: Fmt6 = Fmt6(0x10);
pub const FMT6_8_8_UINT: Fmt6 = Fmt6(0x11);
pub const FMT6_8_8_SINT: Fmt6 = Fmt6(0x12);
pub const FMT6_16_UNORM: Fmt6 = Fmt6(0x15);
pub const FMT6_16_SNORM: Fmt6 = Fmt6(0x16);
pub const FMT6_16_FLOAT: Fmt6 = Fmt6(0x17);
pub const FMT6_16_UINT: Fmt6 = Fmt6(0x18);
pub const FMT6_16_SINT: Fmt6 = Fmt6(0x19);
pub const FMT6_8_8_8_UNORM: Fmt6 = Fmt6(0x21);
pub const FMT6_8_8_8_SNORM: Fmt6 = Fmt6(0x22);
pub const FMT6_8_8_8_UINT: Fmt6 = Fmt6(0x23);
pub const FMT6_8_8_8_SINT: Fmt6 = Fmt6(0x24);
pub const FMT6_8_8_8_8_UNORM: Fmt6 = Fmt6(0x30);
pub const FMT6_8_8_8_8_SNORM: Fmt6 = Fmt6(0x32);
pub const FMT6_8_8_8_8_UINT: Fmt6 = Fmt6(0x33);
pub const FMT6_8_8_8_8_SINT: Fmt6 = Fmt6(0x34);
pub const FMT6_9_9_9_E5_FLOAT: Fmt6 = Fmt6(0x35);
pub const FMT6_10_10_10_2_UNORM: Fmt6 = Fmt6(0x36);
pub const FMT6_10_10_10_2_SNORM: Fmt6 = Fmt6(0x39);
pub const FMT6_10_10_10_2_UINT: Fmt6 = Fmt6(0x3a);
pub const FMT6_10_10_10_2_SINT: Fmt6 = Fmt6(0x3b);
pub const FMT6_11_11_10_FLOAT: Fmt6 = Fmt6(0x42);
pub const FMT6_16_16_UNORM: Fmt6 = Fmt6(0x43);
pub const FMT6_16_16_SNORM: Fmt6 = Fmt6(0x44);
pub const FMT6_16_16_FLOAT: Fmt6 = Fmt6(0x45);
pub const FMT6_16_16_UINT: Fmt6 = Fmt6(0x46);
pub const FMT6_16_16_SINT: Fmt6 = Fmt6(0x47);
pub const FMT6_32_FLOAT: Fmt6 = Fmt6(0x4a);
pub const FMT6_32_UINT: Fmt6 = Fmt6(0x4b);
pub const FMT6_32_SINT: Fmt6 = Fmt6(0x4c);
pub const FMT6_16_16_16_UNORM: Fmt6 = Fmt6(0x58);
pub const FMT6_16_16_16_SNORM: Fmt6 = Fmt6(0x59);
pub const FMT6_16_16_16_FLOAT: Fmt6 = Fmt6(0x5a);
pub const FMT6_16_16_16_UINT: Fmt6 = Fmt6(0x5b);
pub const FMT6_16_16_16_SINT: Fmt6 = Fmt6(0x5c);
pub const FMT6_16_16_16_16_UNORM: Fmt6 = Fmt6(0x60);
pub const FMT6_16_16_16_16_SNORM: Fmt6 = Fmt6(0x61);
pub const FMT6_16_16_16_16_FLOAT: Fmt6 = Fmt6(0x62);
pub const FMT6_16_16_16_16_UINT: Fmt6 = Fmt6(0x63);
pub const FMT6_16_16_16_16_SINT: Fmt6 = Fmt6(0x64);
pub const FMT6_32_32_FLOAT: Fmt6 = Fmt6(0x67);
pub const FMT6_32_32_UINT: Fmt6 = Fmt6(0x68);
pub const FMT6_32_32_SINT: Fmt6 = Fmt6(0x69);
pub const FMT6_32_32_32_FLOAT: Fmt6 = Fmt6(0x72);
pub const FMT6_32_32_32_UINT: Fmt6 = Fmt6(0x73);
pub const FMT6_32_32_32_SINT: Fmt6 = Fmt6(0x74);
pub const FMT6_32_32_32_32_FLOAT: Fmt6 = Fmt6(0x82);
pub const FMT6_32_32_32_32_UINT: Fmt6 = Fmt6(0x83);
pub const FMT6_32_32_32_32_SINT: Fmt6 = Fmt6(0x84);
pub const FMT6_R8G8R8B8_422_UNORM: Fmt6 = Fmt6(0x8e);
pub const FMT6_G8R8B8R8_422_UNORM: Fmt6 = Fmt6(0x8f);
pub const FMT6_R8_G8B8_2PLANE_420_UNORM: Fmt6 = Fmt6(0x90);
pub const FMT6_R8_G8_B8_3PLANE_420_UNORM: Fmt6 = Fmt6(0x91);
pub const FMT6_X8Z24_UNORM: Fmt6 = Fmt6(0xa0);
pub const FMT6_Z24_UNORM_S8_UINT: Fmt6 = Fmt6(0xa1);
pub const FMT6_ETC2_RG11_UNORM: Fmt6 = Fmt6(0xab);
pub const FMT6_ETC2_RG11_SNORM: Fmt6 = Fmt6(0xac);
pub const FMT6_ETC2_R11_UNORM: Fmt6 = Fmt6(0xad);
pub const FMT6_ETC2_R11_SNORM: Fmt6 = Fmt6(0xae);
pub const FMT6_ETC2_RGB8: Fmt6 = Fmt6(0xb0);
pub const FMT6_ETC2_RGBA8: Fmt6 = Fmt6(0xb1);
pub const FMT6_ETC2_RGB8A1: Fmt6 = Fmt6(0xb2);
pub const FMT6_DXT1: Fmt6 = Fmt6(0xb3);
pub const FMT6_DXT3: Fmt6 = Fmt6(0xb4);
pub const FMT6_DXT5: Fmt6 = Fmt6(0xb5);
pub const FMT6_RGTC1_UNORM: Fmt6 = Fmt6(0xb7);
pub const FMT6_RGTC1_SNORM: Fmt6 = Fmt6(0xb8);
pub const FMT6_RGTC2_UNORM: Fmt6 = Fmt6(0xbb);
pub const FMT6_RGTC2_SNORM: Fmt6 = Fmt6(0xbc);
pub const FMT6_BPTC_UFLOAT: Fmt6 = Fmt6(0xbe);
pub const FMT6_BPTC_FLOAT: Fmt6 = Fmt6(0xbf);
pub const FMT6_BPTC: Fmt6 = Fmt6(0xc0);
pub const FMT6_ASTC_4X4: Fmt6 = Fmt6(0xc1);
pub const FMT6_ASTC_5X4: Fmt6 = Fmt6(0xc2);
pub const FMT6_ASTC_5X5: Fmt6 = Fmt6(0xc3);
pub const FMT6_ASTC_6X5: Fmt6 = Fmt6(0xc4);
pub const FMT6_ASTC_6X6: Fmt6 = Fmt6(0xc5);
pub const FMT6_ASTC_8X5: Fmt6 = Fmt6(0xc6);
pub const FMT6_ASTC_8X6: Fmt6 = Fmt6(0xc7);
pub const FMT6_ASTC_8X8: Fmt6 = Fmt6(0xc8);
pub const FMT6_ASTC_10X5: Fmt6 = Fmt6(0xc9);
pub const FMT6_ASTC_10X6: Fmt6 = Fmt6(0xca);
pub const FMT6_ASTC_10X8: Fmt6 = Fmt6(0xcb);
pub const FMT6_ASTC_10X10: Fmt6 = Fmt6(0xcc);
pub const FMT6_ASTC_12X10: Fmt6 = Fmt6(0xcd);
pub const FMT6_ASTC_12X12: Fmt6 = Fmt6(0xce);

/// Component swap applied between memory order and the shader's RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "a6xx-serde", derive(Serialize, Deserialize))]
pub enum ColorSwap {
    #[default]
    Wzyx = 0,
    Wxyz = 1,
    Zyxw = 2,
    Xyzw = 3,
}

/// Surface tile mode used when picking a color or texture encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "a6xx-serde", derive(Serialize, Deserialize))]
pub enum TileMode {
    #[default]
    Linear,
    Tiled,
    /// Tiled with UBWC bandwidth compression.
    Ubwc,
}

impl TileMode {
    pub fn is_tiled(self) -> bool {
        !matches!(self, TileMode::Linear)
    }
}

/// Hardware block that consumes an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "a6xx-serde", derive(Serialize, Deserialize))]
pub enum PipelineStage {
    Vertex,
    Color,
    Texture,
}

/// A format as one pipeline stage of the GPU sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "a6xx-serde", derive(Serialize, Deserialize))]
pub struct NativeFormatEncoding {
    pub fmt: Fmt6,
    pub swap: ColorSwap,
}

/// RB_DEPTH_BUFFER_INFO format encodings.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "a6xx-serde", derive(Serialize, Deserialize))]
pub enum DepthFormat {
    D16 = 1,
    D24_8 = 2,
    D32 = 4,
}

bitflags! {
    /// Stages a format table row can be used by.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FormatSupport: u8 {
        const VERTEX  = 0x1;
        const TEXTURE = 0x2;
        const COLOR   = 0x4;
    }
}

impl From<PipelineStage> for FormatSupport {
    fn from(stage: PipelineStage) -> Self {
        match stage {
            PipelineStage::Vertex => FormatSupport::VERTEX,
            PipelineStage::Color => FormatSupport::COLOR,
            PipelineStage::Texture => FormatSupport::TEXTURE,
        }
    }
}

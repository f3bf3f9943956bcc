//! Hardware view of `vk::Format`: encodings per pipeline stage and the
//! classification facts the capability rules are written against.

pub mod classify;
pub mod native;
pub mod table;

pub use classify::{
    classify, is_depth, is_depth_or_stencil, is_pure_integer, is_power_of_two_block, is_stencil,
    layout_kind, plane_count, tiling_possible, FormatDescriptor, LayoutKind, NumericKind,
};
pub use native::{
    ColorSwap, DepthFormat, Fmt6, FormatSupport, NativeFormatEncoding, PipelineStage, TileMode,
};
pub use table::{
    color_format, color_supported, depth_format, known_formats, lookup, texture_format,
    texture_supported, vertex_format, vertex_supported,
};

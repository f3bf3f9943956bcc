use ash::vk;
use std::fmt;

/// Recoverable "this configuration is not supported" outcomes.
///
/// Callers are expected to try other configurations when they see one of
/// these. Inputs outside the documented domain (unknown image types, unknown
/// tilings, missing required inputs) are contract violations and panic
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    FormatNotSupported {
        format: vk::Format,
        tiling: vk::ImageTiling,
    },
    ImageTypeNotSupported {
        format: vk::Format,
        image_type: vk::ImageType,
    },
    UsageNotSupported {
        format: vk::Format,
        usage: vk::ImageUsageFlags,
    },
    ModifierNotSupported {
        format: vk::Format,
        modifier: u64,
    },
    ExternalHandleNotSupported {
        handle_type: vk::ExternalMemoryHandleTypeFlags,
        image_type: vk::ImageType,
    },
}

/// Convenient crate-wide result type.
pub type Result<T, E = FormatError> = std::result::Result<T, E>;

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotSupported { format, tiling } => {
                write!(f, "{:?} has no features with {:?} tiling", format, tiling)
            }
            FormatError::ImageTypeNotSupported { format, image_type } => {
                write!(f, "{:?} unsupported for {:?}", format, image_type)
            }
            FormatError::UsageNotSupported { format, usage } => {
                write!(f, "{:?} does not support usage {:?}", format, usage)
            }
            FormatError::ModifierNotSupported { format, modifier } => {
                write!(f, "{:?} unsupported with DRM modifier 0x{:x}", format, modifier)
            }
            FormatError::ExternalHandleNotSupported {
                handle_type,
                image_type,
            } => write!(
                f,
                "VkExternalMemoryTypeFlagBits(0x{:x}) unsupported for {:?}",
                handle_type.as_raw(),
                image_type
            ),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for vk::Result {
    fn from(_: FormatError) -> Self {
        vk::Result::ERROR_FORMAT_NOT_SUPPORTED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_reports_format_not_supported() {
        let errors = [
            FormatError::FormatNotSupported {
                format: vk::Format::R8_UNORM,
                tiling: vk::ImageTiling::LINEAR,
            },
            FormatError::ModifierNotSupported {
                format: vk::Format::R8_UNORM,
                modifier: 7,
            },
            FormatError::ExternalHandleNotSupported {
                handle_type: vk::ExternalMemoryHandleTypeFlags::OPAQUE_WIN32,
                image_type: vk::ImageType::TYPE_2D,
            },
        ];
        for err in errors {
            assert_eq!(vk::Result::from(err), vk::Result::ERROR_FORMAT_NOT_SUPPORTED);
        }
    }

    #[test]
    fn external_handle_message_names_the_bit() {
        let err = FormatError::ExternalHandleNotSupported {
            handle_type: vk::ExternalMemoryHandleTypeFlags::HOST_MAPPED_FOREIGN_MEMORY_EXT,
            image_type: vk::ImageType::TYPE_3D,
        };
        assert!(err.to_string().contains("0x100"));
    }
}

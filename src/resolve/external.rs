use crate::error::{FormatError, Result};
use crate::structs::ExternalMemoryCapability;
use ash::vk;

type H = vk::ExternalMemoryHandleTypeFlags;
type M = vk::ExternalMemoryFeatureFlags;

const SHAREABLE: H = H::from_raw(H::OPAQUE_FD.as_raw() | H::DMA_BUF_EXT.as_raw());

fn host_import() -> ExternalMemoryCapability {
    ExternalMemoryCapability {
        features: M::IMPORTABLE,
        export_from_imported_handle_types: H::empty(),
        compatible_handle_types: H::HOST_ALLOCATION_EXT,
    }
}

/// External memory support for an image of `image_type`.
pub fn resolve_external_image(
    handle_type: H,
    image_type: vk::ImageType,
) -> Result<ExternalMemoryCapability> {
    let unsupported = FormatError::ExternalHandleNotSupported {
        handle_type,
        image_type,
    };

    if handle_type == H::OPAQUE_FD || handle_type == H::DMA_BUF_EXT {
        if image_type != vk::ImageType::TYPE_2D {
            log::debug!("{}", unsupported);
            return Err(unsupported);
        }
        return Ok(ExternalMemoryCapability {
            features: M::DEDICATED_ONLY | M::EXPORTABLE | M::IMPORTABLE,
            export_from_imported_handle_types: SHAREABLE,
            compatible_handle_types: SHAREABLE,
        });
    }

    if handle_type == H::HOST_ALLOCATION_EXT {
        return Ok(host_import());
    }

    log::debug!("{}", unsupported);
    Err(unsupported)
}

/// External memory support for buffers. Unknown handle kinds yield an
/// empty capability.
pub fn resolve_external_buffer(handle_type: H) -> ExternalMemoryCapability {
    if handle_type == H::OPAQUE_FD || handle_type == H::DMA_BUF_EXT {
        ExternalMemoryCapability {
            features: M::EXPORTABLE | M::IMPORTABLE,
            export_from_imported_handle_types: SHAREABLE,
            compatible_handle_types: SHAREABLE,
        }
    } else if handle_type == H::HOST_ALLOCATION_EXT {
        host_import()
    } else {
        ExternalMemoryCapability::default()
    }
}

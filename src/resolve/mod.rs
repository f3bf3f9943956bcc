//! Capability resolution: format features, image limits and external
//! memory support.

pub mod external;
pub mod features;
pub mod limits;
pub mod ubwc;

pub use external::{resolve_external_buffer, resolve_external_image};
pub use features::{resolve_features, FormatFacts};
pub use limits::{resolve_limits, ResolvedImageFormat, MAX_RESOURCE_SIZE};
pub use ubwc::ubwc_possible;

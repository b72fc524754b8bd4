//! Declaration-graph data model for the autowire analysis engine.
//!
//! The host analysis engine builds these descriptors from whatever symbol
//! source it owns; the extractor and validator in `autowire-analyze` read
//! them and nothing else. Everything here is a plain, serde-capable value
//! so graphs can also be shipped as JSON (see `autowire-cli`).

pub mod name;
pub mod node;
pub mod types;

/// Maximum length for a single qualified-name segment.
pub const MAX_SEGMENT_LEN: usize = 128;

/// Marker family consumed by the metadata extractor.
pub const SERVICE_MARKER: &str = "AutoRegister";

/// Marker family consumed by the structural validator.
pub const OPTIONS_MARKER: &str = "AutoRegisterOptions";

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        DeclError, OPTIONS_MARKER, SERVICE_MARKER,
        name::{Namespace, QualName},
        node::*,
        types::{Access, DeclKind},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// DeclError
/// Raised only while building the model; the analysis operations
/// themselves are total over well-formed declarations.
///

#[derive(Debug, ThisError)]
pub enum DeclError {
    #[error("qualified name cannot be empty")]
    EmptyName,

    #[error("qualified name '{0}' has an empty segment")]
    EmptySegment(String),

    #[error("qualified name segment '{0}' exceeds max length {MAX_SEGMENT_LEN}")]
    SegmentTooLong(String),
}

//! Service-registration metadata engine.
//!
//! Two independent checks over a host-supplied declaration graph:
//! - the metadata extractor (`extract`) classifies declarations carrying
//!   the service marker and produces a [`descriptor::ServiceDescriptor`]
//!   per registrable type, consumed downstream by a registration emitter;
//! - the structural validator (`options`) enforces the immutability rule
//!   on options-marker declarations, reporting through a
//!   [`diagnostic::DiagnosticSink`].
//!
//! Both are pure, synchronous functions of a single declaration; hosts may
//! run them concurrently across declarations without synchronization.

pub mod descriptor;
pub mod diagnostic;
pub mod extract;
pub mod lifetime;
pub mod options;
pub mod pass;

pub use autowire_decl::{OPTIONS_MARKER, SERVICE_MARKER};

/// Namespace token used when a declaration sits in the global namespace.
pub const ROOT_NAMESPACE: &str = "Global";

/// Contract simple name excluded from inference. Registering a service
/// under a disposal-only contract is never useful; this is the one
/// special case of the naming-based candidate filter.
pub const DISPOSAL_CONTRACT: &str = "IDisposable";

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        DISPOSAL_CONTRACT, ROOT_NAMESPACE,
        descriptor::ServiceDescriptor,
        diagnostic::{Diagnostic, DiagnosticSink, RuleId, Severity},
        extract::try_extract,
        lifetime::Lifetime,
        options::check_options,
        pass::run_pass,
    };
    pub use autowire_decl::prelude::*;
}

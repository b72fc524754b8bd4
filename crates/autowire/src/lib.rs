//! ## Crate layout
//! - `decl`: declaration-graph data model the host builds and hands over.
//! - `analyze`: metadata extractor, structural validator, and pass driver.
//!
//! The `prelude` module mirrors the surface a host embedding the engine
//! uses: construct a [`decl::node::DeclGraph`], call
//! [`analyze::pass::run_pass`] with a diagnostic sink, hand the returned
//! descriptors to your registration emitter.

pub use autowire_analyze as analyze;
pub use autowire_decl as decl;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::analyze::{
        DISPOSAL_CONTRACT, ROOT_NAMESPACE,
        descriptor::ServiceDescriptor,
        diagnostic::{Diagnostic, DiagnosticSink, RuleId, Severity},
        extract::try_extract,
        lifetime::Lifetime,
        options::check_options,
        pass::run_pass,
    };
    pub use crate::decl::prelude::*;
}

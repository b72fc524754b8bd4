use crate::prelude::*;
use derive_more::{Deref, DerefMut};

///
/// DeclGraph
/// Ordered collection of declarations for one analysis pass. Order is
/// host-supplied and preserved; the analysis itself has no ordering
/// dependency between declarations.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, Deserialize, Serialize)]
pub struct DeclGraph {
    pub decls: Vec<TypeDecl>,
}

impl DeclGraph {
    #[must_use]
    pub const fn new(decls: Vec<TypeDecl>) -> Self {
        Self { decls }
    }
}

mod decl;
mod graph;
mod marker;

pub use decl::*;
pub use graph::*;
pub use marker::*;

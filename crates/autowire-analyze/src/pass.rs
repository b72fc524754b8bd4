//! Single-pass driver over a declaration graph.

use crate::prelude::*;

/// Run both checks over the graph in declaration order.
///
/// The extractor and the validator are independent and share no state;
/// this driver exists so hosts without their own walker get one
/// deterministic pass. Descriptors are returned, diagnostics go straight
/// to the sink.
pub fn run_pass(graph: &DeclGraph, sink: &mut impl DiagnosticSink) -> Vec<ServiceDescriptor> {
    let mut descriptors = Vec::new();

    for decl in graph.iter() {
        if let Some(marker) = decl.marker(SERVICE_MARKER)
            && let Some(descriptor) = try_extract(decl, &marker.args)
        {
            descriptors.push(descriptor);
        }

        if let Some(diagnostic) = check_options(decl) {
            sink.report(diagnostic);
        }
    }

    descriptors
}

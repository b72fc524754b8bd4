//! Listing renderers for analysis output.

use autowire::prelude::*;
use std::{collections::BTreeMap, fmt::Write};

///
/// Report
///

pub struct Report {
    pub text: String,
    pub has_errors: bool,
}

/// Full pass: descriptor listing grouped by namespace, then diagnostics.
pub fn analyze(graph: &DeclGraph) -> Report {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let descriptors = run_pass(graph, &mut diagnostics);

    let mut text = render_descriptors(&descriptors);
    text.push_str(&render_diagnostics(&diagnostics));

    Report {
        text,
        has_errors: has_errors(&diagnostics),
    }
}

/// Validator-only pass.
pub fn check(graph: &DeclGraph) -> Report {
    let diagnostics: Vec<Diagnostic> = graph.iter().filter_map(check_options).collect();

    Report {
        text: render_diagnostics(&diagnostics),
        has_errors: has_errors(&diagnostics),
    }
}

fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(|d| d.severity == Severity::Error)
}

// Grouped by namespace, matching how the registration emitter groups its
// output.
fn render_descriptors(descriptors: &[ServiceDescriptor]) -> String {
    if descriptors.is_empty() {
        return "no registrable services\n".to_string();
    }

    let mut by_namespace: BTreeMap<&str, Vec<&ServiceDescriptor>> = BTreeMap::new();
    for descriptor in descriptors {
        by_namespace
            .entry(descriptor.namespace.as_str())
            .or_default()
            .push(descriptor);
    }

    let mut out = String::new();
    for (namespace, group) in by_namespace {
        let _ = writeln!(out, "namespace {namespace}");

        for descriptor in group {
            let target = match (&descriptor.contract, descriptor.register_self) {
                (Some(contract), true) => format!("{contract} (+self)"),
                (Some(contract), false) => contract.to_string(),
                (None, _) => "self".to_string(),
            };

            let lifetime = descriptor.lifetime.to_string();
            let _ = writeln!(
                out,
                "  {lifetime:<9} {} => {}",
                descriptor.implementation, target
            );
        }
    }

    out
}

fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();

    for diagnostic in diagnostics {
        let _ = writeln!(
            out,
            "{}[{}] {}:{}: {}",
            diagnostic.severity,
            diagnostic.rule.as_str(),
            diagnostic.span.file,
            diagnostic.span.start,
            diagnostic.message()
        );
    }

    out
}

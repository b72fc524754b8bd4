//! Structural validation for auto-register options declarations.

use crate::prelude::*;

/// Enforce the immutability constraint on options-marker declarations.
///
/// Options types bound from configuration must be readonly value types so
/// bound values cannot be mutated after construction. Declarations without
/// the options marker are not checked; a valid declaration produces no
/// diagnostic.
#[must_use]
pub fn check_options(decl: &TypeDecl) -> Option<Diagnostic> {
    decl.marker(OPTIONS_MARKER)?;

    if decl.kind.is_value_type() && decl.is_readonly {
        return None;
    }

    Some(Diagnostic::new(
        RuleId::ReadonlyRecordRequired,
        decl.span.clone(),
        vec![decl.simple_name().to_string()],
    ))
}

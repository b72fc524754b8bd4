//! Metadata extraction for declarations carrying the service marker.

use crate::prelude::*;

#[cfg(test)]
mod tests;

/// Compute registration metadata for one declaration and the argument
/// payload of its service marker.
///
/// Registration must target concrete, closed, externally visible types;
/// everything else is excluded silently, as is a declaration that yields
/// neither a contract nor a self-registration. Exclusion is the contract
/// here, never a failure.
#[must_use]
pub fn try_extract(decl: &TypeDecl, args: &MarkerArgs) -> Option<ServiceDescriptor> {
    // Eligibility gate.
    if decl.is_abstract || decl.generic_arity > 0 || !decl.access.is_public() {
        return None;
    }

    // Positional #0 carries the lifetime ordinal; anything unreadable
    // falls back to the Scoped default.
    let lifetime = args
        .positional(0)
        .and_then(ArgValue::as_int)
        .and_then(Lifetime::from_ordinal)
        .unwrap_or_default();

    // An explicit `As` contract takes precedence over inference.
    let explicit = args.named("As").and_then(ArgValue::as_type_ref);

    let register_self = args
        .named("AsSelf")
        .and_then(ArgValue::as_bool)
        .unwrap_or(false);

    let contract = match explicit {
        Some(name) => Some(name.clone()),
        None => infer_contract(decl).cloned(),
    };

    // Nothing meaningful to register under.
    if contract.is_none() && !register_self {
        return None;
    }

    Some(ServiceDescriptor {
        lifetime,
        implementation: decl.name.clone(),
        contract,
        register_self,
        namespace: decl
            .namespace
            .as_ref()
            .map_or_else(|| ROOT_NAMESPACE.to_string(), ToString::to_string),
    })
}

/// Narrow the implemented-contract list to a single inference candidate.
///
/// Zero and multiple survivors both yield `None`; ambiguity maps to
/// absence rather than an arbitrary pick.
fn infer_contract(decl: &TypeDecl) -> Option<&QualName> {
    let candidates: Vec<&ContractRef> = decl
        .contracts
        .iter()
        .filter(|c| is_inference_candidate(c))
        .collect();

    match candidates.as_slice() {
        [only] => Some(&only.name),
        _ => None,
    }
}

fn is_inference_candidate(contract: &ContractRef) -> bool {
    contract.access.is_public()
        && contract.generic_arity == 0
        && contract.name.simple_name() != DISPOSAL_CONTRACT
}

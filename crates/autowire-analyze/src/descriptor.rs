use crate::prelude::*;

///
/// ServiceDescriptor
/// The facts a registration emitter needs for one concrete service.
/// Produced fresh per eligible declaration and consumed immediately;
/// never carries both `contract: None` and `register_self: false`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ServiceDescriptor {
    pub lifetime: Lifetime,

    /// Fully-qualified identity of the concrete implementation type.
    pub implementation: QualName,

    /// Contract the implementation is registered under; absent only for
    /// self-only registrations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<QualName>,

    /// Also (or exclusively) register under the implementation's own
    /// identity.
    #[serde(default)]
    pub register_self: bool,

    /// Namespace grouping for the generated registration code; the root
    /// token for global-namespace declarations.
    pub namespace: String,
}

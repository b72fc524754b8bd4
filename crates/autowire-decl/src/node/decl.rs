use crate::prelude::*;

///
/// NameSpan
/// Location of a declaration's name token within its source file.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct NameSpan {
    pub file: String,
    pub start: u32,
    pub len: u32,
}

///
/// ContractRef
/// An implemented contract (interface) as seen from a declaration. The
/// host supplies direct and transitive contracts in a deterministic order.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ContractRef {
    pub name: QualName,
    pub access: Access,

    #[serde(default)]
    pub generic_arity: u32,
}

///
/// TypeDecl
/// Read-only descriptor of one type declaration. This is the entire
/// surface the analysis engine sees; there is no back-channel to the
/// host's symbol source.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TypeDecl {
    pub name: QualName,
    pub kind: DeclKind,
    pub access: Access,

    #[serde(default)]
    pub is_abstract: bool,

    #[serde(default)]
    pub is_readonly: bool,

    #[serde(default)]
    pub generic_arity: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<Namespace>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contracts: Vec<ContractRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<Marker>,

    #[serde(default)]
    pub span: NameSpan,
}

impl TypeDecl {
    /// First attached marker whose family simple name matches. The host
    /// guarantees at most one marker per family.
    #[must_use]
    pub fn marker(&self, family: &str) -> Option<&Marker> {
        self.markers
            .iter()
            .find(|m| m.family.simple_name() == family)
    }

    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.name.simple_name()
    }
}

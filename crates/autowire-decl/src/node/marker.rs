use crate::prelude::*;

///
/// ArgValue
/// Typed marker-argument value. No dynamically-typed payloads; every
/// consumer decodes the kind it expects and falls back to a default.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ArgValue {
    Bool(bool),
    Int(i64),
    TypeRef(QualName),
}

impl ArgValue {
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_type_ref(&self) -> Option<&QualName> {
        match self {
            Self::TypeRef(v) => Some(v),
            _ => None,
        }
    }
}

///
/// NamedArg
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NamedArg {
    pub name: String,
    pub value: ArgValue,
}

///
/// MarkerArgs
/// Ordered positional values plus named values as supplied on one marker
/// instance. A positional slot may be present-but-absent (skipped argument).
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MarkerArgs {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub positional: Vec<Option<ArgValue>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub named: Vec<NamedArg>,
}

impl MarkerArgs {
    /// Positional argument at `index`, if supplied.
    #[must_use]
    pub fn positional(&self, index: usize) -> Option<&ArgValue> {
        self.positional.get(index).and_then(Option::as_ref)
    }

    /// Named argument lookup, case-sensitive.
    ///
    /// The marker contract disallows duplicate names; if a host produces
    /// them anyway, the first occurrence wins.
    #[must_use]
    pub fn named(&self, name: &str) -> Option<&ArgValue> {
        self.named
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| &arg.value)
    }
}

///
/// Marker
/// One declarative annotation instance attached to a declaration.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Marker {
    pub family: QualName,

    #[serde(default)]
    pub args: MarkerArgs,
}

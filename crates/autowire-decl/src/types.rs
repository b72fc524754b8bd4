use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// Access
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum Access {
    Internal,
    Private,
    Protected,
    Public,
}

impl Access {
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

///
/// DeclKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum DeclKind {
    Class,
    Record,
    RecordStruct,
    Struct,
}

impl DeclKind {
    /// Whether the declaration has value semantics.
    #[must_use]
    pub const fn is_value_type(self) -> bool {
        matches!(self, Self::RecordStruct | Self::Struct)
    }
}

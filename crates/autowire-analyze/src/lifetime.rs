use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// Lifetime
/// Scope policy under which a registered service instance is shared.
/// Variant order matches the marker's positional ordinal encoding.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize,
)]
pub enum Lifetime {
    Singleton,

    // Scoped is the conservative default: no accidental process-wide
    // sharing, no per-resolution churn.
    #[default]
    Scoped,

    Transient,
}

impl Lifetime {
    /// Decode a marker ordinal; unknown ordinals yield `None` so callers
    /// fall back to the default instead of erroring.
    #[must_use]
    pub const fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Singleton),
            1 => Some(Self::Scoped),
            2 => Some(Self::Transient),
            _ => None,
        }
    }

    #[must_use]
    pub const fn ordinal(self) -> i64 {
        match self {
            Self::Singleton => 0,
            Self::Scoped => 1,
            Self::Transient => 2,
        }
    }
}

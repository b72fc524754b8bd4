use crate::{DeclError, MAX_SEGMENT_LEN};
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};

///
/// QualName
/// Fully-qualified dotted identity of a declaration or contract.
///

#[derive(
    Clone, Debug, Deref, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct QualName(String);

impl QualName {
    pub fn parse(s: &str) -> Result<Self, DeclError> {
        validate_segments(s)?;

        Ok(Self(s.to_string()))
    }

    /// Last segment of the qualified name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

///
/// Namespace
/// Dotted namespace path; a declaration without one sits in the global
/// namespace and carries `None` instead.
///

#[derive(
    Clone, Debug, Deref, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct Namespace(String);

impl Namespace {
    pub fn parse(s: &str) -> Result<Self, DeclError> {
        validate_segments(s)?;

        Ok(Self(s.to_string()))
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

// Shared segment validation for names and namespaces.
fn validate_segments(s: &str) -> Result<(), DeclError> {
    if s.is_empty() {
        return Err(DeclError::EmptyName);
    }

    for segment in s.split('.') {
        if segment.trim().is_empty() {
            return Err(DeclError::EmptySegment(s.to_string()));
        }
        if segment.len() > MAX_SEGMENT_LEN {
            return Err(DeclError::SegmentTooLong(segment.to_string()));
        }
    }

    Ok(())
}

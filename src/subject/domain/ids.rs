//! Identifier type for subjects.

use super::SubjectDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned positive identifier of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct SubjectId(u64);

impl SubjectId {
    /// Identifier handed out to the first subject of an empty store.
    pub const FIRST: Self = Self(1);

    /// Creates a validated subject identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectDomainError::InvalidSubjectId`] when the value is
    /// zero.
    pub const fn new(value: u64) -> Result<Self, SubjectDomainError> {
        if value == 0 {
            return Err(SubjectDomainError::InvalidSubjectId(value));
        }
        Ok(Self(value))
    }

    /// Returns the identifier following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for SubjectId {
    type Error = SubjectDomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SubjectId> for u64 {
    fn from(id: SubjectId) -> Self {
        id.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

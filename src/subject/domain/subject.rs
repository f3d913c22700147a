//! Subject record and the inputs used to create and update it.

use super::{SubjectDomainError, SubjectId};
use serde::{Deserialize, Serialize};

/// Subject reference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    #[serde(rename = "Id")]
    id: SubjectId,
    name: String,
    color: String,
    icon: String,
}

/// Caller-supplied fields of a new subject.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubjectDraft {
    /// Display label, also the name tasks refer to.
    pub name: String,
    /// Display colour token.
    pub color: String,
    /// Display icon token.
    pub icon: String,
}

impl SubjectDraft {
    /// Creates a draft.
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }
}

/// Partial update merged into an existing subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubjectPatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement colour token.
    pub color: Option<String>,
    /// Replacement icon token.
    pub icon: Option<String>,
}

impl SubjectPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the colour token.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the icon token.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Parameter object for reconstructing a stored subject.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistedSubjectData {
    /// Persisted identifier.
    #[serde(rename = "Id")]
    pub id: SubjectId,
    /// Persisted name.
    pub name: String,
    /// Persisted colour token.
    pub color: String,
    /// Persisted icon token.
    pub icon: String,
}

impl Subject {
    /// Creates a subject from a draft.
    #[must_use]
    pub fn create(id: SubjectId, draft: SubjectDraft) -> Self {
        Self {
            id,
            name: draft.name,
            color: draft.color,
            icon: draft.icon,
        }
    }

    /// Reconstructs a subject from stored data.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectDomainError::EmptyName`] when the stored name is
    /// blank.
    pub fn from_persisted(data: PersistedSubjectData) -> Result<Self, SubjectDomainError> {
        if data.name.trim().is_empty() {
            return Err(SubjectDomainError::EmptyName);
        }
        Ok(Self {
            id: data.id,
            name: data.name,
            color: data.color,
            icon: data.icon,
        })
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> SubjectId {
        self.id
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the colour token.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the icon token.
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Merges a partial update into the subject.
    pub fn apply(&mut self, patch: SubjectPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
    }
}

//! Display decoration of tasks by subject.

use super::Subject;

/// Colour used when a task names no known subject.
pub const DEFAULT_SUBJECT_COLOR: &str = "#6B7280";

/// Icon used when a task names no known subject.
pub const DEFAULT_SUBJECT_ICON: &str = "BookOpen";

/// Colour and icon shown next to a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectDecoration {
    color: String,
    icon: String,
}

impl Default for SubjectDecoration {
    fn default() -> Self {
        Self {
            color: DEFAULT_SUBJECT_COLOR.to_owned(),
            icon: DEFAULT_SUBJECT_ICON.to_owned(),
        }
    }
}

impl SubjectDecoration {
    /// Looks up `name` among `subjects` by exact match, falling back to the
    /// default decoration for orphaned names.
    #[must_use]
    pub fn resolve(subjects: &[Subject], name: &str) -> Self {
        subjects
            .iter()
            .find(|subject| subject.name() == name)
            .map_or_else(Self::default, Self::from)
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
}

impl From<&Subject> for SubjectDecoration {
    fn from(subject: &Subject) -> Self {
        Self {
            color: subject.color().to_owned(),
            icon: subject.icon().to_owned(),
        }
    }
}

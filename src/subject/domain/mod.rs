//! Domain model for subjects.

mod decoration;
mod error;
mod ids;
mod subject;

pub use decoration::{DEFAULT_SUBJECT_COLOR, DEFAULT_SUBJECT_ICON, SubjectDecoration};
pub use error::SubjectDomainError;
pub use ids::SubjectId;
pub use subject::{PersistedSubjectData, Subject, SubjectDraft, SubjectPatch};

//! Port contracts for the subject store.

pub mod repository;

pub use repository::{SubjectRepository, SubjectRepositoryError, SubjectRepositoryResult};

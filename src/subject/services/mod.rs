//! Application services for subject management.

mod catalog;

pub use catalog::{
    CreateSubjectRequest, SubjectService, SubjectServiceError, SubjectServiceResult,
};

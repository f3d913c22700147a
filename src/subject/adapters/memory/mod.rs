//! In-memory subject storage.

mod subject;

pub use subject::InMemorySubjectRepository;

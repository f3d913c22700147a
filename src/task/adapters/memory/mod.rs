//! In-memory task storage.

mod task;

pub use task::InMemoryTaskRepository;

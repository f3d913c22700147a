//! Storage adapters for the task module.
//!
//! - [`memory::InMemoryTaskRepository`]: process-local store, optionally
//!   seeded with the bundled dataset and slowed by simulated latency

pub mod memory;

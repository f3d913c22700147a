//! Storage adapters for the subject module.

pub mod memory;

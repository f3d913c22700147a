//! Studyflow: academic task tracking core.
//!
//! This crate provides the storage contracts, in-memory stores, and the
//! filtering, sorting, and statistics logic behind a study planner where
//! tasks are tagged with a subject, a priority, and a due date.
//!
//! # Architecture
//!
//! Studyflow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for record storage
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//! - **Services**: Validation, change notification, and dashboard queries
//!
//! # Modules
//!
//! - [`task`]: Task records, filtering, sorting, statistics, and calendar views
//! - [`subject`]: Subject reference data used to decorate tasks
//! - [`events`]: Change notification feed shared by both services
//! - [`config`]: Environment-driven store configuration
//! - [`latency`]: Simulated store latency
//! - [`seed`]: Bundled seed dataset

pub mod config;
pub mod events;
pub mod latency;
pub mod seed;
pub mod subject;
pub mod task;

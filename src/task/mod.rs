//! Study task tracking.
//!
//! Tasks are created, updated, completed, and deleted through the
//! [`ports::TaskRepository`] contract. Read-side views (filtered lists,
//! summary counts, calendar grids) are pure computations in [`query`]. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Read-side computations in [`query`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod query;
pub mod services;

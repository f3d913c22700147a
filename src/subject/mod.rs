//! Subject reference data.
//!
//! Subjects carry the display colour and icon used to decorate tasks. Tasks
//! refer to subjects by name only; deleting a subject leaves those names in
//! place as plain text. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

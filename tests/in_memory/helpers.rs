//! Shared fixtures for in-memory store integration tests.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use rstest::fixture;
use studyflow::{
    subject::{adapters::memory::InMemorySubjectRepository, services::SubjectService},
    task::{adapters::memory::InMemoryTaskRepository, services::TaskService},
};

pub use crate::test_helpers::{FixedClock, reference_now};

/// Task store wired to a fixed clock.
pub type TestTaskRepository = InMemoryTaskRepository<FixedClock>;

/// Task service wired to a fixed clock.
pub type TestTaskService = TaskService<TestTaskRepository, FixedClock>;

/// Subject service over the in-memory catalogue.
pub type TestSubjectService = SubjectService<InMemorySubjectRepository>;

/// Provides the shared fixed clock.
#[fixture]
pub fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::default())
}

/// Provides a task service over an empty store.
#[fixture]
pub fn empty_tasks(clock: Arc<FixedClock>) -> TestTaskService {
    let repository = InMemoryTaskRepository::new(Arc::clone(&clock));
    TaskService::new(Arc::new(repository), clock)
}

/// Provides a task service over the bundled seed tasks.
///
/// # Errors
///
/// Returns an error if the bundled dataset cannot be loaded.
#[fixture]
pub fn seeded_tasks(clock: Arc<FixedClock>) -> Result<TestTaskService, eyre::Report> {
    let repository = InMemoryTaskRepository::seeded(Arc::clone(&clock))?;
    Ok(TaskService::new(Arc::new(repository), clock))
}

/// Provides a subject service over the bundled seed subjects.
///
/// # Errors
///
/// Returns an error if the bundled dataset cannot be loaded.
#[fixture]
pub fn seeded_subjects() -> Result<TestSubjectService, eyre::Report> {
    let repository = InMemorySubjectRepository::seeded()?;
    Ok(SubjectService::new(Arc::new(repository)))
}

/// Returns the reference instant shifted by whole days.
pub fn days_from_now(days: i64) -> DateTime<Utc> {
    reference_now() + TimeDelta::days(days)
}

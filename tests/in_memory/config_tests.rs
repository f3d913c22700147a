//! Integration tests for environment-driven store configuration.

use std::sync::Arc;
use std::time::Duration;

use super::helpers::{FixedClock, clock};
use crate::test_helpers::EnvVarGuard;
use rstest::rstest;
use studyflow::{
    config::{ENV_EVENT_CAPACITY, ENV_SIMULATED_LATENCY, ENV_SKIP_SEED, StoreConfig},
    latency::StoreOperation,
    subject::{adapters::memory::InMemorySubjectRepository, services::SubjectService},
    task::{adapters::memory::InMemoryTaskRepository, services::TaskService},
};

#[rstest]
fn unset_environment_uses_defaults() {
    let _guard = EnvVarGuard::set_many(&[
        (ENV_SIMULATED_LATENCY, None),
        (ENV_SKIP_SEED, None),
        (ENV_EVENT_CAPACITY, None),
    ]);

    let config = StoreConfig::from_env();

    assert_eq!(config, StoreConfig::default());
    assert!(config.seeds());
    assert!(!config.simulates_latency());
}

#[rstest]
fn environment_overrides_are_applied() {
    let _guard = EnvVarGuard::set_many(&[
        (ENV_SIMULATED_LATENCY, Some("true")),
        (ENV_SKIP_SEED, Some("1")),
        (ENV_EVENT_CAPACITY, Some("8")),
    ]);

    let config = StoreConfig::from_env();

    assert!(config.simulates_latency());
    assert!(!config.seeds());
    assert_eq!(config.event_capacity(), 8);
    assert_eq!(
        config.task_latency().delay_for(StoreOperation::GetAll),
        Duration::from_millis(300)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn skipping_the_seed_starts_both_stores_empty(clock: Arc<FixedClock>) -> eyre::Result<()> {
    let config = StoreConfig::default().with_seed(false);

    let tasks = InMemoryTaskRepository::from_config(Arc::clone(&clock), &config)?;
    let service = TaskService::from_config(Arc::new(tasks), clock, &config);
    let subjects = InMemorySubjectRepository::from_config(&config)?;

    eyre::ensure!(service.list_tasks().await?.is_empty(), "task store should be empty");
    let subject_service = SubjectService::new(Arc::new(subjects));
    eyre::ensure!(
        subject_service.list_subjects().await?.is_empty(),
        "subject store should be empty"
    );
    Ok(())
}

//! Store configuration.
//!
//! Configuration is read from environment variables:
//!
//! - `STUDYFLOW_SIMULATED_LATENCY`: `true` or `1` enables simulated latency
//! - `STUDYFLOW_SKIP_SEED`: `true` or `1` starts the stores empty
//! - `STUDYFLOW_EVENT_CAPACITY`: buffer size of the change notification feed

use crate::latency::LatencyProfile;
use tracing::{debug, warn};

/// Environment variable enabling simulated store latency.
pub const ENV_SIMULATED_LATENCY: &str = "STUDYFLOW_SIMULATED_LATENCY";

/// Environment variable disabling the bundled seed data.
pub const ENV_SKIP_SEED: &str = "STUDYFLOW_SKIP_SEED";

/// Environment variable overriding the change notification capacity.
pub const ENV_EVENT_CAPACITY: &str = "STUDYFLOW_EVENT_CAPACITY";

/// Default buffer size of each change notification feed.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Configuration shared by the task and subject stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    simulate_latency: bool,
    seed: bool,
    event_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            simulate_latency: false,
            seed: true,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl StoreConfig {
    /// Creates a configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates a configuration from an arbitrary key lookup.
    ///
    /// Missing keys keep their defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let simulate_latency = lookup(ENV_SIMULATED_LATENCY)
            .map_or(defaults.simulate_latency, |value| is_truthy(&value));
        let seed = lookup(ENV_SKIP_SEED).map_or(defaults.seed, |value| !is_truthy(&value));
        let event_capacity = lookup(ENV_EVENT_CAPACITY).map_or(defaults.event_capacity, |raw| {
            parse_capacity(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "Ignoring invalid {ENV_EVENT_CAPACITY}");
                defaults.event_capacity
            })
        });

        debug!(simulate_latency, seed, event_capacity, "Store configuration loaded");
        Self {
            simulate_latency,
            seed,
            event_capacity,
        }
    }

    /// Enables or disables simulated latency.
    #[must_use]
    pub const fn with_simulated_latency(mut self, enabled: bool) -> Self {
        self.simulate_latency = enabled;
        self
    }

    /// Enables or disables loading the bundled seed data.
    #[must_use]
    pub const fn with_seed(mut self, enabled: bool) -> Self {
        self.seed = enabled;
        self
    }

    /// Sets the change notification capacity. Zero is raised to one.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity.max(1);
        self
    }

    /// Returns whether simulated latency is enabled.
    #[must_use]
    pub const fn simulates_latency(&self) -> bool {
        self.simulate_latency
    }

    /// Returns whether stores start with the bundled seed data.
    #[must_use]
    pub const fn seeds(&self) -> bool {
        self.seed
    }

    /// Returns the change notification capacity.
    #[must_use]
    pub const fn event_capacity(&self) -> usize {
        self.event_capacity
    }

    /// Latency profile for the task store.
    #[must_use]
    pub const fn task_latency(&self) -> LatencyProfile {
        if self.simulate_latency {
            LatencyProfile::simulated_tasks()
        } else {
            LatencyProfile::none()
        }
    }

    /// Latency profile for the subject store.
    #[must_use]
    pub const fn subject_latency(&self) -> LatencyProfile {
        if self.simulate_latency {
            LatencyProfile::simulated_subjects()
        } else {
            LatencyProfile::none()
        }
    }
}

fn is_truthy(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.eq_ignore_ascii_case("true") || trimmed == "1"
}

fn parse_capacity(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|capacity| *capacity > 0)
}

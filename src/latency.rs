//! Simulated store latency.
//!
//! The in-memory stores can pause before resolving each operation so that
//! callers exercise their loading states. The pause happens before the store
//! state is touched, so every mutation still runs as a single locked step.

use std::time::Duration;

/// Store operation kinds that carry a latency budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    /// Listing every record.
    GetAll,
    /// Looking up a single record.
    GetById,
    /// Creating a record.
    Create,
    /// Merging a partial update into a record.
    Update,
    /// Removing a record.
    Delete,
    /// Marking a task complete.
    MarkComplete,
}

impl StoreOperation {
    /// Returns the operation name used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetAll => "get_all",
            Self::GetById => "get_by_id",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::MarkComplete => "mark_complete",
        }
    }
}

/// Per-operation latency budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LatencyProfile {
    get_all: Duration,
    get_by_id: Duration,
    create: Duration,
    update: Duration,
    delete: Duration,
    mark_complete: Duration,
}

impl LatencyProfile {
    /// Profile that resolves every operation immediately.
    #[must_use]
    pub const fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }

    /// Profile applying the same delay to every operation.
    #[must_use]
    pub const fn uniform(delay: Duration) -> Self {
        Self {
            get_all: delay,
            get_by_id: delay,
            create: delay,
            update: delay,
            delete: delay,
            mark_complete: delay,
        }
    }

    /// Delays used by the task store when simulation is enabled.
    #[must_use]
    pub const fn simulated_tasks() -> Self {
        Self {
            get_all: Duration::from_millis(300),
            get_by_id: Duration::from_millis(200),
            create: Duration::from_millis(400),
            update: Duration::from_millis(300),
            delete: Duration::from_millis(250),
            mark_complete: Duration::from_millis(200),
        }
    }

    /// Delays used by the subject store when simulation is enabled.
    #[must_use]
    pub const fn simulated_subjects() -> Self {
        Self {
            get_all: Duration::from_millis(200),
            get_by_id: Duration::from_millis(150),
            create: Duration::from_millis(300),
            update: Duration::from_millis(250),
            delete: Duration::from_millis(200),
            mark_complete: Duration::ZERO,
        }
    }

    /// Returns the delay configured for an operation.
    #[must_use]
    pub const fn delay_for(&self, operation: StoreOperation) -> Duration {
        match operation {
            StoreOperation::GetAll => self.get_all,
            StoreOperation::GetById => self.get_by_id,
            StoreOperation::Create => self.create,
            StoreOperation::Update => self.update,
            StoreOperation::Delete => self.delete,
            StoreOperation::MarkComplete => self.mark_complete,
        }
    }

    /// Returns `true` when no operation is delayed.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        *self == Self::none()
    }

    /// Waits for the delay configured for `operation`.
    pub async fn pause(&self, operation: StoreOperation) {
        let delay = self.delay_for(operation);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

//! Change notification feed.
//!
//! Services publish one event per successful mutation so that every open
//! view can refresh from a single source instead of re-querying the store
//! after each of its own calls. Publishing never fails: when nobody is
//! subscribed the event is dropped.

use tokio::sync::broadcast;
use tracing::warn;

/// Kind of mutation carried by a [`ChangeEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// A record was created.
    Created,
    /// A record was updated.
    Updated,
    /// A task was marked complete.
    Completed,
    /// A record was deleted.
    Deleted,
}

impl ChangeKind {
    /// Returns the kind as a log-friendly string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Completed => "completed",
            Self::Deleted => "deleted",
        }
    }
}

/// A mutation applied to a store, with the affected record after the change
/// (or the removed record for deletions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent<T> {
    kind: ChangeKind,
    record: T,
}

impl<T> ChangeEvent<T> {
    /// Creates an event.
    #[must_use]
    pub const fn new(kind: ChangeKind, record: T) -> Self {
        Self { kind, record }
    }

    /// Returns the mutation kind.
    #[must_use]
    pub const fn kind(&self) -> ChangeKind {
        self.kind
    }

    /// Returns the affected record.
    #[must_use]
    pub const fn record(&self) -> &T {
        &self.record
    }

    /// Consumes the event, returning the affected record.
    #[must_use]
    pub fn into_record(self) -> T {
        self.record
    }
}

/// Broadcast feed of [`ChangeEvent`]s.
#[derive(Debug, Clone)]
pub struct ChangeFeed<T> {
    sender: broadcast::Sender<ChangeEvent<T>>,
}

impl<T: Clone> ChangeFeed<T> {
    /// Creates a feed buffering up to `capacity` events per subscriber.
    ///
    /// A zero capacity is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribes to events published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent<T>> {
        self.sender.subscribe()
    }

    /// Returns the number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publishes an event to every subscriber.
    pub fn publish(&self, kind: ChangeKind, record: T) {
        if self.sender.send(ChangeEvent::new(kind, record)).is_err() {
            warn!(kind = kind.as_str(), "Dropped change event with no subscribers");
        }
    }
}

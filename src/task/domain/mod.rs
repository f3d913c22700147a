//! Domain model for study task tracking.
//!
//! Tasks carry a title, a loose subject reference (matched by name), a due
//! timestamp, and a priority. The domain enforces that a task is completed
//! exactly when it carries a completion timestamp; storage concerns stay
//! outside of the domain boundary.

mod due;
mod error;
mod ids;
mod priority;
mod task;

pub use due::{DueStatus, calendar_day};
pub use error::{ParsePriorityError, TaskDomainError};
pub use ids::TaskId;
pub use priority::Priority;
pub use task::{PersistedTaskData, Task, TaskDraft, TaskPatch};

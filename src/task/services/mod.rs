//! Application services for task tracking.

mod tasks;

pub use tasks::{CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult};

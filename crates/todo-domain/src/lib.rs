pub mod commands;
pub mod operations;
pub mod store;
pub mod task;

pub use operations::TaskOperations;
pub use store::TaskStore;
pub use task::{EditTaskData, Task, TaskId, TaskIdAllocator};

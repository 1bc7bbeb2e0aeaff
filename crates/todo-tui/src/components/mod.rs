pub mod header;
pub mod item_wrapper;
pub mod popup;
pub mod task_item;
pub mod tasks_list;
pub mod todo_input;

pub use header::*;
pub use item_wrapper::*;
pub use popup::*;
pub use task_item::{RowState, TaskItem};
pub use tasks_list::TasksList;
pub use todo_input::TodoInput;

use crate::{Task, TaskId};
use todo_core::TodoResult;

/// Operations every owner of the task collection supports.
/// Unknown ids are accepted and leave the collection untouched.
pub trait TaskOperations {
    fn add_task(&mut self, title: String) -> TodoResult<Task>;
    fn toggle_task_done(&mut self, id: TaskId) -> TodoResult<()>;
    fn edit_task(&mut self, id: TaskId, new_title: String) -> TodoResult<()>;
    fn remove_task(&mut self, id: TaskId) -> TodoResult<()>;

    fn list_tasks(&self) -> &[Task];
    fn get_task(&self, id: TaskId) -> Option<&Task>;
    fn task_count(&self) -> usize;
}

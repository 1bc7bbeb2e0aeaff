use super::{Command, CommandContext};
use crate::{Task, TaskId};
use todo_core::{TodoError, TodoResult};

/// Append a new task, rejecting titles that already exist (exact match)
pub struct AddTask {
    pub title: String,
}

impl Command for AddTask {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<bool> {
        if context.tasks.iter().any(|t| t.title == self.title) {
            return Err(TodoError::DuplicateTitle(self.title.clone()));
        }
        let task = Task::new(context.ids, self.title.clone());
        context.tasks.push(task);
        Ok(true)
    }

    fn description(&self) -> String {
        format!("Add task: '{}'", self.title)
    }
}

/// Flip the done flag of a task
pub struct ToggleTaskDone {
    pub task_id: TaskId,
}

impl Command for ToggleTaskDone {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<bool> {
        match context.tasks.iter_mut().find(|t| t.id == self.task_id) {
            Some(task) => {
                task.toggle_done();
                Ok(true)
            }
            None => {
                tracing::debug!("Toggle ignored, no task {}", self.task_id);
                Ok(false)
            }
        }
    }

    fn description(&self) -> String {
        format!("Toggle task {}", self.task_id)
    }
}

/// Replace the title of a task. Titles are not re-validated here.
pub struct EditTask {
    pub task_id: TaskId,
    pub new_title: String,
}

impl Command for EditTask {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<bool> {
        match context.tasks.iter_mut().find(|t| t.id == self.task_id) {
            Some(task) => {
                task.update_title(self.new_title.clone());
                Ok(true)
            }
            None => {
                tracing::debug!("Edit ignored, no task {}", self.task_id);
                Ok(false)
            }
        }
    }

    fn description(&self) -> String {
        format!("Edit task {}: '{}'", self.task_id, self.new_title)
    }
}

/// Drop a task from the collection
pub struct RemoveTask {
    pub task_id: TaskId,
}

impl Command for RemoveTask {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<bool> {
        let before = context.tasks.len();
        context.tasks.retain(|t| t.id != self.task_id);
        let removed = context.tasks.len() != before;
        if !removed {
            tracing::debug!("Remove ignored, no task {}", self.task_id);
        }
        Ok(removed)
    }

    fn description(&self) -> String {
        format!("Remove task {}", self.task_id)
    }
}

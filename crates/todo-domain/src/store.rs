use crate::commands::{AddTask, Command, CommandContext, EditTask, RemoveTask, ToggleTaskDone};
use crate::{Task, TaskId, TaskIdAllocator, TaskOperations};
use todo_core::{TodoError, TodoResult};

/// Owns the task collection and funnels every mutation through a command.
///
/// Each command that changes the collection bumps `revision` and raises
/// `needs_refresh`; the rendering layer drains the flag with
/// [`TaskStore::take_refresh`] and recomputes the visible list. Rejected
/// commands and commands aimed at unknown ids do not request a refresh.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    ids: TaskIdAllocator,
    revision: u64,
    needs_refresh: bool,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute(&mut self, command: Box<dyn Command>) -> TodoResult<()> {
        let description = command.description();
        tracing::debug!("Executing: {}", description);

        let mut context = CommandContext {
            tasks: &mut self.tasks,
            ids: &mut self.ids,
        };
        if command.execute(&mut context)? {
            self.revision += 1;
            self.needs_refresh = true;
        }
        Ok(())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn needs_refresh(&self) -> bool {
        self.needs_refresh
    }

    /// Returns whether a refresh was pending and clears the flag.
    pub fn take_refresh(&mut self) -> bool {
        std::mem::take(&mut self.needs_refresh)
    }
}

impl TaskOperations for TaskStore {
    fn add_task(&mut self, title: String) -> TodoResult<Task> {
        self.execute(Box::new(AddTask { title }))?;
        self.tasks
            .last()
            .cloned()
            .ok_or_else(|| TodoError::NotFound("task just added".to_string()))
    }

    fn toggle_task_done(&mut self, id: TaskId) -> TodoResult<()> {
        self.execute(Box::new(ToggleTaskDone { task_id: id }))
    }

    fn edit_task(&mut self, id: TaskId, new_title: String) -> TodoResult<()> {
        self.execute(Box::new(EditTask {
            task_id: id,
            new_title,
        }))
    }

    fn remove_task(&mut self, id: TaskId) -> TodoResult<()> {
        self.execute(Box::new(RemoveTask { task_id: id }))
    }

    fn list_tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

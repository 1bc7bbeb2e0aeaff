use todo_core::TodoResult;

pub mod task_commands;

pub use task_commands::*;

/// Trait for domain commands that mutate the task collection
pub trait Command: Send + Sync {
    /// Execute this command against the collection.
    /// Returns whether the collection was changed.
    fn execute(&self, context: &mut CommandContext) -> TodoResult<bool>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Mutable view over the collection handed to commands
pub struct CommandContext<'a> {
    pub tasks: &'a mut Vec<crate::Task>,
    pub ids: &'a mut crate::TaskIdAllocator,
}

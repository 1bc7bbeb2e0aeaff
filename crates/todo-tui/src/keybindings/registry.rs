use super::{
    alert::AlertProvider,
    task_list::{TaskEditingProvider, TaskListProvider},
    todo_input::TodoInputProvider,
    KeybindingProvider,
};
use crate::app::{App, Focus};

pub struct KeybindingRegistry;

impl KeybindingRegistry {
    pub fn get_provider(app: &App) -> Box<dyn KeybindingProvider> {
        if let Some(alert) = app.home.alert() {
            return Box::new(AlertProvider::new(alert.title.clone()));
        }
        match app.focus {
            Focus::Input => Box::new(TodoInputProvider),
            Focus::Tasks if app.tasks_list.is_editing() => Box::new(TaskEditingProvider),
            Focus::Tasks => Box::new(TaskListProvider),
        }
    }
}

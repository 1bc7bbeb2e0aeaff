use super::{Keybinding, KeybindingContext, KeybindingProvider};

pub struct TaskListProvider;

impl KeybindingProvider for TaskListProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Tasks",
            vec![
                Keybinding::new("i", "new", "Focus the new task field"),
                Keybinding::new("j/k", "move", "Select next / previous task"),
                Keybinding::new("g/G", "ends", "Jump to first / last task"),
                Keybinding::new("Space", "done", "Toggle the selected task done"),
                Keybinding::new("e", "edit", "Edit the selected task title"),
                Keybinding::new("d", "remove", "Remove the selected task"),
                Keybinding::new("?", "help", "Show help"),
                Keybinding::new("q", "quit", "Quit"),
            ],
        )
    }
}

pub struct TaskEditingProvider;

impl KeybindingProvider for TaskEditingProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Editing Task",
            vec![
                Keybinding::new("Enter", "save", "Save the new title"),
                Keybinding::new("Esc", "cancel", "Discard changes"),
                Keybinding::new("Ctrl+T", "done", "Toggle the task done"),
                Keybinding::new("←/→", "cursor", "Move cursor"),
                Keybinding::new("Home/End", "jump", "Jump to start/end"),
            ],
        )
    }
}

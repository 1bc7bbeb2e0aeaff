use super::{Keybinding, KeybindingContext, KeybindingProvider};

pub struct TodoInputProvider;

impl KeybindingProvider for TodoInputProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "New Task",
            vec![
                Keybinding::new("Enter", "add", "Add the task"),
                Keybinding::new("Esc/Tab", "list", "Back to the task list"),
                Keybinding::new("←/→", "cursor", "Move cursor"),
                Keybinding::new("Backspace", "delete", "Delete character"),
            ],
        )
    }
}

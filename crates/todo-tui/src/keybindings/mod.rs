pub mod alert;
pub mod registry;
pub mod task_list;
pub mod todo_input;

pub use registry::KeybindingRegistry;

#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: String,
    pub short_description: String,
    pub description: String,
}

impl Keybinding {
    pub fn new(
        key: impl Into<String>,
        short_description: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            short_description: short_description.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingContext {
    pub name: String,
    pub bindings: Vec<Keybinding>,
}

impl KeybindingContext {
    pub fn new(name: impl Into<String>, bindings: Vec<Keybinding>) -> Self {
        Self {
            name: name.into(),
            bindings,
        }
    }

    /// One-line hint for the footer, e.g. `e: edit | d: remove`.
    pub fn footer_hint(&self) -> String {
        self.bindings
            .iter()
            .map(|binding| format!("{}: {}", binding.key, binding.short_description))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

pub trait KeybindingProvider {
    fn get_context(&self) -> KeybindingContext;
}

use super::{Keybinding, KeybindingContext, KeybindingProvider};

pub struct AlertProvider {
    title: String,
}

impl AlertProvider {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl KeybindingProvider for AlertProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            format!("{} - Alert", self.title),
            vec![
                Keybinding::new("←/→", "choose", "Highlight another choice"),
                Keybinding::new("Enter", "press", "Press the highlighted choice"),
                Keybinding::new("y/n", "answer", "Press the choice starting with that letter"),
                Keybinding::new("Esc", "dismiss", "Close without choosing"),
            ],
        )
    }
}

use crossterm::event::KeyCode;
use todo_domain::TaskId;

/// Follow-up work attached to an alert button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertIntent {
    ConfirmRemove(TaskId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertButton {
    pub text: String,
    pub on_press: Option<AlertIntent>,
}

impl AlertButton {
    pub fn dismiss(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            on_press: None,
        }
    }

    pub fn with_intent(text: impl Into<String>, intent: AlertIntent) -> Self {
        Self {
            text: text.into(),
            on_press: Some(intent),
        }
    }
}

/// What the user did with the alert after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertResponse {
    None,
    Press(usize),
    Dismiss,
}

/// A titled message with up to a couple of labelled choices. An alert built
/// without buttons still offers a plain "OK" acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    buttons: Vec<AlertButton>,
    selected: usize,
}

impl Alert {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        buttons: Vec<AlertButton>,
    ) -> Self {
        let buttons = if buttons.is_empty() {
            vec![AlertButton::dismiss("OK")]
        } else {
            buttons
        };
        Self {
            title: title.into(),
            message: message.into(),
            buttons,
            selected: 0,
        }
    }

    pub fn notice(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Vec::new())
    }

    pub fn buttons(&self) -> &[AlertButton] {
        &self.buttons
    }

    pub fn button(&self, index: usize) -> Option<&AlertButton> {
        self.buttons.get(index)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.buttons.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.buttons.len() - 1);
    }

    /// Index of the button whose label starts with `c`, ignoring case.
    pub fn shortcut(&self, c: char) -> Option<usize> {
        let wanted = c.to_lowercase().next()?;
        self.buttons.iter().position(|button| {
            button
                .text
                .chars()
                .next()
                .and_then(|first| first.to_lowercase().next())
                == Some(wanted)
        })
    }

    pub fn handle_key(&mut self, key_code: KeyCode) -> AlertResponse {
        match key_code {
            KeyCode::Esc => AlertResponse::Dismiss,
            KeyCode::Enter | KeyCode::Char(' ') => AlertResponse::Press(self.selected),
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => {
                self.select_prev();
                AlertResponse::None
            }
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
                self.select_next();
                AlertResponse::None
            }
            KeyCode::Char(c) => match self.shortcut(c) {
                Some(index) => AlertResponse::Press(index),
                None => AlertResponse::None,
            },
            _ => AlertResponse::None,
        }
    }
}

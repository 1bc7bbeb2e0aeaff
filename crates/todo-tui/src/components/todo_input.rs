use crate::dialog::{handle_dialog_input, DialogAction};
use crate::theme::*;
use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use todo_core::InputState;

/// New-task field. Owns its buffer; the only thing it hands out is the
/// submitted title.
#[derive(Debug, Clone)]
pub struct TodoInput {
    input: InputState,
    placeholder: String,
}

impl TodoInput {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            input: InputState::new(),
            placeholder: placeholder.into(),
        }
    }

    pub fn text(&self) -> &str {
        self.input.as_str()
    }

    /// Applies `key_code`; on Enter with a non-empty buffer, passes the title
    /// to `add_task` and clears the field.
    pub fn handle_key<F>(&mut self, key_code: KeyCode, add_task: F) -> DialogAction
    where
        F: FnOnce(&str),
    {
        let action = handle_dialog_input(&mut self.input, key_code, false);
        if action == DialogAction::Confirm {
            let title = self.input.take();
            add_task(&title);
        }
        action
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_style = if focused {
            focused_border()
        } else {
            unfocused_border()
        };
        let block = Block::default()
            .title(" New task ")
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);

        let content = if self.input.is_empty() && !focused {
            Paragraph::new(self.placeholder.as_str()).style(label_text())
        } else {
            Paragraph::new(self.input.as_str()).style(normal_text())
        };
        frame.render_widget(content.block(block), area);

        if focused {
            let x = inner.x + self.input.cursor_column() as u16;
            frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(field: &mut TodoInput, text: &str) {
        for c in text.chars() {
            field.handle_key(KeyCode::Char(c), |_| panic!("no submit while typing"));
        }
    }

    #[test]
    fn test_enter_submits_and_clears() {
        let mut field = TodoInput::new("Add a new task...");
        type_text(&mut field, "Buy milk");

        let mut submitted = Vec::new();
        let action = field.handle_key(KeyCode::Enter, |title| submitted.push(title.to_string()));

        assert_eq!(action, DialogAction::Confirm);
        assert_eq!(submitted, vec!["Buy milk".to_string()]);
        assert_eq!(field.text(), "");
    }

    #[test]
    fn test_empty_submit_is_ignored() {
        let mut field = TodoInput::new("Add a new task...");
        let action = field.handle_key(KeyCode::Enter, |_| panic!("empty title submitted"));
        assert_eq!(action, DialogAction::None);
    }

    #[test]
    fn test_escape_keeps_buffer() {
        let mut field = TodoInput::new("Add a new task...");
        type_text(&mut field, "draft");
        let action = field.handle_key(KeyCode::Esc, |_| panic!("escape submitted"));
        assert_eq!(action, DialogAction::Cancel);
        assert_eq!(field.text(), "draft");
    }
}

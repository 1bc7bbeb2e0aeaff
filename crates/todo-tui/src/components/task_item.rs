use crate::dialog::{handle_dialog_input, DialogAction};
use crate::home::TaskHandlers;
use crate::theme::*;
use crossterm::event::KeyCode;
use ratatui::text::{Line, Span};
use todo_core::InputState;
use todo_domain::{EditTaskData, Task, TaskId};

/// Width of the marker cell (`[ ] `) drawn before the title.
pub const MARKER_WIDTH: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowState {
    #[default]
    Viewing,
    Editing,
}

/// One rendered task with its own inline-edit state.
///
/// The draft buffer lives as long as the row. Entering `Editing` seeds it
/// with the current title and focuses the text field; leaving `Editing`
/// blurs it again. Commit keeps the draft, cancel restores it.
#[derive(Debug, Clone)]
pub struct TaskItem {
    task: Task,
    state: RowState,
    draft: InputState,
    input_focused: bool,
}

impl TaskItem {
    pub fn new(task: Task) -> Self {
        let draft = InputState::with_text(task.title.clone());
        Self {
            task,
            state: RowState::Viewing,
            draft,
            input_focused: false,
        }
    }

    pub fn id(&self) -> TaskId {
        self.task.id
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    /// Replaces the task props; edit state and draft are left alone.
    pub fn set_task(&mut self, task: Task) {
        self.task = task;
    }

    pub fn state(&self) -> RowState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == RowState::Editing
    }

    pub fn draft(&self) -> &InputState {
        &self.draft
    }

    pub fn has_input_focus(&self) -> bool {
        self.input_focused
    }

    pub fn is_remove_enabled(&self) -> bool {
        !self.is_editing()
    }

    fn transition(&mut self, next: RowState) {
        self.state = next;
        self.input_focused = next == RowState::Editing;
    }

    pub fn start_editing(&mut self) -> bool {
        if self.is_editing() {
            return false;
        }
        self.draft.set(self.task.title.clone());
        self.transition(RowState::Editing);
        true
    }

    pub fn cancel_editing(&mut self) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.draft.set(self.task.title.clone());
        self.transition(RowState::Viewing);
        true
    }

    pub fn submit_editing(&mut self, handlers: &mut dyn TaskHandlers) -> bool {
        if !self.is_editing() {
            return false;
        }
        handlers.edit_task(EditTaskData {
            task_id: self.task.id,
            task_new_title: self.draft.as_str().to_string(),
        });
        self.transition(RowState::Viewing);
        true
    }

    pub fn toggle_done(&self, handlers: &mut dyn TaskHandlers) {
        handlers.toggle_task_done(self.task.id);
    }

    pub fn remove(&self, handlers: &mut dyn TaskHandlers) -> bool {
        if !self.is_remove_enabled() {
            return false;
        }
        handlers.remove_task(self.task.id);
        true
    }

    /// Feeds a key to the draft while editing. Returns false when the row
    /// is not editing and the key was left for the caller.
    pub fn handle_edit_key(&mut self, key_code: KeyCode, handlers: &mut dyn TaskHandlers) -> bool {
        if !self.is_editing() {
            return false;
        }
        match handle_dialog_input(&mut self.draft, key_code, true) {
            DialogAction::Confirm => {
                self.submit_editing(handlers);
            }
            DialogAction::Cancel => {
                self.cancel_editing();
            }
            DialogAction::None => {}
        }
        true
    }

    pub fn render(&self) -> Line<'static> {
        let done = self.task.done;
        let marker = if done { "[✓]" } else { "[ ]" };

        let title = if self.is_editing() {
            Span::styled(self.draft.as_str().to_string(), editing_text())
        } else {
            Span::styled(self.task.title.clone(), task_title(done))
        };

        let (edit_label, edit_style) = if self.is_editing() {
            ("esc cancel", highlight_text())
        } else {
            ("e edit", action_enabled())
        };
        let remove_style = if self.is_remove_enabled() {
            action_enabled()
        } else {
            action_disabled()
        };

        Line::from(vec![
            Span::styled(marker, task_marker(done)),
            Span::raw(" "),
            title,
            Span::raw("  "),
            Span::styled(edit_label, edit_style),
            Span::styled(" │ ", label_text()),
            Span::styled("d remove", remove_style),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::home::MockTaskHandlers;
    use mockall::predicate::eq;
    use todo_domain::TaskIdAllocator;

    fn item(title: &str) -> TaskItem {
        let mut ids = TaskIdAllocator::new();
        TaskItem::new(Task::new(&mut ids, title.to_string()))
    }

    fn type_text(row: &mut TaskItem, text: &str, handlers: &mut MockTaskHandlers) {
        for c in text.chars() {
            row.handle_edit_key(KeyCode::Char(c), handlers);
        }
    }

    #[test]
    fn test_starts_viewing_without_focus() {
        let row = item("Buy milk");
        assert_eq!(row.state(), RowState::Viewing);
        assert!(!row.has_input_focus());
        assert!(row.is_remove_enabled());
    }

    #[test]
    fn test_start_editing_seeds_draft_and_focuses() {
        let mut row = item("Buy milk");
        assert!(row.start_editing());
        assert_eq!(row.state(), RowState::Editing);
        assert_eq!(row.draft().as_str(), "Buy milk");
        assert!(row.has_input_focus());
        assert!(!row.start_editing());
    }

    #[test]
    fn test_cancel_restores_title_without_calling_edit() {
        let mut handlers = MockTaskHandlers::new();
        handlers.expect_edit_task().times(0);

        let mut row = item("Buy milk");
        row.start_editing();
        type_text(&mut row, " now", &mut handlers);
        assert_eq!(row.draft().as_str(), "Buy milk now");

        row.handle_edit_key(KeyCode::Esc, &mut handlers);

        assert_eq!(row.state(), RowState::Viewing);
        assert_eq!(row.draft().as_str(), "Buy milk");
        assert!(!row.has_input_focus());
    }

    #[test]
    fn test_submit_calls_edit_once_with_draft() {
        let mut handlers = MockTaskHandlers::new();
        let mut row = item("Buy milk");
        let id = row.id();
        handlers
            .expect_edit_task()
            .with(eq(EditTaskData {
                task_id: id,
                task_new_title: "Buy oat milk".to_string(),
            }))
            .times(1)
            .return_const(());

        row.start_editing();
        for _ in 0..4 {
            row.handle_edit_key(KeyCode::Left, &mut handlers);
        }
        type_text(&mut row, "oat ", &mut handlers);
        row.handle_edit_key(KeyCode::Enter, &mut handlers);

        assert_eq!(row.state(), RowState::Viewing);
        assert_eq!(row.draft().as_str(), "Buy oat milk");
        assert!(!row.has_input_focus());
    }

    #[test]
    fn test_submit_allows_empty_title() {
        let mut handlers = MockTaskHandlers::new();
        handlers
            .expect_edit_task()
            .withf(|data| data.task_new_title.is_empty())
            .times(1)
            .return_const(());

        let mut row = item("ab");
        row.start_editing();
        row.handle_edit_key(KeyCode::Backspace, &mut handlers);
        row.handle_edit_key(KeyCode::Backspace, &mut handlers);
        row.handle_edit_key(KeyCode::Enter, &mut handlers);
    }

    #[test]
    fn test_submit_and_cancel_are_guarded_while_viewing() {
        let mut handlers = MockTaskHandlers::new();
        handlers.expect_edit_task().times(0);

        let mut row = item("a");
        assert!(!row.submit_editing(&mut handlers));
        assert!(!row.cancel_editing());
        assert!(!row.handle_edit_key(KeyCode::Enter, &mut handlers));
    }

    #[test]
    fn test_toggle_is_available_in_both_states() {
        let mut handlers = MockTaskHandlers::new();
        let mut row = item("a");
        handlers
            .expect_toggle_task_done()
            .with(eq(row.id()))
            .times(2)
            .return_const(());

        row.toggle_done(&mut handlers);
        row.start_editing();
        row.toggle_done(&mut handlers);
    }

    #[test]
    fn test_remove_disabled_while_editing() {
        let mut handlers = MockTaskHandlers::new();
        let mut row = item("a");
        handlers
            .expect_remove_task()
            .with(eq(row.id()))
            .times(1)
            .return_const(());

        row.start_editing();
        assert!(!row.is_remove_enabled());
        assert!(!row.remove(&mut handlers));

        row.cancel_editing();
        assert!(row.remove(&mut handlers));
    }

    #[test]
    fn test_set_task_keeps_edit_state() {
        let mut row = item("a");
        row.start_editing();
        let mut task = row.task().clone();
        task.done = true;

        row.set_task(task);

        assert!(row.is_editing());
        assert!(row.task().done);
        assert_eq!(row.draft().as_str(), "a");
    }

    #[test]
    fn test_render_marks_done_rows() {
        let mut row = item("Buy milk");
        let line = row.render();
        assert_eq!(line.spans[0].content, "[ ]");

        let mut task = row.task().clone();
        task.done = true;
        row.set_task(task);
        let line = row.render();
        assert_eq!(line.spans[0].content, "[✓]");
        assert_eq!(line.spans[2].style, task_title(true));
    }

    #[test]
    fn test_render_dims_remove_while_editing() {
        let mut row = item("a");
        row.start_editing();
        let line = row.render();
        let remove = line.spans.last().unwrap();
        assert_eq!(remove.style, action_disabled());
    }
}

use super::item_wrapper::wrap_row;
use super::task_item::{TaskItem, MARKER_WIDTH};
use crate::home::TaskHandlers;
use crate::selection::SelectionState;
use crate::theme::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, HighlightSpacing, List, ListState, Paragraph},
    Frame,
};
use todo_domain::{Task, TaskId};

const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Ordered rows, one per task, keyed by task id.
///
/// Holds no task data of its own beyond the props copied in by
/// [`TasksList::sync`]; every intent goes straight to the handlers with the
/// row's task id.
#[derive(Debug, Default)]
pub struct TasksList {
    rows: Vec<TaskItem>,
    selection: SelectionState,
    list_state: ListState,
}

pub fn row_key(id: TaskId) -> String {
    id.to_string()
}

impl TasksList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut list = Self::new();
        list.sync(tasks);
        list
    }

    /// Reconciles rows with `tasks` by id: surviving rows keep their edit
    /// state, new ids get fresh rows, missing ids are dropped. The selection
    /// follows the selected task when it survives.
    pub fn sync(&mut self, tasks: &[Task]) {
        let selected_id = self.selected_row().map(TaskItem::id);
        let previous_index = self.selection.get();

        let mut old_rows = std::mem::take(&mut self.rows);
        self.rows = tasks
            .iter()
            .map(|task| match old_rows.iter().position(|row| row.id() == task.id) {
                Some(pos) => {
                    let mut row = old_rows.swap_remove(pos);
                    row.set_task(task.clone());
                    row
                }
                None => TaskItem::new(task.clone()),
            })
            .collect();

        let follow = selected_id.and_then(|id| self.rows.iter().position(|row| row.id() == id));
        self.selection.set(follow.or(previous_index));
        self.selection.clamp(self.rows.len());
    }

    pub fn rows(&self) -> &[TaskItem] {
        &self.rows
    }

    pub fn keys(&self) -> Vec<String> {
        self.rows.iter().map(|row| row_key(row.id())).collect()
    }

    pub fn row(&self, id: TaskId) -> Option<&TaskItem> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.get()
    }

    pub fn select(&mut self, index: usize) {
        if index < self.rows.len() {
            self.selection.set(Some(index));
        }
    }

    pub fn selected_row(&self) -> Option<&TaskItem> {
        self.selection.get().and_then(|idx| self.rows.get(idx))
    }

    fn selected_row_mut(&mut self) -> Option<&mut TaskItem> {
        self.selection.get().and_then(|idx| self.rows.get_mut(idx))
    }

    pub fn editing_index(&self) -> Option<usize> {
        self.rows.iter().position(TaskItem::is_editing)
    }

    pub fn is_editing(&self) -> bool {
        self.editing_index().is_some()
    }

    pub fn navigate_down(&mut self) {
        self.selection.next(self.rows.len());
    }

    pub fn navigate_up(&mut self) {
        self.selection.prev(self.rows.len());
    }

    pub fn toggle_selected(&mut self, handlers: &mut dyn TaskHandlers) {
        if let Some(row) = self.selected_row() {
            row.toggle_done(handlers);
        }
    }

    pub fn remove_selected(&mut self, handlers: &mut dyn TaskHandlers) {
        if let Some(row) = self.selected_row() {
            row.remove(handlers);
        }
    }

    pub fn start_editing_selected(&mut self) -> bool {
        self.selected_row_mut()
            .map(TaskItem::start_editing)
            .unwrap_or(false)
    }

    /// Routes a key to the row being edited, or treats it as a list command.
    /// Returns whether the key was used.
    pub fn handle_key(&mut self, key: KeyEvent, handlers: &mut dyn TaskHandlers) -> bool {
        if let Some(idx) = self.editing_index() {
            let row = &mut self.rows[idx];
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                if key.code == KeyCode::Char('t') {
                    row.toggle_done(handlers);
                }
                return true;
            }
            return row.handle_edit_key(key.code, handlers);
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.navigate_down(),
            KeyCode::Char('k') | KeyCode::Up => self.navigate_up(),
            KeyCode::Char('g') | KeyCode::Home => self.selection.jump_to_first(self.rows.len()),
            KeyCode::Char('G') | KeyCode::End => self.selection.jump_to_last(self.rows.len()),
            KeyCode::Char(' ') | KeyCode::Char('c') | KeyCode::Enter => {
                self.toggle_selected(handlers)
            }
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_selected(handlers)
            }
            KeyCode::Char('e') => {
                self.start_editing_selected();
            }
            KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
                self.remove_selected(handlers)
            }
            _ => return false,
        }
        true
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_style = if focused {
            focused_border()
        } else {
            unfocused_border()
        };
        let block = Block::default()
            .title(" Tasks ")
            .borders(Borders::ALL)
            .border_style(border_style);

        if self.rows.is_empty() {
            let empty = Paragraph::new("Nothing to do yet. Press i to add a task.")
                .style(label_text())
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<_> = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| wrap_row(index, row.render()))
            .collect();

        let highlight = if focused { selected_row() } else { Default::default() };
        let inner = block.inner(area);
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_spacing(HighlightSpacing::Always);

        self.list_state.select(self.selection.get());
        frame.render_stateful_widget(list, area, &mut self.list_state);

        if let (true, Some(idx)) = (focused, self.editing_index()) {
            self.place_cursor(frame, inner, idx);
        }
    }

    fn place_cursor(&self, frame: &mut Frame, inner: Rect, idx: usize) {
        let row = &self.rows[idx];
        if !row.has_input_focus() {
            return;
        }
        let Some(visible) = idx.checked_sub(self.list_state.offset()) else {
            return;
        };
        let visible = visible as u16;
        if visible >= inner.height {
            return;
        }
        let prefix = HIGHLIGHT_SYMBOL.chars().count() as u16 + MARKER_WIDTH;
        let x = inner.x + prefix + row.draft().cursor_column() as u16;
        frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y + visible));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::home::MockTaskHandlers;
    use mockall::predicate::eq;
    use todo_domain::TaskIdAllocator;

    fn tasks(titles: &[&str]) -> Vec<Task> {
        let mut ids = TaskIdAllocator::new();
        titles
            .iter()
            .map(|title| Task::new(&mut ids, title.to_string()))
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_one_row_per_task_in_order_keyed_by_id() {
        let tasks = tasks(&["a", "b", "c"]);
        let list = TasksList::from_tasks(&tasks);

        assert_eq!(list.len(), 3);
        let expected: Vec<_> = tasks.iter().map(|t| t.id.to_string()).collect();
        assert_eq!(list.keys(), expected);
        assert_eq!(list.selected_index(), Some(0));
    }

    #[test]
    fn test_sync_keeps_edit_state_by_id() {
        let mut tasks = tasks(&["a", "b", "c"]);
        let mut list = TasksList::from_tasks(&tasks);
        list.select(2);
        list.start_editing_selected();
        let editing_id = tasks[2].id;

        tasks.remove(0);
        list.sync(&tasks);

        assert_eq!(list.len(), 2);
        assert!(list.row(editing_id).unwrap().is_editing());
        assert_eq!(list.selected_row().map(TaskItem::id), Some(editing_id));
    }

    #[test]
    fn test_sync_clamps_selection_when_selected_task_vanishes() {
        let mut tasks = tasks(&["a", "b"]);
        let mut list = TasksList::from_tasks(&tasks);
        list.select(1);

        tasks.pop();
        list.sync(&tasks);
        assert_eq!(list.selected_index(), Some(0));

        list.sync(&[]);
        assert_eq!(list.selected_index(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_sync_updates_props() {
        let mut tasks = tasks(&["a"]);
        let mut list = TasksList::from_tasks(&tasks);
        tasks[0].done = true;
        list.sync(&tasks);
        assert!(list.rows()[0].task().done);
    }

    #[test]
    fn test_keys_forward_to_handlers_with_row_id() {
        let tasks = tasks(&["a", "b"]);
        let mut list = TasksList::from_tasks(&tasks);
        let mut handlers = MockTaskHandlers::new();
        handlers
            .expect_toggle_task_done()
            .with(eq(tasks[1].id))
            .times(1)
            .return_const(());
        handlers
            .expect_remove_task()
            .with(eq(tasks[1].id))
            .times(1)
            .return_const(());

        list.handle_key(key(KeyCode::Char('j')), &mut handlers);
        list.handle_key(key(KeyCode::Char(' ')), &mut handlers);
        list.handle_key(key(KeyCode::Char('d')), &mut handlers);
    }

    #[test]
    fn test_editing_row_captures_keys() {
        let tasks = tasks(&["a", "b"]);
        let mut list = TasksList::from_tasks(&tasks);
        let mut handlers = MockTaskHandlers::new();
        handlers.expect_remove_task().times(0);
        handlers
            .expect_edit_task()
            .withf(|data| data.task_new_title == "ajd")
            .times(1)
            .return_const(());

        list.handle_key(key(KeyCode::Char('e')), &mut handlers);
        list.handle_key(key(KeyCode::Char('j')), &mut handlers);
        list.handle_key(key(KeyCode::Char('d')), &mut handlers);

        assert_eq!(list.selected_index(), Some(0));
        list.handle_key(key(KeyCode::Enter), &mut handlers);
        assert!(!list.is_editing());
    }

    #[test]
    fn test_ctrl_t_toggles_while_editing() {
        let tasks = tasks(&["a"]);
        let mut list = TasksList::from_tasks(&tasks);
        let mut handlers = MockTaskHandlers::new();
        handlers
            .expect_toggle_task_done()
            .with(eq(tasks[0].id))
            .times(1)
            .return_const(());

        list.start_editing_selected();
        list.handle_key(
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
            &mut handlers,
        );
        assert!(list.is_editing());
        assert_eq!(list.rows()[0].draft().as_str(), "a");
    }

    #[test]
    fn test_unhandled_key_is_reported() {
        let mut list = TasksList::from_tasks(&tasks(&["a"]));
        let mut handlers = MockTaskHandlers::new();
        assert!(!list.handle_key(key(KeyCode::Char('z')), &mut handlers));
    }
}

use crate::alert::{Alert, AlertButton, AlertIntent};
use std::collections::VecDeque;
use todo_domain::{EditTaskData, Task, TaskId, TaskOperations, TaskStore};

pub const DUPLICATE_TITLE: &str = "Task already registered";
pub const DUPLICATE_MESSAGE: &str = "You cannot register a task with the same name";
pub const REMOVE_TITLE: &str = "Remove item";
pub const REMOVE_MESSAGE: &str = "Are you sure you want to remove this item?";

/// Callbacks the list rows use to reach the owner of the collection.
#[cfg_attr(test, mockall::automock)]
pub trait TaskHandlers {
    fn toggle_task_done(&mut self, id: TaskId);
    fn remove_task(&mut self, id: TaskId);
    fn edit_task(&mut self, data: EditTaskData);
}

/// Sole owner of the task collection.
///
/// Rows never touch the store; they call the [`TaskHandlers`] implemented
/// here. Alerts are queued so that a pending remove confirmation does not
/// hold up other operations; each alert is resolved on its own.
#[derive(Debug, Default)]
pub struct Home {
    store: TaskStore,
    alerts: VecDeque<Alert>,
}

impl Home {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.list_tasks()
    }

    pub fn task_count(&self) -> usize {
        self.store.task_count()
    }

    /// Whether the rendering layer has to recompute the list.
    pub fn take_refresh(&mut self) -> bool {
        self.store.take_refresh()
    }

    pub fn add_task(&mut self, title: &str) {
        match self.store.add_task(title.to_string()) {
            Ok(task) => tracing::info!("Added task: {} (id: {})", task.title, task.id),
            Err(e) if e.is_rejection() => {
                tracing::info!("Rejected task: {}", e);
                self.present(Alert::notice(DUPLICATE_TITLE, DUPLICATE_MESSAGE));
            }
            Err(e) => tracing::error!("Failed to add task: {}", e),
        }
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    pub fn alert_mut(&mut self) -> Option<&mut Alert> {
        self.alerts.front_mut()
    }

    pub fn pending_alerts(&self) -> usize {
        self.alerts.len()
    }

    pub fn present(&mut self, alert: Alert) {
        tracing::debug!("Presenting alert: {}", alert.title);
        self.alerts.push_back(alert);
    }

    /// Presses button `index` of the front alert, closing it and running
    /// the button's follow-up, if any.
    pub fn respond_to_alert(&mut self, index: usize) {
        let Some(alert) = self.alerts.pop_front() else {
            return;
        };
        let intent = alert.button(index).and_then(|button| button.on_press);
        if let Some(intent) = intent {
            self.run_intent(intent);
        }
    }

    /// Closes the front alert without running anything.
    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    fn run_intent(&mut self, intent: AlertIntent) {
        match intent {
            AlertIntent::ConfirmRemove(id) => {
                if let Err(e) = self.store.remove_task(id) {
                    tracing::error!("Failed to remove task {}: {}", id, e);
                } else {
                    tracing::info!("Removed task {}", id);
                }
            }
        }
    }
}

impl TaskHandlers for Home {
    fn toggle_task_done(&mut self, id: TaskId) {
        if let Err(e) = self.store.toggle_task_done(id) {
            tracing::error!("Failed to toggle task {}: {}", id, e);
        }
    }

    fn remove_task(&mut self, id: TaskId) {
        self.present(Alert::new(
            REMOVE_TITLE,
            REMOVE_MESSAGE,
            vec![
                AlertButton::dismiss("No"),
                AlertButton::with_intent("Yes", AlertIntent::ConfirmRemove(id)),
            ],
        ));
    }

    fn edit_task(&mut self, data: EditTaskData) {
        let EditTaskData {
            task_id,
            task_new_title,
        } = data;
        match self.store.edit_task(task_id, task_new_title) {
            Ok(()) => tracing::info!("Edited task {}", task_id),
            Err(e) => tracing::error!("Failed to edit task {}: {}", task_id, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home_with(titles: &[&str]) -> Home {
        let mut home = Home::new();
        for title in titles {
            home.add_task(title);
        }
        home.take_refresh();
        home
    }

    fn yes_index(home: &Home) -> usize {
        home.alert()
            .and_then(|alert| alert.buttons().iter().position(|b| b.text == "Yes"))
            .unwrap()
    }

    #[test]
    fn test_add_appends_undone_task() {
        let mut home = Home::new();
        home.add_task("Buy milk");

        assert_eq!(home.task_count(), 1);
        assert_eq!(home.tasks()[0].title, "Buy milk");
        assert!(!home.tasks()[0].done);
        assert!(home.alert().is_none());
        assert!(home.take_refresh());
    }

    #[test]
    fn test_duplicate_add_shows_notice() {
        let mut home = home_with(&["Buy milk"]);
        let before = home.tasks().to_vec();

        home.add_task("Buy milk");

        assert_eq!(home.tasks(), before.as_slice());
        assert!(!home.take_refresh());
        let alert = home.alert().unwrap();
        assert_eq!(alert.title, DUPLICATE_TITLE);
        assert_eq!(alert.message, DUPLICATE_MESSAGE);
        assert_eq!(alert.buttons().len(), 1);
    }

    #[test]
    fn test_remove_asks_before_removing() {
        let mut home = home_with(&["a"]);
        let id = home.tasks()[0].id;

        home.remove_task(id);

        assert_eq!(home.task_count(), 1);
        let alert = home.alert().unwrap();
        assert_eq!(alert.title, REMOVE_TITLE);
        assert_eq!(alert.message, REMOVE_MESSAGE);
        let labels: Vec<_> = alert.buttons().iter().map(|b| b.text.as_str()).collect();
        assert_eq!(labels, vec!["No", "Yes"]);
    }

    #[test]
    fn test_declining_remove_changes_nothing() {
        let mut home = home_with(&["a", "b"]);
        let before = home.tasks().to_vec();

        home.remove_task(before[0].id);
        home.respond_to_alert(0);

        assert!(home.alert().is_none());
        assert_eq!(home.tasks(), before.as_slice());
    }

    #[test]
    fn test_dismissing_remove_changes_nothing() {
        let mut home = home_with(&["a"]);
        home.remove_task(home.tasks()[0].id);
        home.dismiss_alert();
        assert_eq!(home.task_count(), 1);
    }

    #[test]
    fn test_confirming_remove_removes_target_only() {
        let mut home = home_with(&["a", "b", "c"]);
        let target = home.tasks()[1].id;

        home.remove_task(target);
        let yes = yes_index(&home);
        home.respond_to_alert(yes);

        let titles: Vec<_> = home.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
        assert!(home.take_refresh());
    }

    #[test]
    fn test_pending_confirmation_does_not_block_other_operations() {
        let mut home = home_with(&["a", "b"]);
        let first = home.tasks()[0].id;
        let second = home.tasks()[1].id;

        home.remove_task(first);
        home.toggle_task_done(second);
        home.add_task("c");
        home.add_task("c");

        assert!(home.tasks()[1].done);
        assert_eq!(home.task_count(), 3);
        assert_eq!(home.pending_alerts(), 2);
        assert_eq!(home.alert().map(|a| a.title.as_str()), Some(REMOVE_TITLE));

        let yes = yes_index(&home);
        home.respond_to_alert(yes);
        assert_eq!(home.task_count(), 2);
    }

    #[test]
    fn test_confirmation_for_vanished_task_is_noop() {
        let mut home = home_with(&["a", "b"]);
        let first = home.tasks()[0].id;

        home.remove_task(first);
        home.remove_task(first);
        assert_eq!(home.pending_alerts(), 2);

        let yes = yes_index(&home);
        home.respond_to_alert(yes);
        assert_eq!(home.pending_alerts(), 1);
        let yes = yes_index(&home);
        home.respond_to_alert(yes);

        assert_eq!(home.pending_alerts(), 0);
        assert_eq!(home.task_count(), 1);
        assert_eq!(home.tasks()[0].title, "b");
    }

    #[test]
    fn test_edit_keeps_done_and_skips_duplicate_check() {
        let mut home = home_with(&["a", "b"]);
        let second = home.tasks()[1].id;
        home.toggle_task_done(second);

        home.edit_task(EditTaskData {
            task_id: second,
            task_new_title: "a".to_string(),
        });

        assert_eq!(home.tasks()[1].title, "a");
        assert!(home.tasks()[1].done);
        assert!(home.alert().is_none());
    }

    #[test]
    fn test_respond_without_alert_is_noop() {
        let mut home = home_with(&["a"]);
        home.respond_to_alert(1);
        assert_eq!(home.task_count(), 1);
    }
}

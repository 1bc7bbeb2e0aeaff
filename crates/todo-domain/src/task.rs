use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type TaskId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(allocator: &mut TaskIdAllocator, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: allocator.allocate(now),
            title,
            done: false,
            created_at: now,
        }
    }

    pub fn toggle_done(&mut self) {
        self.done = !self.done;
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
    }
}

/// Payload of the edit callback: which task, and its replacement title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskData {
    pub task_id: TaskId,
    pub task_new_title: String,
}

/// Hands out task ids derived from the creation time in milliseconds.
///
/// Ids are strictly increasing: a second task created within the same
/// millisecond (or after the clock stepped backwards) gets `last + 1`.
#[derive(Debug, Clone, Default)]
pub struct TaskIdAllocator {
    last: Option<TaskId>,
}

impl TaskIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, at: DateTime<Utc>) -> TaskId {
        let from_clock = u64::try_from(at.timestamp_millis()).unwrap_or(0);
        let id = match self.last {
            Some(last) => from_clock.max(last + 1),
            None => from_clock,
        };
        self.last = Some(id);
        id
    }

    pub fn last_allocated(&self) -> Option<TaskId> {
        self.last
    }
}

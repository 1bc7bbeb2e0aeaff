/// Cursor over a list of rows; `None` means nothing is selected.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    pub fn next(&mut self, max_count: usize) {
        if max_count == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(max_count - 1),
            None => 0,
        });
    }

    pub fn prev(&mut self, max_count: usize) {
        if max_count == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    pub fn jump_to_first(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(0);
        }
    }

    pub fn jump_to_last(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(len - 1);
        }
    }

    /// Keeps the index inside `0..len`, selecting the first row when the
    /// list becomes non-empty and clearing when it becomes empty.
    pub fn clamp(&mut self, len: usize) {
        self.selected_index = match (self.selected_index, len) {
            (_, 0) => None,
            (Some(idx), len) => Some(idx.min(len - 1)),
            (None, _) => Some(0),
        };
    }
}

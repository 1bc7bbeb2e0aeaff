use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Duplicate title: a task named '{0}' already exists")]
    DuplicateTitle(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl TodoError {
    /// Business-rule rejections are reported to the user, not treated as faults.
    pub fn is_rejection(&self) -> bool {
        matches!(self, TodoError::DuplicateTitle(_))
    }
}

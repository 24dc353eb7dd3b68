//! Todo Status
//!
//! The closed set of progress states a todo can be in. Every transition
//! between them is allowed; there is no terminal state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Progress state of a todo, assigned only by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TodoStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl TodoStatus {
    /// All statuses in menu and legend order
    pub const ALL: [TodoStatus; 3] = [
        TodoStatus::NotStarted,
        TodoStatus::InProgress,
        TodoStatus::Completed,
    ];

    /// Stable key, also used as the `<option>` value
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::NotStarted => "not-started",
            TodoStatus::InProgress => "in-progress",
            TodoStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TodoStatus::NotStarted => "Not Started",
            TodoStatus::InProgress => "In Progress",
            TodoStatus::Completed => "Completed",
        }
    }

    /// CSS class carrying the status colour (grey / yellow / green)
    pub fn color_class(&self) -> &'static str {
        match self {
            TodoStatus::NotStarted => "status-not-started",
            TodoStatus::InProgress => "status-in-progress",
            TodoStatus::Completed => "status-completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, TodoStatus::Completed)
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TodoStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not-started" => Ok(TodoStatus::NotStarted),
            "in-progress" => Ok(TodoStatus::InProgress),
            "completed" => Ok(TodoStatus::Completed),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }
}

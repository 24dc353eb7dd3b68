//! Completion Metric
//!
//! Derived from scratch on every call; nothing is cached.

use std::fmt;

use crate::status::TodoStatus;
use crate::todo::Todo;

/// Number of todos per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn from_todos(todos: &[Todo]) -> Self {
        todos.iter().fold(Self::default(), |mut counts, todo| {
            match todo.status {
                TodoStatus::NotStarted => counts.not_started += 1,
                TodoStatus::InProgress => counts.in_progress += 1,
                TodoStatus::Completed => counts.completed += 1,
            }
            counts
        })
    }

    pub fn get(&self, status: TodoStatus) -> usize {
        match status {
            TodoStatus::NotStarted => self.not_started,
            TodoStatus::InProgress => self.in_progress,
            TodoStatus::Completed => self.completed,
        }
    }

    pub fn total(&self) -> usize {
        self.not_started + self.in_progress + self.completed
    }

    /// Share of completed todos in percent, 0 for an empty list
    pub fn percentage(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.completed as f64 / total as f64 * 100.0,
        }
    }

    /// Percentage rounded to the nearest whole number, halves up
    pub fn rounded_percentage(&self) -> u32 {
        self.percentage().round() as u32
    }
}

/// Completion percentage of a slice of todos
pub fn completion_percentage(todos: &[Todo]) -> f64 {
    StatusCounts::from_todos(todos).percentage()
}

/// Label left of the progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    /// Rounded completion percentage
    Percentage(u32),
    /// 1-based position of the selected todo
    Position(usize),
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::Percentage(pct) => write!(f, "{}%", pct),
            Badge::Position(pos) => write!(f, "{}", pos),
        }
    }
}

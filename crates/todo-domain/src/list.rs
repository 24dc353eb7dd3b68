//! Todo List Store
//!
//! Ordered, in-memory list of todos with an optional selection.
//! Every mutation is synchronous and total: unknown ids and blank text
//! are ignored instead of reported.

use log::debug;

use crate::progress::{Badge, StatusCounts};
use crate::status::TodoStatus;
use crate::todo::{Todo, TodoId, TodoText};

/// List state owned by one widget instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    /// Todos in insertion order
    todos: Vec<Todo>,
    /// Copy of the selected todo, refreshed on status change
    selected: Option<Todo>,
    /// Last id handed out
    last_id: u64,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Queries
    // ========================

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// 1-based position of a todo in display order
    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id).map(|i| i + 1)
    }

    pub fn selected(&self) -> Option<&Todo> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: TodoId) -> bool {
        self.selected.as_ref().is_some_and(|todo| todo.id == id)
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts::from_todos(&self.todos)
    }

    /// Completion percentage in `0.0..=100.0`, unrounded
    pub fn completion(&self) -> f64 {
        self.counts().percentage()
    }

    /// Label shown next to the progress bar
    pub fn badge(&self) -> Badge {
        match self.selected.as_ref().and_then(|todo| self.position(todo.id)) {
            Some(position) => Badge::Position(position),
            None => Badge::Percentage(self.counts().rounded_percentage()),
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Append a new not-started todo. Blank text is ignored.
    pub fn add(&mut self, text: &str) -> Option<TodoId> {
        let text = match TodoText::parse(text) {
            Ok(text) => text,
            Err(err) => {
                debug!("ignoring add: {}", err);
                return None;
            }
        };

        self.last_id += 1;
        let id = TodoId::new(self.last_id);
        debug!("added todo {} ({:?})", id, text.as_str());
        self.todos.push(Todo::new(id, text));
        Some(id)
    }

    /// Change the status of a todo, keeping its text and position.
    /// Returns false when the id is unknown.
    pub fn set_status(&mut self, id: TodoId, status: TodoStatus) -> bool {
        let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) else {
            debug!("ignoring status change for unknown todo {}", id);
            return false;
        };
        todo.status = status;

        if let Some(selected) = self.selected.as_mut().filter(|s| s.id == id) {
            selected.status = status;
        }

        debug!("todo {} is now {}", id, status.as_str());
        true
    }

    /// Remove a todo, clearing the selection if it pointed at it
    pub fn remove(&mut self, id: TodoId) -> Option<Todo> {
        let Some(index) = self.todos.iter().position(|todo| todo.id == id) else {
            debug!("ignoring removal of unknown todo {}", id);
            return None;
        };
        let removed = self.todos.remove(index);

        if self.is_selected(id) {
            self.selected = None;
        }

        debug!("removed todo {}", id);
        Some(removed)
    }

    /// Select a todo by id. Returns false when the id is unknown.
    pub fn select(&mut self, id: TodoId) -> bool {
        match self.get(id).cloned() {
            Some(todo) => {
                debug!("selected todo {}", id);
                self.selected = Some(todo);
                true
            }
            None => false,
        }
    }

    /// Select the todo, or clear the selection if it already is selected
    pub fn toggle_selection(&mut self, id: TodoId) {
        if self.is_selected(id) {
            self.clear_selection();
        } else {
            self.select(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

//! Widget State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! One store per widget instance, provided through context.

use leptos::prelude::*;
use log::debug;
use reactive_stores::Store;
use todo_domain::{TodoId, TodoList, TodoStatus};

/// Widget state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct WidgetState {
    /// Todos, selection and id counter
    pub list: TodoList,
    /// Contents of the new-todo input
    pub draft: String,
}

/// Type alias for the store
pub type WidgetStore = Store<WidgetState>;

/// Get the widget store from context
pub fn use_widget_store() -> WidgetStore {
    expect_context::<WidgetStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add the current draft as a todo and clear the input.
/// A blank draft is left untouched.
pub fn store_add_draft(store: &WidgetStore) -> Option<TodoId> {
    let text = store.draft().get_untracked();
    let id = store.list().write().add(&text);
    match id {
        Some(_) => store.draft().set(String::new()),
        None => debug!("draft {:?} is blank, keeping it", text),
    }
    id
}

/// Change the status of a todo by ID
pub fn store_set_status(store: &WidgetStore, id: TodoId, status: TodoStatus) -> bool {
    store.list().write().set_status(id, status)
}

/// Remove a todo from the store by ID
pub fn store_remove_todo(store: &WidgetStore, id: TodoId) {
    store.list().write().remove(id);
}

/// Select a todo, or deselect it if already selected
pub fn store_toggle_selection(store: &WidgetStore, id: TodoId) {
    store.list().write().toggle_selection(id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_store() -> (Owner, WidgetStore) {
        let owner = Owner::new();
        owner.set();
        (owner, Store::new(WidgetState::default()))
    }

    #[test]
    fn test_blank_draft_is_kept() {
        let (_owner, store) = new_store();
        store.draft().set("   ".to_string());

        assert_eq!(store_add_draft(&store), None);
        assert_eq!(store.draft().get_untracked(), "   ");
        assert!(store.list().read_untracked().is_empty());
    }

    #[test]
    fn test_draft_added_trimmed_and_cleared() {
        let (_owner, store) = new_store();
        store.draft().set("  Buy milk ".to_string());

        let id = store_add_draft(&store).expect("draft is not blank");
        assert_eq!(store.draft().get_untracked(), "");

        let list = store.list().get_untracked();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(id).unwrap().text.as_str(), "Buy milk");
        assert_eq!(list.get(id).unwrap().status, TodoStatus::NotStarted);
    }

    #[test]
    fn test_remove_empties_list() {
        let (_owner, store) = new_store();
        store.draft().set("Buy milk".to_string());
        let id = store_add_draft(&store).unwrap();

        assert!(store_set_status(&store, id, TodoStatus::Completed));
        store_remove_todo(&store, id);

        assert!(store.list().read_untracked().is_empty());
        assert_eq!(store.list().read_untracked().completion(), 0.0);
    }
}

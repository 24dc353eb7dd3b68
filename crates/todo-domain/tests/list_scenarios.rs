//! End-to-end list scenarios through the public API.

use todo_domain::{Badge, TodoList, TodoStatus};

#[test]
fn test_buy_milk_lifecycle() {
    let mut list = TodoList::new();

    let id = list.add("Buy milk").expect("text is not blank");
    assert_eq!(list.len(), 1);
    assert_eq!(list.todos()[0].text.as_str(), "Buy milk");
    assert_eq!(list.todos()[0].status, TodoStatus::NotStarted);
    assert_eq!(list.badge(), Badge::Percentage(0));

    assert!(list.set_status(id, TodoStatus::Completed));
    assert_eq!(list.completion(), 100.0);
    assert_eq!(list.badge().to_string(), "100%");

    let removed = list.remove(id).expect("todo exists");
    assert_eq!(removed.status, TodoStatus::Completed);
    assert!(list.is_empty());
    assert_eq!(list.completion(), 0.0);
}

#[test]
fn test_removed_id_is_unknown() {
    let mut list = TodoList::new();
    let id = list.add("Call the plumber").unwrap();
    list.remove(id);

    let before = list.clone();
    assert!(!list.set_status(id, TodoStatus::InProgress));
    assert!(list.remove(id).is_none());
    assert_eq!(list, before);
}

#[test]
fn test_status_cycles_freely() {
    let mut list = TodoList::new();
    let id = list.add("Draft slides").unwrap();

    for status in [
        TodoStatus::Completed,
        TodoStatus::NotStarted,
        TodoStatus::InProgress,
        TodoStatus::Completed,
        TodoStatus::InProgress,
    ] {
        assert!(list.set_status(id, status));
        assert_eq!(list.get(id).unwrap().status, status);
    }
}

#[test]
fn test_selected_badge_tracks_position() {
    let mut list = TodoList::new();
    let first = list.add("one").unwrap();
    let second = list.add("two").unwrap();
    list.add("three").unwrap();

    list.toggle_selection(second);
    assert_eq!(list.badge(), Badge::Position(2));

    list.remove(first);
    assert_eq!(list.badge(), Badge::Position(1));

    list.remove(second);
    assert_eq!(list.badge(), Badge::Percentage(0));
}

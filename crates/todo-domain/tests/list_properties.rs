//! Property tests for the list mutations.

use proptest::prelude::*;
use todo_domain::{TodoList, TodoStatus};

fn status() -> impl Strategy<Value = TodoStatus> {
    prop::sample::select(TodoStatus::ALL.to_vec())
}

fn seeded(texts: &[String]) -> TodoList {
    let mut list = TodoList::new();
    for text in texts {
        list.add(text);
    }
    list
}

proptest! {
    #[test]
    fn add_non_blank_grows_by_one(seed in prop::collection::vec("[a-z]{1,8}", 0..6), text in "[a-zA-Z0-9 ]{0,20}[a-zA-Z0-9]") {
        let mut list = seeded(&seed);
        let before = list.len();

        let id = list.add(&text);

        prop_assert!(id.is_some());
        prop_assert_eq!(list.len(), before + 1);
        let last = list.todos().last().unwrap();
        prop_assert_eq!(last.status, TodoStatus::NotStarted);
        prop_assert_eq!(last.text.as_str(), text.trim());
    }

    #[test]
    fn add_blank_is_noop(seed in prop::collection::vec("[a-z]{1,8}", 0..6), blank in "[ \t\n]{0,6}") {
        let mut list = seeded(&seed);
        let before = list.clone();

        prop_assert!(list.add(&blank).is_none());
        prop_assert_eq!(list, before);
    }

    #[test]
    fn set_status_touches_only_target(seed in prop::collection::vec("[a-z]{1,8}", 1..8), pick in any::<prop::sample::Index>(), new_status in status()) {
        let mut list = seeded(&seed);
        let before = list.todos().to_vec();
        let target = before[pick.index(before.len())].id;

        prop_assert!(list.set_status(target, new_status));

        for (old, new) in before.iter().zip(list.todos()) {
            prop_assert_eq!(old.id, new.id);
            prop_assert_eq!(&old.text, &new.text);
            if old.id == target {
                prop_assert_eq!(new.status, new_status);
            } else {
                prop_assert_eq!(old.status, new.status);
            }
        }
    }

    #[test]
    fn remove_shrinks_by_at_most_one(seed in prop::collection::vec("[a-z]{1,8}", 1..8), pick in any::<prop::sample::Index>()) {
        let mut list = seeded(&seed);
        let target = list.todos()[pick.index(list.len())].id;
        let before = list.len();

        prop_assert!(list.remove(target).is_some());
        prop_assert_eq!(list.len(), before - 1);
        prop_assert!(list.remove(target).is_none());
        prop_assert_eq!(list.len(), before - 1);
    }

    #[test]
    fn ids_are_unique(seed in prop::collection::vec("[a-z]{1,8}", 0..12), removals in prop::collection::vec(any::<prop::sample::Index>(), 0..4)) {
        let mut list = seeded(&seed);
        for pick in removals {
            if list.is_empty() {
                break;
            }
            let id = list.todos()[pick.index(list.len())].id;
            list.remove(id);
        }
        list.add("fresh");

        let mut ids: Vec<_> = list.todos().iter().map(|t| t.id).collect();
        let count = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), count);
    }

    #[test]
    fn percentage_is_bounded(statuses in prop::collection::vec(status(), 0..20)) {
        let mut list = TodoList::new();
        for (i, s) in statuses.iter().enumerate() {
            let id = list.add(&format!("todo {}", i)).unwrap();
            list.set_status(id, *s);
        }

        let pct = list.completion();
        prop_assert!((0.0..=100.0).contains(&pct));
        let completed = statuses.iter().filter(|s| s.is_completed()).count();
        prop_assert_eq!(pct == 100.0, !statuses.is_empty() && completed == statuses.len());
    }
}

//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//!
//! The to-do collection is a map from record id to record-or-absent.
//! `None` is an explicit tombstone: the record was deleted and must not
//! render, but the key stays so later responses for the same id still go
//! through the same path. Every mutation path (initial load, create,
//! update, delete) converges through [`store_apply_todo`]; components
//! never touch the map directly.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Todo;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All known records, keyed by backend id
    pub todos: HashMap<String, Option<Todo>>,
}

/// Type alias for the store
pub type TodoStore = Store<AppState>;

/// Get the app store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// The shared update function: record a mutation response for `id`.
///
/// `Some(todo)` inserts or replaces the record, `None` tombstones it.
pub fn store_apply_todo(store: &TodoStore, id: &str, todo: Option<Todo>) {
    apply_todo(&mut store.todos().write(), id, todo);
}

/// Non-reactive core of [`store_apply_todo`].
pub fn apply_todo(todos: &mut HashMap<String, Option<Todo>>, id: &str, todo: Option<Todo>) {
    todos.insert(id.to_string(), todo);
}

/// Reactive read of everything that should render.
pub fn store_visible_todos(store: &TodoStore) -> Vec<Todo> {
    visible_todos(&store.todos().read())
}

/// Reactive read of a single record's completion flag.
pub fn store_todo_done(store: &TodoStore, id: &str) -> bool {
    current_done(&store.todos().read(), id)
}

/// Completion flag of the latest applied record for `id`; false when the
/// record is absent or tombstoned.
pub fn current_done(todos: &HashMap<String, Option<Todo>>, id: &str) -> bool {
    todos
        .get(id)
        .and_then(|todo| todo.as_ref())
        .map(|todo| todo.done)
        .unwrap_or(false)
}

/// Records that should render: everything whose latest response was not a
/// deletion.
pub fn visible_todos(todos: &HashMap<String, Option<Todo>>) -> Vec<Todo> {
    todos.values().filter_map(|todo| todo.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str, ts: i64, body: &str, done: bool) -> Todo {
        Todo { id: id.to_string(), ts, body: body.to_string(), done }
    }

    #[test]
    fn view_set_follows_latest_application_per_id() {
        let mut todos = HashMap::new();
        apply_todo(&mut todos, "1", Some(todo("1", 1, "buy milk", false)));
        apply_todo(&mut todos, "2", Some(todo("2", 1, "water plants", false)));
        apply_todo(&mut todos, "3", Some(todo("3", 1, "call mom", true)));
        apply_todo(&mut todos, "2", None);
        apply_todo(&mut todos, "1", Some(todo("1", 2, "buy oat milk", false)));

        let mut visible: Vec<String> =
            visible_todos(&todos).into_iter().map(|t| t.id).collect();
        visible.sort();
        assert_eq!(visible, ["1", "3"]);
    }

    #[test]
    fn delete_tombstones_instead_of_removing_the_key() {
        let mut todos = HashMap::new();
        apply_todo(&mut todos, "1", Some(todo("1", 1, "buy milk", false)));
        apply_todo(&mut todos, "1", None);

        assert!(todos.contains_key("1"));
        assert_eq!(todos.get("1"), Some(&None));
        assert!(visible_todos(&todos).is_empty());
    }

    #[test]
    fn recreate_after_delete_renders_again() {
        let mut todos = HashMap::new();
        apply_todo(&mut todos, "1", Some(todo("1", 1, "buy milk", false)));
        apply_todo(&mut todos, "1", None);
        apply_todo(&mut todos, "1", Some(todo("1", 3, "buy milk", false)));

        assert_eq!(visible_todos(&todos).len(), 1);
    }

    // A toggle response resolves while a body edit is still debouncing;
    // the edit must compose its payload from the toggled flag, not the
    // one captured before the toggle.
    #[test]
    fn payload_merges_use_the_latest_applied_done_flag() {
        let mut todos = HashMap::new();
        apply_todo(&mut todos, "2", Some(todo("2", 10, "old body", false)));
        assert!(!current_done(&todos, "2"));

        apply_todo(&mut todos, "2", Some(todo("2", 11, "old body", true)));
        assert!(current_done(&todos, "2"));

        apply_todo(&mut todos, "2", None);
        assert!(!current_done(&todos, "2"));
    }

    // A debounced body update and an immediate done toggle for the same id
    // can resolve in either order; whichever response is applied last wins
    // wholesale. Resolution order, not initiation order, decides.
    #[test]
    fn concurrent_responses_are_last_resolved_wins() {
        let body_update = todo("2", 10, "new body", false);
        let done_toggle = todo("2", 11, "old body", true);

        let mut todos = HashMap::new();
        apply_todo(&mut todos, "2", Some(body_update.clone()));
        apply_todo(&mut todos, "2", Some(done_toggle.clone()));
        assert_eq!(todos.get("2"), Some(&Some(done_toggle.clone())));

        let mut todos = HashMap::new();
        apply_todo(&mut todos, "2", Some(done_toggle));
        apply_todo(&mut todos, "2", Some(body_update.clone()));
        assert_eq!(todos.get("2"), Some(&Some(body_update)));
    }
}

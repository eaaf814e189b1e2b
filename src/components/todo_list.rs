//! Todo List Container
//!
//! Fetches all records once on mount and renders one item per present
//! record plus the creation form. The shared store is the sole source of
//! truth for what renders; every fetched record is merged through
//! `store_apply_todo`, the same path the item and form mutations use.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{TodoForm, TodoItem};
use crate::models::Todo;
use crate::store::{store_apply_todo, store_visible_todos, use_todo_store};

/// Rows are keyed by record id alone. A server-confirmed mutation bumps
/// `_ts` but must update the row in place: recreating it would drop the
/// row's debouncer, cancelling a still-pending body edit, and would reset
/// the hover/focus state mid-interaction.
fn row_key(todo: &Todo) -> String {
    todo.id.clone()
}

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();

    // A failed initial read is terminal: the list is replaced by the error.
    let (load_error, set_load_error) = signal::<Option<String>>(None);

    // Load all todos on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_todos().await {
                Ok(todos) => {
                    for todo in todos {
                        let id = todo.id.clone();
                        store_apply_todo(&store, &id, Some(todo));
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("todos query failed: {err}").into());
                    set_load_error.set(Some(err.to_string()));
                }
            }
        });
    });

    let todos = move || store_visible_todos(&store);

    view! {
        <div class="todo-list">
            <h1>"Hello world. These are your todos"</h1>

            {move || load_error.get().map(|message| view! {
                <p class="load-error">{format!("failed to load todos: {message}")}</p>
            })}

            <Show when=move || load_error.get().is_none()>
                <div class="todos">
                    <For
                        each=todos
                        key=row_key
                        children=|todo| view! { <TodoItem todo=todo/> }
                    />

                    <TodoForm/>
                </div>
            </Show>

            <p class="todo-count">{move || format!("{} todos", todos().len())}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::row_key;
    use crate::models::Todo;

    fn todo(id: &str, ts: i64, body: &str, done: bool) -> Todo {
        Todo { id: id.to_string(), ts, body: body.to_string(), done }
    }

    // A confirmed mutation changes `_ts` (and possibly `done`); the key
    // must stay put so the row keeps its pending debounced edit.
    #[test]
    fn row_key_is_stable_across_server_confirmations() {
        let before = todo("2", 10, "old body", false);
        let after = todo("2", 11, "old body", true);
        assert_eq!(row_key(&before), row_key(&after));
    }

    #[test]
    fn row_key_separates_distinct_records() {
        assert_ne!(row_key(&todo("1", 10, "a", false)), row_key(&todo("2", 10, "a", false)));
    }
}

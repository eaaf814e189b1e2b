//! Todo Item Component
//!
//! One row: checkbox, editable body text, delete button while hovered or
//! focused. Body edits coalesce into a debounced update; editing the body
//! to blank deletes the record instead of storing an empty string.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::control_disabled;
use crate::debounce::Debouncer;
use crate::models::{Todo, TodoInput};
use crate::store::{store_apply_todo, store_todo_done, use_todo_store};

/// Quiet period after the last keystroke before the update fires.
const UPDATE_TODO_DEBOUNCE_MS: u32 = 400;

/// What a body edit should turn into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyEdit {
    /// Schedule a debounced update carrying the new text, untrimmed.
    Update(String),
    /// Text went blank: delete the record.
    Delete,
}

pub fn plan_body_edit(text: &str) -> BodyEdit {
    if text.trim().is_empty() {
        BodyEdit::Delete
    } else {
        BodyEdit::Update(text.to_string())
    }
}

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let store = use_todo_store();

    let id = todo.id.clone();
    let (body, set_body) = signal(todo.body.clone());
    let (fetching, set_fetching) = signal(false);
    let (active, set_active) = signal(false);

    // The row survives server confirmations (it is keyed by id alone), so
    // the done flag is read from the store rather than captured from the
    // prop, which would go stale after the first toggle.
    let done = {
        let id = id.clone();
        move || store_todo_done(&store, &id)
    };

    let debouncer = Debouncer::<String>::new(UPDATE_TODO_DEBOUNCE_MS);

    // Shared by the checkbox (immediate) and the debounced body path. The
    // payload is composed from state captured at call time, so a pending
    // body update and a toggle can race; the later response wins in the
    // store.
    let run_update = {
        let id = id.clone();
        move |input: TodoInput| {
            let id = id.clone();
            set_fetching.set(true);
            spawn_local(async move {
                match api::update_todo(&id, &input).await {
                    Ok(updated) => {
                        let id = updated.id.clone();
                        store_apply_todo(&store, &id, Some(updated));
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("updateTodo failed: {err}").into());
                    }
                }
                set_fetching.set(false);
            });
        }
    };

    let run_delete = {
        let id = id.clone();
        move || {
            let id = id.clone();
            set_fetching.set(true);
            spawn_local(async move {
                match api::delete_todo(&id).await {
                    Ok(deleted) => store_apply_todo(&store, &deleted.id, None),
                    Err(err) => {
                        web_sys::console::error_1(&format!("deleteTodo failed: {err}").into());
                    }
                }
                set_fetching.set(false);
            });
        }
    };

    let on_done_change = {
        let run_update = run_update.clone();
        move |ev: web_sys::Event| {
            let target = ev.target().unwrap();
            let checkbox = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
            run_update(TodoInput { body: body.get_untracked(), done: checkbox.checked() });
        }
    };

    let on_body_input = {
        let run_update = run_update.clone();
        let run_delete = run_delete.clone();
        let debouncer = debouncer.clone();
        let done = done.clone();
        move |ev: web_sys::Event| {
            let target = ev.target().unwrap();
            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
            let text = input.value();
            set_body.set(text.clone());

            match plan_body_edit(&text) {
                BodyEdit::Update(new_body) => {
                    let run_update = run_update.clone();
                    let done = done.clone();
                    debouncer.schedule(new_body, move |new_body| {
                        // Merged with the done flag as of the quiet
                        // period's end, so a toggle confirmed meanwhile
                        // is carried, not reverted.
                        run_update(TodoInput { body: new_body, done: done() });
                    });
                }
                BodyEdit::Delete => run_delete(),
            }
        }
    };

    view! {
        <div
            class=move || if active.get() { "todo-row active" } else { "todo-row" }
            on:mouseenter=move |_| set_active.set(true)
            on:mouseleave=move |_| set_active.set(false)
        >
            <input
                type="checkbox"
                prop:checked={
                    let done = done.clone();
                    move || done()
                }
                prop:disabled=move || control_disabled(fetching.get())
                on:change=on_done_change
                on:focus=move |_| set_active.set(true)
                on:blur=move |_| set_active.set(false)
            />

            <input
                type="text"
                class="todo-body"
                style:text-decoration=move || if done() { "line-through" } else { "none" }
                prop:value=move || body.get()
                prop:disabled=move || control_disabled(fetching.get())
                on:input=on_body_input
                on:focus=move |_| set_active.set(true)
                on:blur=move |_| set_active.set(false)
            />

            <Show when=move || active.get()>
                <button
                    class="delete-btn"
                    prop:disabled=move || control_disabled(fetching.get())
                    on:click={
                        let run_delete = run_delete.clone();
                        move |_| run_delete()
                    }
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_schedules_an_update() {
        assert_eq!(plan_body_edit("buy milk"), BodyEdit::Update("buy milk".into()));
    }

    #[test]
    fn surrounding_whitespace_is_kept_in_the_update() {
        assert_eq!(plan_body_edit(" buy milk "), BodyEdit::Update(" buy milk ".into()));
    }

    #[test]
    fn blank_text_means_delete() {
        assert_eq!(plan_body_edit(""), BodyEdit::Delete);
        assert_eq!(plan_body_edit("   "), BodyEdit::Delete);
        assert_eq!(plan_body_edit("\t\n"), BodyEdit::Delete);
    }
}

//! Todo Form Component
//!
//! Single text field; submitting creates a record with `done = false`.
//! There is no client-side validation: an empty submission reaches the
//! backend as-is.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::control_disabled;
use crate::models::TodoInput;
use crate::store::{store_apply_todo, use_todo_store};

#[component]
pub fn TodoForm() -> impl IntoView {
    let store = use_todo_store();

    let (value, set_value) = signal(String::new());
    let (fetching, set_fetching) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let body = value.get();
        set_fetching.set(true);
        spawn_local(async move {
            match api::create_todo(&TodoInput { body, done: false }).await {
                Ok(created) => {
                    set_value.set(String::new());
                    let id = created.id.clone();
                    store_apply_todo(&store, &id, Some(created));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("createTodo failed: {err}").into());
                }
            }
            set_fetching.set(false);
        });
    };

    view! {
        <form class="todo-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Add another todo"
                prop:value=move || value.get()
                prop:disabled=move || control_disabled(fetching.get())
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_value.set(input.value());
                }
            />
        </form>
    }
}

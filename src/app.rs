//! Todolist Frontend App
//!
//! Root component: owns the store and renders the list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::TodoList;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());

    // Provide the store to all children; components mutate it only
    // through the shared apply function.
    provide_context(store);

    view! {
        <div class="app-layout">
            <TodoList/>
        </div>
    }
}

//! Todo Frontend App
//!
//! Root component: provides the store and seeds it from the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::TodoList;
use crate::store::{self, AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let app_store = AppStore::new(AppState::default());

    // Provide the store to all children
    provide_context(app_store);

    // Initial load; after this, every store write comes from the response
    // of an individual operation.
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(todos) = api::fetch_todos().await {
                web_sys::console::log_1(&format!("[APP] Loaded {} todos", todos.len()).into());
                store::store_set_todos(&app_store, todos);
            }
        });
    });

    view! {
        <main class="todo-app">
            <h1>"Todos"</h1>
            <TodoList/>
        </main>
    }
}

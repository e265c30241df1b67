//! Todo List Component
//!
//! Keyed list over the store, one row per todo.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let app_store = use_app_store();

    view! {
        <ul class="todo-list">
            <For
                each=move || app_store.todos().get()
                key=|item| item.id.value
                children=move |item| view! { <TodoRow item/> }
            />
        </ul>
    }
}

//! Todo Row Component
//!
//! A single todo: completion checkbox, editable label, hover-revealed delete
//! button. Each mutation is fire-and-forget; the response patches the store
//! entry matching the identifier the server returns.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::edit::{EditAction, EditState};
use crate::models::TodoItem;
use crate::store::{self, use_app_store, AppStateStoreFields};

/// A single row in the todo list
#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let app_store = use_app_store();

    let id = item.id;

    // Optimistic completion, flipped synchronously on checkbox change.
    // Deliberately separate from the store's authoritative flag: a rejected
    // toggle leaves this in place with no rollback.
    let (done, set_done) = signal(item.completed);

    let (hovered, set_hovered) = signal(false);
    let (edit_state, set_edit_state) = signal(EditState::Viewing);

    let label_ref = NodeRef::<leptos::html::Label>::new();

    // Authoritative fields, re-resolved from the store by identifier
    let confirmed_completed = move || {
        app_store.todos().read().iter()
            .find(|todo| todo.id == id)
            .map(|todo| todo.completed)
            .unwrap_or(false)
    };
    let markup = move || {
        app_store.todos().read().iter()
            .find(|todo| todo.id == id)
            .map(|todo| todo.todo.clone())
            .unwrap_or_default()
    };

    let on_label_keyup = move |ev: web_sys::KeyboardEvent| {
        let (next, action) = edit_state.get().key(&ev.key());
        set_edit_state.set(next);
        match action {
            EditAction::Commit => {
                // Edit mode is already left; the store catches up when the
                // server confirms.
                let edited = label_ref.get().map(|label| label.inner_html()).unwrap_or_default();
                spawn_local(async move {
                    if let Ok(updated) = api::update_todo(id.value, &edited).await {
                        store::store_set_text(&app_store, updated.id, updated.todo);
                    }
                });
            }
            EditAction::Cancel { original } => {
                if let Some(label) = label_ref.get() {
                    label.set_inner_html(&original);
                }
            }
            EditAction::None => {}
        }
    };

    let on_delete = move |_| {
        let confirmed = window()
            .confirm_with_message("Are you sure you want to delete this todo?")
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            if let Ok(deleted) = api::delete_todo(id.value).await {
                store::store_remove_todo(&app_store, deleted.id);
            }
        });
    };

    view! {
        <li
            class="todo-row"
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            // Two listeners on purpose: the label class flips immediately
            // from the checkbox state, the server response later sets the
            // authoritative checked flag.
            <input
                type="checkbox"
                prop:checked=confirmed_completed
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_done.set(input.checked());
                    spawn_local(async move {
                        if let Ok(toggled) = api::toggle_todo(id.value).await {
                            store::store_set_completed(&app_store, toggled.id, toggled.completed);
                        }
                    });
                }
            />

            <label
                node_ref=label_ref
                class=move || if done.get() { "todo-label completed" } else { "todo-label" }
                contenteditable=move || if edit_state.get().is_editing() { "true" } else { "false" }
                inner_html=markup
                on:dblclick=move |_| {
                    let current = label_ref.get().map(|label| label.inner_html()).unwrap_or_default();
                    set_edit_state.set(edit_state.get().begin(&current));
                }
                on:keyup=on_label_keyup
            ></label>

            <button
                class=move || if hovered.get() { "delete-btn" } else { "delete-btn invisible" }
                on:click=on_delete
            >
                "Delete"
            </button>
        </li>
    }
}

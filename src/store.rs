//! Application State Store
//!
//! Identifier-keyed reactive state. Server responses are patched in by the
//! identifier they return, never by a held element reference.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{TodoId, TodoItem};

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All todos currently rendered
    pub todos: Vec<TodoItem>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole list (initial load only)
pub fn store_set_todos(store: &AppStore, todos: Vec<TodoItem>) {
    store.todos().set(todos);
}

/// Set the authoritative completed flag on the todo matching `id`
pub fn store_set_completed(store: &AppStore, id: TodoId, completed: bool) {
    store.todos().write().iter_mut()
        .find(|todo| todo.id == id)
        .map(|todo| todo.completed = completed);
}

/// Set the server-confirmed text on the todo matching `id`
pub fn store_set_text(store: &AppStore, id: TodoId, text: String) {
    store.todos().write().iter_mut()
        .find(|todo| todo.id == id)
        .map(|todo| todo.todo = text);
}

/// Remove the todo matching `id`
pub fn store_remove_todo(store: &AppStore, id: TodoId) {
    store.todos().write().retain(|todo| todo.id != id);
}

//! Todo Endpoints
//!
//! Frontend bindings for the todo resource. Every mutation is a POST whose
//! response carries the authoritative fields to patch back into the UI.

use serde::Serialize;

use crate::models::{DeleteResponse, TodoItem, ToggleResponse, UpdateResponse};

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct UpdateTodoBody<'a> {
    todo: &'a str,
}

/// Path for a single-todo operation, e.g. `/todos/42/toggle`
fn todo_url(id: u32, action: &str) -> String {
    format!("/todos/{}/{}", id, action)
}

// ========================
// Bindings
// ========================

/// Fetch the whole todo list
pub async fn fetch_todos() -> Result<Vec<TodoItem>, String> {
    let resp = reqwest::get("/todos").await.map_err(|e| e.to_string())?;
    resp.json::<Vec<TodoItem>>()
        .await
        .map_err(|e| e.to_string())
}

/// Toggle completion; the server answers with the authoritative flag
pub async fn toggle_todo(id: u32) -> Result<ToggleResponse, String> {
    let resp = reqwest::Client::new()
        .post(todo_url(id, "toggle"))
        .json(&serde_json::json!({}))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.json::<ToggleResponse>()
        .await
        .map_err(|e| e.to_string())
}

/// Replace the todo text with edited markup
pub async fn update_todo(id: u32, todo: &str) -> Result<UpdateResponse, String> {
    let resp = reqwest::Client::new()
        .post(todo_url(id, "update"))
        .json(&UpdateTodoBody { todo })
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.json::<UpdateResponse>()
        .await
        .map_err(|e| e.to_string())
}

/// Delete a todo
pub async fn delete_todo(id: u32) -> Result<DeleteResponse, String> {
    let resp = reqwest::Client::new()
        .post(todo_url(id, "delete"))
        .json(&serde_json::json!({}))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.json::<DeleteResponse>()
        .await
        .map_err(|e| e.to_string())
}

//! Frontend Models
//!
//! Wire types matching the todo backend.

use serde::{Deserialize, Serialize};

/// Opaque item identifier, exposed on the wire as `{ "value": <token> }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoId {
    pub value: u32,
}

/// Todo item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    /// Text content, may carry inline markup
    pub todo: String,
    pub completed: bool,
}

/// Response of `POST /todos/{id}/toggle`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToggleResponse {
    pub id: TodoId,
    pub completed: bool,
}

/// Response of `POST /todos/{id}/update`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateResponse {
    pub id: TodoId,
    pub todo: String,
}

/// Response of `POST /todos/{id}/delete`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeleteResponse {
    pub id: TodoId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_id_wire_shape() {
        let id: TodoId = serde_json::from_str(r#"{"value":42}"#).unwrap();
        assert_eq!(id, TodoId { value: 42 });
        assert_eq!(serde_json::to_string(&id).unwrap(), r#"{"value":42}"#);
    }

    #[test]
    fn test_todo_item_deserializes() {
        let item: TodoItem =
            serde_json::from_str(r#"{"id":{"value":7},"todo":"buy <b>milk</b>","completed":false}"#)
                .unwrap();
        assert_eq!(item.id.value, 7);
        assert_eq!(item.todo, "buy <b>milk</b>");
        assert!(!item.completed);
    }

    #[test]
    fn test_response_subsets() {
        let toggled: ToggleResponse =
            serde_json::from_str(r#"{"id":{"value":42},"completed":true}"#).unwrap();
        assert_eq!(toggled.id.value, 42);
        assert!(toggled.completed);

        let updated: UpdateResponse =
            serde_json::from_str(r#"{"id":{"value":3},"todo":"walk dog"}"#).unwrap();
        assert_eq!(updated.id.value, 3);
        assert_eq!(updated.todo, "walk dog");

        let deleted: DeleteResponse = serde_json::from_str(r#"{"id":{"value":9}}"#).unwrap();
        assert_eq!(deleted.id.value, 9);
    }
}

use chrono::{DateTime, Utc};
use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Defines todo data structure as persisted by the remote service.
///
#[derive(Clone, Debug, Deserialize, Dummy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Defines a draft todo. Drafts carry no id; the service assigns one on
/// creation.
///
#[derive(Clone, Debug, Deserialize, Dummy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

impl NewTodo {
    /// Return an empty draft for the given user.
    ///
    pub fn empty(user_id: u64) -> NewTodo {
        NewTodo {
            user_id,
            title: String::new(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn todo_deserializes_from_wire_shape() {
        let todo: Todo = serde_json::from_value(json!({
            "id": 42,
            "userId": 7,
            "title": "Water the plants",
            "completed": false,
            "createdAt": "2024-01-15T09:30:00.000Z",
            "updatedAt": "2024-01-15T09:30:00.000Z"
        }))
        .unwrap();

        assert_eq!(todo.id, 42);
        assert_eq!(todo.user_id, 7);
        assert_eq!(todo.title, "Water the plants");
        assert!(!todo.completed);
        assert!(todo.created_at.is_some());
    }

    #[test]
    fn todo_deserializes_without_timestamps() {
        let todo: Todo = serde_json::from_value(json!({
            "id": 1,
            "userId": 7,
            "title": "a",
            "completed": true
        }))
        .unwrap();

        assert!(todo.created_at.is_none());
        assert!(todo.updated_at.is_none());
    }

    #[test]
    fn new_todo_serializes_to_wire_shape() {
        let draft = NewTodo {
            user_id: 7,
            title: "Water the plants".to_string(),
            completed: false,
        };

        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({
                "userId": 7,
                "title": "Water the plants",
                "completed": false
            })
        );
    }

    #[test]
    fn empty_draft_has_no_title_and_is_incomplete() {
        let draft = NewTodo::empty(7);
        assert_eq!(draft.user_id, 7);
        assert!(draft.title.is_empty());
        assert!(!draft.completed);
    }
}

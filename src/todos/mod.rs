mod client;
mod error;
mod resource;

pub use error::TodosError;
pub use resource::{NewTodo, Todo};

use client::Client;
use log::*;

/// Responsible for asynchronous interaction with the remote todo service
/// including transformation of response data into explicitly-defined types.
///
pub struct Todos {
    client: Client,
}

impl Todos {
    /// Returns a new instance for the given service base URL.
    ///
    pub fn new(base_url: &str) -> Todos {
        debug!("Initializing todo service client for {}...", base_url);
        Todos {
            client: Client::new(base_url),
        }
    }

    /// Returns every todo belonging to the given user, in server order.
    /// All-or-nothing: no partial list is returned on failure.
    ///
    pub async fn fetch_all(&self, user_id: u64) -> Result<Vec<Todo>, TodosError> {
        debug!("Requesting todos for user ID {}...", user_id);

        let todos: Vec<Todo> = self
            .client
            .get("/todos", &[("userId", user_id.to_string())])
            .await?;

        debug!("Retrieved {} todos for user ID {}", todos.len(), user_id);
        Ok(todos)
    }

    /// Submits a draft todo for creation and returns the created record
    /// including its server-assigned id. No todo is considered created on
    /// failure. No retries are performed.
    ///
    pub async fn create(&self, draft: &NewTodo) -> Result<Todo, TodosError> {
        debug!(
            "Creating todo '{}' for user ID {}...",
            draft.title, draft.user_id
        );

        let todo: Todo = self.client.post("/todos", draft).await?;

        debug!("Created todo with ID {}", todo.id);
        Ok(todo)
    }
}

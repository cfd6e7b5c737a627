use crate::state::State;
use crate::todos::{NewTodo, Todos};
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    FetchTodos,
    CreateTodo { draft: NewTodo },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    todos: &'a Todos,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, todos: &'a Todos) -> Self {
        Handler { state, todos }
    }

    /// Handle network events by type. Service failures are absorbed here and
    /// surfaced as notices; they never escape the network loop.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::FetchTodos => self.fetch_todos().await,
            Event::CreateTodo { draft } => self.create_todo(draft).await,
        }
        Ok(())
    }

    /// Update state with every todo belonging to the configured user.
    ///
    async fn fetch_todos(&mut self) {
        let user_id = {
            let state = self.state.lock().await;
            state.user_id()
        };
        let user_id = match user_id {
            Some(user_id) => user_id,
            None => {
                warn!("Skipping todos request: no user identity configured.");
                return;
            }
        };

        info!("Fetching todos for user ID {}...", user_id);
        match self.todos.fetch_all(user_id).await {
            Ok(todos) => {
                info!("Received {} todos.", todos.len());
                let mut state = self.state.lock().await;
                state.set_todos(todos);
            }
            Err(e) => {
                error!("Failed to fetch todos: {}", e);
                let mut state = self.state.lock().await;
                state.load_failed();
            }
        }
    }

    /// Create a todo from the submitted draft and apply the outcome against
    /// the current state. Only list, draft, and notice fields are touched,
    /// so a slow response never overwrites a newer filter selection.
    ///
    async fn create_todo(&mut self, draft: NewTodo) {
        info!("Creating todo '{}'...", draft.title);
        let outcome = self.todos.create(&draft).await;

        let mut state = self.state.lock().await;
        match outcome {
            Ok(todo) => {
                info!("Todo created successfully with ID {}.", todo.id);
                state.create_succeeded(todo);
            }
            Err(e) => {
                error!("Failed to create todo: {}", e);
                state.create_failed();
            }
        }
        state.set_loading(false);
    }
}

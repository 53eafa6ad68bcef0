//! The todo list as a user sees it: a local view kept in sync with the server.
//!
//! # Design
//! `TodoClient` owns a [`TodoView`] and drives it through a [`Transport`].
//! Every operation takes a sequence number, runs one round-trip and hands
//! the outcome to the view. Failures are both recorded in the view and
//! returned to the caller; nothing is retried.

use crate::api::TodoApi;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{CreateTodo, UpdateTodo};
use crate::view::TodoView;

#[derive(Debug)]
pub struct TodoClient<T> {
    api: TodoApi,
    transport: T,
    view: TodoView,
}

impl<T: Transport> TodoClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            api: TodoApi::new(base_url),
            transport,
            view: TodoView::new(),
        }
    }

    /// Create a client and perform the initial load. A failed load leaves the
    /// client usable with the error shown in its view.
    pub fn mount(base_url: &str, transport: T) -> Self {
        let mut client = Self::new(base_url, transport);
        if let Err(err) = client.load() {
            tracing::debug!(error = %err, "initial load failed; error kept in view");
        }
        client
    }

    pub fn view(&self) -> &TodoView {
        &self.view
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.view.set_input(text);
    }

    pub fn render(&self) -> Vec<String> {
        self.view.render()
    }

    /// Replace the local items with the server's full list.
    pub fn load(&mut self) -> Result<(), ApiError> {
        let seq = self.view.issue();
        let result = self
            .transport
            .execute(self.api.build_list_todos())
            .and_then(|resp| self.api.parse_list_todos(resp));
        let outcome = unit(&result);
        self.view.apply_snapshot(seq, result);
        outcome
    }

    /// Create a todo and append the server's copy to the local items.
    ///
    /// Empty text is sent as-is; the server decides whether to accept it.
    pub fn submit(&mut self, text: &str) -> Result<(), ApiError> {
        let seq = self.view.issue();
        let input = CreateTodo {
            text: text.to_string(),
        };
        let result = self
            .api
            .build_create_todo(&input)
            .and_then(|req| self.transport.execute(req))
            .and_then(|resp| self.api.parse_create_todo(resp));
        let outcome = unit(&result);
        self.view.apply_created(seq, result);
        outcome
    }

    /// Submit whatever is currently in the input field.
    pub fn submit_input(&mut self) -> Result<(), ApiError> {
        let text = self.view.input().to_string();
        self.submit(&text)
    }

    /// Flip `completed` on the server, then resync the whole list.
    pub fn toggle(&mut self, id: u64, current_completed: bool) -> Result<(), ApiError> {
        let seq = self.view.issue();
        let input = UpdateTodo {
            id,
            completed: !current_completed,
        };
        let result = self
            .api
            .build_update_todo(&input)
            .and_then(|req| self.transport.execute(req))
            .and_then(|resp| self.api.parse_update_todo(resp));
        let outcome = unit(&result);
        self.view.apply_updated(seq, result);
        outcome?;
        self.load()
    }
}

fn unit<V>(result: &Result<V, ApiError>) -> Result<(), ApiError> {
    result.as_ref().map(|_| ()).map_err(ApiError::clone)
}

//! Client side of the todo list.
//!
//! # Overview
//! Keeps a local view of the server's todo list consistent across list,
//! create and update round-trips.
//!
//! # Design
//! - `TodoApi` is stateless: it builds `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network.
//! - `TodoView` is pure state. Sequence numbers let it drop list responses
//!   that arrive after a newer one.
//! - `Transport` is the only I/O seam; `UreqTransport` is the blocking
//!   implementation used by the CLI and the integration tests.
//! - `TodoClient` ties the three together into load, submit and toggle.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;
pub mod view;

pub use api::TodoApi;
pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{CreateTodo, TodoItem, UpdateAck, UpdateTodo};
pub use view::{Outcome, Seq, TodoView};

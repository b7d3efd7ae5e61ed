//! Backend API
//!
//! Bindings to the REST collaborator, organized by resource. Views talk to
//! the `BoardApi` seam so tests can swap the transport out.

mod boards;
mod cancel;
mod http;
mod tasks;
mod users;

#[cfg(test)]
pub(crate) mod fake;

use std::sync::Arc;

pub use boards::BoardsApi;
pub use cancel::RequestScope;
pub use http::HttpApi;
pub use tasks::{create_and_fetch, update_and_fetch, TasksApi};
pub use users::UsersApi;

/// Everything the client needs from the backend
pub trait BoardApi: BoardsApi + TasksApi + UsersApi + Send + Sync {}

impl<T> BoardApi for T where T: BoardsApi + TasksApi + UsersApi + Send + Sync {}

/// Shared handle stored in the app context
pub type SharedApi = Arc<dyn BoardApi>;

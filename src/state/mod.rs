//! Client State
//!
//! Plain data and transition methods. The reactive store in `crate::store`
//! wraps these; nothing here knows about Leptos or the network.

mod boards;
mod draft;
mod filter;
mod form;
mod grouped;
mod loadable;
mod notifications;
mod tasks;

pub use boards::{BoardsState, BOARDS_FALLBACK};
pub use draft::{BrowserDraftStorage, DraftCache, DraftStorage, MemoryDraftStorage};
pub use filter::{filter_tasks, TaskFilters};
pub use form::TaskFormValues;
pub use grouped::{GroupedTasks, TaskMove};
pub use loadable::{Loadable, Ticket};
pub use notifications::{Notice, NoticeKind, Notifications};
pub use tasks::{TasksState, BOARD_TASKS_FALLBACK, TASKS_FALLBACK, USERS_FALLBACK};

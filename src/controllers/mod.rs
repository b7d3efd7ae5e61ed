//! View Controllers
//!
//! Per-page glue between the store and the backend. A controller owns the
//! request scope of its page; dropping it cancels whatever is still loading.

mod board;
mod boards;
mod issues;
mod loaders;
mod task_form;


pub use board::{move_task, BoardView};
pub use boards::BoardsView;
pub use issues::IssuesView;
pub use loaders::{load_all, load_boards, load_for_board, load_users};
pub use task_form::{is_ready, FormMode, TaskForm};

//! Board View Controller
//!
//! Owns the requests of an open Kanban board and turns card drops into
//! optimistic moves plus a background status update.

use futures::future::LocalBoxFuture;
use futures::FutureExt;

use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals, DndSignals, DragEnd};

use super::loaders::{load_boards, load_for_board, load_users};
use crate::api::{RequestScope, SharedApi, TasksApi};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::models::{Board, Task, TaskStatus};
use crate::state::{GroupedTasks, NoticeKind, TaskMove};
use crate::store::{store_apply_move, store_leave_board, store_notify, update_tasks, with_boards, with_tasks, AppStore};

pub struct BoardView {
    store: AppStore,
    api: SharedApi,
    scope: RequestScope,
    board_id: Option<u32>,
}

impl BoardView {
    pub fn new(store: AppStore, api: SharedApi) -> Self {
        Self { store, api, scope: RequestScope::new(), board_id: None }
    }

    pub fn from_context(ctx: &AppContext) -> Self {
        Self::new(ctx.store, ctx.api.clone())
    }

    pub fn board_id(&self) -> Option<u32> {
        self.board_id
    }

    /// Switch to `board_id`. Anything the previous board still had in flight
    /// is cancelled and its columns are cleared before the new loads start.
    /// The slots read as loading once this returns; the returned future
    /// drives the board, boards and users requests.
    pub fn open(&mut self, board_id: u32) -> LocalBoxFuture<'static, ()> {
        self.scope.cancel();
        self.scope = RequestScope::new();
        self.board_id = Some(board_id);
        update_tasks(&self.store, |tasks| {
            tasks.clear_board_context();
            tasks.set_context_board(Some(board_id));
        });
        log::info!("[BOARD] open {}", board_id);

        let (store, api, scope) = (self.store, self.api.clone(), self.scope.clone());
        let board = load_for_board(store, api.clone(), scope.clone(), board_id);
        let boards = load_boards(store, api.clone(), scope.clone());
        let users = load_users(store, api, scope);
        async move {
            futures::join!(board, boards, users);
        }
        .boxed_local()
    }

    /// Leave the board: cancel its requests and drop its columns
    pub fn close(&mut self) {
        self.scope.cancel();
        if let Some(board_id) = self.board_id.take() {
            log::info!("[BOARD] close {}", board_id);
            store_leave_board(&self.store);
        }
    }

    pub fn board(&self) -> Option<Board> {
        let board_id = self.board_id?;
        with_boards(&self.store, |boards| boards.find(board_id).cloned())
    }

    pub fn columns(&self) -> GroupedTasks {
        with_tasks(&self.store, |tasks| tasks.board.data.clone())
    }

    pub fn is_loading(&self) -> bool {
        with_tasks(&self.store, |tasks| tasks.board.loading)
    }

    pub fn error(&self) -> Option<String> {
        with_tasks(&self.store, |tasks| tasks.board.error.clone())
    }

    /// Resolve an `openTask` deep link against the loaded columns. Warns only
    /// when the board has tasks (or failed) and this one is not among them.
    pub fn open_task(&self, task_id: u32) -> Option<Task> {
        let (found, settled) = with_tasks(&self.store, |tasks| {
            let board = &tasks.board;
            let has_outcome = !board.data.is_empty() || board.error.is_some();
            (board.data.find(task_id).cloned(), !board.loading && has_outcome)
        });
        if found.is_none() && settled {
            store_notify(
                &self.store,
                NoticeKind::Warning,
                "Task not found",
                Some(format!("Task {task_id} is not on this board.")),
            );
        }
        found
    }

    pub fn on_drag_end(&self, mv: TaskMove) -> Option<LocalBoxFuture<'static, ()>> {
        move_task(self.store, self.api.clone(), mv)
    }

    /// Wire mouse drag-and-drop to `on_drag_end`; status updates run in the background.
    ///
    /// The document listeners are never removed, so call this once per app
    /// rather than on every `open`. Drops arriving after `close` find no task
    /// in the cleared columns and do nothing.
    pub fn bind_drag_and_drop(&self) -> DndSignals<TaskStatus> {
        let dnd = create_dnd_signals::<TaskStatus>();
        let (store, api) = (self.store, self.api.clone());
        bind_global_mouseup(dnd, move |end: DragEnd<TaskStatus>| {
            if let Some(sync) = move_task(store, api.clone(), end.into()) {
                leptos::task::spawn_local(sync);
            }
        });
        dnd
    }
}

impl Drop for BoardView {
    fn drop(&mut self) {
        self.close();
    }
}

/// Apply a card drop to the open board immediately and return the status
/// update to run in the background. None means nothing changed and no
/// request is needed. A failed update is reported but not rolled back.
pub fn move_task(store: AppStore, api: SharedApi, mv: TaskMove) -> Option<LocalBoxFuture<'static, ()>> {
    let destination = mv.destination?;
    if mv.is_noop() {
        return None;
    }
    if !store_apply_move(&store, &mv) {
        log::debug!("[BOARD] task {} not in {}, drop ignored", mv.task_id, mv.source);
        return None;
    }
    log::debug!("[BOARD] task {} {} -> {}[{}]", mv.task_id, mv.source, destination, mv.destination_index);

    Some(
        async move {
            match api.update_task_status(mv.task_id, destination).await {
                Ok(()) => log::debug!("[BOARD] task {} saved as {}", mv.task_id, destination),
                Err(ApiError::Cancelled) => {}
                Err(ApiError::Failed(message)) => {
                    log::error!("[BOARD] status update for task {} failed: {}", mv.task_id, message);
                    store_notify(&store, NoticeKind::Error, "Failed to update task status", Some(message));
                }
            }
        }
        .boxed_local(),
    )
}

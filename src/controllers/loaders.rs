//! Resource Loaders
//!
//! Each loader marks its slot as loading as soon as it is called, then returns
//! the future that runs the request under the caller's scope and settles the
//! slot. Arguments are owned so the futures can be handed to `spawn_local`.

use std::future::Future;

use crate::api::{BoardsApi, RequestScope, SharedApi, TasksApi, UsersApi};
use crate::error::ApiResult;
use crate::store::{update_boards, update_tasks, AppStore};

fn log_failure<T>(what: &str, result: &ApiResult<T>) {
    match result {
        Err(err) if err.is_cancelled() => log::debug!("[LOAD] {} cancelled", what),
        Err(err) => log::error!("[LOAD] {} failed: {}", what, err),
        Ok(_) => {}
    }
}

/// Full task list for the issues view
pub fn load_all(store: AppStore, api: SharedApi, scope: RequestScope) -> impl Future<Output = ()> {
    let ticket = update_tasks(&store, |tasks| tasks.all.begin());
    async move {
        let result = scope.run(api.list_tasks()).await;
        log_failure("tasks", &result);
        if let Ok(tasks) = &result {
            log::debug!("[LOAD] {} tasks", tasks.len());
        }
        update_tasks(&store, |tasks| tasks.finish_load_all(ticket, result));
    }
}

/// Tasks of one board, grouped by status
pub fn load_for_board(store: AppStore, api: SharedApi, scope: RequestScope, board_id: u32) -> impl Future<Output = ()> {
    let ticket = update_tasks(&store, |tasks| tasks.board.begin());
    async move {
        let result = scope.run(api.board_tasks(board_id)).await;
        log_failure(&format!("board {board_id} tasks"), &result);
        let applied = update_tasks(&store, |tasks| tasks.finish_load_board(ticket, board_id, result));
        if !applied {
            log::debug!("[LOAD] board {} result superseded", board_id);
        }
    }
}

pub fn load_users(store: AppStore, api: SharedApi, scope: RequestScope) -> impl Future<Output = ()> {
    let ticket = update_tasks(&store, |tasks| tasks.users.begin());
    async move {
        let result = scope.run(api.list_users()).await;
        log_failure("users", &result);
        update_tasks(&store, |tasks| tasks.finish_load_users(ticket, result));
    }
}

pub fn load_boards(store: AppStore, api: SharedApi, scope: RequestScope) -> impl Future<Output = ()> {
    let ticket = update_boards(&store, |boards| boards.boards.begin());
    async move {
        let result = scope.run(api.list_boards()).await;
        log_failure("boards", &result);
        update_boards(&store, |boards| boards.finish_load(ticket, result));
    }
}

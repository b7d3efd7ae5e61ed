//! Issues View Controller
//!
//! Flat task list with client-side filtering.

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use leptos::prelude::*;

use super::loaders::{load_all, load_boards, load_users};
use crate::api::{RequestScope, SharedApi};
use crate::context::AppContext;
use crate::models::Task;
use crate::state::{filter_tasks, NoticeKind, TaskFilters};
use crate::store::{store_notify, track_tasks, with_boards, with_tasks, AppStore};

pub struct IssuesView {
    store: AppStore,
    api: SharedApi,
    scope: RequestScope,
}

impl IssuesView {
    pub fn new(store: AppStore, api: SharedApi) -> Self {
        Self { store, api, scope: RequestScope::new() }
    }

    pub fn from_context(ctx: &AppContext) -> Self {
        Self::new(ctx.store, ctx.api.clone())
    }

    /// Load tasks, users and boards side by side
    pub fn open(&mut self) -> LocalBoxFuture<'static, ()> {
        self.scope.cancel();
        self.scope = RequestScope::new();
        let (store, api, scope) = (self.store, self.api.clone(), self.scope.clone());
        let tasks = load_all(store, api.clone(), scope.clone());
        let users = load_users(store, api.clone(), scope.clone());
        let boards = load_boards(store, api, scope);
        async move {
            futures::join!(tasks, users, boards);
        }
        .boxed_local()
    }

    pub fn close(&mut self) {
        self.scope.cancel();
    }

    pub fn visible(&self, filters: &TaskFilters) -> Vec<Task> {
        with_tasks(&self.store, |tasks| filter_tasks(&tasks.all.data, filters))
    }

    /// Reactive projection; recomputes when the list or the filters change
    pub fn projection(&self, filters: Signal<TaskFilters>) -> Memo<Vec<Task>> {
        let store = self.store;
        Memo::new(move |_| {
            let filters = filters.get();
            track_tasks(&store, |tasks| filter_tasks(&tasks.all.data, &filters))
        })
    }

    /// Error text of each slot that failed, tasks first
    pub fn errors(&self) -> Vec<String> {
        let mut errors = with_tasks(&self.store, |tasks| {
            [tasks.all.error.clone(), tasks.users.error.clone()]
        })
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
        errors.extend(with_boards(&self.store, |boards| boards.boards.error.clone()));
        errors
    }

    pub fn is_loading(&self) -> bool {
        with_tasks(&self.store, |tasks| tasks.all.loading || tasks.users.loading)
            || with_boards(&self.store, |boards| boards.boards.loading)
    }

    /// Route target `(board_id, task_id)` for opening a task on its board
    pub fn board_link(&self, task: &Task) -> Option<(u32, u32)> {
        match task.board_id {
            Some(board_id) if board_id > 0 => Some((board_id, task.id)),
            _ => {
                log::warn!("[ISSUES] task {} has no board", task.id);
                store_notify(
                    &self.store,
                    NoticeKind::Error,
                    "Cannot open task",
                    Some(format!("Task \"{}\" is not linked to a board.", task.title)),
                );
                None
            }
        }
    }
}

impl Drop for IssuesView {
    fn drop(&mut self) {
        self.close();
    }
}

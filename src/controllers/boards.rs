//! Boards View Controller

use futures::future::LocalBoxFuture;
use futures::FutureExt;

use super::loaders::load_boards;
use crate::api::{RequestScope, SharedApi};
use crate::context::AppContext;
use crate::models::Board;
use crate::store::{with_boards, AppStore};

pub struct BoardsView {
    store: AppStore,
    api: SharedApi,
    scope: RequestScope,
}

impl BoardsView {
    pub fn new(store: AppStore, api: SharedApi) -> Self {
        Self { store, api, scope: RequestScope::new() }
    }

    pub fn from_context(ctx: &AppContext) -> Self {
        Self::new(ctx.store, ctx.api.clone())
    }

    pub fn open(&mut self) -> LocalBoxFuture<'static, ()> {
        self.scope.cancel();
        self.scope = RequestScope::new();
        load_boards(self.store, self.api.clone(), self.scope.clone()).boxed_local()
    }

    pub fn close(&mut self) {
        self.scope.cancel();
    }

    pub fn boards(&self) -> Vec<Board> {
        with_boards(&self.store, |boards| boards.boards.data.clone())
    }

    pub fn is_loading(&self) -> bool {
        with_boards(&self.store, |boards| boards.boards.loading)
    }

    pub fn error(&self) -> Option<String> {
        with_boards(&self.store, |boards| boards.boards.error.clone())
    }
}

impl Drop for BoardsView {
    fn drop(&mut self) {
        self.close();
    }
}

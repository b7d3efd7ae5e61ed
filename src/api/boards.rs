//! Board Endpoints

use async_trait::async_trait;

use super::HttpApi;
use crate::error::ApiResult;
use crate::models::{Board, Task};

#[async_trait(?Send)]
pub trait BoardsApi {
    /// `GET /boards`
    async fn list_boards(&self) -> ApiResult<Vec<Board>>;

    /// `GET /boards/{id}`; the payload may omit `boardId` on each task
    async fn board_tasks(&self, board_id: u32) -> ApiResult<Vec<Task>>;
}

#[async_trait(?Send)]
impl BoardsApi for HttpApi {
    async fn list_boards(&self) -> ApiResult<Vec<Board>> {
        self.get_data("/boards", "Failed to load boards").await
    }

    async fn board_tasks(&self, board_id: u32) -> ApiResult<Vec<Task>> {
        let fallback = format!("Failed to load tasks for board {board_id}");
        self.get_data(&format!("/boards/{board_id}"), &fallback).await
    }
}

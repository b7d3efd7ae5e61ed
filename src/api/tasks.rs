//! Task Endpoints

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;

use super::{BoardApi, HttpApi};
use crate::error::ApiResult;
use crate::models::{CreateTaskRequest, StatusUpdateRequest, Task, TaskStatus, UpdateTaskRequest};

#[derive(Debug, Deserialize)]
struct CreatedId {
    id: u32,
}

#[async_trait(?Send)]
pub trait TasksApi {
    /// `GET /tasks`
    async fn list_tasks(&self) -> ApiResult<Vec<Task>>;

    /// `GET /tasks/{id}`
    async fn get_task(&self, id: u32) -> ApiResult<Task>;

    /// `POST /tasks/create`; returns only the new id
    async fn create_task(&self, request: &CreateTaskRequest) -> ApiResult<u32>;

    /// `PUT /tasks/update/{id}`; the reply carries no task
    async fn update_task(&self, id: u32, request: &UpdateTaskRequest) -> ApiResult<()>;

    /// `PUT /tasks/updateStatus/{id}`
    async fn update_task_status(&self, id: u32, status: TaskStatus) -> ApiResult<()>;
}

#[async_trait(?Send)]
impl TasksApi for HttpApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        self.get_data("/tasks", "Failed to load tasks").await
    }

    async fn get_task(&self, id: u32) -> ApiResult<Task> {
        self.get_data(&format!("/tasks/{id}"), "Failed to load task").await
    }

    async fn create_task(&self, request: &CreateTaskRequest) -> ApiResult<u32> {
        let created: CreatedId = self
            .send_data(Method::POST, "/tasks/create", request, "Failed to create task")
            .await?;
        Ok(created.id)
    }

    async fn update_task(&self, id: u32, request: &UpdateTaskRequest) -> ApiResult<()> {
        self.send_unit(Method::PUT, &format!("/tasks/update/{id}"), request, "Failed to update task")
            .await
    }

    async fn update_task_status(&self, id: u32, status: TaskStatus) -> ApiResult<()> {
        self.send_unit(
            Method::PUT,
            &format!("/tasks/updateStatus/{id}"),
            &StatusUpdateRequest { status },
            "Failed to update task status",
        )
        .await
    }
}

/// Create a task, then fetch the full object the create endpoint does not return.
/// `boardId` is stamped from the request when the detail payload omits it.
pub async fn create_and_fetch(api: &dyn BoardApi, request: &CreateTaskRequest) -> ApiResult<Task> {
    let id = api.create_task(request).await?;
    let mut task = api.get_task(id).await?;
    if task.board_id.is_none() {
        task.board_id = Some(request.board_id);
    }
    log::info!("[API] created task {} on board {}", id, request.board_id);
    Ok(task)
}

/// Update a task, then re-fetch it. `known_board` fills a missing `boardId`.
pub async fn update_and_fetch(
    api: &dyn BoardApi,
    id: u32,
    request: &UpdateTaskRequest,
    known_board: Option<u32>,
) -> ApiResult<Task> {
    api.update_task(id, request).await?;
    let mut task = api.get_task(id).await?;
    if task.board_id.is_none() {
        task.board_id = known_board;
    }
    log::info!("[API] updated task {}", id);
    Ok(task)
}

//! In-memory backend for controller tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use futures::channel::oneshot;

use super::{BoardsApi, TasksApi, UsersApi};
use crate::error::{ApiError, ApiResult};
use crate::models::{Assignee, Board, CreateTaskRequest, Priority, Task, TaskStatus, UpdateTaskRequest, User};

#[derive(Default)]
struct FakeState {
    boards: Vec<Board>,
    tasks: Vec<Task>,
    users: Vec<User>,
    /// endpoint name -> error message
    failures: HashMap<&'static str, String>,
    /// board id -> gate the board listing waits on
    board_gates: HashMap<u32, oneshot::Receiver<()>>,
    status_updates: Vec<(u32, TaskStatus)>,
    calls: Vec<String>,
    next_id: u32,
}

#[derive(Default)]
pub(crate) struct FakeApi {
    state: Mutex<FakeState>,
}

pub(crate) fn task(id: u32, title: &str, status: TaskStatus, board_id: Option<u32>) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: format!("{title} details"),
        priority: Priority::Medium,
        status,
        assignee: None,
        board_id,
        board_name: board_id.map(|b| format!("Board {b}")).unwrap_or_default(),
    }
}

pub(crate) fn board(id: u32, name: &str) -> Board {
    Board { id, name: name.to_string(), description: String::new(), task_count: 0 }
}

pub(crate) fn user(id: u32, name: &str) -> User {
    User {
        id,
        full_name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        avatar_url: String::new(),
        team_id: None,
        team_name: None,
        tasks_count: None,
    }
}

impl FakeApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.state.lock().unwrap().next_id = 100;
        api
    }

    pub fn with_boards(self, boards: Vec<Board>) -> Self {
        self.state.lock().unwrap().boards = boards;
        self
    }

    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        self.state.lock().unwrap().tasks = tasks;
        self
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        self.state.lock().unwrap().users = users;
        self
    }

    pub fn fail(&self, endpoint: &'static str, message: &str) {
        self.state.lock().unwrap().failures.insert(endpoint, message.to_string());
    }

    /// Make `board_tasks(board_id)` wait until the returned sender fires
    pub fn gate_board(&self, board_id: u32) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.state.lock().unwrap().board_gates.insert(board_id, rx);
        tx
    }

    pub fn status_updates(&self) -> Vec<(u32, TaskStatus)> {
        self.state.lock().unwrap().status_updates.clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    fn enter(&self, endpoint: &'static str) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(endpoint.to_string());
        match state.failures.get(endpoint) {
            Some(message) => Err(ApiError::Failed(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl BoardsApi for FakeApi {
    async fn list_boards(&self) -> ApiResult<Vec<Board>> {
        self.enter("list_boards")?;
        Ok(self.state.lock().unwrap().boards.clone())
    }

    async fn board_tasks(&self, board_id: u32) -> ApiResult<Vec<Task>> {
        self.enter("board_tasks")?;
        let gate = self.state.lock().unwrap().board_gates.remove(&board_id);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        // The real endpoint leaves boardId off its tasks
        let state = self.state.lock().unwrap();
        Ok(state
            .tasks
            .iter()
            .filter(|t| t.board_id == Some(board_id))
            .map(|t| Task { board_id: None, ..t.clone() })
            .collect())
    }
}

#[async_trait(?Send)]
impl TasksApi for FakeApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        self.enter("list_tasks")?;
        Ok(self.state.lock().unwrap().tasks.clone())
    }

    async fn get_task(&self, id: u32) -> ApiResult<Task> {
        self.enter("get_task")?;
        let state = self.state.lock().unwrap();
        state
            .tasks
            .iter()
            .find(|t| t.id == id)
            .map(|t| Task { board_id: None, ..t.clone() })
            .ok_or_else(|| ApiError::failed("task not found"))
    }

    async fn create_task(&self, request: &CreateTaskRequest) -> ApiResult<u32> {
        self.enter("create_task")?;
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        let assignee = state.users.iter().find(|u| u.id == request.assignee_id).map(|u| Assignee {
            id: u.id,
            full_name: u.full_name.clone(),
            email: u.email.clone(),
            avatar_url: u.avatar_url.clone(),
        });
        state.tasks.push(Task {
            id,
            title: request.title.clone(),
            description: request.description.clone(),
            priority: request.priority,
            status: TaskStatus::Backlog,
            assignee,
            board_id: Some(request.board_id),
            board_name: format!("Board {}", request.board_id),
        });
        Ok(id)
    }

    async fn update_task(&self, id: u32, request: &UpdateTaskRequest) -> ApiResult<()> {
        self.enter("update_task")?;
        let mut state = self.state.lock().unwrap();
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::failed("task not found"))?;
        task.title = request.title.clone();
        task.description = request.description.clone();
        task.priority = request.priority;
        task.status = request.status;
        task.assignee = Some(Assignee {
            id: request.assignee_id,
            full_name: String::new(),
            email: String::new(),
            avatar_url: String::new(),
        });
        Ok(())
    }

    async fn update_task_status(&self, id: u32, status: TaskStatus) -> ApiResult<()> {
        self.enter("update_task_status")?;
        let mut state = self.state.lock().unwrap();
        state.status_updates.push((id, status));
        if let Some(task) = state.tasks.iter_mut().find(|t| t.id == id) {
            task.status = status;
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl UsersApi for FakeApi {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.enter("list_users")?;
        Ok(self.state.lock().unwrap().users.clone())
    }
}

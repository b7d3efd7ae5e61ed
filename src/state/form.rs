//! Task Form Values
//!
//! What the create/edit modal holds, and its conversion into the request
//! body of each operation.

use serde::{Deserialize, Serialize};

use crate::error::{FormField, ValidationError};
use crate::models::{CreateTaskRequest, Priority, Task, TaskStatus, UpdateTaskRequest};

/// Raw modal input; every field may still be empty
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskFormValues {
    pub title: String,
    pub description: String,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub assignee_id: Option<u32>,
    pub board_id: Option<u32>,
}

impl TaskFormValues {
    /// Blank create form, optionally pinned to the board it was opened from
    pub fn for_create(board_id: Option<u32>) -> Self {
        TaskFormValues {
            priority: Some(Priority::Medium),
            board_id,
            ..Default::default()
        }
    }

    pub fn from_task(task: &Task) -> Self {
        TaskFormValues {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: Some(task.priority),
            status: Some(task.status),
            assignee_id: task.assignee_id(),
            board_id: task.board_id,
        }
    }

    pub fn to_create_request(&self) -> Result<CreateTaskRequest, ValidationError> {
        let mut missing = self.missing_common();
        if self.board_id.is_none() {
            missing.push(FormField::Board);
        }
        match (missing.is_empty(), self.priority, self.assignee_id, self.board_id) {
            (true, Some(priority), Some(assignee_id), Some(board_id)) => Ok(CreateTaskRequest {
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                priority,
                assignee_id,
                board_id,
            }),
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }

    pub fn to_update_request(&self) -> Result<UpdateTaskRequest, ValidationError> {
        let mut missing = self.missing_common();
        if self.status.is_none() {
            missing.push(FormField::Status);
        }
        match (missing.is_empty(), self.priority, self.status, self.assignee_id) {
            (true, Some(priority), Some(status), Some(assignee_id)) => Ok(UpdateTaskRequest {
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                priority,
                status,
                assignee_id,
            }),
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }

    fn missing_common(&self) -> Vec<FormField> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push(FormField::Title);
        }
        if self.description.trim().is_empty() {
            missing.push(FormField::Description);
        }
        if self.priority.is_none() {
            missing.push(FormField::Priority);
        }
        if self.assignee_id.is_none() {
            missing.push(FormField::Assignee);
        }
        missing
    }
}

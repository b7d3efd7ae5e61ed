//! Task Form Controller
//!
//! State of the create/edit modal. Create mode keeps an unsent draft in
//! storage so a half-written task survives closing the modal.

use crate::api::{create_and_fetch, update_and_fetch, SharedApi};
use crate::error::{ApiError, SubmitError};
use crate::models::Task;
use crate::state::{DraftCache, DraftStorage, NoticeKind, TaskFormValues};
use crate::store::{store_apply_created, store_apply_updated, store_notify, AppState, AppStore};

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create { board_id: Option<u32> },
    Edit(Task),
}

pub struct TaskForm<S: DraftStorage> {
    mode: FormMode,
    values: TaskFormValues,
    drafts: DraftCache<S>,
}

impl<S: DraftStorage> TaskForm<S> {
    pub fn open(mode: FormMode, drafts: DraftCache<S>) -> Self {
        let values = match &mode {
            FormMode::Edit(task) => TaskFormValues::from_task(task),
            FormMode::Create { board_id } => {
                let mut values = TaskFormValues::for_create(*board_id);
                if let Some(draft) = drafts.load() {
                    log::debug!("[FORM] restoring draft");
                    values = draft;
                    if values.board_id.is_none() {
                        values.board_id = *board_id;
                    }
                }
                values
            }
        };
        Self { mode, values, drafts }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn values(&self) -> &TaskFormValues {
        &self.values
    }

    pub fn set_values(&mut self, values: TaskFormValues) {
        if !self.is_edit() {
            self.drafts.save(&values);
        }
        self.values = values;
    }

    /// Validate, send, re-fetch and merge. On any failure the form keeps its
    /// values so the modal can stay open.
    pub async fn submit(&self, store: &AppStore, api: &SharedApi) -> Result<Task, SubmitError> {
        match &self.mode {
            FormMode::Create { .. } => {
                let request = self.values.to_create_request().inspect_err(|e| {
                    log::warn!("[FORM] {}", e);
                })?;
                let task = create_and_fetch(api.as_ref(), &request)
                    .await
                    .inspect_err(|e| report_failure(store, "Failed to create task", e))?;
                store_apply_created(store, task.clone());
                self.drafts.clear();
                store_notify(store, NoticeKind::Success, "Task created", Some(task.title.clone()));
                Ok(task)
            }
            FormMode::Edit(original) => {
                let request = self.values.to_update_request().inspect_err(|e| {
                    log::warn!("[FORM] {}", e);
                })?;
                let known_board = original.board_id.or(self.values.board_id);
                let task = update_and_fetch(api.as_ref(), original.id, &request, known_board)
                    .await
                    .inspect_err(|e| report_failure(store, "Failed to update task", e))?;
                store_apply_updated(store, task.clone());
                store_notify(store, NoticeKind::Success, "Task updated", Some(task.title.clone()));
                Ok(task)
            }
        }
    }
}

/// Reference data the form's pickers need is in place
pub fn is_ready(state: &AppState) -> bool {
    let boards = &state.boards.boards;
    let users = &state.tasks.users;
    !boards.loading && !users.loading && !boards.data.is_empty() && !users.data.is_empty()
}

fn report_failure(store: &AppStore, title: &str, err: &ApiError) {
    if let ApiError::Failed(message) = err {
        log::error!("[FORM] {}: {}", title, message);
        store_notify(store, NoticeKind::Error, title, Some(message.clone()));
    }
}

//! Task State
//!
//! The flat list behind the issues view, the grouped projection behind the
//! board view, and the assignee reference data. Transitions are plain
//! methods; they only read their arguments and `self`.

use super::grouped::{GroupedTasks, TaskMove};
use super::loadable::{Loadable, Ticket};
use crate::error::ApiResult;
use crate::models::{Task, User};

pub const TASKS_FALLBACK: &str = "Unknown error while loading tasks";
pub const BOARD_TASKS_FALLBACK: &str = "Unknown error while loading board tasks";
pub const USERS_FALLBACK: &str = "Unknown error while loading users";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TasksState {
    /// Unfiltered list (issues view)
    pub all: Loadable<Vec<Task>>,
    /// Tasks of the open board, grouped by status (board view)
    pub board: Loadable<GroupedTasks>,
    pub users: Loadable<Vec<User>>,
    /// Board the user is currently looking at
    pub context_board_id: Option<u32>,
}

impl TasksState {
    pub fn finish_load_all(&mut self, ticket: Ticket, result: ApiResult<Vec<Task>>) -> bool {
        self.all.settle(ticket, result, TASKS_FALLBACK)
    }

    /// Settle a board listing. The payload may omit `boardId`, so every task
    /// is stamped with the board it was requested for before grouping.
    pub fn finish_load_board(&mut self, ticket: Ticket, board_id: u32, result: ApiResult<Vec<Task>>) -> bool {
        let result = result.map(|tasks| {
            GroupedTasks::from_tasks(tasks.into_iter().map(|mut task| {
                task.board_id = Some(board_id);
                task
            }))
        });
        self.board.settle(ticket, result, BOARD_TASKS_FALLBACK)
    }

    pub fn finish_load_users(&mut self, ticket: Ticket, result: ApiResult<Vec<User>>) -> bool {
        self.users.settle(ticket, result, USERS_FALLBACK)
    }

    pub fn set_context_board(&mut self, board_id: Option<u32>) {
        self.context_board_id = board_id;
    }

    /// Forget the grouped projection so the next board starts clean
    pub fn clear_board_context(&mut self) {
        self.board.reset();
    }

    pub fn apply_created(&mut self, task: Task) {
        self.merge(task);
    }

    pub fn apply_updated(&mut self, task: Task) {
        self.merge(task);
    }

    /// Optimistic drag move on the open board
    pub fn apply_move(&mut self, mv: &TaskMove) -> bool {
        self.board.data.apply_move(mv)
    }

    pub fn users(&self) -> &[User] {
        &self.users.data
    }

    fn merge(&mut self, task: Task) {
        match self.all.data.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task.clone(),
            None => self.all.data.push(task.clone()),
        }

        // Never show a task of another board in the open board's columns
        let foreign = matches!(
            (self.context_board_id, task.board_id),
            (Some(open), Some(owner)) if open != owner
        );
        if foreign {
            self.board.data.remove_everywhere(task.id);
        } else {
            self.board.data.place(task);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{task, user};
    use crate::error::ApiError;
    use crate::models::TaskStatus;

    fn ids(bucket: &[Task]) -> Vec<u32> {
        bucket.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_load_all_replaces_list() {
        let mut state = TasksState::default();
        state.all.data = vec![task(9, "old", TaskStatus::Done, None)];
        let ticket = state.all.begin();
        assert!(state.all.loading);

        state.finish_load_all(ticket, Ok(vec![task(1, "a", TaskStatus::Backlog, Some(1))]));
        assert!(!state.all.loading);
        assert_eq!(ids(&state.all.data), vec![1]);
    }

    #[test]
    fn test_load_all_cancelled_leaves_error_untouched() {
        let mut state = TasksState::default();
        let ticket = state.all.begin();
        state.finish_load_all(ticket, Err(ApiError::Cancelled));
        assert_eq!(state.all.error, None);
        assert!(!state.all.loading);
    }

    #[test]
    fn test_load_all_failure_uses_fallback() {
        let mut state = TasksState::default();
        let ticket = state.all.begin();
        state.finish_load_all(ticket, Err(ApiError::failed("")));
        assert_eq!(state.all.error.as_deref(), Some(TASKS_FALLBACK));
    }

    #[test]
    fn test_board_load_stamps_board_id_and_groups() {
        let mut state = TasksState::default();
        let ticket = state.board.begin();
        state.finish_load_board(
            ticket,
            4,
            Ok(vec![
                task(1, "a", TaskStatus::Backlog, None),
                task(2, "b", TaskStatus::InProgress, None),
                task(3, "c", TaskStatus::Done, None),
            ]),
        );
        assert_eq!(ids(&state.board.data.backlog), vec![1]);
        assert_eq!(ids(&state.board.data.in_progress), vec![2]);
        assert_eq!(ids(&state.board.data.done), vec![3]);
        assert!(state.board.data.iter().all(|t| t.board_id == Some(4)));
    }

    #[test]
    fn test_clear_board_context() {
        let mut state = TasksState::default();
        let ticket = state.board.begin();
        state.finish_load_board(ticket, 1, Ok(vec![task(1, "a", TaskStatus::Backlog, None)]));
        let pending = state.board.begin();
        state.board.error = Some("boom".into());

        state.clear_board_context();
        assert!(state.board.data.is_empty());
        assert!(!state.board.loading);
        assert_eq!(state.board.error, None);

        // The request that was in flight cannot repopulate the cleared board
        assert!(!state.finish_load_board(pending, 1, Ok(vec![task(2, "b", TaskStatus::Done, None)])));
        assert!(state.board.data.is_empty());
    }

    #[test]
    fn test_apply_updated_moves_between_buckets() {
        let mut state = TasksState::default();
        state.context_board_id = Some(1);
        state.all.data = vec![task(1, "a", TaskStatus::Backlog, Some(1)), task(2, "b", TaskStatus::Backlog, Some(1))];
        state.board.data = GroupedTasks::from_tasks(state.all.data.clone());

        let mut server = task(1, "a (edited)", TaskStatus::Done, Some(1));
        server.description = "from server".into();
        state.apply_updated(server.clone());

        assert_eq!(state.all.data[0], server);
        assert_eq!(ids(&state.board.data.backlog), vec![2]);
        assert_eq!(ids(&state.board.data.done), vec![1]);
        assert_eq!(state.board.data.iter().filter(|t| t.id == 1).count(), 1);
    }

    #[test]
    fn test_apply_created_appends() {
        let mut state = TasksState::default();
        state.context_board_id = Some(1);
        state.apply_created(task(5, "new", TaskStatus::Backlog, Some(1)));
        assert_eq!(ids(&state.all.data), vec![5]);
        assert_eq!(ids(&state.board.data.backlog), vec![5]);
    }

    #[test]
    fn test_created_on_other_board_stays_out_of_columns() {
        let mut state = TasksState::default();
        state.context_board_id = Some(1);
        state.apply_created(task(5, "elsewhere", TaskStatus::Backlog, Some(2)));
        assert_eq!(ids(&state.all.data), vec![5]);
        assert!(state.board.data.is_empty());
    }

    #[test]
    fn test_users_slot_is_independent() {
        let mut state = TasksState::default();
        let tasks_ticket = state.all.begin();
        let users_ticket = state.users.begin();
        state.finish_load_users(users_ticket, Err(ApiError::failed("users down")));
        state.finish_load_all(tasks_ticket, Ok(vec![task(1, "a", TaskStatus::Backlog, None)]));

        assert_eq!(state.users.error.as_deref(), Some("users down"));
        assert_eq!(state.all.error, None);
        assert_eq!(state.all.data.len(), 1);

        let ticket = state.users.begin();
        state.finish_load_users(ticket, Ok(vec![user(1, "Ann")]));
        assert_eq!(state.users().len(), 1);
        assert_eq!(state.users.error, None);
    }
}

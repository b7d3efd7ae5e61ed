//! Board State

use super::loadable::{Loadable, Ticket};
use crate::error::ApiResult;
use crate::models::Board;

pub const BOARDS_FALLBACK: &str = "Unknown error while loading boards";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardsState {
    pub boards: Loadable<Vec<Board>>,
}

impl BoardsState {
    pub fn finish_load(&mut self, ticket: Ticket, result: ApiResult<Vec<Board>>) -> bool {
        self.boards.settle(ticket, result, BOARDS_FALLBACK)
    }

    pub fn find(&self, board_id: u32) -> Option<&Board> {
        self.boards.data.iter().find(|b| b.id == board_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::board;
    use crate::error::ApiError;

    #[test]
    fn test_fetch_boards_lifecycle() {
        let mut state = BoardsState::default();
        let ticket = state.boards.begin();
        assert!(state.boards.loading);
        assert_eq!(state.boards.error, None);

        state.finish_load(ticket, Ok(vec![board(1, "Project A"), board(2, "Project B")]));
        assert!(!state.boards.loading);
        assert_eq!(state.find(2).map(|b| b.name.as_str()), Some("Project B"));
        assert!(state.find(3).is_none());
    }

    #[test]
    fn test_rejected_sets_error() {
        let mut state = BoardsState::default();
        let ticket = state.boards.begin();
        state.finish_load(ticket, Err(ApiError::failed("Failed to fetch")));
        assert!(!state.boards.loading);
        assert_eq!(state.boards.error.as_deref(), Some("Failed to fetch"));
    }

    #[test]
    fn test_aborted_does_not_set_error() {
        let mut state = BoardsState::default();
        let ticket = state.boards.begin();
        state.finish_load(ticket, Err(ApiError::Cancelled));
        assert!(!state.boards.loading);
        assert_eq!(state.boards.error, None);
    }
}

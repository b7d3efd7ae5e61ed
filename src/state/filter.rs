//! Issue List Filtering

use crate::models::{Task, TaskStatus};

/// Optional, combinable criteria; an unset criterion matches everything
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskFilters {
    /// Case-insensitive title substring
    pub search: String,
    pub status: Option<TaskStatus>,
    pub board_id: Option<u32>,
    pub assignee_id: Option<u32>,
}

impl TaskFilters {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.status.is_none() && self.board_id.is_none() && self.assignee_id.is_none()
    }

    pub fn matches(&self, task: &Task) -> bool {
        let search_ok = self.search.is_empty() || task.title.to_lowercase().contains(&self.search.to_lowercase());
        let status_ok = self.status.map_or(true, |s| task.status == s);
        let board_ok = self.board_id.map_or(true, |b| task.board_id == Some(b));
        let assignee_ok = self.assignee_id.map_or(true, |a| task.assignee_id() == Some(a));
        search_ok && status_ok && board_ok && assignee_ok
    }
}

/// Visible subset of `tasks`, in source order. Never mutates the input.
pub fn filter_tasks(tasks: &[Task], filters: &TaskFilters) -> Vec<Task> {
    if filters.is_empty() {
        return tasks.to_vec();
    }
    tasks.iter().filter(|t| filters.matches(t)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::task;
    use crate::models::Assignee;

    fn assigned(mut t: Task, id: u32) -> Task {
        t.assignee = Some(Assignee { id, full_name: String::new(), email: String::new(), avatar_url: String::new() });
        t
    }

    fn sample() -> Vec<Task> {
        vec![
            assigned(task(1, "Fix login", TaskStatus::Backlog, Some(1)), 10),
            assigned(task(2, "Add profile page", TaskStatus::InProgress, Some(2)), 11),
            task(3, "Fix profile bug", TaskStatus::Done, Some(2)),
        ]
    }

    fn ids(tasks: &[Task]) -> Vec<u32> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filters = TaskFilters { search: "fix".into(), ..Default::default() };
        assert_eq!(ids(&filter_tasks(&sample(), &filters)), vec![1, 3]);

        let filters = TaskFilters { search: "PROFILE".into(), ..Default::default() };
        assert_eq!(ids(&filter_tasks(&sample(), &filters)), vec![2, 3]);
    }

    #[test]
    fn test_no_criteria_keeps_everything() {
        assert_eq!(ids(&filter_tasks(&sample(), &TaskFilters::default())), vec![1, 2, 3]);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let filters = TaskFilters { search: "fix".into(), board_id: Some(2), ..Default::default() };
        assert_eq!(ids(&filter_tasks(&sample(), &filters)), vec![3]);

        let filters = TaskFilters { status: Some(TaskStatus::InProgress), assignee_id: Some(11), ..Default::default() };
        assert_eq!(ids(&filter_tasks(&sample(), &filters)), vec![2]);

        let filters = TaskFilters { status: Some(TaskStatus::Done), assignee_id: Some(11), ..Default::default() };
        assert!(filter_tasks(&sample(), &filters).is_empty());
    }

    #[test]
    fn test_unassigned_never_matches_assignee_filter() {
        let filters = TaskFilters { assignee_id: Some(10), ..Default::default() };
        assert_eq!(ids(&filter_tasks(&sample(), &filters)), vec![1]);
    }

    #[test]
    fn test_result_is_exactly_the_matching_set() {
        let tasks = sample();
        let statuses = [None, Some(TaskStatus::Backlog), Some(TaskStatus::InProgress), Some(TaskStatus::Done)];
        let boards = [None, Some(1), Some(2), Some(3)];
        let assignees = [None, Some(10), Some(11)];
        let searches = ["", "fix", "page", "zzz"];

        for status in statuses {
            for board_id in boards {
                for assignee_id in assignees {
                    for search in searches {
                        let filters = TaskFilters { search: search.into(), status, board_id, assignee_id };
                        let result = filter_tasks(&tasks, &filters);
                        let expected: Vec<u32> = tasks
                            .iter()
                            .filter(|t| {
                                t.title.to_lowercase().contains(search)
                                    && status.map_or(true, |s| t.status == s)
                                    && board_id.map_or(true, |b| t.board_id == Some(b))
                                    && assignee_id.map_or(true, |a| t.assignee_id() == Some(a))
                            })
                            .map(|t| t.id)
                            .collect();
                        assert_eq!(ids(&result), expected, "filters: {filters:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_source_is_untouched() {
        let tasks = sample();
        let before = tasks.clone();
        let _ = filter_tasks(&tasks, &TaskFilters { search: "fix".into(), ..Default::default() });
        assert_eq!(tasks, before);
    }
}

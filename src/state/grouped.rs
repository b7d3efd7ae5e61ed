//! Kanban Buckets
//!
//! A task collection partitioned by status, plus the optimistic move applied
//! when a card is dropped on a column.

use crate::models::{Task, TaskStatus};

/// Exactly three buckets keyed by status; each task lives in one of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupedTasks {
    pub backlog: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
}

impl GroupedTasks {
    /// Group in arrival order
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut grouped = GroupedTasks::default();
        for task in tasks {
            grouped.bucket_mut(task.status).push(task);
        }
        grouped
    }

    pub fn bucket(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Backlog => &self.backlog,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    pub fn bucket_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::Backlog => &mut self.backlog,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Done => &mut self.done,
        }
    }

    pub fn len(&self) -> usize {
        self.backlog.len() + self.in_progress.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All tasks, column by column
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        TaskStatus::ALL.into_iter().flat_map(move |status| self.bucket(status).iter())
    }

    pub fn find(&self, task_id: u32) -> Option<&Task> {
        self.iter().find(|t| t.id == task_id)
    }

    /// Drop every copy of `task_id` from every bucket
    pub fn remove_everywhere(&mut self, task_id: u32) {
        for status in TaskStatus::ALL {
            self.bucket_mut(status).retain(|t| t.id != task_id);
        }
    }

    /// Replace any stale copy and append the task to the bucket of its status
    pub fn place(&mut self, task: Task) {
        self.remove_everywhere(task.id);
        self.bucket_mut(task.status).push(task);
    }

    /// Apply a drag move locally. Returns false (and changes nothing) for a
    /// no-op move or when the task is not in the source bucket.
    pub fn apply_move(&mut self, mv: &TaskMove) -> bool {
        if mv.is_noop() {
            return false;
        }
        let Some(destination) = mv.destination else {
            return false;
        };

        let source = self.bucket_mut(mv.source);
        let Some(position) = source.iter().position(|t| t.id == mv.task_id) else {
            return false;
        };
        let mut task = source.remove(position);
        task.status = destination;

        let target = self.bucket_mut(destination);
        let index = mv.destination_index.min(target.len());
        target.insert(index, task);
        true
    }
}

/// A finished card drag on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskMove {
    pub task_id: u32,
    pub source: TaskStatus,
    pub source_index: usize,
    /// None when dropped outside every column
    pub destination: Option<TaskStatus>,
    pub destination_index: usize,
}

impl TaskMove {
    pub fn new(task_id: u32, source: (TaskStatus, usize), destination: Option<(TaskStatus, usize)>) -> Self {
        TaskMove {
            task_id,
            source: source.0,
            source_index: source.1,
            destination: destination.map(|d| d.0),
            destination_index: destination.map(|d| d.1).unwrap_or(0),
        }
    }

    pub fn is_noop(&self) -> bool {
        match self.destination {
            None => true,
            Some(dest) => dest == self.source && self.destination_index == self.source_index,
        }
    }
}

impl From<leptos_dragdrop::DragEnd<TaskStatus>> for TaskMove {
    fn from(end: leptos_dragdrop::DragEnd<TaskStatus>) -> Self {
        TaskMove::new(
            end.item_id,
            (end.source.column, end.source.index),
            end.destination.map(|d| (d.column, d.index)),
        )
    }
}

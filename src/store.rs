//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All writes go
//! through the helpers below, which apply the transitions from `crate::state`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;
use crate::state::{BoardsState, NoticeKind, Notifications, TaskMove, TasksState};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Flat list, open board projection, users
    pub tasks: TasksState,
    pub boards: BoardsState,
    pub notifications: Notifications,
}

impl AppState {
    pub fn new(notification_ttl_ms: u32) -> Self {
        Self {
            notifications: Notifications::new(notification_ttl_ms),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

pub fn create_app_store(notification_ttl_ms: u32) -> AppStore {
    Store::new(AppState::new(notification_ttl_ms))
}

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Mutate task state
pub fn update_tasks<R>(store: &AppStore, f: impl FnOnce(&mut TasksState) -> R) -> R {
    let field = store.tasks();
    let mut tasks = field.write();
    f(&mut tasks)
}

/// Mutate task state unless the store has already been disposed
pub fn try_update_tasks<R>(store: &AppStore, f: impl FnOnce(&mut TasksState) -> R) -> Option<R> {
    let field = store.tasks();
    let mut tasks = field.try_write()?;
    Some(f(&mut tasks))
}

/// Read task state without subscribing
pub fn with_tasks<R>(store: &AppStore, f: impl FnOnce(&TasksState) -> R) -> R {
    store.tasks().with_untracked(f)
}

/// Read task state, subscribing the running effect/memo
pub fn track_tasks<R>(store: &AppStore, f: impl FnOnce(&TasksState) -> R) -> R {
    store.tasks().with(f)
}

pub fn update_boards<R>(store: &AppStore, f: impl FnOnce(&mut BoardsState) -> R) -> R {
    let field = store.boards();
    let mut boards = field.write();
    f(&mut boards)
}

pub fn with_boards<R>(store: &AppStore, f: impl FnOnce(&BoardsState) -> R) -> R {
    store.boards().with_untracked(f)
}

pub fn with_notifications<R>(store: &AppStore, f: impl FnOnce(&Notifications) -> R) -> R {
    store.notifications().with_untracked(f)
}

/// Merge a server-confirmed new task into list and board
pub fn store_apply_created(store: &AppStore, task: Task) {
    update_tasks(store, |tasks| tasks.apply_created(task));
}

/// Merge a server-confirmed edited task into list and board
pub fn store_apply_updated(store: &AppStore, task: Task) {
    update_tasks(store, |tasks| tasks.apply_updated(task));
}

/// Optimistic drag move; true if the board changed
pub fn store_apply_move(store: &AppStore, mv: &TaskMove) -> bool {
    update_tasks(store, |tasks| tasks.apply_move(mv))
}

/// Leave the board view: drop its projection and context
pub fn store_leave_board(store: &AppStore) {
    let left = try_update_tasks(store, |tasks| {
        tasks.clear_board_context();
        tasks.set_context_board(None);
    });
    if left.is_none() {
        log::debug!("[STORE] store disposed before board cleanup");
    }
}

/// Show a transient notification; on wasm it dismisses itself after the TTL
pub fn store_notify(store: &AppStore, kind: NoticeKind, title: impl Into<String>, description: Option<String>) -> u64 {
    let (id, ttl_ms) = {
        let field = store.notifications();
        let mut notes = field.write();
        let id = notes.push(kind, title, description);
        (id, notes.ttl_ms)
    };
    schedule_dismiss(*store, id, ttl_ms);
    id
}

pub fn store_dismiss(store: &AppStore, id: u64) -> bool {
    store.notifications().write().dismiss(id)
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(store: AppStore, id: u64, ttl_ms: u32) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(ttl_ms).await;
        if let Some(mut notes) = store.notifications().try_write() {
            notes.dismiss(id);
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_store: AppStore, _id: u64, _ttl_ms: u32) {}

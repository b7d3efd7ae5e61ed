//! Taskboard Client State
//!
//! Client-side state for a Kanban task tracker: the normalized task store,
//! optimistic drag-and-drop status updates, issue filtering, the task form
//! draft and the REST bindings behind them. Views are expected to call
//! `boot` once and then build controllers from the provided `AppContext`.

pub mod api;
pub mod config;
pub mod context;
pub mod controllers;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;
pub mod store;

use std::sync::Arc;

pub use api::{BoardApi, HttpApi, RequestScope, SharedApi};
pub use config::ClientConfig;
pub use context::{provide_app_context, use_app_context, AppContext};
pub use error::{ApiError, ApiResult, SubmitError, ValidationError};
pub use store::{use_app_store, AppState, AppStore};

/// Install panic hook and logger, then provide the app context to the
/// current reactive owner
pub fn boot(config: ClientConfig) -> AppContext {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    logging::init(config.log_level());
    log::info!("[BOOT] backend at {}", config.api_base_url);

    let api: SharedApi = Arc::new(HttpApi::new(config.api_base_url.clone()));
    let ctx = AppContext::new(config, api);
    provide_app_context(ctx.clone());
    ctx
}

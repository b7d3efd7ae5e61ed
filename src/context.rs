//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::SharedApi;
use crate::config::ClientConfig;
use crate::state::{BrowserDraftStorage, DraftCache};
use crate::store::{create_app_store, AppStore};

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    pub store: AppStore,
    pub api: SharedApi,
    pub config: Arc<ClientConfig>,
}

impl AppContext {
    pub fn new(config: ClientConfig, api: SharedApi) -> Self {
        let store = create_app_store(config.notification_ttl_ms);
        Self { store, api, config: Arc::new(config) }
    }

    /// The create-form draft slot in localStorage
    pub fn drafts(&self) -> DraftCache<BrowserDraftStorage> {
        DraftCache::new(BrowserDraftStorage, self.config.draft_key.clone())
    }
}

/// Make the context (and the bare store) available to every view below the current owner
pub fn provide_app_context(ctx: AppContext) {
    provide_context(ctx.store);
    provide_context(ctx);
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

use std::sync::Arc;

use presence_data::directory::UserDirectory;
use presence_runtime::log_cache::LogCache;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// TTL-cached presence-log loader.
    pub cache: Arc<LogCache>,
    /// Display names and avatars for user listings.
    pub directory: Arc<UserDirectory>,
}

impl AppState {
    pub fn new(cache: Arc<LogCache>, directory: Arc<UserDirectory>) -> Self {
        Self { cache, directory }
    }
}

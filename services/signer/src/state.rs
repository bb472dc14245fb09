//! Application state shared across handlers

use std::sync::Arc;

use crate::repositories::SessionStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub session_store: Arc<dyn SessionStore>,
    pub require_bearer: bool,
}

impl AppState {
    pub fn new(session_store: Arc<dyn SessionStore>, require_bearer: bool) -> Self {
        Self {
            session_store,
            require_bearer,
        }
    }
}

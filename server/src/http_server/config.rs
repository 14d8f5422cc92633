use std::sync::Arc;

use axum::extract::FromRef;
use db::ProduceStore;

use crate::{AppConfig, AppState};

impl FromRef<AppState> for AppConfig {
    fn from_ref(state: &AppState) -> Self {
        state.app.clone()
    }
}

impl FromRef<AppState> for Arc<dyn ProduceStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

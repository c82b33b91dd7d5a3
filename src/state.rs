//! Shared application state, injected into the route handlers via Axum
//! state. Built once at startup; there is no other cross-request state.

use std::sync::Arc;

use sqlx::PgPool;

use crate::llm::GroqClient;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub llm: Arc<GroqClient>,
}

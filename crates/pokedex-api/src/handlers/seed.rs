//! Seed handler.

use axum::extract::State;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/v2/seed
pub async fn execute_seed(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    Ok(state.seed_service.execute_seed().await?)
}

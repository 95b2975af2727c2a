//! Health check endpoint

use axum::{Json, extract::State};
use shared::models::{DatabaseState, HealthStatus};

use crate::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    let database = if state.employees.ping().await {
        DatabaseState::Connected
    } else {
        DatabaseState::Disconnected
    };
    Json(HealthStatus::from_database(database))
}

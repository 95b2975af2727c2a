//! Health check model

use serde::{Deserialize, Serialize};

/// Database reachability as reported by `GET /health`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseState {
    Connected,
    Disconnected,
}

/// `GET /health` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub database: DatabaseState,
}

impl HealthStatus {
    pub fn from_database(database: DatabaseState) -> Self {
        match database {
            DatabaseState::Connected => Self {
                status: "ok".to_string(),
                message: "API server is running".to_string(),
                database,
            },
            DatabaseState::Disconnected => Self {
                status: "degraded".to_string(),
                message: "API server is running but the database is unreachable".to_string(),
                database,
            },
        }
    }
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Response for the health probe
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
    pub storage: String,
}

use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Serialize, Deserialize)]
pub struct ResponsePayload {
    pub status: i32,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub records: usize,
    pub uptime_seconds: u64,
}

// Define a ServerState struct to hold shared server metadata
pub struct ServerState {
    pub start_time: Instant,
    pub version: String,
}

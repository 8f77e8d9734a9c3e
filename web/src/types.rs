use serde::Deserialize;
use shared::utc_millis::UtcMillis;

/// Task eval as reported by the queue's JSON API.
#[derive(Debug, Clone, Deserialize)]
pub struct QueuedEval {
    pub task_id: String,
    pub requested_utc_millis: UtcMillis,
}

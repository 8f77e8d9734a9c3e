pub const TRIGGER_HOST_HEADER_KEY: &str = "X-Trigger-Hostname";

pub enum QueueEndpoint {
    /// Accepts a task-eval message for asynchronous delivery
    PublishTaskEval,
    /// JSON API: list queued task evaluations (consumed by the frontend)
    ApiEvals,
}

impl QueueEndpoint {
    pub fn to_uri(&self, base: &str) -> String {
        format!("{base}{}", self.to_str())
    }

    pub fn to_str(&self) -> &str {
        match self {
            QueueEndpoint::PublishTaskEval => "/queue/task-eval",
            QueueEndpoint::ApiEvals => "/api/evals",
        }
    }
}

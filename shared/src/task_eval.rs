use crate::utc_millis::UtcMillis;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task evaluated when no id is configured explicitly.
pub const DEFAULT_TASK_ID: Uuid = Uuid::from_u128(0x24ba9402_41f5_4027_9bfc_8bfffe8a4988);

/// Message handed to the queue to request evaluation of a single task.
/// Built once per trigger run and discarded after the publish call.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TaskEvalRequest {
    pub task_id: Uuid,
    /// time of construction on trigger side
    pub requested_utc_millis: UtcMillis,
}

impl TaskEvalRequest {
    pub fn new(task_id: Uuid) -> Self {
        TaskEvalRequest {
            task_id,
            requested_utc_millis: UtcMillis::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_print_default_task_id_hyphenated() {
        assert_eq!(
            "24ba9402-41f5-4027-9bfc-8bfffe8a4988",
            DEFAULT_TASK_ID.to_string()
        );
    }

    #[test]
    fn should_serialize_task_id_as_hyphenated_string() {
        let request = TaskEvalRequest {
            task_id: DEFAULT_TASK_ID,
            requested_utc_millis: 1711747200000.into(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            "{\"task_id\":\"24ba9402-41f5-4027-9bfc-8bfffe8a4988\",\"requested_utc_millis\":1711747200000}"
        );
    }

    #[test]
    fn should_deserialize_roundtrip() {
        let request = TaskEvalRequest::new(Uuid::new_v4());
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: TaskEvalRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, deserialized);
    }

    #[test]
    fn should_reject_malformed_task_id() {
        let result: Result<TaskEvalRequest, _> =
            serde_json::from_str("{\"task_id\":\"not-a-uuid\",\"requested_utc_millis\":0}");
        assert!(result.is_err());
    }
}

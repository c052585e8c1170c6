use serde::{Deserialize, Serialize};

use crate::domain::entity::Task;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTaskRequest {
    pub submission: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub task_id: String,
    pub contest_id: String,
    pub participant_id: String,
    pub submission: String,
    pub created_at: i64,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            task_id: task.task_id.to_string(),
            contest_id: task.contest_id.to_string(),
            participant_id: task.participant_id.to_string(),
            submission: task.submission,
            created_at: task.created_at.timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use identity::domain::value_object::user_id::UserId;
    use kernel::id::ContestId;

    #[test]
    fn task_response_serializes_camel_case() {
        let task = Task::new(ContestId::new(), UserId::new(), "entry".to_string());
        let json = serde_json::to_value(TaskResponse::from(task)).unwrap();
        assert!(json.get("taskId").is_some());
        assert!(json.get("contestId").is_some());
        assert_eq!(json["submission"], "entry");
    }
}

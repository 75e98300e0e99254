use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::impl_str_enum;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "todo.ts")]
pub enum TodoAction {
    AskForObservation,
    AskForCertifValidation,
}

impl_str_enum!(TodoAction {
    AskForObservation => "ask_for_observation",
    AskForCertifValidation => "ask_for_certif_validation",
});

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "todo.ts")]
pub enum TodoStatus {
    Pending,
    Done,
}

impl_str_enum!(TodoStatus {
    Pending => "pending",
    Done => "done",
});

// 待办事项；user_id 为需要处理的人，target_user_id 为相关学生
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "todo.ts")]
pub struct Todo {
    pub id: i64,
    pub user_id: i64,
    pub target_user_id: i64,
    pub planning_id: i64,
    pub action: TodoAction,
    pub status: TodoStatus,
    #[ts(type = "any")]
    pub data: serde_json::Value,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTodo {
    pub user_id: i64,
    pub target_user_id: i64,
    pub planning_id: i64,
    pub action: TodoAction,
    pub data: serde_json::Value,
}

impl NewTodo {
    pub fn ask_for_observation(
        observer_id: i64,
        student_id: i64,
        planning_id: i64,
        observation_id: i64,
    ) -> Self {
        Self {
            user_id: observer_id,
            target_user_id: student_id,
            planning_id,
            action: TodoAction::AskForObservation,
            data: serde_json::json!({ "observation_id": observation_id }),
        }
    }

    pub fn ask_for_certif_validation(
        supervisor_id: i64,
        student_id: i64,
        planning_id: i64,
        declaration_id: i64,
    ) -> Self {
        Self {
            user_id: supervisor_id,
            target_user_id: student_id,
            planning_id,
            action: TodoAction::AskForCertifValidation,
            data: serde_json::json!({ "declaration_id": declaration_id }),
        }
    }
}

/// 判断待办数据是否指向给定对象，如 `("observation_id", 12)`
pub fn todo_refers_to(data: &serde_json::Value, key: &str, id: i64) -> bool {
    data.get(key).and_then(|v| v.as_i64()) == Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_data_matching() {
        let todo = NewTodo::ask_for_observation(2, 3, 4, 15);
        assert_eq!(todo.action, TodoAction::AskForObservation);
        assert!(todo_refers_to(&todo.data, "observation_id", 15));
        assert!(!todo_refers_to(&todo.data, "observation_id", 16));
        assert!(!todo_refers_to(&todo.data, "declaration_id", 15));
        assert!(!todo_refers_to(&serde_json::Value::Null, "observation_id", 15));
    }

    #[test]
    fn test_action_strings() {
        assert_eq!(
            TodoAction::AskForCertifValidation.as_str(),
            "ask_for_certif_validation"
        );
        assert_eq!(
            serde_json::to_string(&TodoAction::AskForObservation).unwrap(),
            "\"ask_for_observation\""
        );
        assert_eq!("done".parse::<TodoStatus>().unwrap(), TodoStatus::Done);
    }
}

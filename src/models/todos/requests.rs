use serde::Deserialize;
use ts_rs::TS;

use super::entities::TodoStatus;
use crate::models::common::PaginationQuery;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "todo.ts")]
pub struct TodoListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<TodoStatus>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "todo.ts")]
pub struct UpdateTodoRequest {
    pub status: TodoStatus,
}

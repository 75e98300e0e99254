use serde::Serialize;
use ts_rs::TS;

use super::entities::Todo;
use crate::models::common::PaginationInfo;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "todo.ts")]
pub struct TodoListResponse {
    pub items: Vec<Todo>,
    pub pagination: PaginationInfo,
}

pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    todos::{
        entities::Todo,
        requests::{TodoListParams, UpdateTodoRequest},
    },
    users::entities::User,
};
use crate::services::access::{current_user, internal_error};
use crate::storage::Storage;

pub struct TodoService {
    storage: Option<Arc<dyn Storage>>,
}

impl TodoService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 我的待办
    pub async fn list_todos(
        &self,
        params: TodoListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_todos(self, params, request).await
    }

    pub async fn update_todo(
        &self,
        todo_id: i64,
        req: UpdateTodoRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_todo(self, todo_id, req, request).await
    }

    pub async fn delete_todo(&self, todo_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_todo(self, todo_id, request).await
    }
}

/// 加载调用者自己的待办，别人的待办按不存在处理
pub(crate) async fn load_own_todo(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    todo_id: i64,
) -> Result<(Todo, User), HttpResponse> {
    let user = current_user(request)?;

    match storage.get_todo_by_id(todo_id).await {
        Ok(Some(todo)) if todo.user_id == user.id => Ok((todo, user)),
        Ok(_) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TodoNotFound,
            "Todo not found",
        ))),
        Err(e) => Err(internal_error(format!("Failed to load todo: {e}"))),
    }
}

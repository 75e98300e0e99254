use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{TodoService, load_own_todo};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::internal_error;

pub async fn delete_todo(
    service: &TodoService,
    todo_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let (todo, user) = match load_own_todo(&storage, request, todo_id).await {
        Ok(loaded) => loaded,
        Err(response) => return Ok(response),
    };

    match storage.delete_todo(todo.id).await {
        Ok(true) => {
            tracing::debug!("Todo {} deleted by {}", todo.id, user.username);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Todo deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TodoNotFound,
            "Todo not found",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to delete todo: {e}"))),
    }
}

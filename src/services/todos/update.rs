use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{TodoService, load_own_todo};
use crate::models::{ApiResponse, ErrorCode, todos::requests::UpdateTodoRequest};
use crate::services::access::internal_error;

pub async fn update_todo(
    service: &TodoService,
    todo_id: i64,
    req: UpdateTodoRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    if let Err(response) = load_own_todo(&storage, request, todo_id).await {
        return Ok(response);
    }

    match storage.update_todo_status(todo_id, req.status).await {
        Ok(Some(todo)) => Ok(HttpResponse::Ok().json(ApiResponse::success(todo, "Todo updated"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TodoNotFound,
            "Todo not found",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to update todo: {e}"))),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TodoService;
use crate::models::{ApiResponse, todos::requests::TodoListParams};
use crate::services::access::{current_user, internal_error};

pub async fn list_todos(
    service: &TodoService,
    params: TodoListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = service.get_storage(request);

    match storage.list_user_todos(user.id, params).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Todos retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to list todos: {e}"))),
    }
}

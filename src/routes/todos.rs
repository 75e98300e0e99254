use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::todos::requests::{TodoListParams, UpdateTodoRequest};
use crate::services::TodoService;
use crate::utils::SafeTodoIdI64;

static TODO_SERVICE: Lazy<TodoService> = Lazy::new(TodoService::new_lazy);

pub async fn list_todos(
    req: HttpRequest,
    query: web::Query<TodoListParams>,
) -> ActixResult<HttpResponse> {
    TODO_SERVICE.list_todos(query.into_inner(), &req).await
}

pub async fn update_todo(
    req: HttpRequest,
    todo_id: SafeTodoIdI64,
    update_data: web::Json<UpdateTodoRequest>,
) -> ActixResult<HttpResponse> {
    TODO_SERVICE
        .update_todo(todo_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_todo(req: HttpRequest, todo_id: SafeTodoIdI64) -> ActixResult<HttpResponse> {
    TODO_SERVICE.delete_todo(todo_id.0, &req).await
}

pub fn configure_todo_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/todos")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_todos))
            .route("/{todo_id}", web::put().to(update_todo))
            .route("/{todo_id}", web::delete().to(delete_todo)),
    );
}

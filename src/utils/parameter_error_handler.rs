//! JSON 与查询参数反序列化失败时，返回统一格式的 400 响应

use actix_web::{
    HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
};

use crate::models::{ApiResponse, ErrorCode};

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let msg = format!("Invalid JSON body: {err}");
    tracing::debug!("{} {}: {}", req.method(), req.path(), msg);
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, &msg));
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    let msg = format!("Invalid query parameters: {err}");
    tracing::debug!("{} {}: {}", req.method(), req.path(), msg);
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, &msg));
    InternalError::from_response(err, response).into()
}

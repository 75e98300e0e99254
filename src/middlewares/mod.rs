pub mod rate_limit;
pub mod require_jwt;
pub mod require_role;
pub mod require_situation_role;

pub use rate_limit::RateLimit;
pub use require_jwt::RequireJWT;
pub use require_role::RequireRole;
pub use require_situation_role::RequireSituationRole;

use actix_web::{HttpResponse, http::StatusCode};

use crate::models::{ApiResponse, ErrorCode};

/// 中间件拒绝请求时使用的统一 JSON 响应
pub fn create_error_response(status: StatusCode, code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse::error_empty(code, message))
}

//! 路径参数提取器
//!
//! 路径中的 ID 必须是正整数，否则直接返回 400 和统一的 JSON 错误体。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 从 match_info 中读取并校验一个正整数 ID
pub fn parse_path_id(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    let raw = req.match_info().get(name).unwrap_or_default();
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            let msg = format!("Invalid path parameter '{name}': {raw}");
            let response =
                HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, &msg));
            Err(InternalError::from_response(msg, response).into())
        }
    }
}

macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                ready(parse_path_id(req, $param).map($name))
            }
        }
    };
}

define_safe_i64_extractor!(SafeGroupIdI64, "group_id");
define_safe_i64_extractor!(SafeUserIdI64, "user_id");
define_safe_i64_extractor!(SafeSituationIdI64, "situation_id");
define_safe_i64_extractor!(SafePlanningIdI64, "planning_id");
define_safe_i64_extractor!(SafePauseIdI64, "pause_id");
define_safe_i64_extractor!(SafeObservationIdI64, "observation_id");
define_safe_i64_extractor!(SafeDeclarationIdI64, "declaration_id");
define_safe_i64_extractor!(SafeEntryIdI64, "entry_id");
define_safe_i64_extractor!(SafeGridIdI64, "grid_id");
define_safe_i64_extractor!(SafeCategoryIdI64, "category_id");
define_safe_i64_extractor!(SafeTodoIdI64, "todo_id");

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_valid_id_is_extracted() {
        let req = TestRequest::default()
            .param("situation_id", "42")
            .to_http_request();
        let id = SafeSituationIdI64::extract(&req).await.unwrap();
        assert_eq!(id.0, 42);
    }

    #[actix_web::test]
    async fn test_invalid_ids_are_rejected() {
        for raw in ["0", "-3", "abc", ""] {
            let req = TestRequest::default()
                .param("planning_id", raw)
                .to_http_request();
            assert!(SafePlanningIdI64::extract(&req).await.is_err(), "{raw}");
        }
    }
}

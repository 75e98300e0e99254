use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::situation_role;
use crate::models::{ApiResponse, situations::responses::SituationRoleResponse};

/// 返回中间件解析出的最高角色
pub async fn get_my_role(situation_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SituationRoleResponse {
            situation_id,
            role: situation_role(request),
        },
        "Situation role retrieved successfully",
    )))
}

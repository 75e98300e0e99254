use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SituationService;
use crate::models::{
    ApiResponse,
    situations::{
        entities::SituationRole,
        responses::{MySituation, MySituationListResponse},
    },
};
use crate::services::access::{current_user, internal_error};

/// 列出调用者参与的情境，管理员看到全部情境
pub async fn list_my_situations(
    service: &SituationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = service.get_storage(request);

    let items = if user.is_admin() {
        match storage.list_situations().await {
            Ok(situations) => situations
                .into_iter()
                .map(|situation| MySituation {
                    situation,
                    role: SituationRole::Admin,
                })
                .collect(),
            Err(e) => return Ok(internal_error(format!("Failed to list situations: {e}"))),
        }
    } else {
        match storage.list_user_situations(user.id).await {
            Ok(rows) => rows
                .into_iter()
                .map(|(situation, roles)| MySituation {
                    situation,
                    role: SituationRole::top_role(roles.iter()),
                })
                .collect(),
            Err(e) => return Ok(internal_error(format!("Failed to list situations: {e}"))),
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MySituationListResponse { items },
        "Situations retrieved successfully",
    )))
}

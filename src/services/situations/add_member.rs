use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{SituationService, situation_role};
use crate::cache::situation_roles_key;
use crate::errors::CompetVetError;
use crate::models::{ApiResponse, ErrorCode, situations::requests::AddSituationMemberRequest};
use crate::services::access::{forbidden, get_cache, internal_error};

pub async fn add_member(
    service: &SituationService,
    situation_id: i64,
    req: AddSituationMemberRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if !situation_role(request).is_evaluator() {
        return Ok(forbidden("Only evaluators can manage situation members"));
    }
    if !req.role.is_assignable() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Role {} cannot be assigned", req.role),
        )));
    }

    let storage = service.get_storage(request);

    match storage.get_user_by_id(req.user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => return Ok(internal_error(format!("Failed to load user: {e}"))),
    }

    match storage
        .add_situation_member(situation_id, req.user_id, req.role)
        .await
    {
        Ok(()) => {
            if let Some(cache) = get_cache(request) {
                cache
                    .remove(&situation_roles_key(situation_id, req.user_id))
                    .await;
            }
            info!(
                "User {} joined situation {} as {}",
                req.user_id, situation_id, req.role
            );
            Ok(HttpResponse::Created().json(ApiResponse::<()>::success_empty(
                "Member added to situation",
            )))
        }
        Err(CompetVetError::Conflict(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::SituationMemberAlreadyExists, msg),
        )),
        Err(e) => Ok(internal_error(format!("Failed to add situation member: {e}"))),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::{SituationService, check_settings};
use crate::config::AppConfig;
use crate::models::{
    ApiResponse, ErrorCode,
    situations::{entities::SituationRole, requests::CreateSituationRequest},
};
use crate::services::access::{current_user, internal_error};
use crate::utils::validate::validate_shortname;

pub async fn create_situation(
    service: &SituationService,
    req: CreateSituationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = service.get_storage(request);

    let situation = req.with_defaults(&AppConfig::get().grading);
    if situation.name.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SituationInvalidSettings,
            "Situation name must not be empty",
        )));
    }
    if let Err(msg) = validate_shortname(&situation.shortname) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SituationInvalidSettings,
            msg,
        )));
    }
    if let Err(response) = check_settings(&storage, &situation).await {
        return Ok(response);
    }

    match storage.get_situation_by_shortname(&situation.shortname).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::SituationAlreadyExists,
                "Situation shortname already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => return Ok(internal_error(format!("Failed to check shortname: {e}"))),
    }

    let created = match storage.create_situation(situation).await {
        Ok(created) => created,
        Err(e) => return Ok(internal_error(format!("Failed to create situation: {e}"))),
    };
    info!("Situation {} created by {}", created.shortname, user.username);

    // 创建者自动成为评估者
    if !user.is_admin()
        && let Err(e) = storage
            .add_situation_member(created.id, user.id, SituationRole::Evaluator)
            .await
    {
        warn!(
            "Failed to add creator {} as evaluator of situation {}: {}",
            user.id, created.id, e
        );
    }

    Ok(HttpResponse::Created().json(ApiResponse::success(created, "Situation created")))
}

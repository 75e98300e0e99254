use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{PlanningService, check_window};
use crate::models::{ApiResponse, ErrorCode, plannings::requests::CreatePlanningRequest};
use crate::services::access::{forbidden, internal_error};
use crate::services::groups::ensure_group_exists;
use crate::services::situations::situation_role;

pub async fn create_planning(
    service: &PlanningService,
    situation_id: i64,
    mut req: CreatePlanningRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if !situation_role(request).is_evaluator() {
        return Ok(forbidden("Only evaluators can create plannings"));
    }
    if let Err(response) = check_window(req.start_time, req.end_time) {
        return Ok(response);
    }
    req.session = req.session.trim().to_string();
    if req.session.chars().count() > 255 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Session label must be at most 255 characters",
        )));
    }

    let storage = service.get_storage(request);
    if let Err(response) = ensure_group_exists(&storage, req.group_id).await {
        return Ok(response);
    }

    match storage.create_planning(situation_id, req).await {
        Ok(planning) => {
            info!(
                "Planning {} created for group {} in situation {}",
                planning.id, planning.group_id, situation_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(planning, "Planning created")))
        }
        Err(e) => Ok(internal_error(format!("Failed to create planning: {e}"))),
    }
}

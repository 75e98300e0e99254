use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::PlanningService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{internal_error, load_planning_access};

pub async fn delete_planning(
    service: &PlanningService,
    planning_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let access = match load_planning_access(&storage, request, planning_id).await {
        Ok(access) => access,
        Err(response) => return Ok(response),
    };
    if let Err(response) = access.require_evaluator() {
        return Ok(response);
    }

    match storage.delete_planning(planning_id).await {
        Ok(true) => {
            info!("Planning {} deleted by {}", planning_id, access.user.username);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Planning deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PlanningNotFound,
            "Planning not found",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to delete planning: {e}"))),
    }
}

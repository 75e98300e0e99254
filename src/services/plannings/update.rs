use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{PlanningService, check_window};
use crate::models::{ApiResponse, ErrorCode, plannings::requests::UpdatePlanningRequest};
use crate::services::access::{internal_error, load_planning_access};
use crate::services::groups::ensure_group_exists;

pub async fn update_planning(
    service: &PlanningService,
    planning_id: i64,
    mut req: UpdatePlanningRequest,
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

    // 用合并后的窗口校验
    let start = req.start_time.unwrap_or(access.planning.start_time);
    let end = req.end_time.unwrap_or(access.planning.end_time);
    if let Err(response) = check_window(start, end) {
        return Ok(response);
    }

    if let Some(group_id) = req.group_id
        && group_id != access.planning.group_id
        && let Err(response) = ensure_group_exists(&storage, group_id).await
    {
        return Ok(response);
    }
    req.session = req.session.map(|s| s.trim().to_string());

    match storage.update_planning(planning_id, req).await {
        Ok(Some(planning)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            planning,
            "Planning updated",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PlanningNotFound,
            "Planning not found",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to update planning: {e}"))),
    }
}

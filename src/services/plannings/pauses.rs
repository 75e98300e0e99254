//! 计划暂停时段

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{PlanningService, check_window};
use crate::models::{
    ApiResponse, ErrorCode,
    plannings::{entities::Planning, requests::CreatePauseRequest, responses::PauseListResponse},
};
use crate::services::access::{internal_error, load_planning_access};

/// 暂停必须落在计划窗口内
fn check_pause_inside(planning: &Planning, pause: &CreatePauseRequest) -> Result<(), HttpResponse> {
    check_window(pause.start_time, pause.end_time)?;
    if pause.start_time < planning.start_time || pause.end_time > planning.end_time {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::PlanningInvalidWindow,
            "Pause must be inside the planning window",
        )));
    }
    Ok(())
}

pub async fn add_pause(
    service: &PlanningService,
    planning_id: i64,
    req: CreatePauseRequest,
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
    if let Err(response) = check_pause_inside(&access.planning, &req) {
        return Ok(response);
    }

    match storage.create_pause(planning_id, req).await {
        Ok(pause) => Ok(HttpResponse::Created().json(ApiResponse::success(pause, "Pause added"))),
        Err(e) => Ok(internal_error(format!("Failed to add pause: {e}"))),
    }
}

pub async fn list_pauses(
    service: &PlanningService,
    planning_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    if let Err(response) = load_planning_access(&storage, request, planning_id).await {
        return Ok(response);
    }

    match storage.list_pauses(planning_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PauseListResponse { planning_id, items },
            "Pauses retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to list pauses: {e}"))),
    }
}

pub async fn delete_pause(
    service: &PlanningService,
    planning_id: i64,
    pause_id: i64,
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

    match storage.delete_pause(planning_id, pause_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Pause deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PauseNotFound,
            "Pause not found",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to delete pause: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn planning() -> Planning {
        let now = Utc::now();
        Planning {
            id: 1,
            situation_id: 1,
            group_id: 1,
            start_time: now,
            end_time: now + Duration::days(7),
            session: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_pause_must_fit_in_window() {
        let p = planning();
        let inside = CreatePauseRequest {
            start_time: p.start_time + Duration::days(1),
            end_time: p.start_time + Duration::days(2),
        };
        assert!(check_pause_inside(&p, &inside).is_ok());

        let overflowing = CreatePauseRequest {
            start_time: p.start_time + Duration::days(6),
            end_time: p.end_time + Duration::days(1),
        };
        assert!(check_pause_inside(&p, &overflowing).is_err());

        let reversed = CreatePauseRequest {
            start_time: p.start_time + Duration::days(2),
            end_time: p.start_time + Duration::days(1),
        };
        assert!(check_pause_inside(&p, &reversed).is_err());
    }
}

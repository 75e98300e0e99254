use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ObservationService;
use crate::models::{
    ApiResponse,
    observations::{requests::ObservationListParams, responses::ObservationListResponse},
};
use crate::services::access::{forbidden, internal_error, load_planning_access};

pub async fn list_observations(
    service: &ObservationService,
    planning_id: i64,
    params: ObservationListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let access = match load_planning_access(&storage, request, planning_id).await {
        Ok(access) => access,
        Err(response) => return Ok(response),
    };

    let student_id = if access.is_student() {
        if params.student_id.is_some_and(|id| id != access.user.id) {
            return Ok(forbidden("Students can only list their own observations"));
        }
        Some(access.user.id)
    } else {
        params.student_id
    };

    match storage
        .list_planning_observations(planning_id, student_id)
        .await
    {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ObservationListResponse { planning_id, items },
            "Observations retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to list observations: {e}"))),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PlanningService;
use crate::models::ApiResponse;
use crate::services::access::load_planning_access;

pub async fn get_planning(
    service: &PlanningService,
    planning_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match load_planning_access(&storage, request, planning_id).await {
        Ok(access) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            access.planning,
            "Planning retrieved successfully",
        ))),
        Err(response) => Ok(response),
    }
}

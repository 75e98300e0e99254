use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SituationService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::internal_error;

pub async fn get_situation(
    service: &SituationService,
    situation_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_situation_by_id(situation_id).await {
        Ok(Some(situation)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            situation,
            "Situation retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SituationNotFound,
            "Situation not found",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to get situation: {e}"))),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SituationService, situation_role};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{forbidden, internal_error};

pub async fn search(
    service: &SituationService,
    situation_id: i64,
    term: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if !situation_role(request).is_supervisor() {
        return Ok(forbidden("Search is reserved to observers and evaluators"));
    }

    let term = term.trim();
    if term.is_empty() || term.chars().count() > 100 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Search term must be 1-100 characters",
        )));
    }

    let storage = service.get_storage(request);

    match storage.search_situation(situation_id, term).await {
        Ok(result) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            result,
            "Search completed",
        ))),
        Err(e) => Ok(internal_error(format!("Search failed: {e}"))),
    }
}

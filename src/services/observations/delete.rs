use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ObservationService, edit_denied, load_observation, permission};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::internal_error;

pub async fn delete_observation(
    service: &ObservationService,
    observation_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let (observation, access) = match load_observation(&storage, request, observation_id).await {
        Ok(loaded) => loaded,
        Err(response) => return Ok(response),
    };
    if !permission::can_edit(&observation, access.user.id, access.role) {
        return Ok(edit_denied());
    }

    match storage.delete_observation(observation_id).await {
        Ok(true) => {
            info!("Observation {} deleted by {}", observation_id, access.user.username);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
                "Observation deleted",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ObservationNotFound,
            "Observation not found",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to delete observation: {e}"))),
    }
}

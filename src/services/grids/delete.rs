use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GridService;
use crate::errors::CompetVetError;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::internal_error;

pub async fn delete_grid(
    service: &GridService,
    grid_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_grid(grid_id).await {
        Ok(true) => {
            info!("Grid {} deleted", grid_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Grid deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GridNotFound,
            "Grid not found",
        ))),
        Err(CompetVetError::Conflict(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::GridInUse, msg),
        )),
        Err(e) => Ok(internal_error(format!("Failed to delete grid: {e}"))),
    }
}

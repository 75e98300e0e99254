use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GridService;
use crate::models::{ApiResponse, ErrorCode, grids::requests::CreateGridRequest};
use crate::services::access::internal_error;

pub async fn create_grid(
    service: &GridService,
    mut req: CreateGridRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    req.name = req.name.trim().to_string();
    if req.name.is_empty() || req.name.chars().count() > 255 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Grid name must be 1-255 characters",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_grid(req).await {
        Ok(grid) => {
            info!("Grid {} ({}) created", grid.id, grid.grid_type);
            Ok(HttpResponse::Created().json(ApiResponse::success(grid, "Grid created")))
        }
        Err(e) => Ok(internal_error(format!("Failed to create grid: {e}"))),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GridService;
use crate::models::{
    ApiResponse, ErrorCode,
    grids::{entities::build_criteria_tree, responses::GridDetail},
};
use crate::services::access::internal_error;

pub async fn get_grid(
    service: &GridService,
    grid_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let grid = match storage.get_grid_by_id(grid_id).await {
        Ok(Some(grid)) => grid,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::GridNotFound,
                "Grid not found",
            )));
        }
        Err(e) => return Ok(internal_error(format!("Failed to get grid: {e}"))),
    };

    match storage.list_grid_criteria(grid_id).await {
        Ok(criteria) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GridDetail {
                grid,
                criteria: build_criteria_tree(criteria),
            },
            "Grid retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to list criteria: {e}"))),
    }
}

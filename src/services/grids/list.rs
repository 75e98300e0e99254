use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GridService;
use crate::models::{
    ApiResponse,
    grids::{requests::GridListParams, responses::GridListResponse},
};
use crate::services::access::internal_error;

pub async fn list_grids(
    service: &GridService,
    params: GridListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_grids(params.grid_type).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GridListResponse { items },
            "Grids retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to list grids: {e}"))),
    }
}

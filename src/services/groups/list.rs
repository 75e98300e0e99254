use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GroupService;
use crate::models::{ApiResponse, groups::requests::GroupListParams};
use crate::services::access::internal_error;

pub async fn list_groups(
    service: &GroupService,
    params: GroupListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_groups_with_pagination(params).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Group list retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to retrieve group list: {e}"))),
    }
}

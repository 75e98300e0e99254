use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{GroupService, ensure_group_exists};
use crate::models::{ApiResponse, groups::responses::GroupMemberListResponse};
use crate::services::access::internal_error;

pub async fn list_members(
    service: &GroupService,
    group_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = ensure_group_exists(&storage, group_id).await {
        return Ok(response);
    }

    match storage.list_group_members(group_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GroupMemberListResponse { group_id, items },
            "Group members retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to list group members: {e}"))),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GroupService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::internal_error;

pub async fn remove_member(
    service: &GroupService,
    group_id: i64,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.remove_group_member(group_id, user_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
            "Member removed from group",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GroupMemberNotFound,
            "Group member not found",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to remove group member: {e}"))),
    }
}

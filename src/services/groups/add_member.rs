use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{GroupService, ensure_group_exists};
use crate::models::{ApiResponse, ErrorCode, groups::requests::AddGroupMemberRequest};
use crate::services::access::internal_error;

pub async fn add_member(
    service: &GroupService,
    group_id: i64,
    req: AddGroupMemberRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = ensure_group_exists(&storage, group_id).await {
        return Ok(response);
    }

    match storage.get_user_by_id(req.user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => return Ok(internal_error(format!("Failed to load user: {e}"))),
    }

    match storage.is_group_member(group_id, req.user_id).await {
        Ok(true) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::GroupMemberAlreadyExists,
                "User is already a member of this group",
            )));
        }
        Ok(false) => {}
        Err(e) => return Ok(internal_error(format!("Failed to check membership: {e}"))),
    }

    match storage.add_group_member(group_id, req.user_id).await {
        Ok(member) => Ok(HttpResponse::Created().json(ApiResponse::success(
            member,
            "Member added to group",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to add group member: {e}"))),
    }
}

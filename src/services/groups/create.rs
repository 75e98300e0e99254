use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GroupService;
use crate::models::{ApiResponse, ErrorCode, groups::requests::CreateGroupRequest};
use crate::services::access::internal_error;

pub async fn create_group(
    service: &GroupService,
    mut req: CreateGroupRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    req.name = req.name.trim().to_string();
    if req.name.is_empty() || req.name.chars().count() > 100 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Group name must be 1-100 characters",
        )));
    }

    let storage = service.get_storage(request);

    match storage.get_group_by_name(&req.name).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::GroupAlreadyExists,
                "Group name already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => return Ok(internal_error(format!("Failed to check group name: {e}"))),
    }

    match storage.create_group(req).await {
        Ok(group) => {
            info!("Group {} created", group.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(group, "Group created")))
        }
        Err(e) => Ok(internal_error(format!("Failed to create group: {e}"))),
    }
}

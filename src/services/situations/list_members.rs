use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SituationService;
use crate::models::{
    ApiResponse,
    situations::{requests::SituationMemberParams, responses::SituationMemberListResponse},
};
use crate::services::access::internal_error;

pub async fn list_members(
    service: &SituationService,
    situation_id: i64,
    params: SituationMemberParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_situation_members(situation_id, params.role).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SituationMemberListResponse {
                situation_id,
                items,
            },
            "Situation members retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to list situation members: {e}"))),
    }
}

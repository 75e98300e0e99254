use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CertificationService, check_supervisors, load_declaration};
use crate::models::{
    ApiResponse, ErrorCode,
    certifications::{requests::InviteSupervisorsRequest, responses::DeclarationResponse},
};
use crate::services::access::{forbidden, internal_error};

pub async fn invite_supervisors(
    service: &CertificationService,
    declaration_id: i64,
    req: InviteSupervisorsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let (declaration, access) = match load_declaration(&storage, request, declaration_id).await {
        Ok(loaded) => loaded,
        Err(response) => return Ok(response),
    };

    // 声明者本人或评估者可以邀请
    if access.user.id != declaration.student_id && !access.role.is_evaluator() {
        return Ok(forbidden("Only the declaring student can invite supervisors"));
    }
    if req.supervisors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CertificationInvalid,
            "At least one supervisor is required",
        )));
    }
    if let Err(response) = check_supervisors(&storage, access.situation.id, &req.supervisors).await
    {
        return Ok(response);
    }

    match storage.invite_supervisors(&declaration, req.supervisors).await {
        Ok(supervisors) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DeclarationResponse {
                declaration,
                supervisors,
            },
            "Supervisors invited",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to invite supervisors: {e}"))),
    }
}

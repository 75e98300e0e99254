use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{CertificationService, load_declaration};
use crate::models::{
    ApiResponse, ErrorCode,
    certifications::{requests::ValidateCertificationRequest, responses::ValidationResponse},
};
use crate::services::access::internal_error;

pub async fn validate(
    service: &CertificationService,
    declaration_id: i64,
    req: ValidateCertificationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let (declaration, access) = match load_declaration(&storage, request, declaration_id).await {
        Ok(loaded) => loaded,
        Err(response) => return Ok(response),
    };

    let supervisors = match storage.list_declaration_supervisors(declaration_id).await {
        Ok(supervisors) => supervisors,
        Err(e) => return Ok(internal_error(format!("Failed to list supervisors: {e}"))),
    };
    if !supervisors.contains(&access.user.id) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::CertificationNotInvited,
            "You were not invited to validate this declaration",
        )));
    }

    match storage
        .upsert_validation(&declaration, access.user.id, req.status, req.comment)
        .await
    {
        Ok(validation) => {
            info!(
                "Supervisor {} validated declaration {} as {}",
                access.user.id, declaration_id, validation.status
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ValidationResponse { validation },
                "Validation saved",
            )))
        }
        Err(e) => Ok(internal_error(format!("Failed to save validation: {e}"))),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CertificationService, load_declaration};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{forbidden, internal_error};

pub async fn delete_declaration(
    service: &CertificationService,
    declaration_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let (declaration, access) = match load_declaration(&storage, request, declaration_id).await {
        Ok(loaded) => loaded,
        Err(response) => return Ok(response),
    };

    if access.user.id != declaration.student_id && !access.role.is_evaluator() {
        return Ok(forbidden("Only the declaring student or an evaluator can delete"));
    }

    match storage.delete_declaration(declaration_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
            "Declaration deleted",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CertificationNotFound,
            "Declaration not found",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to delete declaration: {e}"))),
    }
}

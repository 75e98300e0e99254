use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{CertificationService, check_supervisors};
use crate::models::{
    ApiResponse, ErrorCode,
    certifications::{
        entities::NewCertDecl, requests::DeclareCertificationRequest,
        responses::DeclarationResponse,
    },
};
use crate::services::access::{forbidden, internal_error, load_planning_access};

pub async fn declare(
    service: &CertificationService,
    planning_id: i64,
    req: DeclareCertificationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let access = match load_planning_access(&storage, request, planning_id).await {
        Ok(access) => access,
        Err(response) => return Ok(response),
    };
    if !access.is_student() {
        return Ok(forbidden("Only students can declare certifications"));
    }

    if let Err(msg) = req.validate() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CertificationInvalid,
            msg,
        )));
    }

    // 标准必须是认证表格的根标准
    let criterion = match storage.get_criterion_by_id(req.criterion_id).await {
        Ok(criterion) => criterion,
        Err(e) => return Ok(internal_error(format!("Failed to load criterion: {e}"))),
    };
    let valid_criterion = criterion.is_some_and(|c| {
        c.is_root() && Some(c.grid_id) == access.situation.certif_grid_id
    });
    if !valid_criterion {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CriterionNotFound,
            "Criterion is not part of this situation's certification grid",
        )));
    }

    if let Err(response) = check_supervisors(&storage, access.situation.id, &req.supervisors).await
    {
        return Ok(response);
    }

    let new = NewCertDecl {
        student_id: access.user.id,
        planning_id,
        criterion_id: req.criterion_id,
        level: req.level,
        comment: req.comment,
        status: req.status,
    };

    match storage.upsert_declaration(new, req.supervisors).await {
        Ok((declaration, supervisors)) => {
            info!(
                "Student {} declared criterion {} in planning {}",
                declaration.student_id, declaration.criterion_id, planning_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                DeclarationResponse {
                    declaration,
                    supervisors,
                },
                "Declaration saved",
            )))
        }
        Err(e) => Ok(internal_error(format!("Failed to save declaration: {e}"))),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::certifications::requests::{
    CertificationListParams, DeclareCertificationRequest, InviteSupervisorsRequest,
    ValidateCertificationRequest,
};
use crate::services::CertificationService;
use crate::utils::{SafeDeclarationIdI64, SafePlanningIdI64};

static CERTIFICATION_SERVICE: Lazy<CertificationService> =
    Lazy::new(CertificationService::new_lazy);

pub async fn list_certifications(
    req: HttpRequest,
    planning_id: SafePlanningIdI64,
    query: web::Query<CertificationListParams>,
) -> ActixResult<HttpResponse> {
    CERTIFICATION_SERVICE
        .list_certifications(planning_id.0, query.into_inner(), &req)
        .await
}

pub async fn declare(
    req: HttpRequest,
    planning_id: SafePlanningIdI64,
    declaration_data: web::Json<DeclareCertificationRequest>,
) -> ActixResult<HttpResponse> {
    CERTIFICATION_SERVICE
        .declare(planning_id.0, declaration_data.into_inner(), &req)
        .await
}

pub async fn invite_supervisors(
    req: HttpRequest,
    declaration_id: SafeDeclarationIdI64,
    invite_data: web::Json<InviteSupervisorsRequest>,
) -> ActixResult<HttpResponse> {
    CERTIFICATION_SERVICE
        .invite_supervisors(declaration_id.0, invite_data.into_inner(), &req)
        .await
}

pub async fn validate(
    req: HttpRequest,
    declaration_id: SafeDeclarationIdI64,
    validation_data: web::Json<ValidateCertificationRequest>,
) -> ActixResult<HttpResponse> {
    CERTIFICATION_SERVICE
        .validate(declaration_id.0, validation_data.into_inner(), &req)
        .await
}

pub async fn delete_declaration(
    req: HttpRequest,
    declaration_id: SafeDeclarationIdI64,
) -> ActixResult<HttpResponse> {
    CERTIFICATION_SERVICE
        .delete_declaration(declaration_id.0, &req)
        .await
}

pub fn configure_certification_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/certifications/{declaration_id}")
            .wrap(middlewares::RequireJWT)
            .route("", web::delete().to(delete_declaration))
            .route("/supervisors", web::post().to(invite_supervisors))
            .route("/validation", web::put().to(validate)),
    );
}

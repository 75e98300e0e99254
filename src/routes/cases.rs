use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::cases::requests::{CaseEntryRequest, CaseListParams};
use crate::services::CaseService;
use crate::utils::{SafeEntryIdI64, SafePlanningIdI64};

static CASE_SERVICE: Lazy<CaseService> = Lazy::new(CaseService::new_lazy);

pub async fn list_entries(
    req: HttpRequest,
    planning_id: SafePlanningIdI64,
    query: web::Query<CaseListParams>,
) -> ActixResult<HttpResponse> {
    CASE_SERVICE
        .list_entries(planning_id.0, query.into_inner(), &req)
        .await
}

pub async fn create_entry(
    req: HttpRequest,
    planning_id: SafePlanningIdI64,
    entry_data: web::Json<CaseEntryRequest>,
) -> ActixResult<HttpResponse> {
    CASE_SERVICE
        .create_entry(planning_id.0, entry_data.into_inner(), &req)
        .await
}

pub async fn get_entry(req: HttpRequest, entry_id: SafeEntryIdI64) -> ActixResult<HttpResponse> {
    CASE_SERVICE.get_entry(entry_id.0, &req).await
}

pub async fn update_entry(
    req: HttpRequest,
    entry_id: SafeEntryIdI64,
    entry_data: web::Json<CaseEntryRequest>,
) -> ActixResult<HttpResponse> {
    CASE_SERVICE
        .update_entry(entry_id.0, entry_data.into_inner(), &req)
        .await
}

pub async fn delete_entry(req: HttpRequest, entry_id: SafeEntryIdI64) -> ActixResult<HttpResponse> {
    CASE_SERVICE.delete_entry(entry_id.0, &req).await
}

pub fn configure_case_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/cases/{entry_id}")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(get_entry))
            .route("", web::put().to(update_entry))
            .route("", web::delete().to(delete_entry)),
    );
}

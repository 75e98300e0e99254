use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireSituationRole};
use crate::models::cases::requests::{CreateCaseCategoryRequest, CreateCaseFieldRequest};
use crate::models::plannings::requests::CreatePlanningRequest;
use crate::models::search::requests::SearchParams;
use crate::models::situations::requests::{
    AddSituationMemberRequest, CreateSituationRequest, SituationMemberParams,
    UpdateSituationRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::{CaseService, PlanningService, SituationService};
use crate::utils::{SafeCategoryIdI64, SafeSituationIdI64};

static SITUATION_SERVICE: Lazy<SituationService> = Lazy::new(SituationService::new_lazy);
static PLANNING_SERVICE: Lazy<PlanningService> = Lazy::new(PlanningService::new_lazy);
static CASE_SERVICE: Lazy<CaseService> = Lazy::new(CaseService::new_lazy);

pub async fn list_my_situations(req: HttpRequest) -> ActixResult<HttpResponse> {
    SITUATION_SERVICE.list_my_situations(&req).await
}

pub async fn create_situation(
    req: HttpRequest,
    situation_data: web::Json<CreateSituationRequest>,
) -> ActixResult<HttpResponse> {
    SITUATION_SERVICE
        .create_situation(situation_data.into_inner(), &req)
        .await
}

pub async fn get_situation(
    req: HttpRequest,
    situation_id: SafeSituationIdI64,
) -> ActixResult<HttpResponse> {
    SITUATION_SERVICE.get_situation(situation_id.0, &req).await
}

pub async fn update_situation(
    req: HttpRequest,
    situation_id: SafeSituationIdI64,
    update_data: web::Json<UpdateSituationRequest>,
) -> ActixResult<HttpResponse> {
    SITUATION_SERVICE
        .update_situation(situation_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn list_members(
    req: HttpRequest,
    situation_id: SafeSituationIdI64,
    query: web::Query<SituationMemberParams>,
) -> ActixResult<HttpResponse> {
    SITUATION_SERVICE
        .list_members(situation_id.0, query.into_inner(), &req)
        .await
}

pub async fn add_member(
    req: HttpRequest,
    situation_id: SafeSituationIdI64,
    member_data: web::Json<AddSituationMemberRequest>,
) -> ActixResult<HttpResponse> {
    SITUATION_SERVICE
        .add_member(situation_id.0, member_data.into_inner(), &req)
        .await
}

pub async fn get_my_role(
    req: HttpRequest,
    situation_id: SafeSituationIdI64,
) -> ActixResult<HttpResponse> {
    SITUATION_SERVICE.get_my_role(situation_id.0, &req).await
}

pub async fn search(
    req: HttpRequest,
    situation_id: SafeSituationIdI64,
    query: web::Query<SearchParams>,
) -> ActixResult<HttpResponse> {
    SITUATION_SERVICE
        .search(situation_id.0, query.into_inner().q, &req)
        .await
}

pub async fn list_plannings(
    req: HttpRequest,
    situation_id: SafeSituationIdI64,
) -> ActixResult<HttpResponse> {
    PLANNING_SERVICE.list_plannings(situation_id.0, &req).await
}

pub async fn create_planning(
    req: HttpRequest,
    situation_id: SafeSituationIdI64,
    planning_data: web::Json<CreatePlanningRequest>,
) -> ActixResult<HttpResponse> {
    PLANNING_SERVICE
        .create_planning(situation_id.0, planning_data.into_inner(), &req)
        .await
}

pub async fn get_case_structure(
    req: HttpRequest,
    situation_id: SafeSituationIdI64,
) -> ActixResult<HttpResponse> {
    CASE_SERVICE.get_structure(situation_id.0, &req).await
}

pub async fn create_case_category(
    req: HttpRequest,
    situation_id: SafeSituationIdI64,
    category_data: web::Json<CreateCaseCategoryRequest>,
) -> ActixResult<HttpResponse> {
    CASE_SERVICE
        .create_category(situation_id.0, category_data.into_inner(), &req)
        .await
}

pub async fn create_case_field(
    req: HttpRequest,
    situation_id: SafeSituationIdI64,
    category_id: SafeCategoryIdI64,
    field_data: web::Json<CreateCaseFieldRequest>,
) -> ActixResult<HttpResponse> {
    CASE_SERVICE
        .create_field(situation_id.0, category_id.0, field_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_situation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/situations")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_my_situations))
            .service(
                // 情境内的细分权限在业务层根据角色判断
                web::scope("/{situation_id}")
                    .wrap(RequireSituationRole::member())
                    .route("", web::get().to(get_situation))
                    .route("", web::put().to(update_situation))
                    .route("/members", web::get().to(list_members))
                    .route("/members", web::post().to(add_member))
                    .route("/role", web::get().to(get_my_role))
                    .route("/search", web::get().to(search))
                    .route("/plannings", web::get().to(list_plannings))
                    .route("/plannings", web::post().to(create_planning))
                    .route("/cases/structure", web::get().to(get_case_structure))
                    .route("/cases/categories", web::post().to(create_case_category))
                    .route(
                        "/cases/categories/{category_id}/fields",
                        web::post().to(create_case_field),
                    ),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route("", web::post().to(create_situation)),
            ),
    );
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::{cases, certifications, grades, observations};
use crate::middlewares;
use crate::models::plannings::requests::{CreatePauseRequest, UpdatePlanningRequest};
use crate::services::PlanningService;
use crate::utils::{SafePauseIdI64, SafePlanningIdI64};

static PLANNING_SERVICE: Lazy<PlanningService> = Lazy::new(PlanningService::new_lazy);

pub async fn get_planning(
    req: HttpRequest,
    planning_id: SafePlanningIdI64,
) -> ActixResult<HttpResponse> {
    PLANNING_SERVICE.get_planning(planning_id.0, &req).await
}

pub async fn update_planning(
    req: HttpRequest,
    planning_id: SafePlanningIdI64,
    update_data: web::Json<UpdatePlanningRequest>,
) -> ActixResult<HttpResponse> {
    PLANNING_SERVICE
        .update_planning(planning_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_planning(
    req: HttpRequest,
    planning_id: SafePlanningIdI64,
) -> ActixResult<HttpResponse> {
    PLANNING_SERVICE.delete_planning(planning_id.0, &req).await
}

pub async fn get_infos(req: HttpRequest, planning_id: SafePlanningIdI64) -> ActixResult<HttpResponse> {
    PLANNING_SERVICE.get_infos(planning_id.0, &req).await
}

pub async fn list_pauses(
    req: HttpRequest,
    planning_id: SafePlanningIdI64,
) -> ActixResult<HttpResponse> {
    PLANNING_SERVICE.list_pauses(planning_id.0, &req).await
}

pub async fn add_pause(
    req: HttpRequest,
    planning_id: SafePlanningIdI64,
    pause_data: web::Json<CreatePauseRequest>,
) -> ActixResult<HttpResponse> {
    PLANNING_SERVICE
        .add_pause(planning_id.0, pause_data.into_inner(), &req)
        .await
}

pub async fn delete_pause(
    req: HttpRequest,
    planning_id: SafePlanningIdI64,
    pause_id: SafePauseIdI64,
) -> ActixResult<HttpResponse> {
    PLANNING_SERVICE
        .delete_pause(planning_id.0, pause_id.0, &req)
        .await
}

// 计划及其下属资源；访问权限由业务层按计划所属情境判断
pub fn configure_planning_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/plannings/{planning_id}")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(get_planning))
            .route("", web::put().to(update_planning))
            .route("", web::delete().to(delete_planning))
            .route("/infos", web::get().to(get_infos))
            .route("/pauses", web::get().to(list_pauses))
            .route("/pauses", web::post().to(add_pause))
            .route("/pauses/{pause_id}", web::delete().to(delete_pause))
            .route("/observations", web::get().to(observations::list_observations))
            .route("/observations", web::post().to(observations::create_observation))
            .route(
                "/certifications",
                web::get().to(certifications::list_certifications),
            )
            .route("/certifications", web::post().to(certifications::declare))
            .route("/cases", web::get().to(cases::list_entries))
            .route("/cases", web::post().to(cases::create_entry))
            .route("/grades", web::get().to(grades::list_grades))
            .route("/grades", web::put().to(grades::set_grade))
            .route("/grades/suggested", web::get().to(grades::suggested_grade))
            .route(
                "/grades/certification/refresh",
                web::post().to(grades::refresh_certification),
            ),
    );
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::observations::requests::{
    CreateObservationRequest, ObservationListParams, UpdateObservationRequest,
};
use crate::services::ObservationService;
use crate::utils::{SafeObservationIdI64, SafePlanningIdI64};

static OBSERVATION_SERVICE: Lazy<ObservationService> = Lazy::new(ObservationService::new_lazy);

// 计划下的观察，挂在 /plannings/{planning_id} 路由中
pub async fn list_observations(
    req: HttpRequest,
    planning_id: SafePlanningIdI64,
    query: web::Query<ObservationListParams>,
) -> ActixResult<HttpResponse> {
    OBSERVATION_SERVICE
        .list_observations(planning_id.0, query.into_inner(), &req)
        .await
}

pub async fn create_observation(
    req: HttpRequest,
    planning_id: SafePlanningIdI64,
    observation_data: web::Json<CreateObservationRequest>,
) -> ActixResult<HttpResponse> {
    OBSERVATION_SERVICE
        .create_observation(planning_id.0, observation_data.into_inner(), &req)
        .await
}

pub async fn get_observation(
    req: HttpRequest,
    observation_id: SafeObservationIdI64,
) -> ActixResult<HttpResponse> {
    OBSERVATION_SERVICE
        .get_observation(observation_id.0, &req)
        .await
}

pub async fn update_observation(
    req: HttpRequest,
    observation_id: SafeObservationIdI64,
    update_data: web::Json<UpdateObservationRequest>,
) -> ActixResult<HttpResponse> {
    OBSERVATION_SERVICE
        .update_observation(observation_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_observation(
    req: HttpRequest,
    observation_id: SafeObservationIdI64,
) -> ActixResult<HttpResponse> {
    OBSERVATION_SERVICE
        .delete_observation(observation_id.0, &req)
        .await
}

pub fn configure_observation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/observations/{observation_id}")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(get_observation))
            .route("", web::put().to(update_observation))
            .route("", web::delete().to(delete_observation)),
    );
}

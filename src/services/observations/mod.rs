pub mod create;
pub mod delete;
pub mod detail;
pub mod get;
pub mod list;
pub mod permission;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    observations::{
        entities::Observation,
        requests::{CreateObservationRequest, ObservationListParams, UpdateObservationRequest},
    },
};
use crate::services::access::{PlanningAccess, internal_error, load_planning_access};
use crate::storage::Storage;

pub struct ObservationService {
    storage: Option<Arc<dyn Storage>>,
}

impl ObservationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn create_observation(
        &self,
        planning_id: i64,
        req: CreateObservationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_observation(self, planning_id, req, request).await
    }

    // 观察详情
    pub async fn get_observation(
        &self,
        observation_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_observation(self, observation_id, request).await
    }

    pub async fn update_observation(
        &self,
        observation_id: i64,
        req: UpdateObservationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_observation(self, observation_id, req, request).await
    }

    pub async fn list_observations(
        &self,
        planning_id: i64,
        params: ObservationListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_observations(self, planning_id, params, request).await
    }

    pub async fn delete_observation(
        &self,
        observation_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_observation(self, observation_id, request).await
    }
}

/// 加载观察及其计划的访问上下文，并检查查看权限
pub(crate) async fn load_observation(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    observation_id: i64,
) -> Result<(Observation, PlanningAccess), HttpResponse> {
    let observation = match storage.get_observation_by_id(observation_id).await {
        Ok(Some(observation)) => observation,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ObservationNotFound,
                "Observation not found",
            )));
        }
        Err(e) => return Err(internal_error(format!("Failed to load observation: {e}"))),
    };

    let access = load_planning_access(storage, request, observation.planning_id).await?;
    if !permission::can_view(&observation, access.user.id, access.role) {
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ObservationPermissionDenied,
            "You cannot view this observation",
        )));
    }

    Ok((observation, access))
}

pub(crate) fn edit_denied() -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::ObservationPermissionDenied,
        "You cannot edit this observation",
    ))
}

pub mod category;
pub mod create;
pub mod delete;
pub mod get;
pub mod infos;
pub mod list;
pub mod pauses;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    observations::entities::ObservationCategory,
    plannings::{
        entities::{Planning, PlanningCategory},
        requests::{CreatePauseRequest, CreatePlanningRequest, UpdatePlanningRequest},
    },
    situations::entities::Situation,
};
use crate::services::access::{internal_error, planning_students};
use crate::storage::Storage;

pub struct PlanningService {
    storage: Option<Arc<dyn Storage>>,
}

impl PlanningService {
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

    pub async fn create_planning(
        &self,
        situation_id: i64,
        req: CreatePlanningRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_planning(self, situation_id, req, request).await
    }

    // 情境下的计划及其阶段
    pub async fn list_plannings(
        &self,
        situation_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_plannings(self, situation_id, request).await
    }

    pub async fn get_planning(
        &self,
        planning_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_planning(self, planning_id, request).await
    }

    pub async fn update_planning(
        &self,
        planning_id: i64,
        req: UpdatePlanningRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_planning(self, planning_id, req, request).await
    }

    pub async fn delete_planning(
        &self,
        planning_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_planning(self, planning_id, request).await
    }

    pub async fn add_pause(
        &self,
        planning_id: i64,
        req: CreatePauseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        pauses::add_pause(self, planning_id, req, request).await
    }

    pub async fn list_pauses(
        &self,
        planning_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        pauses::list_pauses(self, planning_id, request).await
    }

    pub async fn delete_pause(
        &self,
        planning_id: i64,
        pause_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        pauses::delete_pause(self, planning_id, pause_id, request).await
    }

    // 每个学生的评估、认证和病例进度
    pub async fn get_infos(
        &self,
        planning_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        infos::get_infos(self, planning_id, request).await
    }
}

/// 开始时间必须早于结束时间
pub(crate) fn check_window(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), HttpResponse> {
    if start < end {
        Ok(())
    } else {
        Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::PlanningInvalidWindow,
            "start_time must be before end_time",
        )))
    }
}

/// 计算计划阶段；只有已结束的计划需要读取学生和评估数
pub(crate) async fn planning_category(
    storage: &Arc<dyn Storage>,
    planning: &Planning,
    situation: &Situation,
    now: DateTime<Utc>,
) -> Result<PlanningCategory, HttpResponse> {
    if now <= planning.end_time {
        return Ok(category::categorize(
            now,
            planning.start_time,
            planning.end_time,
            &[],
            &Default::default(),
            0,
        ));
    }

    let students: Vec<i64> = planning_students(storage, planning)
        .await?
        .into_iter()
        .map(|s| s.id)
        .collect();
    let completed = storage
        .count_completed_observations(planning.id, ObservationCategory::Eval)
        .await
        .map_err(|e| internal_error(format!("Failed to count observations: {e}")))?;

    Ok(category::categorize(
        now,
        planning.start_time,
        planning.end_time,
        &students,
        &completed,
        i64::from(situation.eval_num),
    ))
}

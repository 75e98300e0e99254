use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::ObservationService;
use crate::models::{
    ApiResponse, ErrorCode,
    observations::{
        entities::{NewObservation, ObservationCategory, ObservationStatus},
        requests::CreateObservationRequest,
    },
    situations::entities::SituationRole,
};
use crate::services::access::{
    PlanningAccess, forbidden, internal_error, load_planning_access, planning_students,
};
use crate::storage::Storage;

fn invalid(msg: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::ObservationInvalid, msg))
}

/// 根据调用者角色确定学生、观察者和初始状态，返回是否需要给观察者生成待办
async fn build_observation(
    storage: &Arc<dyn Storage>,
    access: &PlanningAccess,
    req: &CreateObservationRequest,
) -> Result<(NewObservation, bool), HttpResponse> {
    let planning_id = access.planning.id;

    match (req.category, access.is_student()) {
        // 学生自评
        (ObservationCategory::Autoeval, true) => Ok((
            NewObservation {
                planning_id,
                student_id: access.user.id,
                observer_id: access.user.id,
                category: ObservationCategory::Autoeval,
                status: ObservationStatus::InProgress,
            },
            false,
        )),
        (ObservationCategory::Autoeval, false) => {
            Err(forbidden("Only students can create an autoevaluation"))
        }
        // 学生请求观察者评估
        (ObservationCategory::Eval, true) => {
            let observer_id = req
                .observer_id
                .ok_or_else(|| invalid("observer_id is required"))?;
            if observer_id == access.user.id {
                return Err(invalid("Students cannot observe themselves"));
            }
            let roles = storage
                .get_situation_roles(access.situation.id, observer_id)
                .await
                .map_err(|e| internal_error(format!("Failed to load situation roles: {e}")))?;
            if !SituationRole::top_role(roles.iter()).is_supervisor() {
                return Err(invalid("Observer is not an observer of this situation"));
            }
            Ok((
                NewObservation {
                    planning_id,
                    student_id: access.user.id,
                    observer_id,
                    category: ObservationCategory::Eval,
                    status: ObservationStatus::NotStarted,
                },
                true,
            ))
        }
        // 观察者直接开始评估
        (ObservationCategory::Eval, false) => {
            access.require_supervisor()?;
            let student_id = req
                .student_id
                .ok_or_else(|| invalid("student_id is required"))?;
            let students = planning_students(storage, &access.planning).await?;
            if !students.iter().any(|s| s.id == student_id) {
                return Err(invalid("Student is not part of this planning"));
            }
            Ok((
                NewObservation {
                    planning_id,
                    student_id,
                    observer_id: access.user.id,
                    category: ObservationCategory::Eval,
                    status: ObservationStatus::InProgress,
                },
                false,
            ))
        }
    }
}

pub async fn create_observation(
    service: &ObservationService,
    planning_id: i64,
    req: CreateObservationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let access = match load_planning_access(&storage, request, planning_id).await {
        Ok(access) => access,
        Err(response) => return Ok(response),
    };

    let (new, ask_observer) = match build_observation(&storage, &access, &req).await {
        Ok(built) => built,
        Err(response) => return Ok(response),
    };

    match storage.create_observation(new, ask_observer).await {
        Ok(observation) => {
            info!(
                "Observation {} ({}) created for student {} by {}",
                observation.id, observation.category, observation.student_id, access.user.username
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                observation,
                "Observation created",
            )))
        }
        Err(e) => Ok(internal_error(format!("Failed to create observation: {e}"))),
    }
}

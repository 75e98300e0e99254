use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{PlanningService, planning_category};
use crate::errors::CompetVetError;
use crate::models::{
    ApiResponse,
    observations::entities::ObservationCategory,
    plannings::responses::{PlanningInfosResponse, StudentPlanningInfo},
};
use crate::services::access::{internal_error, load_planning_access, planning_students};
use crate::services::certifications::{certif_confirmed, certif_total, state};

pub async fn get_infos(
    service: &PlanningService,
    planning_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let access = match load_planning_access(&storage, request, planning_id).await {
        Ok(access) => access,
        Err(response) => return Ok(response),
    };

    let mut students = match planning_students(&storage, &access.planning).await {
        Ok(students) => students,
        Err(response) => return Ok(response),
    };
    if access.is_student() {
        students.retain(|s| s.id == access.user.id);
    }

    let stats = async {
        Ok::<_, CompetVetError>((
            storage
                .count_completed_observations(planning_id, ObservationCategory::Eval)
                .await?,
            storage
                .count_completed_observations(planning_id, ObservationCategory::Autoeval)
                .await?,
            storage.count_case_entries(planning_id).await?,
        ))
    }
    .await;
    let (evals, autoevals, cases) = match stats {
        Ok(stats) => stats,
        Err(e) => return Ok(internal_error(format!("Failed to load planning statistics: {e}"))),
    };

    let total = match certif_total(&storage, &access.situation).await {
        Ok(total) => total,
        Err(response) => return Ok(response),
    };
    let confirmed = match certif_confirmed(&storage, planning_id, &access.situation).await {
        Ok(confirmed) => confirmed,
        Err(response) => return Ok(response),
    };
    let category = match planning_category(
        &storage,
        &access.planning,
        &access.situation,
        chrono::Utc::now(),
    )
    .await
    {
        Ok(category) => category,
        Err(response) => return Ok(response),
    };

    let situation = &access.situation;
    let items = students
        .into_iter()
        .map(|student| {
            let id = student.id;
            StudentPlanningInfo {
                student,
                eval_done: evals.get(&id).copied().unwrap_or(0),
                eval_required: i64::from(situation.eval_num),
                autoeval_done: autoevals.get(&id).copied().unwrap_or(0),
                autoeval_required: i64::from(situation.autoeval_num),
                certification: state::progress(
                    confirmed.get(&id).copied().unwrap_or(0),
                    total,
                    situation.cert_percent,
                ),
                cases_count: cases.get(&id).copied().unwrap_or(0),
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        PlanningInfosResponse {
            planning: access.planning,
            category,
            items,
        },
        "Planning infos retrieved successfully",
    )))
}

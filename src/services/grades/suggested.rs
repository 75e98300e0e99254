use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{
    GradeService,
    formula::{EnabledGrades, SubGrades, Weights, suggest},
};
use crate::models::{
    ApiResponse,
    grades::{entities::GradeType, requests::GradeListParams, responses::SuggestedGradeResponse},
};
use crate::services::access::{internal_error, load_planning_access, resolve_student_id};

pub async fn suggested_grade(
    service: &GradeService,
    planning_id: i64,
    params: GradeListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let access = match load_planning_access(&storage, request, planning_id).await {
        Ok(access) => access,
        Err(response) => return Ok(response),
    };
    let student_id = match resolve_student_id(&access, params.student_id) {
        Ok(id) => id,
        Err(response) => return Ok(response),
    };

    let stored = match storage.list_grades(planning_id, student_id).await {
        Ok(grades) => grades,
        Err(e) => return Ok(internal_error(format!("Failed to list grades: {e}"))),
    };

    let mut sub = SubGrades::default();
    for grade in stored {
        match grade.grade_type {
            GradeType::Eval => sub.eval = Some(grade.grade),
            GradeType::Certif => sub.certif = Some(grade.grade),
            GradeType::List => sub.list = Some(grade.grade),
        }
    }

    let situation = &access.situation;
    let suggested = suggest(
        Weights {
            k1: situation.grade_k1,
            k2: situation.grade_k2,
        },
        sub,
        EnabledGrades {
            eval: situation.has_eval,
            certif: situation.has_certif,
            list: situation.has_list,
        },
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SuggestedGradeResponse {
            planning_id,
            student_id,
            suggested,
        },
        "Suggested grade computed",
    )))
}

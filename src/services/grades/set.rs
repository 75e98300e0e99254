use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GradeService;
use crate::models::{ApiResponse, ErrorCode, grades::requests::SetGradeRequest};
use crate::services::access::{internal_error, load_planning_access, planning_students};

pub async fn set_grade(
    service: &GradeService,
    planning_id: i64,
    req: SetGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let access = match load_planning_access(&storage, request, planning_id).await {
        Ok(access) => access,
        Err(response) => return Ok(response),
    };
    if let Err(response) = access.require_evaluator() {
        return Ok(response);
    }

    if !req.grade_type.accepts(req.grade) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::GradeInvalid,
            format!("Grade {} is not valid for {}", req.grade, req.grade_type),
        )));
    }

    match planning_students(&storage, &access.planning).await {
        Ok(students) if students.iter().any(|s| s.id == req.student_id) => {}
        Ok(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Student is not part of this planning",
            )));
        }
        Err(response) => return Ok(response),
    }

    match storage
        .upsert_grade(planning_id, req.student_id, req.grade_type, req.grade)
        .await
    {
        Ok(grade) => {
            info!(
                "Grade {} of student {} in planning {} set to {}",
                grade.grade_type, grade.student_id, planning_id, grade.grade
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(grade, "Grade saved")))
        }
        Err(e) => Ok(internal_error(format!("Failed to save grade: {e}"))),
    }
}

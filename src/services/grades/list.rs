use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::{
    ApiResponse,
    grades::{requests::GradeListParams, responses::GradeListResponse},
};
use crate::services::access::{internal_error, load_planning_access, resolve_student_id};

pub async fn list_grades(
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

    match storage.list_grades(planning_id, student_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GradeListResponse {
                planning_id,
                student_id,
                items,
            },
            "Grades retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to list grades: {e}"))),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::grades::requests::{GradeListParams, SetGradeRequest};
use crate::services::GradeService;
use crate::utils::SafePlanningIdI64;

static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

// 成绩都挂在 /plannings/{planning_id}/grades 下

pub async fn list_grades(
    req: HttpRequest,
    planning_id: SafePlanningIdI64,
    query: web::Query<GradeListParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .list_grades(planning_id.0, query.into_inner(), &req)
        .await
}

pub async fn set_grade(
    req: HttpRequest,
    planning_id: SafePlanningIdI64,
    grade_data: web::Json<SetGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .set_grade(planning_id.0, grade_data.into_inner(), &req)
        .await
}

pub async fn suggested_grade(
    req: HttpRequest,
    planning_id: SafePlanningIdI64,
    query: web::Query<GradeListParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .suggested_grade(planning_id.0, query.into_inner(), &req)
        .await
}

pub async fn refresh_certification(
    req: HttpRequest,
    planning_id: SafePlanningIdI64,
    query: web::Query<GradeListParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .refresh_certification(planning_id.0, query.into_inner(), &req)
        .await
}

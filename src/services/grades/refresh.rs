use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GradeService;
use crate::models::{
    ApiResponse, ErrorCode,
    grades::{entities::GradeType, requests::GradeListParams},
};
use crate::services::access::{internal_error, load_planning_access, planning_students};
use crate::services::certifications::{certif_confirmed, certif_total, state};

/// 认证完成度达到阈值时认证子成绩为 1，否则为 0
///
/// 未指定学生时刷新计划内的全部学生。
pub async fn refresh_certification(
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
    if let Err(response) = access.require_evaluator() {
        return Ok(response);
    }

    let members: Vec<i64> = match planning_students(&storage, &access.planning).await {
        Ok(students) => students.into_iter().map(|s| s.id).collect(),
        Err(response) => return Ok(response),
    };
    let Some(students) = refresh_targets(&members, params.student_id) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Student is not part of this planning",
        )));
    };

    let total = match certif_total(&storage, &access.situation).await {
        Ok(total) => total,
        Err(response) => return Ok(response),
    };
    let confirmed = match certif_confirmed(&storage, planning_id, &access.situation).await {
        Ok(confirmed) => confirmed,
        Err(response) => return Ok(response),
    };

    let mut grades = Vec::with_capacity(students.len());
    for student_id in students {
        let progress = state::progress(
            confirmed.get(&student_id).copied().unwrap_or(0),
            total,
            access.situation.cert_percent,
        );
        let value = i32::from(progress.status_proposed);
        match storage
            .upsert_grade(planning_id, student_id, GradeType::Certif, value)
            .await
        {
            Ok(grade) => grades.push(grade),
            Err(e) => return Ok(internal_error(format!("Failed to save grade: {e}"))),
        }
    }

    info!(
        "Certification grades refreshed for {} students in planning {}",
        grades.len(),
        planning_id
    );
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        grades,
        "Certification grades refreshed",
    )))
}

/// 需要刷新的学生；指定的学生不在计划中时返回 None
fn refresh_targets(members: &[i64], requested: Option<i64>) -> Option<Vec<i64>> {
    match requested {
        Some(id) if members.contains(&id) => Some(vec![id]),
        Some(_) => None,
        None => Some(members.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_targets() {
        let members = [3, 5, 8];
        assert_eq!(refresh_targets(&members, None), Some(vec![3, 5, 8]));
        assert_eq!(refresh_targets(&members, Some(5)), Some(vec![5]));
        // 观察者或分组外的用户不能写入认证成绩
        assert_eq!(refresh_targets(&members, Some(42)), None);
    }
}

//! 业务层共用的访问检查
//!
//! 计划、观察、认证声明、病例等资源不在 `/situations/{situation_id}` 路径下，
//! 需要先加载资源所属的计划，再计算调用者在该情境中的角色。

use actix_web::{HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::middlewares::{RequireJWT, require_situation_role::resolve_situation_role};
use crate::models::{
    ApiResponse, ErrorCode,
    plannings::entities::Planning,
    situations::entities::{Situation, SituationRole},
    users::entities::{User, UserSummary},
};
use crate::storage::Storage;

/// 调用者对某个计划的访问上下文
pub(crate) struct PlanningAccess {
    pub user: User,
    pub planning: Planning,
    pub situation: Situation,
    pub role: SituationRole,
}

impl PlanningAccess {
    pub fn is_student(&self) -> bool {
        self.role == SituationRole::Student
    }

    /// 学生只能访问自己的数据
    pub fn can_see_student(&self, student_id: i64) -> bool {
        !self.is_student() || self.user.id == student_id
    }

    /// 要求观察者及以上的角色
    pub fn require_supervisor(&self) -> Result<(), HttpResponse> {
        if self.role.is_supervisor() {
            Ok(())
        } else {
            Err(forbidden("Observer or evaluator role required"))
        }
    }

    pub fn require_evaluator(&self) -> Result<(), HttpResponse> {
        if self.role.is_evaluator() {
            Ok(())
        } else {
            Err(forbidden("Evaluator role required"))
        }
    }
}

pub(crate) fn forbidden(msg: &str) -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::SituationPermissionDenied,
        msg,
    ))
}

pub(crate) fn internal_error(msg: impl Into<String>) -> HttpResponse {
    let msg = msg.into();
    tracing::error!("{}", msg);
    HttpResponse::InternalServerError()
        .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg))
}

pub(crate) fn current_user(request: &HttpRequest) -> Result<User, HttpResponse> {
    RequireJWT::extract_user_claims(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))
    })
}

pub(crate) fn get_cache(request: &HttpRequest) -> Option<Arc<dyn ObjectCache>> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .map(|data| data.get_ref().clone())
}

/// 加载计划及其情境，并检查调用者的情境角色
///
/// 学生只能访问自己所在分组的计划。
pub(crate) async fn load_planning_access(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    planning_id: i64,
) -> Result<PlanningAccess, HttpResponse> {
    let user = current_user(request)?;

    let planning = match storage.get_planning_by_id(planning_id).await {
        Ok(Some(planning)) => planning,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::PlanningNotFound,
                "Planning not found",
            )));
        }
        Err(e) => return Err(internal_error(format!("Failed to load planning: {e}"))),
    };

    let situation = match storage.get_situation_by_id(planning.situation_id).await {
        Ok(Some(situation)) => situation,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SituationNotFound,
                "Situation not found",
            )));
        }
        Err(e) => return Err(internal_error(format!("Failed to load situation: {e}"))),
    };

    let cache = get_cache(request);
    let role = resolve_situation_role(storage.as_ref(), cache.as_deref(), &user, situation.id)
        .await
        .map_err(|e| internal_error(format!("Failed to resolve situation role: {e}")))?;

    match role {
        SituationRole::Unknown => {
            return Err(forbidden("You are not a member of this situation"));
        }
        SituationRole::Student => {
            let in_group = storage
                .is_group_member(planning.group_id, user.id)
                .await
                .map_err(|e| internal_error(format!("Failed to check group membership: {e}")))?;
            if !in_group {
                return Err(forbidden("This planning is not for your group"));
            }
        }
        _ => {}
    }

    Ok(PlanningAccess {
        user,
        planning,
        situation,
        role,
    })
}

/// 计划的学生：计划分组中在情境里拥有 student 角色的成员
pub(crate) async fn planning_students(
    storage: &Arc<dyn Storage>,
    planning: &Planning,
) -> Result<Vec<UserSummary>, HttpResponse> {
    let group_members = storage
        .list_group_members(planning.group_id)
        .await
        .map_err(|e| internal_error(format!("Failed to list group members: {e}")))?;
    let students = storage
        .list_situation_members(planning.situation_id, Some(SituationRole::Student))
        .await
        .map_err(|e| internal_error(format!("Failed to list situation students: {e}")))?;

    Ok(students
        .into_iter()
        .filter(|m| group_members.iter().any(|g| g.user_id == m.user.id))
        .map(|m| m.user)
        .collect())
}

/// 解析请求中的学生参数：学生只能是自己，其他角色必须指定
pub(crate) fn resolve_student_id(
    access: &PlanningAccess,
    requested: Option<i64>,
) -> Result<i64, HttpResponse> {
    if access.is_student() {
        return match requested {
            Some(id) if id != access.user.id => {
                Err(forbidden("Students can only access their own records"))
            }
            _ => Ok(access.user.id),
        };
    }

    requested.ok_or_else(|| {
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "student_id is required",
        ))
    })
}

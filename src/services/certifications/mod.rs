pub mod declare;
pub mod delete;
pub mod invite;
pub mod list;
pub mod state;
pub mod validate;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    certifications::{
        entities::CertDecl,
        requests::{
            CertificationListParams, DeclareCertificationRequest, InviteSupervisorsRequest,
            ValidateCertificationRequest,
        },
    },
    situations::entities::{Situation, SituationRole},
};
use crate::services::access::{PlanningAccess, internal_error, load_planning_access};
use crate::storage::Storage;

pub struct CertificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl CertificationService {
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

    // 学生声明能力
    pub async fn declare(
        &self,
        planning_id: i64,
        req: DeclareCertificationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        declare::declare(self, planning_id, req, request).await
    }

    // 邀请督导
    pub async fn invite_supervisors(
        &self,
        declaration_id: i64,
        req: InviteSupervisorsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        invite::invite_supervisors(self, declaration_id, req, request).await
    }

    // 督导验证
    pub async fn validate(
        &self,
        declaration_id: i64,
        req: ValidateCertificationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        validate::validate(self, declaration_id, req, request).await
    }

    pub async fn delete_declaration(
        &self,
        declaration_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_declaration(self, declaration_id, request).await
    }

    // 学生在计划中的认证列表与完成度
    pub async fn list_certifications(
        &self,
        planning_id: i64,
        params: CertificationListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_certifications(self, planning_id, params, request).await
    }
}

/// 认证表格的根标准数；未配置表格时为 0
pub(crate) async fn certif_total(
    storage: &Arc<dyn Storage>,
    situation: &Situation,
) -> Result<i64, HttpResponse> {
    let Some(grid_id) = situation.certif_grid_id else {
        return Ok(0);
    };

    storage
        .list_grid_criteria(grid_id)
        .await
        .map(|criteria| criteria.iter().filter(|c| c.is_root()).count() as i64)
        .map_err(|e| internal_error(format!("Failed to list certification criteria: {e}")))
}

/// 按学生统计当前认证表格中已确认的根标准数
pub(crate) async fn certif_confirmed(
    storage: &Arc<dyn Storage>,
    planning_id: i64,
    situation: &Situation,
) -> Result<HashMap<i64, i64>, HttpResponse> {
    let Some(grid_id) = situation.certif_grid_id else {
        return Ok(HashMap::new());
    };

    storage
        .count_confirmed_criteria(planning_id, grid_id)
        .await
        .map_err(|e| internal_error(format!("Failed to count certifications: {e}")))
}

/// 加载声明并检查调用者对其所属计划的访问
pub(crate) async fn load_declaration(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    declaration_id: i64,
) -> Result<(CertDecl, PlanningAccess), HttpResponse> {
    let declaration = match storage.get_declaration_by_id(declaration_id).await {
        Ok(Some(declaration)) => declaration,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CertificationNotFound,
                "Declaration not found",
            )));
        }
        Err(e) => return Err(internal_error(format!("Failed to load declaration: {e}"))),
    };

    let access = load_planning_access(storage, request, declaration.planning_id).await?;
    if !access.can_see_student(declaration.student_id) {
        return Err(crate::services::access::forbidden(
            "Students can only access their own declarations",
        ));
    }

    Ok((declaration, access))
}

/// 被邀请的督导必须是情境中的观察者或评估者
pub(crate) async fn check_supervisors(
    storage: &Arc<dyn Storage>,
    situation_id: i64,
    supervisors: &[i64],
) -> Result<(), HttpResponse> {
    for &supervisor_id in supervisors {
        let roles = storage
            .get_situation_roles(situation_id, supervisor_id)
            .await
            .map_err(|e| internal_error(format!("Failed to load situation roles: {e}")))?;
        if !SituationRole::top_role(roles.iter()).is_supervisor() {
            return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::CertificationInvalid,
                format!("User {supervisor_id} cannot supervise this situation"),
            )));
        }
    }
    Ok(())
}

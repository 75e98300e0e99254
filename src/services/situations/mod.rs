pub mod add_member;
pub mod create;
pub mod get;
pub mod list;
pub mod list_members;
pub mod role;
pub mod search;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    grids::entities::GridType,
    situations::{
        entities::{NewSituation, SituationRole},
        requests::{
            AddSituationMemberRequest, CreateSituationRequest, SituationMemberParams,
            UpdateSituationRequest,
        },
    },
};
use crate::middlewares::RequireSituationRole;
use crate::services::access::internal_error;
use crate::storage::Storage;

pub struct SituationService {
    storage: Option<Arc<dyn Storage>>,
}

impl SituationService {
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

    // 创建情境
    pub async fn create_situation(
        &self,
        req: CreateSituationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_situation(self, req, request).await
    }

    // 获取情境
    pub async fn get_situation(
        &self,
        situation_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_situation(self, situation_id, request).await
    }

    // 更新情境设置
    pub async fn update_situation(
        &self,
        situation_id: i64,
        req: UpdateSituationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_situation(self, situation_id, req, request).await
    }

    // 我的情境
    pub async fn list_my_situations(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_my_situations(self, request).await
    }

    // 添加情境成员
    pub async fn add_member(
        &self,
        situation_id: i64,
        req: AddSituationMemberRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        add_member::add_member(self, situation_id, req, request).await
    }

    // 情境成员列表
    pub async fn list_members(
        &self,
        situation_id: i64,
        params: SituationMemberParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list_members::list_members(self, situation_id, params, request).await
    }

    // 我在情境中的角色
    pub async fn get_my_role(
        &self,
        situation_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        role::get_my_role(situation_id, request).await
    }

    // 情境内搜索
    pub async fn search(
        &self,
        situation_id: i64,
        term: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        search::search(self, situation_id, term, request).await
    }
}

/// 读取 RequireSituationRole 写入的角色
pub(crate) fn situation_role(request: &HttpRequest) -> SituationRole {
    RequireSituationRole::extract_situation_role(request).unwrap_or(SituationRole::Unknown)
}

/// 检查情境设置：数值范围以及引用的评分表格存在且类型匹配
pub(crate) async fn check_settings(
    storage: &Arc<dyn Storage>,
    situation: &NewSituation,
) -> Result<(), HttpResponse> {
    if let Err(msg) = situation.validate() {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SituationInvalidSettings,
            msg,
        )));
    }

    for (grid_id, expected) in [
        (situation.eval_grid_id, GridType::Eval),
        (situation.certif_grid_id, GridType::Certif),
        (situation.list_grid_id, GridType::List),
    ] {
        let Some(grid_id) = grid_id else {
            continue;
        };
        match storage.get_grid_by_id(grid_id).await {
            Ok(Some(grid)) if grid.grid_type == expected => {}
            Ok(Some(grid)) => {
                return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::GridTypeMismatch,
                    format!(
                        "Grid {grid_id} has type {}, expected {expected}",
                        grid.grid_type
                    ),
                )));
            }
            Ok(None) => {
                return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::GridNotFound,
                    format!("Grid {grid_id} not found"),
                )));
            }
            Err(e) => return Err(internal_error(format!("Failed to load grid: {e}"))),
        }
    }

    Ok(())
}

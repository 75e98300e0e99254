pub mod add_member;
pub mod create;
pub mod list;
pub mod list_members;
pub mod remove_member;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::groups::requests::{AddGroupMemberRequest, CreateGroupRequest, GroupListParams};
use crate::storage::Storage;

pub struct GroupService {
    storage: Option<Arc<dyn Storage>>,
}

impl GroupService {
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

    // 创建分组
    pub async fn create_group(
        &self,
        req: CreateGroupRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_group(self, req, request).await
    }

    // 分组列表
    pub async fn list_groups(
        &self,
        params: GroupListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_groups(self, params, request).await
    }

    // 添加成员
    pub async fn add_member(
        &self,
        group_id: i64,
        req: AddGroupMemberRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        add_member::add_member(self, group_id, req, request).await
    }

    // 移除成员
    pub async fn remove_member(
        &self,
        group_id: i64,
        user_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        remove_member::remove_member(self, group_id, user_id, request).await
    }

    // 成员列表
    pub async fn list_members(
        &self,
        group_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list_members::list_members(self, group_id, request).await
    }
}

/// 检查分组是否存在
pub(crate) async fn ensure_group_exists(
    storage: &Arc<dyn Storage>,
    group_id: i64,
) -> Result<(), HttpResponse> {
    use crate::models::{ApiResponse, ErrorCode};

    match storage.get_group_by_id(group_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GroupNotFound,
            "Group not found",
        ))),
        Err(e) => Err(crate::services::access::internal_error(format!(
            "Failed to load group: {e}"
        ))),
    }
}

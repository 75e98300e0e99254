pub mod entries;
pub mod structure;
pub mod validate;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::cases::requests::{
    CaseEntryRequest, CaseListParams, CreateCaseCategoryRequest, CreateCaseFieldRequest,
};
use crate::storage::Storage;

pub struct CaseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CaseService {
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

    // 情境的病例结构
    pub async fn get_structure(
        &self,
        situation_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        structure::get_structure(self, situation_id, request).await
    }

    pub async fn create_category(
        &self,
        situation_id: i64,
        req: CreateCaseCategoryRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        structure::create_category(self, situation_id, req, request).await
    }

    pub async fn create_field(
        &self,
        situation_id: i64,
        category_id: i64,
        req: CreateCaseFieldRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        structure::create_field(self, situation_id, category_id, req, request).await
    }

    pub async fn create_entry(
        &self,
        planning_id: i64,
        req: CaseEntryRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        entries::create_entry(self, planning_id, req, request).await
    }

    pub async fn get_entry(&self, entry_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        entries::get_entry(self, entry_id, request).await
    }

    pub async fn update_entry(
        &self,
        entry_id: i64,
        req: CaseEntryRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        entries::update_entry(self, entry_id, req, request).await
    }

    pub async fn delete_entry(
        &self,
        entry_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        entries::delete_entry(self, entry_id, request).await
    }

    pub async fn list_entries(
        &self,
        planning_id: i64,
        params: CaseListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        entries::list_entries(self, planning_id, params, request).await
    }
}

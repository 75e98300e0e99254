pub mod add_criterion;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::grids::requests::{CreateCriterionRequest, CreateGridRequest, GridListParams};
use crate::storage::Storage;

pub struct GridService {
    storage: Option<Arc<dyn Storage>>,
}

impl GridService {
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

    pub async fn create_grid(
        &self,
        req: CreateGridRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_grid(self, req, request).await
    }

    pub async fn list_grids(
        &self,
        params: GridListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_grids(self, params, request).await
    }

    // 评分表格及标准树
    pub async fn get_grid(&self, grid_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_grid(self, grid_id, request).await
    }

    pub async fn delete_grid(
        &self,
        grid_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_grid(self, grid_id, request).await
    }

    pub async fn add_criterion(
        &self,
        grid_id: i64,
        req: CreateCriterionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        add_criterion::add_criterion(self, grid_id, req, request).await
    }
}

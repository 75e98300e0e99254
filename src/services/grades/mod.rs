pub mod formula;
pub mod list;
pub mod refresh;
pub mod set;
pub mod suggested;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::grades::requests::{GradeListParams, SetGradeRequest};
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
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

    pub async fn set_grade(
        &self,
        planning_id: i64,
        req: SetGradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        set::set_grade(self, planning_id, req, request).await
    }

    pub async fn list_grades(
        &self,
        planning_id: i64,
        params: GradeListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_grades(self, planning_id, params, request).await
    }

    // 按情境权重计算建议总成绩
    pub async fn suggested_grade(
        &self,
        planning_id: i64,
        params: GradeListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        suggested::suggested_grade(self, planning_id, params, request).await
    }

    // 根据认证完成度重写认证子成绩
    pub async fn refresh_certification(
        &self,
        planning_id: i64,
        params: GradeListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        refresh::refresh_certification(self, planning_id, params, request).await
    }
}

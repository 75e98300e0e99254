//! 病例结构：分类与字段

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CaseService, validate::validate_field};
use crate::models::{
    ApiResponse, ErrorCode,
    cases::{
        requests::{CreateCaseCategoryRequest, CreateCaseFieldRequest},
        responses::CaseStructureResponse,
    },
};
use crate::services::access::{forbidden, internal_error};
use crate::services::situations::situation_role;

pub async fn get_structure(
    service: &CaseService,
    situation_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_case_structure(situation_id).await {
        Ok(categories) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CaseStructureResponse {
                situation_id,
                categories,
            },
            "Case structure retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to load case structure: {e}"))),
    }
}

pub async fn create_category(
    service: &CaseService,
    situation_id: i64,
    mut req: CreateCaseCategoryRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if !situation_role(request).is_evaluator() {
        return Ok(forbidden("Only evaluators can change the case structure"));
    }
    req.name = req.name.trim().to_string();
    if req.name.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Category name is required",
        )));
    }

    let storage = service.get_storage(request);
    match storage.create_case_category(situation_id, req).await {
        Ok(category) => Ok(HttpResponse::Created().json(ApiResponse::success(
            category,
            "Case category created",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to create case category: {e}"))),
    }
}

pub async fn create_field(
    service: &CaseService,
    situation_id: i64,
    category_id: i64,
    mut req: CreateCaseFieldRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if !situation_role(request).is_evaluator() {
        return Ok(forbidden("Only evaluators can change the case structure"));
    }
    if let Err(msg) = validate_field(&req) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CaseFieldInvalid,
            msg,
        )));
    }
    req.name = req.name.trim().to_string();
    req.idnumber = req.idnumber.trim().to_string();

    let storage = service.get_storage(request);

    // 分类必须属于路径中的情境
    match storage.get_case_category_by_id(category_id).await {
        Ok(Some(category)) if category.situation_id == situation_id => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CaseCategoryNotFound,
                "Case category not found",
            )));
        }
        Err(e) => return Ok(internal_error(format!("Failed to load case category: {e}"))),
    }

    match storage.create_case_field(category_id, req).await {
        Ok(field) => Ok(HttpResponse::Created().json(ApiResponse::success(
            field,
            "Case field created",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to create case field: {e}"))),
    }
}

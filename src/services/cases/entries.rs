//! 病例记录

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::{CaseService, validate::validate_case_data};
use crate::models::{
    ApiResponse, ErrorCode,
    cases::{
        entities::{CaseDataValue, CaseEntry},
        requests::{CaseEntryRequest, CaseListParams},
        responses::CaseEntryListResponse,
    },
};
use crate::services::access::{
    PlanningAccess, forbidden, internal_error, load_planning_access, planning_students,
    resolve_student_id,
};
use crate::storage::Storage;

/// 按情境的病例结构校验字段值
async fn check_data(
    storage: &Arc<dyn Storage>,
    situation_id: i64,
    data: &[CaseDataValue],
) -> Result<(), HttpResponse> {
    let fields: Vec<_> = storage
        .get_case_structure(situation_id)
        .await
        .map_err(|e| internal_error(format!("Failed to load case structure: {e}")))?
        .into_iter()
        .flat_map(|c| c.fields)
        .collect();

    validate_case_data(&fields, data).map_err(|msg| {
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::CaseValueInvalid, msg))
    })
}

/// 加载病例记录并检查访问
async fn load_entry(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    entry_id: i64,
) -> Result<(CaseEntry, PlanningAccess), HttpResponse> {
    let entry = match storage.get_case_entry(entry_id).await {
        Ok(Some(entry)) => entry,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CaseEntryNotFound,
                "Case entry not found",
            )));
        }
        Err(e) => return Err(internal_error(format!("Failed to load case entry: {e}"))),
    };

    let access = load_planning_access(storage, request, entry.planning_id).await?;
    if !access.can_see_student(entry.student_id) {
        return Err(forbidden("Students can only access their own cases"));
    }
    Ok((entry, access))
}

/// 学生本人或评估者可以修改
fn can_modify(entry: &CaseEntry, access: &PlanningAccess) -> bool {
    entry.student_id == access.user.id || access.role.is_evaluator()
}

pub async fn create_entry(
    service: &CaseService,
    planning_id: i64,
    req: CaseEntryRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let access = match load_planning_access(&storage, request, planning_id).await {
        Ok(access) => access,
        Err(response) => return Ok(response),
    };

    // 学生为自己记录，评估者可以代学生记录
    let student_id = if access.is_student() {
        access.user.id
    } else {
        if let Err(response) = access.require_evaluator() {
            return Ok(response);
        }
        let student_id = match resolve_student_id(&access, req.student_id) {
            Ok(id) => id,
            Err(response) => return Ok(response),
        };
        match planning_students(&storage, &access.planning).await {
            Ok(students) if students.iter().any(|s| s.id == student_id) => student_id,
            Ok(_) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "Student is not part of this planning",
                )));
            }
            Err(response) => return Ok(response),
        }
    };

    if let Err(response) = check_data(&storage, access.situation.id, &req.data).await {
        return Ok(response);
    }

    match storage
        .create_case_entry(student_id, planning_id, req.data)
        .await
    {
        Ok(entry) => {
            info!(
                "Case entry {} created for student {} in planning {}",
                entry.id, student_id, planning_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(entry, "Case entry created")))
        }
        Err(e) => Ok(internal_error(format!("Failed to create case entry: {e}"))),
    }
}

pub async fn get_entry(
    service: &CaseService,
    entry_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match load_entry(&storage, request, entry_id).await {
        Ok((entry, _)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            entry,
            "Case entry retrieved successfully",
        ))),
        Err(response) => Ok(response),
    }
}

pub async fn update_entry(
    service: &CaseService,
    entry_id: i64,
    req: CaseEntryRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let (entry, access) = match load_entry(&storage, request, entry_id).await {
        Ok(loaded) => loaded,
        Err(response) => return Ok(response),
    };
    if !can_modify(&entry, &access) {
        return Ok(forbidden("Only the student or an evaluator can edit this case"));
    }
    if let Err(response) = check_data(&storage, access.situation.id, &req.data).await {
        return Ok(response);
    }

    match storage.update_case_entry(entry_id, req.data).await {
        Ok(Some(entry)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            entry,
            "Case entry updated",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CaseEntryNotFound,
            "Case entry not found",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to update case entry: {e}"))),
    }
}

pub async fn delete_entry(
    service: &CaseService,
    entry_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let (entry, access) = match load_entry(&storage, request, entry_id).await {
        Ok(loaded) => loaded,
        Err(response) => return Ok(response),
    };
    if !can_modify(&entry, &access) {
        return Ok(forbidden("Only the student or an evaluator can delete this case"));
    }

    match storage.delete_case_entry(entry_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
            "Case entry deleted",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CaseEntryNotFound,
            "Case entry not found",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to delete case entry: {e}"))),
    }
}

pub async fn list_entries(
    service: &CaseService,
    planning_id: i64,
    params: CaseListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let access = match load_planning_access(&storage, request, planning_id).await {
        Ok(access) => access,
        Err(response) => return Ok(response),
    };
    let student_id = match resolve_student_id(&access, params.student_id) {
        Ok(id) => id,
        Err(response) => return Ok(response),
    };

    match storage.list_case_entries(planning_id, student_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CaseEntryListResponse {
                planning_id,
                student_id,
                items,
            },
            "Case entries retrieved successfully",
        ))),
        Err(e) => Ok(internal_error(format!("Failed to list case entries: {e}"))),
    }
}

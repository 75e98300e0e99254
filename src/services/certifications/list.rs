use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CertificationService, state};
use crate::models::{
    ApiResponse,
    certifications::{
        entities::{CertificationItem, DeclarationRecord},
        requests::CertificationListParams,
        responses::CertificationListResponse,
    },
    grids::entities::Criterion,
};
use crate::services::access::{internal_error, load_planning_access, resolve_student_id};

/// 按认证表格的根标准逐项列出，未声明的标准状态为 none
fn build_items(roots: Vec<Criterion>, mut records: Vec<DeclarationRecord>) -> Vec<CertificationItem> {
    roots
        .into_iter()
        .map(|criterion| {
            let record = records
                .iter()
                .position(|r| r.declaration.criterion_id == criterion.id)
                .map(|idx| records.swap_remove(idx));
            let state = state::cert_state(record.as_ref());
            let (declaration, supervisors, validations) = match record {
                Some(r) => (Some(r.declaration), r.supervisors, r.validations),
                None => (None, Vec::new(), Vec::new()),
            };
            CertificationItem {
                criterion_id: criterion.id,
                label: criterion.label,
                idnumber: criterion.idnumber,
                state,
                declaration,
                supervisors,
                validations,
            }
        })
        .collect()
}

pub async fn list_certifications(
    service: &CertificationService,
    planning_id: i64,
    params: CertificationListParams,
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

    let mut roots = match access.situation.certif_grid_id {
        Some(grid_id) => match storage.list_grid_criteria(grid_id).await {
            Ok(criteria) => criteria,
            Err(e) => return Ok(internal_error(format!("Failed to list criteria: {e}"))),
        },
        None => Vec::new(),
    };
    roots.retain(Criterion::is_root);

    let records = match storage.list_student_declarations(planning_id, student_id).await {
        Ok(records) => records,
        Err(e) => return Ok(internal_error(format!("Failed to list declarations: {e}"))),
    };

    let progress = state::progress(
        state::confirmed_criteria(&records),
        roots.len() as i64,
        access.situation.cert_percent,
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CertificationListResponse {
            planning_id,
            student_id,
            items: build_items(roots, records),
            progress,
        },
        "Certifications retrieved successfully",
    )))
}
